use marktoggle::config::{ConfigFlags, load_config_flags, parse_flag_tokens};
use marktoggle::markup::{MarkupToken, Style};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".marktogglerc");
    let content = r#"
# comment
--json

--style emphasis

--open=~~
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.json);
    assert_eq!(flags.style, Some(Style::Emphasis));
    assert_eq!(flags.open.as_deref(), Some("~~"));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".marktogglerc");
    std::fs::write(&path, "--json\n--style emphasis\n").unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "marktoggle".to_string(),
        "--style".to_string(),
        "code".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.json, "file flags should remain enabled");
    assert_eq!(effective.style, Some(Style::Code), "cli should override style");
    assert_eq!(effective.token().unwrap(), MarkupToken::CODE);
}

#[test]
fn test_file_markers_survive_when_cli_sets_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".marktogglerc");
    std::fs::write(&path, "--open <kbd>\n--close </kbd>\n").unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let effective = file_flags.union(&ConfigFlags::default());
    let token = effective.token().unwrap();
    assert_eq!(token.open(), "<kbd>");
    assert_eq!(token.close(), "</kbd>");
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "marktoggle".to_string(),
        "--style=strong".to_string(),
        "--close=]".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.style, Some(Style::Strong));
    assert_eq!(flags.close.as_deref(), Some("]"));
}
