use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::markup::{MarkupToken, Style};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub json: bool,
    pub style: Option<Style>,
    pub open: Option<String>,
    pub close: Option<String>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            json: self.json || other.json,
            style: other.style.or(self.style),
            open: other.open.clone().or_else(|| self.open.clone()),
            close: other.close.clone().or_else(|| self.close.clone()),
        }
    }

    /// The markup token these flags select.
    ///
    /// Explicit `--open`/`--close` markers win over `--style`. A lone
    /// `--open` gives a symmetric token. Without either, strong is used.
    pub fn token(&self) -> Result<MarkupToken> {
        match (&self.open, &self.close) {
            (Some(open), close) => {
                let close = close.clone().unwrap_or_else(|| open.clone());
                MarkupToken::new(open.clone(), close)
                    .with_context(|| format!("Invalid markers {open:?}"))
            }
            (None, Some(_)) => anyhow::bail!("--close requires --open"),
            (None, None) => Ok(self.style.unwrap_or(Style::Strong).token()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("marktoggle").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("marktoggle")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("marktoggle").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("marktoggle")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".marktogglerc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let mut tokens = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        tokens.extend(line_tokens(line.trim_start()));
    }
    Ok(parse_flag_tokens(&tokens))
}

/// Split one config line into flag tokens.
///
/// Marker values may contain spaces, so everything after `--open `
/// or `--close ` is kept as a single token.
fn line_tokens(line: &str) -> Vec<String> {
    if MARKER_FLAGS
        .iter()
        .any(|flag| line.strip_prefix(flag).is_some_and(|rest| rest.starts_with('=')))
    {
        return vec![line.to_string()];
    }
    match line.split_once(' ') {
        Some((flag, value)) if MARKER_FLAGS.contains(&flag) => {
            vec![flag.to_string(), value.to_string()]
        }
        _ => line.split_whitespace().map(ToOwned::to_owned).collect(),
    }
}

const MARKER_FLAGS: [&str; 2] = ["--open", "--close"];

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# marktoggle defaults (saved with --save)".to_string());
    if flags.json {
        lines.push("--json".to_string());
    }
    if let Some(style) = flags.style {
        lines.push(format!("--style {}", style.label()));
    }
    if let Some(open) = &flags.open {
        lines.push(format!("--open {open}"));
    }
    if let Some(close) = &flags.close {
        lines.push(format!("--close {close}"));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract persistable flags from raw command-line tokens.
///
/// Selection offsets and the input file are per-invocation and ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--json" {
            flags.json = true;
        } else if token == "--style" {
            if let Some(next) = tokens.get(i + 1) {
                flags.style = Style::from_label(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--style=") {
            flags.style = Style::from_label(value);
        } else if token == "--open" {
            if let Some(next) = tokens.get(i + 1) {
                flags.open = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--open=") {
            flags.open = Some(value.to_string());
        } else if token == "--close" {
            if let Some(next) = tokens.get(i + 1) {
                flags.close = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--close=") {
            flags.close = Some(value.to_string());
        }
        i += 1;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let flags = parse_flag_tokens(&args(&[
            "marktoggle",
            "--json",
            "--style",
            "code",
            "--start",
            "3",
            "notes.md",
        ]));
        assert!(flags.json);
        assert_eq!(flags.style, Some(Style::Code));
        assert_eq!(flags.open, None);
    }

    #[test]
    fn test_parse_flag_tokens_reads_markers() {
        let flags = parse_flag_tokens(&args(&["--open", "<kbd>", "--close=</kbd>"]));
        assert_eq!(flags.open.as_deref(), Some("<kbd>"));
        assert_eq!(flags.close.as_deref(), Some("</kbd>"));
    }

    #[test]
    fn test_unknown_style_is_dropped() {
        let flags = parse_flag_tokens(&args(&["--style", "underline"]));
        assert_eq!(flags.style, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            json: true,
            style: Some(Style::Emphasis),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            style: Some(Style::Code),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.json);
        assert_eq!(merged.style, Some(Style::Code));
    }

    #[test]
    fn test_token_defaults_to_strong() {
        let token = ConfigFlags::default().token().unwrap();
        assert_eq!(token, MarkupToken::STRONG);
    }

    #[test]
    fn test_token_from_style() {
        let flags = ConfigFlags {
            style: Some(Style::Emphasis),
            ..ConfigFlags::default()
        };
        assert_eq!(flags.token().unwrap(), MarkupToken::EMPHASIS);
    }

    #[test]
    fn test_markers_override_style() {
        let flags = ConfigFlags {
            style: Some(Style::Code),
            open: Some("~~".to_string()),
            ..ConfigFlags::default()
        };
        let token = flags.token().unwrap();
        assert_eq!(token.open(), "~~");
        assert_eq!(token.close(), "~~");
    }

    #[test]
    fn test_close_without_open_is_rejected() {
        let flags = ConfigFlags {
            close: Some("]".to_string()),
            ..ConfigFlags::default()
        };
        assert!(flags.token().is_err());
    }

    #[test]
    fn test_empty_open_marker_is_rejected() {
        let flags = ConfigFlags {
            open: Some(String::new()),
            ..ConfigFlags::default()
        };
        assert!(flags.token().is_err());
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(".marktogglerc");
        let flags = ConfigFlags {
            json: true,
            style: Some(Style::Code),
            open: Some("[".to_string()),
            close: Some("]".to_string()),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_save_load_keeps_markers_with_spaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".marktogglerc");
        let flags = ConfigFlags {
            open: Some("<span class=k>".to_string()),
            close: Some("</span>".to_string()),
            ..ConfigFlags::default()
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded.open.as_deref(), Some("<span class=k>"));
        assert_eq!(loaded.close.as_deref(), Some("</span>"));
    }

    #[test]
    fn test_load_equals_marker_with_spaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".marktogglerc");
        fs::write(&path, "--json\n--open=<b id=x>\n--style code\n").unwrap();

        let loaded = load_config_flags(&path).unwrap();
        assert!(loaded.json);
        assert_eq!(loaded.open.as_deref(), Some("<b id=x>"));
        assert_eq!(loaded.style, Some(Style::Code));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
