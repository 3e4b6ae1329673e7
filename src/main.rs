//! Marktoggle - toggle inline markdown markup around a selection.
//!
//! # Usage
//!
//! ```bash
//! marktoggle notes.md --start 0 --end 5
//! echo -n "hi " | marktoggle --style code --start 3
//! marktoggle notes.md --start 6 --end 11 --open '<kbd>' --close '</kbd>' --json
//! ```

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use marktoggle::config::{
    clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags, ConfigFlags,
};
use marktoggle::markup::{toggle, Selection, Style};

/// Toggle inline markdown markup around a selection
#[derive(Parser, Debug)]
#[command(name = "marktoggle", version, about, long_about = None)]
struct Cli {
    /// Markdown file to edit (reads stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Selection start, in characters
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Selection end, in characters (defaults to --start, a caret)
    #[arg(long)]
    end: Option<usize>,

    /// Built-in markup style
    #[arg(long, value_enum)]
    style: Option<Style>,

    /// Custom open marker (overrides --style)
    #[arg(long, value_name = "MARKER")]
    open: Option<String>,

    /// Custom close marker (defaults to --open)
    #[arg(long, value_name = "MARKER")]
    close: Option<String>,

    /// Print the result as JSON with the new selection
    #[arg(long)]
    json: bool,

    /// Save current command-line flags as defaults in the global config file
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in the global config file
    #[arg(long)]
    clear: bool,
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Selection from `--start`/`--end`; a missing end gives a caret at start.
const fn selection_from_args(start: usize, end: Option<usize>) -> Selection {
    match end {
        Some(end) => Selection::new(start, end),
        None => Selection::caret(start),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    let token = effective.token()?;

    let text = read_input(cli.file.as_ref())?;
    let selection = selection_from_args(cli.start, cli.end);
    let toggled = toggle(&text, selection, &token).context("Toggle failed")?;

    let mut stdout = std::io::stdout().lock();
    if effective.json {
        serde_json::to_writer_pretty(&mut stdout, &toggled).context("Failed to write JSON")?;
        writeln!(stdout)?;
    } else {
        stdout.write_all(toggled.text.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}
