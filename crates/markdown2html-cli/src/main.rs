use anyhow::{Context, Result};
use markdown2html_config::Config;
use markdown2html_engine::{ConvertOptions, io};
use std::{env, path::PathBuf, process};

const USAGE: &str = "Usage: ./markdown2html README.md README.html";

fn conversion_options(config: &Config) -> ConvertOptions {
    ConvertOptions {
        close_unordered_at_eof: config.close_unordered_at_eof,
        close_paragraph_before_heading: config.close_paragraph_before_heading,
    }
}

fn load_config() -> Result<Config> {
    let config = Config::load()
        .with_context(|| format!("Failed to load config file {}", Config::config_path().display()))?;
    Ok(config.unwrap_or_default())
}

fn run(input: PathBuf, output: PathBuf) -> Result<()> {
    let config = load_config()?;

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .parse_default_env()
        .init();
    log::debug!("Config: {config:?}");

    io::convert_file(&input, &output, conversion_options(&config))?;
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // Extra arguments are ignored
    if args.len() < 3 {
        eprintln!("{USAGE}");
        process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let output = PathBuf::from(&args[2]);

    // Checked before config or logging so the message stays exact
    if let Err(e) = io::validate_input(&input) {
        eprintln!("{e}");
        process::exit(1);
    }

    if let Err(e) = run(input, output) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_config() {
        let config = Config {
            close_unordered_at_eof: true,
            ..Config::default()
        };
        let options = conversion_options(&config);
        assert!(options.close_unordered_at_eof);
        assert!(!options.close_paragraph_before_heading);
    }

    #[test]
    fn default_config_gives_default_options() {
        assert_eq!(
            conversion_options(&Config::default()),
            ConvertOptions::default()
        );
    }
}
