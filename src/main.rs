//! Chatpane - Entry Point

use chatpane::fixtures::{FixtureSource, GeneratorConfig};
use chatpane::model::Timestamp;
use chatpane::state::AppState;
use chatpane::view::{ColorConfig, ViewOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Chatpane - three-pane terminal chat over mock data
#[derive(Parser, Debug)]
#[command(name = "chatpane")]
#[command(version)]
#[command(about = "Terminal chat client with contacts, conversation and message search panes")]
pub struct Args {
    /// Fixture JSON with users, chats and messages (generated if omitted)
    pub fixtures: Option<PathBuf>,

    /// Seed for generated fixtures
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of generated contacts
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=10_000))]
    pub users: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Print the assembled conversations as JSON and exit
    #[arg(long, conflicts_with = "dump_fixtures")]
    pub dump: bool,

    /// Print the raw fixture collections as JSON and exit
    #[arg(long)]
    pub dump_fixtures: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = chatpane::config::load_config_with_precedence(args.config.clone())?;
        let merged = chatpane::config::merge_config(config_file);
        let with_env = chatpane::config::apply_env_overrides(merged);
        chatpane::config::apply_cli_overrides(
            with_env,
            args.fixtures.clone(),
            args.seed,
            args.users.map(|n| n as usize),
        )
    };

    chatpane::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = match &config.fixture_path {
        Some(path) => FixtureSource::File(path.clone()),
        None => FixtureSource::Generated(GeneratorConfig::new(
            config.seed,
            config.user_count,
            Timestamp::now(),
        )),
    };

    if args.dump_fixtures {
        println!("{}", source.load()?.to_json()?);
        return Ok(());
    }

    if args.dump {
        let views = chatpane::integration::load_conversations(&source)?;
        println!("{}", chatpane::integration::conversations_json(&views)?);
        return Ok(());
    }

    let session = chatpane::integration::load_session(&source)?;
    let options = ViewOptions::new(
        config.show_search_panel,
        ColorConfig::from_env_and_args(args.no_color),
    );

    chatpane::view::run(AppState::new(session), options)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["chatpane", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["chatpane", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["chatpane"]);
        assert_eq!(args.fixtures, None);
        assert_eq!(args.seed, None);
        assert_eq!(args.users, None);
        assert_eq!(args.config, None);
        assert!(!args.no_color);
        assert!(!args.dump);
        assert!(!args.dump_fixtures);
    }

    #[test]
    fn test_dump_flags_conflict() {
        let result = Args::try_parse_from(["chatpane", "--dump", "--dump-fixtures"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_fixture_path_is_positional() {
        let args = Args::parse_from(["chatpane", "chats.json"]);
        assert_eq!(args.fixtures, Some(PathBuf::from("chats.json")));
    }

    #[test]
    fn test_seed_and_users() {
        let args = Args::parse_from(["chatpane", "--seed", "7", "--users", "12"]);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.users, Some(12));
    }

    #[test]
    fn test_users_rejects_zero() {
        let result = Args::try_parse_from(["chatpane", "--users", "0"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_seed_rejects_negative() {
        let result = Args::try_parse_from(["chatpane", "--seed", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "chatpane",
            "chats.json",
            "--config",
            "/custom/config.toml",
            "--no-color",
            "--dump",
        ]);
        assert_eq!(args.fixtures, Some(PathBuf::from("chats.json")));
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(args.no_color);
        assert!(args.dump);
    }
}
