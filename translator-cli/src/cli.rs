use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "translate",
    about = "Translate selected text between Japanese and English with Gemini",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Translate the selection (Japanese) into English")]
    ToEnglish(TranslateArgs),

    #[command(about = "Translate the selection (English) into Japanese")]
    ToJapanese(TranslateArgs),

    #[command(subcommand, about = "View and modify preferences")]
    Config(ConfigCommands),
}

#[derive(Args, Debug, Clone)]
pub struct TranslateArgs {
    #[arg(short, long, help = "Text to translate (default: read the selection from stdin)")]
    pub text: Option<String>,

    #[arg(long, conflicts_with = "raw", help = "Print the rendered view as JSON")]
    pub json: bool,

    #[arg(long, help = "Print only the translated text (paste action)")]
    pub raw: bool,

    #[arg(short, long, help = "Suppress status notifications on stderr")]
    pub quiet: bool,

    #[arg(long, default_value = "120", help = "Request timeout in seconds")]
    pub timeout: u64,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show current preferences")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Get a preference value")]
    Get {
        #[arg(help = "Key: gemini.api_key or gemini.model")]
        key: String,
    },

    #[command(about = "Set a preference value")]
    Set {
        #[arg(help = "Key: gemini.api_key or gemini.model")]
        key: String,
        #[arg(help = "New value")]
        value: String,
    },

    #[command(about = "Print the preference file location")]
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translate_commands() {
        let cli = Cli::try_parse_from(["translate", "to-japanese", "--text", "hello", "--raw"])
            .expect("parse");
        match cli.command {
            Commands::ToJapanese(args) => {
                assert_eq!(args.text.as_deref(), Some("hello"));
                assert!(args.raw);
                assert!(!args.json);
                assert_eq!(args.timeout, 120);
            }
            _ => panic!("expected to-japanese"),
        }

        let cli = Cli::try_parse_from(["translate", "to-english"]).expect("parse");
        assert!(matches!(cli.command, Commands::ToEnglish(TranslateArgs { text: None, .. })));
    }

    #[test]
    fn test_json_and_raw_conflict() {
        assert!(Cli::try_parse_from(["translate", "to-english", "--json", "--raw"]).is_err());
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::try_parse_from(["translate", "config", "set", "gemini.model", "gemini-2.0-flash"])
            .expect("parse");
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Set { ref key, ref value })
                if key == "gemini.model" && value == "gemini-2.0-flash"
        ));
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
