use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "redline",
    about = "redline — incident record merge-and-audit session replay",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a scripted editing session and print the resulting record
    Replay(ReplayArgs),
    /// Run a scripted editing session and print its audit trail
    History(HistoryArgs),
    /// Run a scripted editing session and validate its audit stream
    Verify(VerifyArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Path to the session script (JSON)
    pub script: PathBuf,
}

#[derive(Args)]
pub struct HistoryArgs {
    /// Path to the session script (JSON)
    pub script: PathBuf,
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Path to the session script (JSON)
    pub script: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_replay() {
        let cli = Cli::try_parse_from(["redline", "replay", "session.json"]).unwrap();
        if let Command::Replay(args) = cli.command {
            assert_eq!(args.script, PathBuf::from("session.json"));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_history_with_limit() {
        let cli =
            Cli::try_parse_from(["redline", "history", "-n", "5", "session.json"]).unwrap();
        if let Command::History(args) = cli.command {
            assert_eq!(args.limit, Some(5));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_verify() {
        let cli = Cli::try_parse_from(["redline", "verify", "s.json"]).unwrap();
        assert!(matches!(cli.command, Command::Verify(_)));
    }

    #[test]
    fn parse_verbose_and_format() {
        let cli =
            Cli::try_parse_from(["redline", "--verbose", "--format", "json", "replay", "s"])
                .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn script_path_is_required() {
        assert!(Cli::try_parse_from(["redline", "replay"]).is_err());
    }
}
