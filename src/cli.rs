use clap::{ArgAction, Args, Parser, Subcommand};
use ifstat_fake::{AmountParsing, EngineConfig};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(name = "ifstat-fake", about = "Fake network interface statistics")]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Cmd {
    /// Apply counter commands and print the resulting table
    Apply(ApplyOpts),
    /// Print the counter table
    Show(ShowOpts),
}

#[derive(Args, Debug, Clone)]
pub struct SnapshotOpts {
    /// Counter table in /proc/net/dev format
    #[arg(long, default_value = "/proc/net/dev")]
    pub stats: PathBuf,
    /// Only print this interface
    #[arg(long)]
    pub iface: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ApplyOpts {
    #[command(flatten)]
    pub snapshot: SnapshotOpts,
    /// Reject amounts with trailing garbage instead of ignoring it
    #[arg(long, default_value_t = false)]
    pub strict: bool,
    /// Commands like "eth0 rx bytes =100"; read from stdin, one per line, when omitted
    pub commands: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ShowOpts {
    #[command(flatten)]
    pub snapshot: SnapshotOpts,
}

impl ApplyOpts {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            amount_parsing: if self.strict {
                AmountParsing::Strict
            } else {
                AmountParsing::Lenient
            },
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_apply_args() {
        let cli = Cli::try_parse_from([
            "ifstat-fake",
            "-vv",
            "apply",
            "--stats",
            "snap.txt",
            "--strict",
            "eth0 rx bytes =1",
            "eth0 tx colls +2",
        ])
        .unwrap();
        assert_eq!(cli.log_level(), Level::DEBUG);
        match cli.cmd {
            Cmd::Apply(opts) => {
                assert_eq!(opts.snapshot.stats, PathBuf::from("snap.txt"));
                assert_eq!(opts.commands.len(), 2);
                assert_eq!(opts.engine_config().amount_parsing, AmountParsing::Strict);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["ifstat-fake", "show"]).unwrap();
        assert_eq!(cli.log_level(), Level::WARN);
        match cli.cmd {
            Cmd::Show(opts) => {
                assert_eq!(opts.snapshot.stats, PathBuf::from("/proc/net/dev"));
                assert!(opts.snapshot.iface.is_none());
            }
            _ => panic!("wrong subcommand"),
        }
    }
}
