use anyhow::Result;
use clap::Parser;

mod apply;
mod cli;
mod show;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    match args.cmd {
        cli::Cmd::Apply(opts) => apply::run(opts),
        cli::Cmd::Show(opts) => show::run(opts),
    }
}
