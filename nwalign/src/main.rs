mod args;
mod pipeline;
mod util;
mod viz;

use args::{Cli, SubCommands};
use pipeline::{align, fasta};
use util::{init_verbose, set_threads};

use clap::Parser;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();

    let cli = Cli::parse();
    init_verbose(cli.verbosity);

    log::info!(
        "running {}-{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    match cli.command {
        SubCommands::Align(args) => {
            align(&args)?;
        }
        SubCommands::Fasta(args) => {
            set_threads(args.common_args.num_threads)?;
            fasta(&args)?;
        }
    }

    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}
