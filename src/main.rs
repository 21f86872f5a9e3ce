use clap::Parser;
use climate_trends::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    let result: anyhow::Result<()> = commands::run(args).map_err(anyhow::Error::from);
    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
