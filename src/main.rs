use clap::Parser;
use trackforge::{cli::Args, init_logging, run, RenderConfig};

fn main() {
    let args = Args::parse();

    if let Err(err) = init_logging() {
        eprintln!("failed to initialize logging: {err}");
    }

    if let Err(err) = try_run(args) {
        // Expected failures report to stdout with a non-zero exit.
        println!("ERROR: {err}");
        std::process::exit(1);
    }
}

fn try_run(args: Args) -> anyhow::Result<()> {
    let config = RenderConfig::from_args(args)?;
    run(&config)?;
    Ok(())
}
