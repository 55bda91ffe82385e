use anyhow::Context;
use clap::Parser;
use null_guard_drills::utils::{error, logger};
use null_guard_drills::{CliArgs, DrillRunner, UppercaseDrill};

#[derive(Parser)]
#[command(name = "uppercase-safe")]
#[command(about = "Uppercase one line of stdin; 'none' (any case) prints an empty line")]
struct Args {
    #[command(flatten)]
    common: CliArgs,
}

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.common.verbose);

    if let Err(e) = run(&args) {
        std::process::exit(error::report(&e));
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args
        .common
        .load_config()
        .context("failed to load configuration")?;
    tracing::debug!("absent sentinel: {:?}", config.absent_sentinel());

    let runner = DrillRunner::new(UppercaseDrill::from_config(&config));
    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    runner
        .run(&mut input, &mut output)
        .context("uppercase-safe failed")?;

    Ok(())
}
