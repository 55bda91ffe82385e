use anyhow::Context;
use clap::Parser;
use null_guard_drills::utils::{error, logger};
use null_guard_drills::{CliArgs, DrillRunner, FailureOrderDrill};

#[derive(Parser)]
#[command(name = "failure-order")]
#[command(about = "Show narrow/general failure handling order with a guaranteed cleanup line")]
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

    let runner = DrillRunner::new(FailureOrderDrill::from_config(&config));
    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    runner
        .run(&mut input, &mut output)
        .context("failure-order failed")?;

    Ok(())
}
