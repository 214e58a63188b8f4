use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use manipulator_cli::{run_batch, Args, Session};

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; default to warnings so prompts stay uncluttered.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<bool> {
    if let Some((input, output, operations)) = args.batch() {
        run_batch(input, output, operations)?;
        println!("Image saved as {}", output.display());
        return Ok(true);
    }

    info!("Starting interactive session");
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());
    let outcome = session.run()?;
    info!("Session ended: {:?}", outcome);
    Ok(outcome.is_success())
}
