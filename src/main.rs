// src/main.rs

use waveplan::{Outcome, cli, logging, run};

fn main() {
    match run_main() {
        Ok(Outcome::Clean) => {}
        Ok(Outcome::Violations) => std::process::exit(2),
        Err(err) => {
            eprintln!("waveplan error: {err:?}");
            std::process::exit(1);
        }
    }
}

fn run_main() -> anyhow::Result<Outcome> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    Ok(run(args)?)
}
