use minsql::{Config, Result, run, run_once};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log)),
        )
        .with_writer(io::stderr)
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let stdout = io::stdout().lock();
    if args.is_empty() {
        run(&config, io::stdin().lock(), stdout)
    } else {
        run_once(&config, &args.join(" "), stdout)
    }
}
