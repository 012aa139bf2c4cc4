use std::num::NonZeroU32;

use clap::Parser;
use exam_console::{Config, DEFAULT_ATTEMPTS, DEFAULT_OPTION_COUNT};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of options per multiple-choice question
    #[arg(long, default_value_t = DEFAULT_OPTION_COUNT, value_parser = parse_option_count)]
    options: usize,

    /// Tries per reply before a malformed or out-of-range answer aborts (1 = no re-prompt)
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: NonZeroU32,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn parse_option_count(value: &str) -> Result<usize, String> {
    let count: usize = value.parse().map_err(|e| format!("{}", e))?;
    if count < 2 {
        return Err(String::from("a question needs at least 2 options"));
    }
    Ok(count)
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = Config {
        option_count: args.options,
        attempts: args.attempts,
        color: !args.no_color,
    };
    tracing::debug!(?config, "starting");

    if let Err(e) = exam_console::run(config) {
        tracing::error!("exam aborted: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
