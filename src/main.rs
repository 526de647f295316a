//! Console piece-supply runner (default binary).
//!
//! Reads one menu choice per line from stdin and prints the supply state to
//! stdout. Diagnostics go to stderr through `env_logger`.

use std::io;

use anyhow::Result;

use tetris_supply::config::USAGE;
use tetris_supply::term::ConsoleRenderer;
use tetris_supply::{parse_invocation, run_session, Invocation, Journal};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_invocation(&args)? {
        Invocation::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Invocation::Run(config) => config,
    };
    log::info!(
        "starting: variant={} seed={:?} shapes={:?} scripted={} journal={:?}",
        config.variant,
        config.seed,
        config.shapes,
        config.script.is_some(),
        config.log_path
    );

    let mut renderer = ConsoleRenderer::stdout(config.color);
    let mut journal = Journal::open_optional(config.log_path.as_deref());

    let summary = run_session(&config, io::stdin().lock(), &mut renderer, &mut journal)?;
    log::info!("finished: {summary:?}");
    Ok(())
}
