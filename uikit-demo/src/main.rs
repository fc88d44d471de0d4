use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use uidom::Page;
use uikit_demo::{DemoConfig, DemoError, Flow, Session, logging, paths};

/// Device control panel demo for the uikit widgets.
///
/// Reads commands from stdin or a script file, one per line: click, type,
/// choose, wait, show, dump, log, quit.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (TOML). Defaults to the platform config dir.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read commands from this file instead of stdin.
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Let `wait` take real time, ticking the clock on a timer.
    #[arg(long)]
    realtime: bool,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long)]
    log_level: Option<String>,

    #[arg(long, help = log_file_help())]
    log_file: Option<PathBuf>,

    /// Seed for the telemetry readouts.
    #[arg(long)]
    seed: Option<u64>,
}

fn log_file_help() -> String {
    match paths::log_file() {
        Some(path) => format!("Write the log to a file instead of stderr (e.g. {})", path.display()),
        None => "Write the log to a file instead of stderr".to_string(),
    }
}

impl Cli {
    fn apply(&self, config: &mut DemoConfig) {
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.log_file = Some(file.clone());
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

/// Advance the page clock in `tick` steps paced by a tokio interval.
async fn wait_realtime(page: &mut Page, duration: Duration, tick: Duration) {
    let mut interval = tokio::time::interval(tick);
    // The first tick completes immediately
    interval.tick().await;
    let mut left = duration;
    while !left.is_zero() {
        interval.tick().await;
        let step = tick.min(left);
        page.advance(step);
        left -= step;
    }
}

async fn run(cli: Cli) -> Result<(), DemoError> {
    let mut config = DemoConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    logging::init(&config.log_level, config.log_file.as_deref())?;
    log::info!("[demo] starting (realtime: {})", cli.realtime);

    let (page, _controller) = uikit_demo::build_page(&config)?;
    let mut session = Session::new(page, io::stdout().lock());

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            let file = File::open(path).map_err(|source| DemoError::Read {
                path: path.clone(),
                source,
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        match session.step(index + 1, &line)? {
            Flow::Continue => {}
            Flow::Wait(duration) if cli.realtime => {
                wait_realtime(session.page_mut(), duration, config.tick()).await;
            }
            Flow::Wait(duration) => {
                session.page_mut().advance(duration);
            }
            Flow::Quit => break,
        }
    }

    log::info!("[demo] done");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
