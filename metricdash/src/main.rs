//! Entry point for the metricdash TUI. Parses args, reads config and runs the App.

use std::{env, path::PathBuf, process::ExitCode};

use chrono::Utc;
use metricdash::{
    app::App,
    cli::{parse_args, ArgsError, ParsedArgs},
    client::MetricsClient,
    config::Config,
    logging::{self, default_log_path, LogTarget},
    poller::fetch_once,
    ui::table::detail_rows,
};
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(ArgsError::Help(usage)) => {
            println!("{usage}");
            return ExitCode::SUCCESS;
        }
        Err(ArgsError::Invalid(msg)) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    let (target, level) = if parsed.once {
        (LogTarget::Stderr, "warn")
    } else {
        let path = parsed
            .log_file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(default_log_path);
        (LogTarget::File(path), "info")
    };
    if let Err(e) = logging::init(target, level) {
        eprintln!("metricdash: logging disabled: {e:#}");
    }

    match run(parsed).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("metricdash: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(parsed: ParsedArgs) -> anyhow::Result<ExitCode> {
    let mut cfg = Config::from_env()?;
    parsed.apply_to(&mut cfg);
    let client = MetricsClient::new(&cfg)?;
    info!(host = %cfg.hostname, has_key = cfg.api_key.is_some(), "configuration loaded");

    if parsed.once {
        return Ok(run_once(&client).await);
    }

    let mut app = App::new(cfg.hostname.clone());
    app.run(client, cfg.interval).await?;
    Ok(ExitCode::SUCCESS)
}

// Headless single cycle: print the table, or the banner message on failure
async fn run_once(client: &MetricsClient) -> ExitCode {
    let st = fetch_once(client).await;
    if let Some(e) = st.error() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    let Some(s) = st.current() else {
        return ExitCode::FAILURE;
    };
    println!("Metrics for {}", s.hostname);
    for (k, v) in detail_rows(s, Utc::now()) {
        println!("{k:<14}{v}");
    }
    ExitCode::SUCCESS
}
