#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;

use anyhow::Error;
use anyhow::Result;
use owo_colors::OwoColorize;
use owo_colors::Stream;

use crate::application::cli;
use crate::application::cli::RunMode;
use crate::application::headless;
use crate::application::ui;
use crate::configuration::Config;
use crate::infrastructure::services::PlantServiceManager;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        format!(
            "Oh no! plantwatch has failed with the following app version and error.\n\nVersion: {}\nCommit: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            env!("VERGEN_GIT_DESCRIBE"),
            err
        )
        .if_supports_color(Stream::Stderr, |text| return text.red())
    );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 {args}");
    } else {
        eprintln!("\n{}", backtrace);
    }

    process::exit(1);
}

async fn run(mode: RunMode) -> Result<()> {
    let service = PlantServiceManager::get()?;
    let session = Config::session()?;
    let poll_interval = Config::poll_interval()?;

    match mode {
        RunMode::Home => {
            let res = ui::start(service, session, poll_interval).await;
            if res.is_err() {
                ui::destruct_terminal_for_panic();
            }
            return res;
        }
        RunMode::Plants => {
            return headless::print_plants(service, session).await;
        }
        RunMode::Alerts => {
            return headless::watch_alerts(service, session, poll_interval).await;
        }
    }
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        ui::destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let file_appender = tracing_appender::rolling::never(cli::log_dir(), "debug.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("plantwatch")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    let mode = match cli::parse().await {
        Ok(Some(mode)) => mode,
        Ok(None) => process::exit(0),
        Err(err) => {
            handle_error(err);
            return;
        }
    };

    if let Err(err) = run(mode).await {
        handle_error(err);
    }

    drop(guard);
    process::exit(0);
}
