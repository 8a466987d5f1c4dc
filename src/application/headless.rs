#[cfg(test)]
#[path = "headless_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use tokio::signal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::domain::models::AlertMessage;
use crate::domain::models::Event;
use crate::domain::models::PlantList;
use crate::domain::models::ServiceBox;
use crate::domain::models::SessionContext;
use crate::domain::services::AlertPoller;
use crate::domain::services::PlantListFetcher;

const CARD_WIDTH: usize = 40;

pub fn format_plants(list: &PlantList) -> String {
    if let Some(placeholder) = list.placeholder() {
        return placeholder.to_string();
    }

    return list.card_lines(CARD_WIDTH).join("\n");
}

pub fn format_alert(alert: &AlertMessage) -> String {
    let mut res = format!("{}: {}", alert.title(), alert.message);
    if let Some(timestamp) = &alert.timestamp {
        res = format!("[{timestamp}] {res}");
    }

    return res;
}

/// Fetches the plant list once. Unlike the home screen, failures are returned
/// so the command exits with an error.
pub async fn print_plants(service: ServiceBox, session: SessionContext) -> Result<()> {
    let plants = PlantListFetcher::new(service).fetch(&session).await?;
    println!("{}", format_plants(&PlantList::Loaded(plants)));

    return Ok(());
}

pub async fn watch_alerts(
    service: ServiceBox,
    session: SessionContext,
    interval: Duration,
) -> Result<()> {
    if let Err(err) = service.health_check().await {
        tracing::warn!(error = %err, "Plant server health check failed");
        eprintln!(
            "{}",
            format!("The plant server doesn't seem to be reachable, polling anyway.\n\nError: {err}")
                .if_supports_color(Stream::Stderr, |text| return text.yellow())
        );
    }

    let poller = AlertPoller::new(service, interval)?;
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let cancel = CancellationToken::new();

    let worker_cancel = cancel.clone();
    let worker = tokio::spawn(async move {
        return poller.start(session, tx, worker_cancel).await;
    });

    println!(
        "Watching for alerts every {}s. Press CTRL+C to stop.",
        interval.as_secs()
    );

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => break,
            event = rx.recv() => match event {
                Some(Event::AlertReceived(alert)) => {
                    println!(
                        "{}",
                        format_alert(&alert).if_supports_color(Stream::Stdout, |text| return text.bold())
                    );
                }
                Some(_) => (),
                None => break,
            }
        }
    }

    cancel.cancel();
    worker.await??;

    return Ok(());
}
