// Framework bootstrap for the headless simulation runtime.

use crate::domain::Wind;
use crate::domain::tuning::HelmTuning;
use crate::frameworks::config::{self, SimConfig};
use crate::interface_adapters::telemetry::world_update_serializer;
use crate::use_cases::{RegattaEvent, RegattaSettings, WorldUpdate, world_task};

use std::{io::Result, sync::Arc};
use tokio::io::AsyncWriteExt;
use tokio::sync::{Notify, broadcast, mpsc};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Telemetry owns stdout; logs go to stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Sails the configured fleet and streams telemetry lines to stdout.
pub async fn run(config: SimConfig) -> Result<()> {
    let helm = HelmTuning::default();
    let settings = RegattaSettings {
        tick_interval: config.tick_interval(),
        helm,
        initial_wind: Wind {
            strength: config.wind_strength,
            direction_deg: config.wind_direction_deg,
        },
    };

    // events: everything that steers the fleet goes to the single world task.
    let (events_tx, events_rx) = mpsc::channel::<RegattaEvent>(config::EVENT_CHANNEL_CAPACITY);
    // world: snapshots fan out to telemetry and progress tracking.
    let (world_tx, progress_rx) =
        broadcast::channel::<WorldUpdate>(config::WORLD_BROADCAST_CAPACITY);
    let (lines_tx, mut lines_rx) = mpsc::channel::<String>(config::TELEMETRY_CHANNEL_CAPACITY);
    let shutdown = Arc::new(Notify::new());

    let serializer = tokio::spawn(world_update_serializer(
        world_tx.subscribe(),
        lines_tx,
        config.telemetry_every,
    ));
    let world = tokio::spawn(world_task(events_rx, world_tx, settings, shutdown.clone()));

    let writer = tokio::spawn(async move {
        let mut out = tokio::io::stdout();
        while let Some(line) = lines_rx.recv().await {
            out.write_all(line.as_bytes()).await?;
            out.write_all(b"\n").await?;
        }
        out.flush().await
    });

    for (i, x) in starting_line(config.boats, &helm).into_iter().enumerate() {
        let boat_id = i as u64 + 1;
        send(&events_tx, RegattaEvent::Join { boat_id, x, y: 0.0 }).await?;
        send(
            &events_tx,
            RegattaEvent::SetSheet {
                boat_id,
                sheet_length: config.sheet_length,
            },
        )
        .await?;
    }
    tracing::info!(
        boats = config.boats,
        ticks = config.ticks,
        tick_hz = config.tick_hz,
        "regatta started"
    );

    tokio::select! {
        last_tick = wait_for_ticks(progress_rx, config.ticks) => {
            tracing::info!(last_tick, "tick budget reached");
        }
        res = tokio::signal::ctrl_c() => {
            res?;
            tracing::info!("interrupted");
        }
    }

    shutdown.notify_one();
    drop(events_tx);

    world.await.map_err(std::io::Error::other)?;
    serializer.await.map_err(std::io::Error::other)?;
    writer.await.map_err(std::io::Error::other)?.inspect_err(|e| {
        tracing::error!(error = %e, "telemetry writer failed");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let config = SimConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;
    tracing::debug!(?config, "configuration loaded");

    run(config).await
}

// Evenly spaced x positions across the screen.
fn starting_line(boats: u64, helm: &HelmTuning) -> Vec<f64> {
    let width = 2.0 * helm.screen_half_width;
    let gap = width / (boats as f64 + 1.0);
    (1..=boats)
        .map(|i| -helm.screen_half_width + gap * i as f64)
        .collect()
}

async fn send(events_tx: &mpsc::Sender<RegattaEvent>, ev: RegattaEvent) -> Result<()> {
    events_tx
        .send(ev)
        .await
        .map_err(|_| std::io::Error::other("regatta world stopped"))
}

// Resolves with the last tick seen once `ticks` is reached (never when 0).
async fn wait_for_ticks(mut progress_rx: broadcast::Receiver<WorldUpdate>, ticks: u64) -> u64 {
    let mut last = 0;
    loop {
        match progress_rx.recv().await {
            Ok(update) => {
                last = update.tick;
                if ticks != 0 && last >= ticks {
                    return last;
                }
            }
            Err(broadcast::error::RecvError::Lagged(_)) => continue,
            Err(broadcast::error::RecvError::Closed) => return last,
        }
    }
}
