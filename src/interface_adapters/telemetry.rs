use crate::interface_adapters::protocol::{TelemetryMessage, WorldUpdateDto};
use crate::use_cases::WorldUpdate;
use tokio::sync::{broadcast, mpsc};
use tracing::{error, warn};

/// Serializes every `every`-th world update into a JSON line.
///
/// Exits when the world channel closes or the line receiver is dropped.
pub async fn world_update_serializer(
    mut world_rx: broadcast::Receiver<WorldUpdate>,
    lines_tx: mpsc::Sender<String>,
    every: u64,
) {
    let every = every.max(1);
    loop {
        match world_rx.recv().await {
            Ok(update) => {
                if update.tick % every != 0 {
                    continue;
                }
                let msg = TelemetryMessage::WorldUpdate(WorldUpdateDto::from(update));
                let line = match serde_json::to_string(&msg) {
                    Ok(line) => line,
                    Err(e) => {
                        error!(error = ?e, "failed to serialize world update");
                        continue;
                    }
                };
                if lines_tx.send(line).await.is_err() {
                    warn!("telemetry sink dropped; serializer exiting");
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "telemetry serializer lagged; skipping to latest update");
            }
            Err(broadcast::error::RecvError::Closed) => {
                break;
            }
        }
    }
}
