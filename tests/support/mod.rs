// Shared helpers for driving a regatta world task from integration tests.
use sailing_sim::use_cases::{RegattaEvent, RegattaSettings, WorldUpdate, world_task};
use std::{sync::Arc, time::Duration};
use tokio::sync::{Notify, broadcast, mpsc};
use tokio::task::JoinHandle;

// Handles for one running world task.
pub struct World {
    pub events_tx: mpsc::Sender<RegattaEvent>,
    pub world_rx: broadcast::Receiver<WorldUpdate>,
    pub shutdown: Arc<Notify>,
    pub handle: JoinHandle<()>,
}

// Spawn a world with a fast tick so tests finish quickly.
pub fn spawn_world() -> World {
    let settings = RegattaSettings {
        tick_interval: Duration::from_millis(2),
        ..RegattaSettings::default()
    };
    let (events_tx, events_rx) = mpsc::channel(64);
    // Large buffer so slow test polling never lags the receiver.
    let (world_tx, world_rx) = broadcast::channel(4096);
    let shutdown = Arc::new(Notify::new());
    let handle = tokio::spawn(world_task(
        events_rx,
        world_tx,
        settings,
        shutdown.clone(),
    ));
    World {
        events_tx,
        world_rx,
        shutdown,
        handle,
    }
}

// Wait (bounded) for the first update that satisfies `pred`.
pub async fn wait_for(
    world_rx: &mut broadcast::Receiver<WorldUpdate>,
    pred: impl Fn(&WorldUpdate) -> bool,
) -> WorldUpdate {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match world_rx.recv().await {
                Ok(update) if pred(&update) => return update,
                Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => panic!("world closed early"),
            }
        }
    })
    .await
    .expect("timed out waiting for world update")
}
