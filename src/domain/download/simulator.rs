use super::handoff::{FileHandoff, SaveTarget};
use super::model::{DownloadItem, TickOutcome};
use rand::Rng;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Pace of the simulated transfer.
#[derive(Debug, Clone)]
pub struct ProgressProfile {
    pub tick: Duration,
    pub step: Range<f64>,
    pub speed_mbps: Range<f64>,
}

impl Default for ProgressProfile {
    /// 200 ms ticks of 5-20 % finish in roughly one to two seconds.
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(200),
            step: 5.0..20.0,
            speed_mbps: 2.5..8.5,
        }
    }
}

impl ProgressProfile {
    /// Default pace with a custom tick. Zero is raised to one millisecond.
    pub fn with_tick(tick: Duration) -> Self {
        Self {
            tick: tick.max(Duration::from_millis(1)),
            ..Self::default()
        }
    }

    /// Draw one progress step and one cosmetic speed reading.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        (
            rng.gen_range(self.step.clone()),
            rng.gen_range(self.speed_mbps.clone()),
        )
    }
}

/// Start ticking a running item until it completes or its epoch goes stale.
///
/// The task owns only its item and a copy of the epoch it was started in;
/// completion fires the hand-off exactly once.
pub fn spawn_ticker(
    item: Arc<Mutex<DownloadItem>>,
    epoch: Arc<AtomicU64>,
    started_in: u64,
    profile: ProgressProfile,
    handoff: Arc<dyn FileHandoff>,
    target: SaveTarget,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(profile.tick);
        // The first tick of a tokio interval fires immediately.
        interval.tick().await;

        loop {
            interval.tick().await;

            if epoch.load(Ordering::SeqCst) != started_in {
                tracing::debug!(epoch = started_in, "Dropping tick from a reset result set");
                break;
            }

            let (step, speed) = {
                let mut rng = rand::thread_rng();
                profile.sample(&mut rng)
            };

            let (outcome, index) = {
                let mut item = item.lock().await;
                (item.advance(step, speed), item.index)
            };

            match outcome {
                TickOutcome::Progressed => continue,
                TickOutcome::Completed => {
                    tracing::info!(index, filename = %target.filename, "Download finished");
                    handoff.hand_off(target).await;
                    break;
                }
                TickOutcome::Ignored => break,
            }
        }
    })
}
