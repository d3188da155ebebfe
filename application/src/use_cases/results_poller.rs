//! Periodic results refresh for the open voting view.

use crate::fallback::DataOrigin;
use crate::ports::poll_api::PollApi;
use crate::ports::ui_event::UiEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use votestream_domain::PollId;

/// Background task refreshing one poll's results.
///
/// The first refresh happens one `period` after start. A rate-limited cycle
/// is skipped silently; any other failure is logged and retried on the next
/// tick. Dropping the poller cancels it.
pub struct ResultsPoller {
    poll_id: PollId,
    cancel: CancellationToken,
}

impl ResultsPoller {
    pub fn start<A: PollApi + 'static>(
        api: Arc<A>,
        poll_id: PollId,
        period: Duration,
        tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        let cancel = CancellationToken::new();
        tokio::spawn(poll_loop(api, poll_id, period, tx, cancel.clone()));
        debug!("Results poller started for poll {}", poll_id);
        Self { poll_id, cancel }
    }

    pub fn stop(self) {
        debug!("Results poller stopped for poll {}", self.poll_id);
        self.cancel.cancel();
    }
}

impl Drop for ResultsPoller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn poll_loop<A: PollApi>(
    api: Arc<A>,
    poll_id: PollId,
    period: Duration,
    tx: mpsc::UnboundedSender<UiEvent>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            fetched = api.results(poll_id) => fetched,
        };

        match fetched {
            Ok(results) => {
                let event = UiEvent::ResultsUpdated {
                    poll_id,
                    results,
                    origin: DataOrigin::Remote,
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
            Err(e) if e.is_rate_limited() => {
                debug!("Results refresh for poll {} rate limited, skipping", poll_id);
            }
            Err(e) => {
                warn!("Error polling results for poll {}: {}", poll_id, e);
            }
        }
    }
}
