//! Load target port
//!
//! What a virtual user hits on every iteration.

use async_trait::async_trait;
use votestream_domain::{PollId, VoteProbe};

/// Endpoint under load.
///
/// Unlike [`PollApi`](super::poll_api::PollApi), this never fails: transport
/// errors and bad statuses are captured in the returned [`VoteProbe`] so they
/// count as failed iterations.
#[async_trait]
pub trait LoadTarget: Send + Sync {
    /// `POST /polls/{id}/vote`, timed
    async fn send_vote(&self, poll_id: PollId, choice: usize) -> VoteProbe;
}
