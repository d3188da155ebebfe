//! Vote admission rules.

use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use votestream_domain::{Notice, PollId};

/// Why a vote request was not submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteRejection {
    /// Another vote is being submitted
    InFlight,
    /// The previous admitted vote was less than the cooldown ago
    CoolingDown,
    /// This poll already has a counted vote in this session
    AlreadyVoted,
}

impl VoteRejection {
    /// Toast to show, if any. An in-flight rejection is silent.
    pub fn notice(self) -> Option<Notice> {
        match self {
            VoteRejection::InFlight => None,
            VoteRejection::CoolingDown => Some(Notice::warning("Wait a moment before voting again")),
            VoteRejection::AlreadyVoted => {
                Some(Notice::warning("You have already voted on this poll"))
            }
        }
    }
}

/// Single-writer vote state: in-flight flag, last admission time and the
/// set of polls voted on in this session.
///
/// Guards run in order: in flight, cooldown, already voted.
#[derive(Debug)]
pub struct VoteGuard {
    cooldown: Duration,
    in_flight: bool,
    last_admitted: Option<Instant>,
    voted: HashMap<PollId, usize>,
}

impl VoteGuard {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            in_flight: false,
            last_admitted: None,
            voted: HashMap::new(),
        }
    }

    /// Admit a submission for `poll_id` at `now`, marking it in flight.
    pub fn try_admit(&mut self, poll_id: PollId, now: Instant) -> Result<(), VoteRejection> {
        if self.in_flight {
            return Err(VoteRejection::InFlight);
        }
        if let Some(last) = self.last_admitted
            && now.saturating_duration_since(last) < self.cooldown
        {
            return Err(VoteRejection::CoolingDown);
        }
        if self.voted.contains_key(&poll_id) {
            return Err(VoteRejection::AlreadyVoted);
        }
        self.in_flight = true;
        self.last_admitted = Some(now);
        Ok(())
    }

    /// Submission finished; `counted` records the poll as voted.
    pub fn finish(&mut self, poll_id: PollId, choice: usize, counted: bool) {
        self.in_flight = false;
        if counted {
            self.voted.insert(poll_id, choice);
        }
    }

    /// Submission task vanished without reporting back
    pub fn abandon(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn has_voted(&self, poll_id: PollId) -> bool {
        self.voted.contains_key(&poll_id)
    }

    pub fn voted_choice(&self, poll_id: PollId) -> Option<usize> {
        self.voted.get(&poll_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: Duration = Duration::from_millis(1000);

    #[test]
    fn test_in_flight_rejects_silently() {
        let mut guard = VoteGuard::new(COOLDOWN);
        let t0 = Instant::now();
        guard.try_admit(PollId(1), t0).unwrap();
        let rejection = guard.try_admit(PollId(2), t0 + COOLDOWN * 2).unwrap_err();
        assert_eq!(rejection, VoteRejection::InFlight);
        assert!(rejection.notice().is_none());
    }

    #[test]
    fn test_cooldown_applies_to_any_poll() {
        let mut guard = VoteGuard::new(COOLDOWN);
        let t0 = Instant::now();
        guard.try_admit(PollId(1), t0).unwrap();
        guard.finish(PollId(1), 0, true);

        let rejection = guard
            .try_admit(PollId(2), t0 + Duration::from_millis(999))
            .unwrap_err();
        assert_eq!(rejection, VoteRejection::CoolingDown);
        assert_eq!(
            rejection.notice().unwrap().message,
            "Wait a moment before voting again"
        );

        assert!(guard.try_admit(PollId(2), t0 + COOLDOWN).is_ok());
    }

    #[test]
    fn test_already_voted() {
        let mut guard = VoteGuard::new(COOLDOWN);
        let t0 = Instant::now();
        guard.try_admit(PollId(1), t0).unwrap();
        guard.finish(PollId(1), 2, true);
        assert!(guard.has_voted(PollId(1)));
        assert_eq!(guard.voted_choice(PollId(1)), Some(2));

        let rejection = guard.try_admit(PollId(1), t0 + COOLDOWN * 5).unwrap_err();
        assert_eq!(rejection, VoteRejection::AlreadyVoted);
    }

    #[test]
    fn test_uncounted_finish_allows_retry() {
        let mut guard = VoteGuard::new(COOLDOWN);
        let t0 = Instant::now();
        guard.try_admit(PollId(1), t0).unwrap();
        guard.finish(PollId(1), 9, false);
        assert!(!guard.is_in_flight());
        assert!(!guard.has_voted(PollId(1)));
        assert!(guard.try_admit(PollId(1), t0 + COOLDOWN).is_ok());
    }
}
