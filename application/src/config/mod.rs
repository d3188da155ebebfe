//! Application-level configuration.
//!
//! - [`ClientBehavior`]: timers of the interactive client
//!
//! Load-test settings are carried by the domain's
//! [`LoadPlan`](votestream_domain::LoadPlan).

pub mod client_behavior;

pub use client_behavior::ClientBehavior;
