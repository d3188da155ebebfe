//! Vote submission building blocks owned by the controller.

pub mod debounce;
pub mod guard;

pub use debounce::Debouncer;
pub use guard::{VoteGuard, VoteRejection};
