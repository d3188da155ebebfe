//! Seeded demo data for offline mode

mod catalog;

pub use catalog::{demo_results, demo_themes, seeded_demo_store};
