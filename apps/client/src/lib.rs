//! Client for the wordtrail vocabulary trainer.
//!
//! Owns everything stateful outside the pure core: the HTTP collaborator,
//! environment configuration, and the view/session controller a front-end
//! drives.

pub mod api;
pub mod app;
pub mod config;
pub mod error;

pub use api::{ApiEnvelope, HttpVocabApi, VocabApi};
pub use app::{App, DaySelection, View};
pub use config::Config;
pub use error::{ClientError, Result};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise tracing for an embedding application.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
