//! Moodgen is a small stateless relay in front of the fal.ai text-to-image
//! API: a mood descriptor (emotion + style) comes in, a derived prompt goes
//! upstream, and the provider's heterogeneous response shapes are normalized
//! into a single `image_url` for the caller.

pub mod config;
pub mod error;
pub mod fal;
pub mod logger;
pub mod models;
pub mod server;

pub use config::{Config, FalConfig};
pub use error::{RelayError, Result};
pub use fal::FalClient;
pub use models::*;
