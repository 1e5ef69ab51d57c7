mod api;
mod client;
mod config;
mod error;

pub use api::AlertMutingApi;
pub use client::SignalFxClient;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::ClientError;
