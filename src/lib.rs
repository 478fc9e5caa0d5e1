//! Client SDK for the EarthNetworks Pulse weather API.
//!
//! This crate defines:
//! - A typed catalog of the Pulse API endpoints and their URL templates
//! - [`PulseClient`], with one async method per API operation
//! - The [`PulseResults`] envelope mapping JSON responses and errors
//!
//! All HTTP I/O goes through the [`transport::Transport`] seam; the
//! default implementation is backed by `reqwest`. A subscription key
//! obtained from [EarthNetworks](https://login.enterprise.earthnetworks.com/)
//! is required for every operation.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod model;
pub mod results;
pub mod transport;

pub use client::{AlmanacOptions, CurrentWeatherOptions, PulseClient};
pub use endpoint::{API_BASE_URL, Endpoint};
pub use error::PulseError;
pub use model::{Location, Unit};
pub use results::{JsonObject, PulseResults};
pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};
