//! A rate-limited client for the [RGL](https://rgl.gg) league statistics API.
//!
//! Start with [`RglClient`].

mod client;
mod error;
mod model;
mod rate_limit;
mod rgl;

pub use client::RglClient;
pub use error::{Result, RglError};
pub use model::*;
pub use rate_limit::{RateLimit, RateLimiter};
pub use rgl::envelope::{EnvelopeMessage, ErrorEnvelope, RemoteErrorKind};
