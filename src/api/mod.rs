//! OMDb API access: wire types, the blocking HTTP client, and the error
//! taxonomy for a single search call.

mod client;
mod error;
mod types;

pub use client::{DEFAULT_BASE_URL, OmdbClient};
pub use error::ApiError;
pub use types::{MovieSummary, SearchEnvelope, SearchPage};

/// Number of records the OMDb API returns per page.
pub const PAGE_SIZE: usize = 10;
