//! Typed client for the League of Legends platform API.
//!
//! Responses are mapped strictly onto DTOs in [`objects`]. Objects that carry a
//! champion id can be linked to their Data Dragon record when
//! [`config::StaticDataSettings::linking`] is on.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod objects;
pub mod rate_limit;
pub mod region;

pub use api::{LeagueApiClient, MatchlistFilter};
pub use config::{Config, StaticDataSettings};
pub use error::{ApiResult, LeagueApiError};
pub use region::Region;
