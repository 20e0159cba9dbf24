pub mod client;
pub mod endpoints;
pub mod lol;
pub mod static_data;
pub mod tournament;

pub use client::LeagueApiClient;
pub use lol::MatchlistFilter;
