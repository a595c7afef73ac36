mod client;
mod station_query;

pub use client::{RadioClientError, RadioDirectoryClient};
pub use station_query::StationQuery;
