mod client;
mod nominatim_response;

pub use client::{GeocodeClientError, ReverseGeocodeClient};
