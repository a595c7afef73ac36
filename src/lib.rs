pub mod app_config;
mod coordinate_deserializer;
pub mod domain;
pub mod extensions;
pub mod geo;
mod geo_location_deserializer;
pub mod geocode;
pub mod http_client;
pub mod local_radio;
pub mod radio;
pub mod weather;
