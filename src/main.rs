use radiocast::app_config::AppConfig;
use radiocast::geocode::ReverseGeocodeClient;
use radiocast::http_client::new_client;
use radiocast::local_radio::{LocalRadio, LocalStation};
use radiocast::radio::RadioDirectoryClient;
use radiocast::weather::{ForecastResponse, WeatherClient};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("📻 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = new_client(&config)?;
    let weather = WeatherClient::new(client.clone(), &config);
    let local_radio = LocalRadio::new(
        Arc::new(RadioDirectoryClient::new(client.clone(), &config)),
        Arc::new(ReverseGeocodeClient::new(client, &config)),
        config.radio().zero_coordinates(),
    );

    let location = config.location();
    info!(latitude = location.latitude, longitude = location.longitude, "📍 Looking around");

    let (forecast, local_station) = futures::join!(weather.forecast(location), local_radio.find(location));

    log_local_station(&local_station);
    log_forecast(&forecast?);

    Ok(())
}

fn log_local_station(local: &LocalStation) {
    info!("🏙️ {}", local.place.name);

    match (&local.station, local.distance_km) {
        (Some(station), Some(distance_km)) => {
            let stream = if station.url_resolved.is_empty() { &station.url } else { &station.url_resolved };
            info!("📻 {} ({:.1} km) {}", station.name, distance_km, stream);
        }
        _ => warn!("⚠️ No nearby radio station found"),
    }
}

fn log_forecast(forecast: &ForecastResponse) {
    let current = &forecast.current;
    let units = &forecast.current_units;

    info!(
        "{} {}{}, humidity {}{}, wind {} {}{}",
        current.weather_code(),
        current.temperature_2m,
        units.temperature_2m,
        current.relative_humidity_2m,
        units.relative_humidity_2m,
        current.wind_direction(),
        current.wind_speed_10m,
        units.wind_speed_10m,
    );

    for day in forecast.daily.days() {
        info!(
            "📅 {} {} {}{} / {}{}",
            day.date.format("%a %d %b"),
            day.weather_code,
            day.temperature_min,
            forecast.daily_units.temperature_2m_min,
            day.temperature_max,
            forecast.daily_units.temperature_2m_max,
        );
    }
}
