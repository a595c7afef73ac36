use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a coordinate that the directory may send as a number, a numeric string, `null` or garbage.
/// Anything that is not a number ends up as `None` instead of failing the whole station.
pub fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    })
}
