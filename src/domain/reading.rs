// Reading validation - decides whether a raw channel value counts as data
use serde_json::Value;

/// Coax a raw wire value into a finite number. Accepts JSON numbers and
/// numeric strings; everything else is `None`.
pub fn numeric(raw: &Value) -> Option<f64> {
    let number = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Parse a stored channel value (e.g. "0.2500") as a meaningful water level.
/// Zero and negative levels do not count as data.
pub fn parse_level(text: &str) -> Option<f64> {
    let level = text.trim().parse::<f64>().ok()?;
    (level.is_finite() && level > 0.0).then_some(level)
}

/// A reading is valid iff it converts to a finite number strictly greater
/// than zero. Missing, null, zero, negative, and non-numeric values are all
/// invalid and render as "no data", never as a zero reading.
pub fn is_valid_reading(raw: Option<&Value>) -> bool {
    raw.and_then(numeric).filter(|v| *v > 0.0).is_some()
}
