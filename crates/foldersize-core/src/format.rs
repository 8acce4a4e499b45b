use std::fmt;

pub const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Human-readable size: a decimal magnitude with at most two fraction digits
/// (trailing zeros stripped) and a binary unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeLabel {
    pub magnitude: String,
    pub unit: &'static str,
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

/// Convert a byte count into a `SizeLabel`.
///
/// Unit promotion uses a divisor-minus-one threshold: a value is promoted to
/// the next unit once it reaches 1023, not 1024, so 1023 bytes renders as
/// "1 KB". The tag detector in [`crate::tag`] must accept every label this
/// produces, so the threshold and the trailing-zero stripping are load-bearing.
pub fn size_label(bytes: u64) -> SizeLabel {
    if bytes == 0 {
        return SizeLabel {
            magnitude: "0".to_string(),
            unit: UNITS[0],
        };
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1023.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut magnitude = format!("{:.2}", value);
    if magnitude.contains('.') {
        magnitude = magnitude
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    SizeLabel {
        magnitude,
        unit: UNITS[unit],
    }
}

pub fn format_size(bytes: u64) -> String {
    size_label(bytes).to_string()
}
