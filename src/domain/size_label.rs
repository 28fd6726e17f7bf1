const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: f64 = 1024.0;

/// Human readable byte size, e.g. `0 Bytes`, `512 Bytes`, `1.5 KB`.
///
/// Values are rounded to two decimals with trailing zeros dropped. Sizes past
/// the gigabyte range stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", UNITS[0]);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

pub fn format_character_count(text: &str) -> String {
    format!("{} characters", text.chars().count())
}
