//! Parsing helpers for environment-driven configuration.

/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, case-insensitively.
/// An empty value reads as `false`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
