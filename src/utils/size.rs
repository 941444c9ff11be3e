//! Human-readable sizes (1024-based units, two decimals).

use super::config::SizeConsts;

/// Format bytes as a human-readable string, e.g. `2048` → `"2.00 KB"`.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in SizeConsts::UNITS {
        if size < SizeConsts::UNIT_STEP {
            return format!("{size:.2} {unit}");
        }
        size /= SizeConsts::UNIT_STEP;
    }
    format!("{size:.2} {}", SizeConsts::OVERFLOW_UNIT)
}

/// Convert bytes to GB (1024^3).
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / SizeConsts::BYTES_PER_GB
}
