//! Size formatting utilities.
//!
//! Sizes are scaled by powers of 1024 and labelled with binary units
//! (`KiB`, `MiB`, ...), which is what most developer tooling reports.

/// Units in ascending order. The last entry is the largest unit used; values
/// beyond it are expressed as multiples of it.
const UNITS: &[&str] = &["bytes", "KiB", "MiB", "GiB", "TiB"];

/// Convert a raw byte count into a human-friendly string.
///
/// The value is divided by 1024 until it drops below 1024 or the largest
/// unit is reached. Plain byte counts are printed as integers; every other
/// unit gets two decimal places.
///
/// # Examples
///
/// ```
/// # use codebase_size::utils::human_readable_size;
/// assert_eq!(human_readable_size(512), "512 bytes");
/// assert_eq!(human_readable_size(1_234_567), "1.18 MiB");
/// ```
#[must_use]
pub fn human_readable_size(num_bytes: u64) -> String {
    if num_bytes < 1024 {
        return format!("{num_bytes} {}", UNITS[0]);
    }

    #[allow(clippy::cast_precision_loss)]
    let mut size = num_bytes as f64;
    let mut unit = UNITS[0];

    for &candidate in &UNITS[1..] {
        size /= 1024.0;
        unit = candidate;
        if size < 1024.0 {
            break;
        }
    }

    format!("{size:.2} {unit}")
}
