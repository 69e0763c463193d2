//! Formatting utilities for meter output
//!
//! Bitrates are reported in bits per second with decimal prefixes, the way
//! network throughput is usually quoted. Byte counts use binary prefixes.

/// Formats a bitrate estimate with appropriate units
///
/// Negative values, including [`NO_ESTIMATE`](crate::meter::NO_ESTIMATE),
/// mean no estimate is available.
///
/// # Examples
///
/// ```
/// use kaipo_meter::collaborators::formatting::format_bitrate;
///
/// assert_eq!(format_bitrate(-1), "no estimate");
/// assert_eq!(format_bitrate(800), "800 bps");
/// assert_eq!(format_bitrate(500_000), "500.00 Kbps");
/// assert_eq!(format_bitrate(2_500_000), "2.50 Mbps");
/// assert_eq!(format_bitrate(1_000_000_000), "1.00 Gbps");
/// ```
pub fn format_bitrate(bits_per_second: i64) -> String {
    if bits_per_second < 0 {
        return "no estimate".to_string();
    }
    let bps = bits_per_second as f64;
    if bps < 1_000.0 {
        format!("{} bps", bits_per_second)
    } else if bps < 1_000_000.0 {
        format!("{:.2} Kbps", bps / 1_000.0)
    } else if bps < 1_000_000_000.0 {
        format!("{:.2} Mbps", bps / 1_000_000.0)
    } else {
        format!("{:.2} Gbps", bps / 1_000_000_000.0)
    }
}

/// Formats byte counts with appropriate units (B, KB, MB, GB, TB)
///
/// # Examples
///
/// ```
/// use kaipo_meter::collaborators::formatting::format_bytes;
///
/// assert_eq!(format_bytes(0), "0 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    let value = bytes as f64;
    if value < 1024.0 {
        format!("{} B", bytes)
    } else if value < 1024.0 * 1024.0 {
        format!("{:.2} KB", value / 1024.0)
    } else if value < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.2} MB", value / (1024.0 * 1024.0))
    } else if value < 1024.0 * 1024.0 * 1024.0 * 1024.0 {
        format!("{:.2} GB", value / (1024.0 * 1024.0 * 1024.0))
    } else {
        format!("{:.2} TB", value / (1024.0 * 1024.0 * 1024.0 * 1024.0))
    }
}
