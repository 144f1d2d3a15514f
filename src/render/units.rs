const KB: f64 = 1_024.0;
const MB: f64 = 1_048_576.0;
const GB: f64 = 1_073_741_824.0;
const TB: f64 = 1_099_511_627_776.0;

/// Unit selection for size columns. `Auto` picks the largest power-of-1024
/// unit that keeps the scaled value at or above 1.0; the forced modes always
/// divide by their factor, even when the result drops below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitMode {
    Auto,
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
}

impl UnitMode {
    /// Pin `Auto` to the concrete unit it would choose for `bytes`.
    ///
    /// The row formatter resolves the unit once per row (from the total) so
    /// every size column in that row agrees, even when used/free would land
    /// on a smaller unit on their own.
    pub fn resolve(self, bytes: u64) -> UnitMode {
        match self {
            UnitMode::Auto => {
                let b = bytes as f64;
                if b >= TB      { UnitMode::Terabytes }
                else if b >= GB { UnitMode::Gigabytes }
                else if b >= MB { UnitMode::Megabytes }
                else if b >= KB { UnitMode::Kilobytes }
                else            { UnitMode::Bytes }
            }
            other => other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UnitMode::Auto      => "auto",
            UnitMode::Bytes     => "bytes",
            UnitMode::Kilobytes => "KB",
            UnitMode::Megabytes => "MB",
            UnitMode::Gigabytes => "GB",
            UnitMode::Terabytes => "TB",
        }
    }
}

/// Scale a byte count into the unit `mode` resolves to for it.
pub fn scale(bytes: u64, mode: UnitMode) -> (f64, &'static str) {
    let unit = mode.resolve(bytes);
    let value = match unit {
        UnitMode::Bytes     => bytes as f64,
        UnitMode::Kilobytes => bytes as f64 / KB,
        UnitMode::Megabytes => bytes as f64 / MB,
        UnitMode::Gigabytes => bytes as f64 / GB,
        UnitMode::Terabytes => bytes as f64 / TB,
        UnitMode::Auto      => unreachable!("resolve() never returns Auto"),
    };
    (value, unit.label())
}

/// Format a byte count with `places` decimals in the unit `mode` selects.
///
/// Uses Rust's float formatting, which rounds half-to-even: 2.5 KB at zero
/// places prints "2 KB", 3.5 KB prints "4 KB".
pub fn format_size(bytes: u64, mode: UnitMode, places: u32) -> String {
    let (value, label) = scale(bytes, mode);
    format!("{:.*} {}", places as usize, value, label)
}
