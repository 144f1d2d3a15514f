pub mod bar;
pub mod color;
pub mod row;
pub mod table;
pub mod units;

pub use color::ColorBand;
pub use units::UnitMode;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Display options that cannot produce well-formed output.
    #[error("invalid display config: {0}")]
    InvalidConfig(String),

    /// A record whose used + free exceeds its total beyond statvfs slack.
    #[error("{mount}: used {used} + free {free} bytes exceed total {total}")]
    InconsistentRecord {
        mount: String,
        total: u64,
        used:  u64,
        free:  u64,
    },
}

/// Resolved display options for one render pass.
///
/// Built once from the config file and CLI flags, then passed by reference
/// into every rendering call. Rendering is a pure function of
/// (records, config).
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub unit_mode:      UnitMode,
    /// Decimal places for size columns, 0 through 9.
    pub decimal_places: u32,
    pub color_enabled:  bool,
    /// Ascending (cutoff %, band) pairs; the last entry is the catch-all.
    pub thresholds:     Vec<(f64, ColorBand)>,
    pub bar_width:      usize,
    pub bar_fill:       char,
    pub bar_empty:      char,
    /// When off, the graph column is replaced by the mount point and the
    /// leading column shows the device instead.
    pub show_graph:     bool,
    pub show_percent:   bool,
    /// Extra column with the unscaled byte total.
    pub show_raw:       bool,
    /// Append a row totalling all filesystems.
    pub show_total:     bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit_mode:      UnitMode::Auto,
            decimal_places: 1,
            color_enabled:  true,
            thresholds:     vec![
                (70.0,  ColorBand::Safe),
                (90.0,  ColorBand::Warning),
                (100.0, ColorBand::Danger),
            ],
            bar_width:      10,
            bar_fill:       '=',
            bar_empty:      ' ',
            show_graph:     true,
            show_percent:   true,
            show_raw:       false,
            show_total:     false,
        }
    }
}

impl DisplayConfig {
    /// Reject option combinations the renderer cannot honor. Run once
    /// before rendering; nothing is silently corrected.
    pub fn validate(&self) -> Result<(), Error> {
        if self.bar_width == 0 {
            return Err(Error::InvalidConfig("bar width must be positive".into()));
        }
        if self.decimal_places > 9 {
            return Err(Error::InvalidConfig(format!(
                "decimal places must be 0-9, got {}",
                self.decimal_places
            )));
        }
        if self.thresholds.is_empty() {
            return Err(Error::InvalidConfig("color thresholds are empty".into()));
        }
        if self.thresholds.windows(2).any(|w| w[0].0 > w[1].0) {
            return Err(Error::InvalidConfig(
                "color thresholds must be sorted by ascending cutoff".into(),
            ));
        }
        Ok(())
    }
}
