use super::{bar, color, units, ColorBand, DisplayConfig, Error};
use crate::models::filesystem::FilesystemRecord;

/// Column strings for one record, plus the band the row renders in.
/// Owned by the table renderer for the duration of one render pass.
#[derive(Debug)]
pub struct FormattedRow {
    pub cells: Vec<String>,
    pub band:  ColorBand,
}

/// Names longer than this are shortened from the left.
const NAME_WIDTH: usize = 10;

/// Slack allowed before used + free > total counts as a lying data source.
/// One 4 KiB block covers statvfs rounding.
const SLACK_BYTES: u64 = 4_096;

/// Reject records whose numbers cannot come from a sane filesystem.
pub fn check_record(record: &FilesystemRecord) -> Result<(), Error> {
    let claimed = record.used_bytes.saturating_add(record.free_bytes);
    if claimed > record.total_bytes.saturating_add(SLACK_BYTES) {
        return Err(Error::InconsistentRecord {
            mount: record.mount.clone(),
            total: record.total_bytes,
            used:  record.used_bytes,
            free:  record.free_bytes,
        });
    }
    Ok(())
}

/// Format one record into its column cells.
///
/// The display unit is resolved once, from the total, and reused for the
/// used and free columns so all sizes in the row agree.
pub fn format_row(record: &FilesystemRecord, config: &DisplayConfig) -> Result<FormattedRow, Error> {
    check_record(record)?;

    let percent = record.used_pct();
    let unit = config.unit_mode.resolve(record.total_bytes);
    let band = if config.color_enabled {
        color::band_for(percent, &config.thresholds)
    } else {
        ColorBand::None
    };

    let mut cells = Vec::new();
    cells.push(trim_name(if config.show_graph { &record.mount } else { &record.device }));
    cells.push(units::format_size(record.total_bytes, unit, config.decimal_places));
    cells.push(units::format_size(record.used_bytes, unit, config.decimal_places));
    cells.push(units::format_size(record.free_bytes, unit, config.decimal_places));
    if config.show_raw {
        cells.push(record.total_bytes.to_string());
    }
    if config.show_percent {
        cells.push(format!("{:.1}%", percent));
    }
    if config.show_graph {
        cells.push(bar::render_bar(percent, config.bar_width, config.bar_fill, config.bar_empty)?);
    } else {
        cells.push(trim_name(&record.mount));
    }

    Ok(FormattedRow { cells, band })
}

/// Don't let long names mess up the display: keep the tail and mark the cut.
fn trim_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= NAME_WIDTH {
        return name.to_string();
    }
    let tail: String = chars[chars.len() - NAME_WIDTH..].iter().collect();
    format!("+{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(total: u64, used: u64, free: u64) -> FilesystemRecord {
        FilesystemRecord {
            device: "/dev/sda1".to_string(),
            mount:  "/".to_string(),
            total_bytes: total,
            used_bytes:  used,
            free_bytes:  free,
        }
    }

    fn plain_config() -> DisplayConfig {
        DisplayConfig { color_enabled: false, ..Default::default() }
    }

    #[test]
    fn one_gigabyte_half_used_formats_as_expected() {
        let row = format_row(&record(1_000_000_000, 500_000_000, 500_000_000), &plain_config())
            .unwrap();
        assert_eq!(
            row.cells,
            vec!["/", "953.7 MB", "476.8 MB", "476.8 MB", "50.0%", "=====     "]
        );
        assert_eq!(row.band, ColorBand::None);
    }

    #[test]
    fn all_size_columns_share_the_total_unit() {
        // Used alone would auto-scale to GB; the row pins it to TB.
        let row = format_row(
            &record(1_099_511_627_776, 549_755_813_888, 549_755_813_888),
            &plain_config(),
        )
        .unwrap();
        assert_eq!(row.cells[1], "1.0 TB");
        assert_eq!(row.cells[2], "0.5 TB");
        assert_eq!(row.cells[3], "0.5 TB");
    }

    #[test]
    fn zero_total_reports_zero_percent_and_empty_bar() {
        let row = format_row(&record(0, 0, 0), &plain_config()).unwrap();
        assert_eq!(row.cells[1], "0.0 bytes");
        assert_eq!(row.cells[4], "0.0%");
        assert_eq!(row.cells[5], "          ");
    }

    #[test]
    fn device_mode_swaps_graph_for_mount() {
        let cfg = DisplayConfig { show_graph: false, ..plain_config() };
        let row = format_row(&record(2_048, 1_024, 1_024), &cfg).unwrap();
        assert_eq!(row.cells.first().unwrap(), "/dev/sda1");
        assert_eq!(row.cells.last().unwrap(), "/");
    }

    #[test]
    fn full_filesystem_takes_the_danger_band() {
        let cfg = DisplayConfig::default();
        let row = format_row(&record(1_024, 1_024, 0), &cfg).unwrap();
        assert_eq!(row.band, ColorBand::Danger);
    }

    #[test]
    fn color_disabled_yields_the_none_band() {
        let row = format_row(&record(1_024, 1_024, 0), &plain_config()).unwrap();
        assert_eq!(row.band, ColorBand::None);
    }

    #[test]
    fn inconsistent_record_is_rejected() {
        let bad = record(1_000_000, 900_000, 900_000);
        assert!(matches!(
            format_row(&bad, &plain_config()),
            Err(Error::InconsistentRecord { .. })
        ));
    }

    #[test]
    fn reserved_space_gap_is_not_inconsistent() {
        // used + free < total happens on every ext4 with reserved blocks
        assert!(check_record(&record(1_000_000, 400_000, 500_000)).is_ok());
    }

    #[test]
    fn long_names_keep_their_tail() {
        assert_eq!(trim_name("/dev/mapper/vg0-home"), "+r/vg0-home");
        assert_eq!(trim_name("/"), "/");
    }
}
