use super::row::{self, FormattedRow};
use super::{DisplayConfig, Error};
use crate::models::filesystem::FilesystemRecord;
use crossterm::style::Stylize;

#[derive(Debug, Clone, Copy)]
enum Alignment {
    Left,
    Right,
}

/// Header labels for the enabled columns. The leading and trailing columns
/// swap between mount/graph and device/mount depending on `show_graph`.
fn headers(config: &DisplayConfig) -> Vec<&'static str> {
    let mut h = vec![
        if config.show_graph { "Mount" } else { "Device" },
        "Total",
        "Used",
        "Avail",
    ];
    if config.show_raw {
        h.push("Bytes");
    }
    if config.show_percent {
        h.push("Prcnt");
    }
    h.push(if config.show_graph { "Graph" } else { "Mount" });
    h
}

fn alignments(config: &DisplayConfig) -> Vec<Alignment> {
    let mut a = vec![Alignment::Left, Alignment::Right, Alignment::Right, Alignment::Right];
    if config.show_raw {
        a.push(Alignment::Right);
    }
    if config.show_percent {
        a.push(Alignment::Right);
    }
    a.push(Alignment::Left);
    a
}

/// Render the full usage table to one text block.
///
/// Two passes: format every record first, then pad all cells to the widest
/// entry of each column (headers included). Records that fail the
/// consistency check are skipped with a warning. Input order is preserved.
pub fn render_table(records: &[FilesystemRecord], config: &DisplayConfig) -> Result<String, Error> {
    config.validate()?;

    let headers = headers(config);
    let aligns = alignments(config);

    let mut rows: Vec<FormattedRow> = Vec::with_capacity(records.len());
    let mut total = FilesystemRecord {
        device: "total".to_string(),
        mount:  "total".to_string(),
        total_bytes: 0,
        used_bytes:  0,
        free_bytes:  0,
    };

    for record in records {
        match row::format_row(record, config) {
            Ok(formatted) => {
                total.total_bytes += record.total_bytes;
                total.used_bytes += record.used_bytes;
                total.free_bytes += record.free_bytes;
                rows.push(formatted);
            }
            Err(err @ Error::InconsistentRecord { .. }) => {
                log::warn!("skipping {}: {}", record.mount, err);
            }
            Err(err) => return Err(err),
        }
    }

    if config.show_total {
        rows.push(row::format_row(&total, config)?);
    }

    // Column widths across data and header labels, on plain (unpainted) text.
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for r in &rows {
        for (i, cell) in r.cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();

    let header_line = join_padded(&headers, &widths, &aligns);
    if config.color_enabled {
        out.push_str(&header_line.bold().to_string());
    } else {
        out.push_str(&header_line);
    }
    out.push('\n');

    for r in &rows {
        let cells: Vec<&str> = r.cells.iter().map(String::as_str).collect();
        let line = join_padded(&cells, &widths, &aligns);
        // Paint after padding so escape bytes never disturb alignment.
        out.push_str(&r.band.paint(&line));
        out.push('\n');
    }

    Ok(out)
}

fn join_padded(cells: &[&str], widths: &[usize], aligns: &[Alignment]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        match aligns[i] {
            Alignment::Left => line.push_str(&format!("{:<width$}", cell, width = widths[i])),
            Alignment::Right => line.push_str(&format!("{:>width$}", cell, width = widths[i])),
        }
    }
    line
}
