mod collectors;
mod config;
mod models;
mod render;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use models::filesystem::FilesystemRecord;
use render::{ColorBand, DisplayConfig, UnitMode};

#[derive(Parser, Debug)]
#[command(name = "discus", about = "Pretty disk space reporting", version = "0.4")]
struct Cli {
    /// Number of digits to the right of the decimal place (0-9)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=9))]
    places: Option<u32>,

    /// Disable smart formatting (sizes shown in kilobytes)
    #[arg(short = 's', long)]
    no_smart: bool,

    /// Display sizes in terabytes (implies --no-smart)
    #[arg(short = 't', long)]
    tera: bool,

    /// Display sizes in gigabytes (implies --no-smart)
    #[arg(short = 'g', long)]
    giga: bool,

    /// Display sizes in megabytes (implies --no-smart)
    #[arg(short = 'm', long)]
    mega: bool,

    /// Display sizes in kilobytes (implies --no-smart)
    #[arg(short = 'k', long)]
    kilo: bool,

    /// Display sizes in raw bytes (implies --no-smart)
    #[arg(short = 'b', long)]
    bytes: bool,

    /// Show device names instead of the bar graph
    #[arg(short = 'd', long)]
    devices: bool,

    /// Disable color output
    #[arg(short = 'c', long)]
    no_color: bool,

    /// Count root-reserved space as used
    #[arg(short = 'r', long)]
    reserved: bool,

    /// Append a row totalling all filesystems
    #[arg(long)]
    total: bool,

    /// Print a one-shot JSON snapshot of all filesystems and exit
    #[arg(long)]
    json: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "discus", &mut std::io::stdout());
        return Ok(());
    }

    let file = config::Config::load();
    if cli.config {
        return run_print_config(&file);
    }

    let display = resolve_display(&cli, &file);
    display.validate()?;

    let reserved = cli.reserved || file.mounts.reserved;
    let records = collectors::filesystem::read_filesystems(&file.mounts.exclude, reserved)?;

    if cli.json {
        return run_json_snapshot(&records);
    }

    print!("{}", render::table::render_table(&records, &display)?);
    Ok(())
}

/// Merge CLI flags over the config file into the renderer's options.
/// Flags win; the file supplies everything the user didn't say.
fn resolve_display(cli: &Cli, file: &config::Config) -> DisplayConfig {
    let unit_mode = if cli.bytes {
        UnitMode::Bytes
    } else if cli.kilo {
        UnitMode::Kilobytes
    } else if cli.mega {
        UnitMode::Megabytes
    } else if cli.giga {
        UnitMode::Gigabytes
    } else if cli.tera {
        UnitMode::Terabytes
    } else if cli.no_smart || !file.display.smart {
        UnitMode::Kilobytes
    } else {
        UnitMode::Auto
    };

    // Forced units carry a proportionate default precision, like the
    // classic -t/-g/-m/-k behavior; an explicit --places always wins.
    let decimal_places = cli.places.unwrap_or(match unit_mode {
        UnitMode::Terabytes => 3,
        UnitMode::Gigabytes => 2,
        UnitMode::Megabytes => 1,
        UnitMode::Kilobytes | UnitMode::Bytes => 0,
        UnitMode::Auto => file.display.places,
    });

    DisplayConfig {
        unit_mode,
        decimal_places,
        color_enabled: !cli.no_color && file.display.color,
        thresholds: vec![
            (file.colors.safe_cutoff, ColorBand::Safe),
            (file.colors.warn_cutoff, ColorBand::Warning),
            (100.0, ColorBand::Danger),
        ],
        bar_width: file.display.bar_width,
        bar_fill:  file.display.bar_fill,
        bar_empty: file.display.bar_empty,
        show_graph:   !cli.devices && file.display.graph,
        show_percent: file.display.show_percent,
        show_raw:     file.display.show_raw,
        show_total:   cli.total,
    }
}

fn run_json_snapshot(records: &[FilesystemRecord]) -> Result<()> {
    use render::units::format_size;
    use serde_json::{json, Value};

    let filesystems: Vec<Value> = records.iter().map(|fs| {
        json!({
            "device":     fs.device,
            "mountpoint": fs.mount,
            "total":      fs.total_bytes,
            "used":       fs.used_bytes,
            "free":       fs.free_bytes,
            "total_hr":   format_size(fs.total_bytes, UnitMode::Auto, 1),
            "used_hr":    format_size(fs.used_bytes, UnitMode::Auto, 1),
            "free_hr":    format_size(fs.free_bytes, UnitMode::Auto, 1),
            "use_pct":    fs.used_pct(),
        })
    }).collect();

    let snapshot = json!({
        "discus_version": "0.4",
        "timestamp":   chrono::Local::now().to_rfc3339(),
        "filesystems": filesystems,
    });

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn run_print_config(cfg: &config::Config) -> Result<()> {
    let path = config::Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[display]");
    println!("  places       = {}", cfg.display.places);
    println!("  smart        = {}", cfg.display.smart);
    println!("  graph        = {}", cfg.display.graph);
    println!("  color        = {}", cfg.display.color);
    println!("  bar_width    = {}", cfg.display.bar_width);
    println!("  bar_fill     = {:?}", cfg.display.bar_fill);
    println!("  bar_empty    = {:?}", cfg.display.bar_empty);
    println!("  show_percent = {}", cfg.display.show_percent);
    println!("  show_raw     = {}", cfg.display.show_raw);
    println!();
    println!("[colors]");
    println!("  safe_cutoff = {}%", cfg.colors.safe_cutoff);
    println!("  warn_cutoff = {}%", cfg.colors.warn_cutoff);
    println!();
    println!("[mounts]");
    println!("  reserved = {}", cfg.mounts.reserved);
    if cfg.mounts.exclude.is_empty() {
        println!("  exclude  = (none)");
    } else {
        println!("  exclude  = {:?}", cfg.mounts.exclude);
    }
    Ok(())
}
