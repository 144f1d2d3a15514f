use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayFileConfig,

    #[serde(default)]
    pub colors: ColorsConfig,

    #[serde(default)]
    pub mounts: MountsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayFileConfig {
    /// Decimal places for size columns (0-9)
    pub places: u32,
    /// Smart scaling: pick the unit per row instead of fixed kilobytes
    pub smart: bool,
    /// Show the bar graph column (false = device names, like -d)
    pub graph: bool,
    pub color: bool,
    /// Bar graph width in character cells
    pub bar_width: usize,
    pub bar_fill:  char,
    pub bar_empty: char,
    pub show_percent: bool,
    /// Extra column with the raw, unscaled byte total
    pub show_raw: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorsConfig {
    /// Usage percentage up to which a filesystem renders green
    pub safe_cutoff: f64,
    /// Usage percentage up to which it renders yellow; above is red
    pub warn_cutoff: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountsConfig {
    /// Mount points to leave out of the report
    pub exclude: Vec<String>,
    /// Count root-reserved blocks as used space
    pub reserved: bool,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayFileConfig::default(),
            colors:  ColorsConfig::default(),
            mounts:  MountsConfig::default(),
        }
    }
}

impl Default for DisplayFileConfig {
    fn default() -> Self {
        Self {
            places:    1,
            smart:     true,
            graph:     true,
            color:     true,
            bar_width: 10,
            bar_fill:  '=',
            bar_empty: ' ',
            show_percent: true,
            show_raw:     false,
        }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self { safe_cutoff: 70.0, warn_cutoff: 90.0 }
    }
}

impl Default for MountsConfig {
    fn default() -> Self {
        Self { exclude: Vec::new(), reserved: true }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        match try_load() {
            Ok(c)  => c,
            Err(_) => {
                // Write defaults on first run (best-effort)
                let _ = try_write_defaults();
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("discus").join("discus.toml"))
    }
}

fn try_load() -> Result<Config> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    let text = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&text)?;
    Ok(cfg)
}

fn try_write_defaults() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# Discus configuration\n# Generated on first run — edit freely\n\n{}", text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.display.places, 1);
        assert!(cfg.display.smart);
        assert_eq!(cfg.display.bar_width, 10);
        assert_eq!(cfg.colors.warn_cutoff, 90.0);
        assert!(cfg.mounts.reserved);
    }

    #[test]
    fn partial_sections_keep_unrelated_defaults() {
        let cfg: Config = toml::from_str("[display]\nplaces = 3\nsmart = false\ngraph = true\ncolor = true\nbar_width = 20\nbar_fill = \"#\"\nbar_empty = \".\"\nshow_percent = true\nshow_raw = false\n").unwrap();
        assert_eq!(cfg.display.places, 3);
        assert_eq!(cfg.display.bar_fill, '#');
        assert_eq!(cfg.colors.safe_cutoff, 70.0);
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.display.bar_fill, '=');
        assert_eq!(back.colors.safe_cutoff, 70.0);
        assert_eq!(back.mounts.exclude, Vec::<String>::new());
    }
}
