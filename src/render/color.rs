use crossterm::style::Stylize;

/// Severity band a row renders in, derived from its usage percentage.
/// `None` means color output is disabled and no escape codes are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    None,
    Safe,
    Warning,
    Danger,
}

impl ColorBand {
    /// Wrap `text` in this band's ANSI escapes. `None` returns it untouched,
    /// so disabled color means byte-for-byte plain output.
    pub fn paint(self, text: &str) -> String {
        match self {
            ColorBand::None    => text.to_string(),
            ColorBand::Safe    => text.green().to_string(),
            ColorBand::Warning => text.yellow().to_string(),
            ColorBand::Danger  => text.red().to_string(),
        }
    }
}

/// First band whose cutoff covers `percent`; the last entry catches 100%.
pub fn band_for(percent: f64, thresholds: &[(f64, ColorBand)]) -> ColorBand {
    for (cutoff, band) in thresholds {
        if percent <= *cutoff {
            return *band;
        }
    }
    thresholds.last().map_or(ColorBand::None, |(_, band)| *band)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANDS: [(f64, ColorBand); 3] = [
        (50.0,  ColorBand::Safe),
        (90.0,  ColorBand::Warning),
        (100.0, ColorBand::Danger),
    ];

    #[test]
    fn band_selection_is_monotonic() {
        assert_eq!(band_for(0.0, &BANDS), ColorBand::Safe);
        assert_eq!(band_for(50.0, &BANDS), ColorBand::Safe);
        assert_eq!(band_for(51.0, &BANDS), ColorBand::Warning);
        assert_eq!(band_for(90.0, &BANDS), ColorBand::Warning);
        assert_eq!(band_for(99.9, &BANDS), ColorBand::Danger);
        assert_eq!(band_for(100.0, &BANDS), ColorBand::Danger);
    }

    #[test]
    fn percent_above_every_cutoff_takes_the_catch_all() {
        let low = [(50.0, ColorBand::Safe), (60.0, ColorBand::Danger)];
        assert_eq!(band_for(99.0, &low), ColorBand::Danger);
    }

    #[test]
    fn none_band_leaves_text_untouched() {
        assert_eq!(ColorBand::None.paint("plain"), "plain");
    }

    #[test]
    fn colored_bands_wrap_the_text_in_escapes() {
        let painted = ColorBand::Danger.paint("90.1%");
        assert!(painted.contains("90.1%"));
        assert!(painted.starts_with('\x1b'));
        assert_ne!(painted, "90.1%");
    }
}
