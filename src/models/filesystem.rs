/// One mounted filesystem, as handed over by the collectors.
///
/// `used + free` may fall short of `total`: ext4 and friends reserve blocks
/// for root that are neither used nor available.
#[derive(Debug, Clone)]
pub struct FilesystemRecord {
    pub device:      String,
    pub mount:       String,
    pub total_bytes: u64,
    pub used_bytes:  u64,
    pub free_bytes:  u64,
}

impl FilesystemRecord {
    /// Percentage of space used. Filesystems that report a zero total
    /// (some network and pseudo mounts) count as 0% used.
    pub fn used_pct(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        self.used_bytes as f64 / self.total_bytes as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_pct_is_a_plain_ratio() {
        let fs = FilesystemRecord {
            device: "/dev/sda1".into(),
            mount:  "/".into(),
            total_bytes: 1_000,
            used_bytes:  250,
            free_bytes:  750,
        };
        assert_eq!(fs.used_pct(), 25.0);
    }

    #[test]
    fn zero_total_is_zero_percent() {
        let fs = FilesystemRecord {
            device: "none".into(),
            mount:  "/weird".into(),
            total_bytes: 0,
            used_bytes:  0,
            free_bytes:  0,
        };
        assert_eq!(fs.used_pct(), 0.0);
    }
}
