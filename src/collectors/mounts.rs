use anyhow::Result;

/// Pseudo-filesystems nobody wants in a space report.
const SKIP_FS: &[&str] = &[
    "proc", "sysfs", "devpts", "tmpfs", "devtmpfs", "cgroup", "cgroup2",
    "pstore", "efivarfs", "securityfs", "debugfs", "tracefs", "bpf",
    "hugetlbfs", "mqueue", "fusectl", "configfs", "binfmt_misc",
    "overlay", "nsfs", "rpc_pipefs", "autofs", "squashfs",
];

const SKIP_MOUNT_PREFIX: &[&str] = &[
    "/proc", "/sys", "/dev", "/run/user", "/snap",
];

#[derive(Debug, Clone)]
pub struct MountEntry {
    pub device:  String,
    pub mount:   String,
    pub fs_type: String,
}

pub fn read_mounts(exclude: &[String]) -> Result<Vec<MountEntry>> {
    let content = std::fs::read_to_string("/proc/mounts")?;
    Ok(parse_mounts(&content, exclude))
}

fn parse_mounts(content: &str, exclude: &[String]) -> Vec<MountEntry> {
    let mut out = Vec::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            continue;
        }
        let device = fields[0];
        let mount = unescape_octal(fields[1]);
        let fs_type = fields[2];

        if SKIP_FS.contains(&fs_type) {
            continue;
        }
        if SKIP_MOUNT_PREFIX.iter().any(|p| mount.starts_with(p)) {
            continue;
        }
        // Skip loop-mounted snaps
        if device.starts_with("/dev/loop") {
            continue;
        }
        if exclude.iter().any(|m| m == &mount) {
            continue;
        }

        out.push(MountEntry {
            device:  device.to_string(),
            mount,
            fs_type: fs_type.to_string(),
        });
    }

    out.sort_by(|a, b| a.mount.cmp(&b.mount));
    out
}

/// /proc/mounts escapes spaces, tabs and backslashes in mount paths as
/// `\040`-style octal triplets. Undo that so statvfs sees the real path.
fn unescape_octal(path: &str) -> String {
    let bytes = path.as_bytes();
    let mut out = String::with_capacity(path.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 3 < bytes.len() && bytes[i + 1..=i + 3]
            .iter()
            .all(|b| (b'0'..=b'7').contains(b))
        {
            let code = (bytes[i + 1] - b'0') as u32 * 64
                + (bytes[i + 2] - b'0') as u32 * 8
                + (bytes[i + 3] - b'0') as u32;
            if let Some(c) = char::from_u32(code) {
                out.push(c);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i] as char);
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOUNTS: &str = "\
/dev/sda1 / ext4 rw,relatime 0 0
proc /proc proc rw,nosuid 0 0
sysfs /sys sysfs rw,nosuid 0 0
tmpfs /tmp tmpfs rw,nosuid 0 0
/dev/loop3 /snap/core/1 squashfs ro 0 0
/dev/sdb1 /mnt/backup ext4 rw,relatime 0 0
/dev/sdc1 /mnt/my\\040disk ext4 rw 0 0
broken-line
";

    #[test]
    fn pseudo_filesystems_and_loops_are_skipped() {
        let mounts = parse_mounts(MOUNTS, &[]);
        let paths: Vec<&str> = mounts.iter().map(|m| m.mount.as_str()).collect();
        assert_eq!(paths, vec!["/", "/mnt/backup", "/mnt/my disk"]);
    }

    #[test]
    fn excluded_mounts_are_dropped() {
        let exclude = vec!["/mnt/backup".to_string()];
        let mounts = parse_mounts(MOUNTS, &exclude);
        assert!(mounts.iter().all(|m| m.mount != "/mnt/backup"));
        assert!(mounts.iter().any(|m| m.mount == "/"));
    }

    #[test]
    fn octal_escapes_decode_to_real_characters() {
        assert_eq!(unescape_octal("/mnt/my\\040disk"), "/mnt/my disk");
        assert_eq!(unescape_octal("/mnt/tab\\011here"), "/mnt/tab\there");
        assert_eq!(unescape_octal("/plain/path"), "/plain/path");
        // Incomplete escape at the end passes through untouched
        assert_eq!(unescape_octal("/odd\\04"), "/odd\\04");
    }
}
