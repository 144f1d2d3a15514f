use crate::collectors::mounts::{self, MountEntry};
use crate::models::filesystem::FilesystemRecord;
use anyhow::Result;

/// Enumerate mounted filesystems and collect their space statistics.
///
/// Mounts that fail statvfs (permissions, stale NFS handles) are skipped
/// with a debug log instead of failing the whole report.
pub fn read_filesystems(exclude: &[String], reserved: bool) -> Result<Vec<FilesystemRecord>> {
    let entries = mounts::read_mounts(exclude)?;
    let mut out = Vec::new();

    for entry in &entries {
        match statvfs_for(entry, reserved) {
            Ok(record) => out.push(record),
            Err(err) => log::debug!("skipping {}: {}", entry.mount, err),
        }
    }

    Ok(out)
}

fn statvfs_for(entry: &MountEntry, reserved: bool) -> Result<FilesystemRecord> {
    use nix::sys::statvfs::statvfs;
    let stat = statvfs(entry.mount.as_str())?;

    let frsize = stat.fragment_size() as u64;
    let total_bytes = stat.blocks() * frsize;
    let bfree_bytes = stat.blocks_free() * frsize;
    let bavail_bytes = stat.blocks_available() * frsize;

    // Root-reserved blocks: when counted as used, "free" is what an
    // unprivileged user can actually write into (bavail); otherwise the
    // raw free block count.
    let used_bytes = total_bytes.saturating_sub(bfree_bytes);
    let free_bytes = if reserved { bavail_bytes } else { bfree_bytes };

    Ok(FilesystemRecord {
        device: entry.device.clone(),
        mount:  entry.mount.clone(),
        total_bytes,
        used_bytes,
        free_bytes,
    })
}
