use crate::types::{Entry, display_name};
use anyhow::{Result, anyhow};
use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::io;
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

/// Lists the direct children of `dir`, in the order the filesystem returns
/// them. Children whose metadata cannot be read are skipped with a warning;
/// failing to read `dir` itself is an error.
pub fn list_entries(dir: &Path) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for item in WalkDir::new(dir).max_depth(1) {
        let dent = match item {
            Ok(dent) => dent,
            Err(e) if e.depth() == 0 || e.path() == Some(dir) => {
                let reason = e
                    .io_error()
                    .map_or_else(|| e.to_string(), std::string::ToString::to_string);
                return Err(anyhow!(
                    "Failed to read directory {}: {reason}",
                    dir.display()
                ));
            }
            Err(e) => {
                let name = e
                    .path()
                    .map_or_else(|| "?".to_string(), |p| p.display().to_string());
                log::warn!("Could not read entry '{name}': {e}");
                continue;
            }
        };

        if dent.depth() == 0 {
            continue;
        }

        let metadata = dent.metadata().map_err(io::Error::from);
        if let Some(entry) = entry_from(dent.path(), dent.file_type().is_dir(), metadata) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

/// Builds the `Entry` for one child, or warns and yields `None` when its
/// metadata could not be read.
fn entry_from(path: &Path, is_dir: bool, metadata: io::Result<Metadata>) -> Option<Entry> {
    let metadata = match metadata {
        Ok(m) => m,
        Err(e) => {
            log::warn!("Could not get info for '{}': {e}", display_name(path));
            return None;
        }
    };

    // UNIX_EPOCH when the platform cannot report mtime; display only.
    let modified: DateTime<Local> = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH).into();

    log::debug!("listed {}", path.display());
    Some(Entry::new(path.to_path_buf(), metadata.len(), is_dir, modified))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_lists_direct_children_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), vec![0u8; 500]).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/nested.txt"), "deep").unwrap();

        let entries = list_entries(dir.path()).unwrap();
        assert_eq!(entries.len(), 2);

        let file = entries.iter().find(|e| e.name() == "a.txt").unwrap();
        assert_eq!(file.size, 500);
        assert!(!file.is_dir);
        assert_eq!(file.path, dir.path().join("a.txt"));

        let sub = entries.iter().find(|e| e.name() == "sub").unwrap();
        assert!(sub.is_dir);
        assert!(entries.iter().all(|e| !e.marked));
    }

    #[test]
    fn test_paths_are_unique() {
        let dir = tempdir().unwrap();
        for i in 0..20 {
            fs::write(dir.path().join(format!("f{i}")), "x").unwrap();
        }

        let entries = list_entries(dir.path()).unwrap();
        let paths: HashSet<_> = entries.iter().map(|e| e.path.clone()).collect();
        assert_eq!(paths.len(), 20);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        assert!(list_entries(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = list_entries(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read directory"));
    }

    #[test]
    fn test_unreadable_child_is_skipped() {
        let dir = tempdir().unwrap();
        let names = ["first", "broken", "third"];
        for name in names {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let entries: Vec<Entry> = names
            .iter()
            .filter_map(|name| {
                let path = dir.path().join(name);
                let metadata = if *name == "broken" {
                    Err(io::Error::from(io::ErrorKind::PermissionDenied))
                } else {
                    fs::symlink_metadata(&path)
                };
                entry_from(&path, false, metadata)
            })
            .collect();

        let listed: Vec<String> = entries.iter().map(Entry::name).collect();
        assert_eq!(listed, ["first", "third"]);
        assert_eq!(entries[1].size, 5);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_listed_as_file() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let entries = list_entries(dir.path()).unwrap();
        let link = entries.iter().find(|e| e.name() == "link").unwrap();
        assert!(!link.is_dir);
    }
}
