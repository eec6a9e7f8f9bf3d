//! Build a [`MemoryCatalog`] from a live directory tree.

use std::io;
use std::path::Path;

use sift_core::EntryKind;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::catalog::MemoryCatalog;

/// Walk `root` (not following symlinks) and catalog everything beneath it.
///
/// Ids are assigned from 1 in walk order, with siblings sorted by file name,
/// so scanning the same tree twice yields the same ids. Unreadable entries
/// are logged and skipped.
pub fn scan_directory(root: &Path) -> io::Result<MemoryCatalog> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("scan root is not a directory: {}", root.display()),
        ));
    }

    let mut catalog = MemoryCatalog::new();
    let mut skipped = 0usize;

    for item in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                skipped += 1;
                continue;
            }
        };

        let file_type = entry.file_type();
        let kind = if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let full_path = entry.path().to_string_lossy().into_owned();
        catalog.push(name, full_path, kind);
    }

    info!(
        root = %root.display(),
        entries = catalog.len(),
        skipped,
        "scanned directory into catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scan_catalogs_files_and_dirs_in_name_order() {
        let dir = TempDir::new().expect("create tempdir");
        fs::create_dir(dir.path().join("b_dir")).unwrap();
        fs::write(dir.path().join("b_dir").join("inner.jpg"), b"x").unwrap();
        fs::write(dir.path().join("a.txt"), b"x").unwrap();

        let catalog = scan_directory(dir.path()).unwrap();
        let entries: Vec<_> = catalog
            .entries()
            .map(|e| (e.id, e.name.as_str(), e.kind))
            .collect();

        assert_eq!(
            entries,
            vec![
                (1, "a.txt", EntryKind::File),
                (2, "b_dir", EntryKind::Directory),
                (3, "inner.jpg", EntryKind::File),
            ]
        );
        let inner = catalog.get(3).unwrap();
        assert!(inner.full_path.ends_with("inner.jpg"));
        assert!(inner.full_path.contains("b_dir"));
    }

    #[test]
    fn scan_missing_root_is_not_found() {
        let dir = TempDir::new().expect("create tempdir");
        let err = scan_directory(&dir.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
