use sift_core::{Entry, EntryKind, Predicate, TypeFilter};
use tempfile::TempDir;

use super::*;

fn sample_catalog() -> MemoryCatalog {
    MemoryCatalog::from_entries(vec![
        Entry::new(3, "a.png", "/photos/a.png", EntryKind::File),
        Entry::new(1, "a.jpg", "/photos/a.jpg", EntryKind::File),
        Entry::new(2, "A.JPG", "/photos/old/A.JPG", EntryKind::File),
        Entry::new(4, "temp", "/tmp/temp", EntryKind::Directory),
        Entry::new(5, "Bomb", "/tmp/temp/x/Bomb", EntryKind::File),
        Entry::new(6, "abomb", "/tmp/temp/abomb", EntryKind::File),
    ])
}

#[test]
fn query_returns_ids_ascending() {
    let catalog = sample_catalog();
    let ids = catalog.query(&Predicate::extension_suffix("jpg")).unwrap();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn query_exact_name_with_path_filter() {
    let catalog = sample_catalog();
    let p = Predicate::exact_name("bomb").with_path_filter(Some("temp".into()));
    assert_eq!(catalog.query(&p).unwrap(), vec![5]);
}

#[test]
fn query_with_type_filter() {
    let catalog = sample_catalog();
    let dirs = Predicate::exact_name("TEMP").with_type_filter(TypeFilter::DirectoryOnly);
    assert_eq!(catalog.query(&dirs).unwrap(), vec![4]);

    let files = Predicate::exact_name("temp").with_type_filter(TypeFilter::RegularFileOnly);
    assert!(catalog.query(&files).unwrap().is_empty());
}

#[test]
fn push_assigns_next_id() {
    let mut catalog = MemoryCatalog::new();
    assert_eq!(catalog.push("a", "/a", EntryKind::File), 1);
    assert_eq!(catalog.push("b", "/b", EntryKind::File), 2);

    catalog.insert(Entry::new(10, "c", "/c", EntryKind::File));
    assert_eq!(catalog.push("d", "/d", EntryKind::File), 11);
    assert_eq!(catalog.len(), 4);
}

#[test]
fn insert_replaces_same_id() {
    let mut catalog = MemoryCatalog::new();
    catalog.insert(Entry::new(1, "a", "/a", EntryKind::File));
    let previous = catalog.insert(Entry::new(1, "b", "/b", EntryKind::File));
    assert_eq!(previous.map(|e| e.name), Some("a".to_string()));
    assert_eq!(catalog.get(1).map(|e| e.name.as_str()), Some("b"));
}

#[test]
fn snapshot_roundtrip_preserves_entries() {
    let dir = TempDir::new().expect("create tempdir");
    let path = dir.path().join("catalog.json");
    let catalog = sample_catalog();

    catalog.save_snapshot(&path).unwrap();
    let loaded = MemoryCatalog::load_snapshot(&path).unwrap();

    assert_eq!(loaded.len(), catalog.len());
    assert_eq!(
        loaded.entries().cloned().collect::<Vec<_>>(),
        catalog.entries().cloned().collect::<Vec<_>>()
    );
}

#[test]
fn load_snapshot_reports_bad_json() {
    let dir = TempDir::new().expect("create tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        MemoryCatalog::load_snapshot(&path),
        Err(SnapshotError::Json(_))
    ));
    assert!(matches!(
        MemoryCatalog::load_snapshot(&dir.path().join("missing.json")),
        Err(SnapshotError::Io(_))
    ));
}
