use super::*;
use crate::error::CityNavError;
use std::cell::Cell;
use tempfile::tempdir;

/// Backend that loads nothing and refuses every write
#[derive(Default)]
struct FailingBackend {
    attempts: Cell<usize>,
}

impl OverlayBackend for FailingBackend {
    fn load_raw(&self) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn save_raw(&self, _data: &[u8]) -> Result<()> {
        self.attempts.set(self.attempts.get() + 1);
        Err(CityNavError::persist(self.describe(), "read-only medium"))
    }

    fn describe(&self) -> String {
        "<failing>".to_string()
    }
}

fn stored(backend: &MemoryBackend) -> OverlayDocument {
    OverlayDocument::from_slice(&backend.contents().unwrap()).unwrap()
}

#[test]
fn test_open_missing_document_is_empty() {
    let store = OverlayStore::open(MemoryBackend::new());
    assert!(store.nodes().is_empty());
    assert!(store.edges().is_empty());
}

#[test]
fn test_open_garbage_document_is_empty() {
    let store = OverlayStore::open(MemoryBackend::with_contents("{ not json"));
    assert!(store.nodes().is_empty());
    assert!(store.edges().is_empty());
}

#[test]
fn test_upsert_node_persists_immediately() {
    let backend = MemoryBackend::new();
    let mut store = OverlayStore::open(backend.clone());

    store
        .upsert_node("Hospital", "Hospital Uyapar", (-62.725, 8.275))
        .unwrap();

    let doc = stored(&backend);
    assert_eq!(doc.nodes.len(), 1);
    assert_eq!(doc.nodes[0].id, "Hospital");
    assert!(store.is_user_defined("Hospital"));
    assert!(!store.is_user_defined("V1"));
}

#[test]
fn test_upsert_replaces_existing_records() {
    let backend = MemoryBackend::new();
    let mut store = OverlayStore::open(backend.clone());

    store.upsert_node("P", "Plaza", (0.0, 0.0)).unwrap();
    store.upsert_node("P", "Plaza Nueva", (1.0, 1.0)).unwrap();
    store.upsert_edge("P", "V1", 100.0, 1.0).unwrap();
    store.upsert_edge("P", "V1", 120.0, 1.5).unwrap();
    store.upsert_edge("V1", "P", 90.0, 0.8).unwrap();

    assert_eq!(store.nodes().len(), 1);
    assert_eq!(store.nodes()[0].name, "Plaza Nueva");
    assert_eq!(store.nodes()[0].coordinates, (1.0, 1.0));

    // Direction matters for edge identity
    assert_eq!(store.edges().len(), 2);
    assert_eq!(store.edges()[0].distance, 120.0);
    assert_eq!(stored(&backend), *store.document());
}

#[test]
fn test_delete_node_cascades_to_edges() {
    let backend = MemoryBackend::new();
    let mut store = OverlayStore::open(backend.clone());

    store.upsert_node("A", "A", (0.0, 0.0)).unwrap();
    store.upsert_node("B", "B", (0.0, 0.0)).unwrap();
    store.upsert_edge("A", "B", 100.0, 1.0).unwrap();
    store.upsert_edge("B", "V2", 50.0, 0.5).unwrap();
    store.upsert_edge("V1", "V2", 10.0, 0.1).unwrap();

    assert!(store.delete_node("B").unwrap());

    assert_eq!(store.nodes().len(), 1);
    assert_eq!(store.edges().len(), 1);
    assert!(store.edges()[0].connects("V1", "V2"));
    assert_eq!(stored(&backend).edges.len(), 1);
}

#[test]
fn test_delete_unknown_records_report_false() {
    let mut store = OverlayStore::open(MemoryBackend::new());
    store.upsert_edge("A", "B", 1.0, 1.0).unwrap();

    assert!(!store.delete_node("Nope").unwrap());
    assert!(!store.delete_edge("B", "A").unwrap());
    assert!(store.delete_edge("A", "B").unwrap());
    assert!(store.edges().is_empty());
}

#[test]
fn test_edit_node_partial_update() {
    let mut store = OverlayStore::open(MemoryBackend::new());
    store.upsert_node("P", "Plaza", (1.0, 2.0)).unwrap();

    assert!(store.edit_node("P", Some(""), Some((3.0, 4.0))).unwrap());
    assert_eq!(store.nodes()[0].name, "Plaza");
    assert_eq!(store.nodes()[0].coordinates, (3.0, 4.0));

    assert!(store.edit_node("P", Some("Plaza Vieja"), None).unwrap());
    assert_eq!(store.nodes()[0].name, "Plaza Vieja");
    assert_eq!(store.nodes()[0].coordinates, (3.0, 4.0));

    assert!(!store.edit_node("Q", Some("x"), None).unwrap());
}

#[test]
fn test_edit_edge_partial_update() {
    let mut store = OverlayStore::open(MemoryBackend::new());
    store.upsert_edge("A", "B", 100.0, 1.0).unwrap();

    assert!(store.edit_edge("A", "B", None, Some(2.5)).unwrap());
    assert_eq!(store.edges()[0].distance, 100.0);
    assert_eq!(store.edges()[0].time, 2.5);
    assert!(!store.edit_edge("B", "A", Some(1.0), None).unwrap());
}

#[test]
fn test_clear_empties_storage() {
    let backend = MemoryBackend::new();
    let mut store = OverlayStore::open(backend.clone());
    store.upsert_node("A", "A", (0.0, 0.0)).unwrap();
    store.upsert_edge("A", "V1", 1.0, 1.0).unwrap();

    store.clear().unwrap();

    assert_eq!(stored(&backend), OverlayDocument::default());
}

#[test]
fn test_write_failure_keeps_memory_mutated() {
    let mut store = OverlayStore::open(FailingBackend::default());

    let err = store.upsert_node("A", "A", (0.0, 0.0)).unwrap_err();
    assert!(matches!(err, CityNavError::Persist { .. }));
    assert!(store.is_user_defined("A"));

    assert!(store.delete_node("A").is_err());
    assert!(!store.is_user_defined("A"));
    assert_eq!(store.backend().attempts.get(), 2);
}

#[test]
fn test_file_round_trip_preserves_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("datos_personalizados.json");

    let mut store = OverlayStore::open_file(&path);
    store
        .upsert_node("Hospital", "Hospital Uyapar", (-62.725, 8.275))
        .unwrap();
    store.upsert_edge("Hospital", "V2", 350.0, 3.5).unwrap();
    store.upsert_edge("V2", "Hospital", 360.0, 3.6).unwrap();

    let reopened = OverlayStore::open_file(&path);
    assert_eq!(reopened.document(), store.document());

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"conexiones\""));
    assert!(text.contains("Hospital Uyapar"));
}

#[test]
fn test_reload_picks_up_external_changes() {
    let backend = MemoryBackend::new();
    let mut store = OverlayStore::open(backend.clone());

    let mut other = OverlayStore::open(backend.clone());
    other.upsert_node("X", "Externo", (0.0, 0.0)).unwrap();

    assert!(!store.is_user_defined("X"));
    store.reload();
    assert!(store.is_user_defined("X"));
}
