//! Overlay persistence for user-added vertices and edges
//!
//! The overlay is an independent, durable list of node and edge records that
//! the topology assembler replays on top of the base network. Records are
//! unique by identity (node key, or ordered origin/destination pair), unlike
//! the assembled graph which keeps parallel edges.
//!
//! Every mutation rewrites the whole document through the backend right away.
//! When that write fails the call returns an error but the in-memory records
//! keep the change; callers decide how to reconcile.

pub mod backend;
pub mod records;

pub use backend::{FsBackend, MemoryBackend, OverlayBackend};
pub use records::{EdgeRecord, NodeRecord, OverlayDocument};

use crate::error::Result;
use crate::graph::Coordinates;

/// Durable store of user-defined overlay records
#[derive(Debug)]
pub struct OverlayStore<B> {
    backend: B,
    document: OverlayDocument,
}

impl<B: OverlayBackend> OverlayStore<B> {
    /// Open the store, loading whatever the backend holds.
    ///
    /// A missing, unreadable or malformed document is not fatal: the store
    /// starts empty and a warning is logged.
    #[tracing::instrument(skip(backend), fields(location = %backend.describe()))]
    pub fn open(backend: B) -> Self {
        let document = Self::load_document(&backend);
        tracing::debug!(
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            "overlay loaded"
        );
        Self { backend, document }
    }

    fn load_document(backend: &B) -> OverlayDocument {
        let bytes = match backend.load_raw() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return OverlayDocument::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read overlay, starting empty");
                return OverlayDocument::default();
            }
        };

        OverlayDocument::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to parse overlay, starting empty");
            OverlayDocument::default()
        })
    }

    /// Re-read the document from the backend, discarding in-memory state
    pub fn reload(&mut self) {
        self.document = Self::load_document(&self.backend);
    }

    fn persist(&self) -> Result<()> {
        let data = self.document.to_vec_pretty()?;
        self.backend.save_raw(&data).inspect_err(|e| {
            tracing::error!(error = %e, "overlay write failed, memory and storage diverge");
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.document.nodes
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.document.edges
    }

    pub fn document(&self) -> &OverlayDocument {
        &self.document
    }

    /// Whether `key` names a user-added (editable) vertex
    pub fn is_user_defined(&self, key: &str) -> bool {
        self.document.nodes.iter().any(|n| n.id == key)
    }

    /// Insert a node record, or replace name and coordinates of an existing one
    pub fn upsert_node(&mut self, key: &str, name: &str, coordinates: Coordinates) -> Result<()> {
        match self.document.nodes.iter_mut().find(|n| n.id == key) {
            Some(node) => {
                node.name = name.to_string();
                node.coordinates = coordinates;
            }
            None => self.document.nodes.push(NodeRecord {
                id: key.to_string(),
                name: name.to_string(),
                coordinates,
            }),
        }
        tracing::debug!(key, "node upserted");
        self.persist()
    }

    /// Insert an edge record, or replace distance and time of an existing one
    pub fn upsert_edge(
        &mut self,
        origin: &str,
        destination: &str,
        distance: f64,
        time: f64,
    ) -> Result<()> {
        match self
            .document
            .edges
            .iter_mut()
            .find(|e| e.connects(origin, destination))
        {
            Some(edge) => {
                edge.distance = distance;
                edge.time = time;
            }
            None => self.document.edges.push(EdgeRecord {
                origin: origin.to_string(),
                destination: destination.to_string(),
                distance,
                time,
            }),
        }
        tracing::debug!(origin, destination, "edge upserted");
        self.persist()
    }

    /// Partially update an existing node record.
    ///
    /// Returns `Ok(false)` without writing when no record matches. An empty
    /// name counts as "unchanged".
    pub fn edit_node(
        &mut self,
        key: &str,
        name: Option<&str>,
        coordinates: Option<Coordinates>,
    ) -> Result<bool> {
        let Some(node) = self.document.nodes.iter_mut().find(|n| n.id == key) else {
            return Ok(false);
        };

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            node.name = name.to_string();
        }
        if let Some(coordinates) = coordinates {
            node.coordinates = coordinates;
        }
        self.persist()?;
        Ok(true)
    }

    /// Partially update an existing edge record.
    ///
    /// Returns `Ok(false)` without writing when no record matches.
    pub fn edit_edge(
        &mut self,
        origin: &str,
        destination: &str,
        distance: Option<f64>,
        time: Option<f64>,
    ) -> Result<bool> {
        let Some(edge) = self
            .document
            .edges
            .iter_mut()
            .find(|e| e.connects(origin, destination))
        else {
            return Ok(false);
        };

        if let Some(distance) = distance {
            edge.distance = distance;
        }
        if let Some(time) = time {
            edge.time = time;
        }
        self.persist()?;
        Ok(true)
    }

    /// Remove a node record and every edge record touching it.
    ///
    /// Returns whether a node record existed. The document is rewritten even
    /// when nothing matched.
    pub fn delete_node(&mut self, key: &str) -> Result<bool> {
        let before = self.document.nodes.len();
        self.document.nodes.retain(|n| n.id != key);
        let removed = self.document.nodes.len() != before;

        let edges_before = self.document.edges.len();
        self.document.edges.retain(|e| !e.touches(key));
        tracing::debug!(
            key,
            removed,
            cascaded_edges = edges_before - self.document.edges.len(),
            "node deleted"
        );

        self.persist()?;
        Ok(removed)
    }

    /// Remove the edge record for `(origin, destination)`, if any.
    ///
    /// Returns whether a record existed. The document is rewritten even when
    /// nothing matched.
    pub fn delete_edge(&mut self, origin: &str, destination: &str) -> Result<bool> {
        let before = self.document.edges.len();
        self.document
            .edges
            .retain(|e| !e.connects(origin, destination));
        let removed = self.document.edges.len() != before;

        self.persist()?;
        Ok(removed)
    }

    /// Drop every overlay record
    pub fn clear(&mut self) -> Result<()> {
        self.document = OverlayDocument::default();
        self.persist()
    }
}

impl OverlayStore<FsBackend> {
    /// Open the overlay stored in the JSON file at `path`
    pub fn open_file(path: impl Into<std::path::PathBuf>) -> Self {
        Self::open(FsBackend::new(path))
    }
}

#[cfg(test)]
mod tests;
