//! On-disk shape of the overlay document
//!
//! Field names are part of the file format and must not change:
//! `nodos`/`conexiones` at the top level, `id`/`nombre`/`coordenadas` for
//! nodes and `origen`/`destino`/`distancia`/`tiempo` for edges.

use crate::graph::Coordinates;
use serde::{Deserialize, Serialize};

/// User-added vertex, identified by `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "coordenadas")]
    pub coordinates: Coordinates,
}

/// User-added directed edge, identified by `(origin, destination)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(rename = "origen")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "distancia")]
    pub distance: f64,
    #[serde(rename = "tiempo")]
    pub time: f64,
}

impl EdgeRecord {
    pub fn connects(&self, origin: &str, destination: &str) -> bool {
        self.origin == origin && self.destination == destination
    }

    pub fn touches(&self, key: &str) -> bool {
        self.origin == key || self.destination == key
    }
}

/// Whole overlay document, read and written in one piece
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayDocument {
    #[serde(rename = "nodos", default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(rename = "conexiones", default)]
    pub edges: Vec<EdgeRecord>,
}

impl OverlayDocument {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Pretty JSON with 4-space indentation; non-ASCII text is kept as-is
    pub fn to_vec_pretty(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spanish_field_names() {
        let raw = r#"{
            "nodos": [
                {"id": "Hospital_Uyapar", "nombre": "Hospital Uyapar", "coordenadas": [-62.725, 8.275]}
            ],
            "conexiones": [
                {"origen": "Hospital_Uyapar", "destino": "V2", "distancia": 350.0, "tiempo": 3.5}
            ]
        }"#;

        let doc = OverlayDocument::from_slice(raw.as_bytes()).unwrap();
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.nodes[0].name, "Hospital Uyapar");
        assert_eq!(doc.nodes[0].coordinates, (-62.725, 8.275));
        assert_eq!(doc.edges[0].destination, "V2");
        assert_eq!(doc.edges[0].time, 3.5);
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let doc = OverlayDocument::from_slice(br#"{"nodos": []}"#).unwrap();
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn test_serialized_field_names_and_indent() {
        let doc = OverlayDocument {
            nodes: vec![NodeRecord {
                id: "Plaza".to_string(),
                name: "Plaza Bolívar".to_string(),
                coordinates: (1.0, 2.0),
            }],
            edges: vec![],
        };

        let text = String::from_utf8(doc.to_vec_pretty().unwrap()).unwrap();
        assert!(text.contains("\n    \"nodos\""));
        assert!(text.contains("\"nombre\": \"Plaza Bolívar\""));
        assert!(text.contains("\"coordenadas\""));
        assert!(text.contains("\"conexiones\": []"));
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        assert!(OverlayDocument::from_slice(br#"{"nodos": "nope"}"#).is_err());
        assert!(OverlayDocument::from_slice(b"not json").is_err());
    }
}
