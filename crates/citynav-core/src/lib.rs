//! CityNav Core Library
//!
//! Road graph, path-finding, overlay persistence and topology assembly for
//! the Puerto Ordaz street network.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod overlay;
pub mod topology;
