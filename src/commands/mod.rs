//! CLI commands for citynav

pub mod compare;
pub mod dispatch;
pub mod edge;
pub mod info;
pub mod node;
pub mod overlay;
pub mod places;
pub mod reach;
pub mod route;
pub mod stats;
pub mod vertices;
