//! Built-in road network of Puerto Ordaz
//!
//! Three avenues (Guayana, Las Américas, Villa Asia) crossed by four streets
//! (Bolivia, Chile, Perú, Venezuela), plus three landmarks.
//! Coordinates are `(longitude, latitude)`.

use crate::graph::Coordinates;

/// A vertex of the base network
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseVertex {
    pub key: &'static str,
    pub name: &'static str,
    pub coordinates: Coordinates,
}

/// A directed street segment: distance in metres, time in minutes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseEdge {
    pub origin: &'static str,
    pub destination: &'static str,
    pub distance: f64,
    pub time: f64,
}

const fn vertex(key: &'static str, name: &'static str, lon: f64, lat: f64) -> BaseVertex {
    BaseVertex {
        key,
        name,
        coordinates: (lon, lat),
    }
}

const fn edge(origin: &'static str, destination: &'static str, distance: f64, time: f64) -> BaseEdge {
    BaseEdge {
        origin,
        destination,
        distance,
        time,
    }
}

pub const BASE_VERTICES: &[BaseVertex] = &[
    vertex("V1", "Av. Guayana con Calle Bolivia", -62.745, 8.285),
    vertex("V2", "Av. Guayana con Calle Chile", -62.730, 8.285),
    vertex("V3", "Av. Guayana con Calle Perú", -62.715, 8.285),
    vertex("V4", "Av. Guayana con Calle Venezuela", -62.700, 8.285),
    vertex("V5", "Av. Las Américas con Calle Bolivia", -62.745, 8.270),
    vertex("V6", "Av. Las Américas con Calle Chile", -62.730, 8.270),
    vertex("V7", "Av. Las Américas con Calle Perú", -62.715, 8.270),
    vertex("V8", "Av. Las Américas con Calle Venezuela", -62.700, 8.270),
    vertex("V9", "Av. Villa Asia con Calle Bolivia", -62.745, 8.255),
    vertex("V10", "Av. Villa Asia con Calle Chile", -62.730, 8.255),
    vertex("V11", "Av. Villa Asia con Calle Perú", -62.715, 8.255),
    vertex("V12", "Av. Villa Asia con Calle Venezuela", -62.700, 8.255),
    vertex("V13", "Centro Cívico", -62.720, 8.240),
    vertex("V14", "Plaza Mayor Alta Vista", -62.720, 8.300),
    vertex("V15", "Terminal de Autobuses", -62.755, 8.265),
];

pub const BASE_EDGES: &[BaseEdge] = &[
    // Av. Guayana
    edge("V1", "V2", 300.0, 2.5),
    edge("V2", "V3", 350.0, 3.0),
    edge("V3", "V4", 300.0, 2.5),
    edge("V4", "V3", 320.0, 3.0),
    edge("V3", "V2", 360.0, 3.2),
    edge("V2", "V1", 310.0, 2.8),
    // Av. Las Américas
    edge("V5", "V6", 280.0, 2.2),
    edge("V6", "V7", 320.0, 2.8),
    edge("V7", "V8", 280.0, 2.3),
    edge("V8", "V7", 290.0, 2.5),
    edge("V7", "V6", 330.0, 2.9),
    edge("V6", "V5", 290.0, 2.4),
    // Av. Villa Asia
    edge("V9", "V10", 300.0, 2.6),
    edge("V10", "V11", 340.0, 3.1),
    edge("V11", "V12", 300.0, 2.7),
    edge("V12", "V11", 310.0, 2.8),
    edge("V11", "V10", 350.0, 3.2),
    edge("V10", "V9", 310.0, 2.7),
    // Calle Bolivia
    edge("V1", "V5", 400.0, 4.0),
    edge("V5", "V9", 380.0, 3.8),
    edge("V9", "V5", 390.0, 4.2),
    edge("V5", "V1", 410.0, 4.3),
    // Calle Chile
    edge("V2", "V6", 420.0, 4.5),
    edge("V6", "V10", 400.0, 4.2),
    edge("V10", "V6", 410.0, 4.3),
    edge("V6", "V2", 430.0, 4.6),
    // Calle Perú
    edge("V3", "V7", 390.0, 4.0),
    edge("V7", "V11", 410.0, 4.3),
    edge("V11", "V7", 400.0, 4.1),
    edge("V7", "V3", 400.0, 4.2),
    // Calle Venezuela
    edge("V4", "V8", 380.0, 3.9),
    edge("V8", "V12", 390.0, 4.0),
    edge("V12", "V8", 390.0, 4.1),
    edge("V8", "V4", 390.0, 4.0),
    // Plaza Mayor Alta Vista
    edge("V14", "V1", 450.0, 5.0),
    edge("V14", "V2", 400.0, 4.5),
    edge("V14", "V3", 400.0, 4.5),
    edge("V2", "V14", 410.0, 4.6),
    // Centro Cívico
    edge("V10", "V13", 600.0, 6.5),
    edge("V11", "V13", 550.0, 6.0),
    edge("V13", "V10", 610.0, 6.8),
    edge("V13", "V11", 560.0, 6.2),
    // Terminal de Autobuses
    edge("V15", "V5", 250.0, 2.0),
    edge("V15", "V9", 350.0, 3.0),
    edge("V5", "V15", 260.0, 2.2),
    edge("V9", "V15", 360.0, 3.2),
    // Diagonals
    edge("V1", "V6", 500.0, 5.5),
    edge("V7", "V12", 520.0, 5.8),
    edge("V6", "V11", 480.0, 5.2),
    edge("V3", "V6", 450.0, 5.0),
];
