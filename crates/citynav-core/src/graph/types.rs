use crate::error::CityNavError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Planar coordinate pair `(x, y)`, longitude/latitude for the base data.
pub type Coordinates = (f64, f64);

/// Coordinates reported for a vertex that was never given any.
pub const DEFAULT_COORDINATES: Coordinates = (0.0, 0.0);

/// Outgoing directed edge as stored in an origin's adjacency list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub destination: String,
    /// Length in metres
    pub distance: f64,
    /// Average travel time in minutes
    pub time: f64,
}

impl Edge {
    /// Weight of this edge under the given metric
    pub fn cost(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Distance => self.distance,
            Metric::Time => self.time,
        }
    }
}

/// Accept an edge weight only if it is finite and non-negative
pub fn check_weight(context: &str, value: f64) -> crate::error::Result<f64> {
    if !value.is_finite() || value < 0.0 {
        crate::bail_invalid!(context, value);
    }
    Ok(value)
}

/// Cost dimension minimised by the shortest-path search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Distance,
    Time,
}

impl Metric {
    /// Unit suffix for human output
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Distance => "m",
            Metric::Time => "min",
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = CityNavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distance" | "distancia" => Ok(Metric::Distance),
            "time" | "tiempo" => Ok(Metric::Time),
            other => Err(CityNavError::UnknownMetric(other.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Distance => write!(f, "distance"),
            Metric::Time => write!(f, "time"),
        }
    }
}

/// Descriptive view of a single vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexInfo {
    pub key: String,
    /// Display name, the key itself when none was set
    pub name: String,
    pub coordinates: Coordinates,
    pub out_degree: usize,
}

/// Size and density summary of a graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// `edges / (v * (v - 1))`, 0 for graphs with fewer than two vertices
    pub density: f64,
}

/// Result of a cost-optimal search.
///
/// An empty path with infinite cost means no route exists (or an endpoint is
/// unknown). `cost` serializes as `null` in JSON when infinite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    pub path: Vec<String>,
    pub cost: f64,
}

impl ShortestPath {
    pub fn not_found() -> Self {
        ShortestPath {
            path: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges along the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of a reachability search (BFS or DFS)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reachability {
    pub found: bool,
    pub path: Vec<String>,
}

impl Reachability {
    pub fn not_found() -> Self {
        Reachability {
            found: false,
            path: Vec::new(),
        }
    }

    pub fn found(path: Vec<String>) -> Self {
        Reachability { found: true, path }
    }

    /// Number of edges along the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Reachability algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
}

impl std::str::FromStr for Algorithm {
    type Err = CityNavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            other => Err(CityNavError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_weight_rejects_negative_and_non_finite() {
        assert_eq!(check_weight("distance", 0.0).unwrap(), 0.0);
        assert_eq!(check_weight("time", 2.5).unwrap(), 2.5);
        for bad in [-1.0, f64::INFINITY, f64::NAN] {
            assert!(matches!(
                check_weight("distance", bad),
                Err(CityNavError::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn test_metric_parse_accepts_both_spellings() {
        assert_eq!("distance".parse::<Metric>().unwrap(), Metric::Distance);
        assert_eq!("Tiempo".parse::<Metric>().unwrap(), Metric::Time);
        assert!(matches!(
            "fuel".parse::<Metric>(),
            Err(CityNavError::UnknownMetric(_))
        ));
    }

    #[test]
    fn test_edge_cost_by_metric() {
        let edge = Edge {
            destination: "B".to_string(),
            distance: 300.0,
            time: 2.5,
        };
        assert_eq!(edge.cost(Metric::Distance), 300.0);
        assert_eq!(edge.cost(Metric::Time), 2.5);
    }

    #[test]
    fn test_shortest_path_sentinel() {
        let result = ShortestPath::not_found();
        assert!(!result.is_found());
        assert!(result.cost.is_infinite());
        assert_eq!(result.hops(), 0);
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!("DFS".parse::<Algorithm>().unwrap(), Algorithm::Dfs);
        assert!("astar".parse::<Algorithm>().is_err());
    }
}
