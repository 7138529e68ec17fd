use serde::Serialize;

/// A named place pointing at a vertex of the base network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Place {
    pub name: &'static str,
    pub vertex: &'static str,
}

/// A category of places, e.g. "Transporte"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaceCategory {
    pub category: &'static str,
    pub places: &'static [Place],
}

const fn place(name: &'static str, vertex: &'static str) -> Place {
    Place { name, vertex }
}

const POINTS_OF_INTEREST: &[PlaceCategory] = &[
    PlaceCategory {
        category: "Comercial",
        places: &[
            place("Plaza Mayor Alta Vista", "V14"),
            place("Centro Cívico", "V13"),
        ],
    },
    PlaceCategory {
        category: "Transporte",
        places: &[place("Terminal de Autobuses", "V15")],
    },
    PlaceCategory {
        category: "Intersecciones Principales",
        places: &[
            place("Guayana - Bolivia", "V1"),
            place("Guayana - Chile", "V2"),
            place("Guayana - Perú", "V3"),
            place("Guayana - Venezuela", "V4"),
            place("Las Américas - Bolivia", "V5"),
            place("Las Américas - Chile", "V6"),
            place("Las Américas - Perú", "V7"),
            place("Las Américas - Venezuela", "V8"),
            place("Villa Asia - Bolivia", "V9"),
            place("Villa Asia - Chile", "V10"),
            place("Villa Asia - Perú", "V11"),
            place("Villa Asia - Venezuela", "V12"),
        ],
    },
];

/// Categorised points of interest, in declaration order
pub fn points_of_interest() -> &'static [PlaceCategory] {
    POINTS_OF_INTEREST
}

/// Find a place by name, ignoring ASCII case
pub fn find_place(name: &str) -> Option<&'static Place> {
    POINTS_OF_INTEREST
        .iter()
        .flat_map(|c| c.places.iter())
        .find(|p| p.name.eq_ignore_ascii_case(name))
}
