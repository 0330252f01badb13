use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Closed enumerations – one per filterable dimension
// ---------------------------------------------------------------------------

/// How the exploration rights to an area were granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Assignment,
    Tender,
}

impl ContractType {
    pub const ALL: [ContractType; 2] = [ContractType::Assignment, ContractType::Tender];

    /// Stable machine-readable code (matches the serde representation).
    pub fn code(self) -> &'static str {
        match self {
            ContractType::Assignment => "assignment",
            ContractType::Tender => "tender",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractType::Assignment => write!(f, "Assignment"),
            ContractType::Tender => write!(f, "Tender"),
        }
    }
}

/// Operational status of an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaStatus {
    Active,
    Suspended,
    UnderReview,
    Terminated,
}

impl AreaStatus {
    pub const ALL: [AreaStatus; 4] = [
        AreaStatus::Active,
        AreaStatus::Suspended,
        AreaStatus::UnderReview,
        AreaStatus::Terminated,
    ];

    pub fn code(self) -> &'static str {
        match self {
            AreaStatus::Active => "active",
            AreaStatus::Suspended => "suspended",
            AreaStatus::UnderReview => "under_review",
            AreaStatus::Terminated => "terminated",
        }
    }
}

impl fmt::Display for AreaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaStatus::Active => write!(f, "Active"),
            AreaStatus::Suspended => write!(f, "Suspended"),
            AreaStatus::UnderReview => write!(f, "Under Review"),
            AreaStatus::Terminated => write!(f, "Terminated"),
        }
    }
}

/// Geological classification of the resource being explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Conventional,
    Unconventional,
    DeepWater,
    Shale,
}

impl ResourceType {
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Conventional,
        ResourceType::Unconventional,
        ResourceType::DeepWater,
        ResourceType::Shale,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ResourceType::Conventional => "conventional",
            ResourceType::Unconventional => "unconventional",
            ResourceType::DeepWater => "deep_water",
            ResourceType::Shale => "shale",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::Conventional => write!(f, "Conventional"),
            ResourceType::Unconventional => write!(f, "Unconventional"),
            ResourceType::DeepWater => write!(f, "Deep Water"),
            ResourceType::Shale => write!(f, "Shale"),
        }
    }
}

// ---------------------------------------------------------------------------
// Geometry – WGS84 polygons
// ---------------------------------------------------------------------------

/// A longitude/latitude pair in degrees (EPSG:4326).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Axis-aligned bounding box of a polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min: GeoPoint,
    pub max: GeoPoint,
}

/// A simple (non-self-intersecting) polygon, implicitly closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GeoPolygon {
    vertices: Vec<GeoPoint>,
}

impl GeoPolygon {
    pub fn new(vertices: Vec<GeoPoint>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Even-odd ray casting. Points exactly on an edge may land on either side.
    pub fn contains(&self, p: GeoPoint) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.lat > p.lat) != (b.lat > p.lat) {
                let x_cross = (b.lon - a.lon) * (p.lat - a.lat) / (b.lat - a.lat) + a.lon;
                if p.lon < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Mean of the vertices; good enough for label placement on convex blocks.
    pub fn centroid(&self) -> Option<GeoPoint> {
        if self.vertices.is_empty() {
            return None;
        }
        let n = self.vertices.len() as f64;
        let (lon, lat) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(lon, lat), v| (lon + v.lon, lat + v.lat));
        Some(GeoPoint::new(lon / n, lat / n))
    }

    pub fn bounds(&self) -> Option<GeoBounds> {
        let first = *self.vertices.first()?;
        let init = GeoBounds {
            min: first,
            max: first,
        };
        let bounds = self.vertices.iter().fold(init, |acc, v| GeoBounds {
            min: GeoPoint::new(acc.min.lon.min(v.lon), acc.min.lat.min(v.lat)),
            max: GeoPoint::new(acc.max.lon.max(v.lon), acc.max.lat.max(v.lat)),
        });
        Some(bounds)
    }
}

// ---------------------------------------------------------------------------
// AreaRecord – one exploration / contract area
// ---------------------------------------------------------------------------

/// A geographically bounded exploration area and its classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaRecord {
    pub name: String,
    pub contract_type: ContractType,
    pub status: AreaStatus,
    pub resource_type: ResourceType,
    /// Committed investment, millions of USD.
    pub investment_musd: f64,
    /// Reserves, millions of barrels of oil equivalent.
    pub reserves_mmboe: f64,
    pub boundary: GeoPolygon,
}

fn square_block(lon: f64, lat: f64) -> GeoPolygon {
    GeoPolygon::new(vec![
        GeoPoint::new(lon, lat),
        GeoPoint::new(lon + 1.0, lat),
        GeoPoint::new(lon + 1.0, lat + 1.0),
        GeoPoint::new(lon, lat + 1.0),
    ])
}

static REFERENCE_AREAS: Lazy<Vec<AreaRecord>> = Lazy::new(|| {
    vec![
        AreaRecord {
            name: "Bloque Norte".to_string(),
            contract_type: ContractType::Assignment,
            status: AreaStatus::Active,
            resource_type: ResourceType::Conventional,
            investment_musd: 450.0,
            reserves_mmboe: 1250.0,
            boundary: square_block(-101.0, 24.0),
        },
        AreaRecord {
            name: "Bloque Este".to_string(),
            contract_type: ContractType::Tender,
            status: AreaStatus::Active,
            resource_type: ResourceType::Unconventional,
            investment_musd: 320.0,
            reserves_mmboe: 850.0,
            boundary: square_block(-98.0, 21.0),
        },
        AreaRecord {
            name: "Bloque Pacífico".to_string(),
            contract_type: ContractType::Assignment,
            status: AreaStatus::Suspended,
            resource_type: ResourceType::Conventional,
            investment_musd: 280.0,
            reserves_mmboe: 620.0,
            boundary: square_block(-104.0, 20.0),
        },
    ]
});

/// The process-wide, read-only set of simulated contract areas.
pub fn reference_areas() -> &'static [AreaRecord] {
    REFERENCE_AREAS.as_slice()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn reference_set_has_three_uniquely_named_areas() {
        let areas = reference_areas();
        assert_eq!(areas.len(), 3);
        let names: BTreeSet<&str> = areas.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names.len(), 3);
        assert!(areas.iter().all(|a| a.investment_musd >= 0.0 && a.reserves_mmboe >= 0.0));
    }

    #[test]
    fn polygon_contains_interior_but_not_exterior() {
        let block = square_block(-101.0, 24.0);
        assert!(block.contains(GeoPoint::new(-100.5, 24.5)));
        assert!(!block.contains(GeoPoint::new(-99.5, 24.5)));
        assert!(!block.contains(GeoPoint::new(-100.5, 25.5)));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        let line = GeoPolygon::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]);
        assert!(!line.contains(GeoPoint::new(0.5, 0.5)));
        assert!(GeoPolygon::new(Vec::new()).centroid().is_none());
        assert!(GeoPolygon::new(Vec::new()).bounds().is_none());
    }

    #[test]
    fn centroid_and_bounds_of_block() {
        let block = square_block(-98.0, 21.0);
        assert_eq!(block.centroid(), Some(GeoPoint::new(-97.5, 21.5)));
        let b = block.bounds().unwrap();
        assert_eq!(b.min, GeoPoint::new(-98.0, 21.0));
        assert_eq!(b.max, GeoPoint::new(-97.0, 22.0));
    }

    #[test]
    fn labels_and_codes() {
        assert_eq!(AreaStatus::UnderReview.to_string(), "Under Review");
        assert_eq!(ResourceType::DeepWater.code(), "deep_water");
        let json = serde_json::to_string(&ResourceType::DeepWater).unwrap();
        assert_eq!(json, "\"deep_water\"");
    }
}
