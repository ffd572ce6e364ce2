//! Reference centers used to pick one region when several contain a point.

use geo::Coord;
use hashbrown::HashMap;

/// Province centers as `(name, lat, lon)`.
const IRAN_PROVINCE_CENTERS: &[(&str, f64, f64)] = &[
    ("Tehran", 35.6892, 51.3890),
    ("Qom", 34.6416, 50.8746),
    ("Alborz", 35.8400, 50.9391),
    ("Isfahan", 32.6546, 51.6680),
    ("Fars", 29.5918, 52.5836),
    ("Khorasan Razavi", 36.2605, 59.6168),
    ("East Azerbaijan", 38.0800, 46.2919),
    ("West Azerbaijan", 37.5527, 45.0760),
    ("Ardabil", 38.2498, 48.2933),
    ("Gilan", 37.2808, 49.5832),
    ("Mazandaran", 36.5651, 53.0586),
    ("Golestan", 36.8456, 54.4398),
    ("Zanjan", 36.6769, 48.4963),
    ("Qazvin", 36.2688, 50.0041),
    ("Markazi", 34.0917, 49.6892),
    ("Hamedan", 34.7981, 48.5146),
    ("Kermanshah", 34.3142, 47.0650),
    ("Kurdistan", 35.3219, 46.9862),
    ("Ilam", 33.6374, 46.4227),
    ("Lorestan", 33.4878, 48.3558),
    ("Khuzestan", 31.3183, 48.6706),
    ("Chaharmahal and Bakhtiari", 32.3256, 50.8644),
    ("Kohgiluyeh and Boyer-Ahmad", 30.6682, 51.5873),
    ("Bushehr", 28.9234, 50.8203),
    ("Hormozgan", 27.1832, 56.2666),
    ("Sistan and Baluchestan", 29.4963, 60.8629),
    ("Kerman", 30.2839, 57.0834),
    ("Yazd", 31.8974, 54.3569),
    ("Semnan", 35.5770, 53.3886),
    ("North Khorasan", 37.4692, 57.3333),
    ("South Khorasan", 32.8650, 59.2211),
];

/// Region name to reference point (`x` = longitude, `y` = latitude).
///
/// Only used to rank overlapping candidates, never for containment.
#[derive(Debug, Clone, Default)]
pub struct CentroidTable {
    centers: HashMap<String, Coord<f64>>,
}

impl CentroidTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in centers for the 31 provinces of Iran.
    pub fn iran_provinces() -> Self {
        let mut table = Self::new();
        for (name, lat, lon) in IRAN_PROVINCE_CENTERS {
            table.insert(*name, *lat, *lon);
        }
        table
    }

    /// Register a center given in `(lat, lon)` order, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, lat: f64, lon: f64) {
        self.centers.insert(name.into(), Coord { x: lon, y: lat });
    }

    pub fn get(&self, name: &str) -> Option<Coord<f64>> {
        self.centers.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}
