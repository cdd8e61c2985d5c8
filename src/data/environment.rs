//! Environment data feeds and impact models
//!
//! Wraps the NASA NEO and USGS public APIs behind a feed trait. Every fetch
//! degrades once, synchronously, to a fixed fallback record when the feed is
//! unavailable, so the game stays fully playable offline. No fetch is
//! retried and no fetch error ever reaches the story engine or the UI.

use crate::Result;
use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration as StdDuration;

/// Assumed asteroid density, kg/m³
const ASTEROID_DENSITY: f64 = 2500.0;

/// Physical parameters of the closest approaching near-Earth object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidData {
    pub name: String,
    pub diameter_m: f64,
    pub velocity_kms: f64,
    pub miss_distance_km: f64,
    pub impact_probability: f64,
    pub eta_days: i64,
    pub close_approach_date: NaiveDate,
}

/// Historical earthquake equivalent to a given impact energy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeData {
    pub magnitude: f64,
    pub location: String,
    pub depth_km: f64,
    pub energy_joules: f64,
}

/// Terrain classification derived from elevation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    OceanFloor,
    Land,
    Mountain,
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Terrain::OceanFloor => write!(f, "Ocean Floor"),
            Terrain::Land => write!(f, "Land"),
            Terrain::Mountain => write!(f, "Mountain"),
        }
    }
}

impl Terrain {
    pub fn classify(elevation_m: f64) -> Self {
        if elevation_m < 0.0 {
            Terrain::OceanFloor
        } else if elevation_m > 1000.0 {
            Terrain::Mountain
        } else {
            Terrain::Land
        }
    }
}

/// Elevation and terrain at a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationData {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_m: f64,
    pub terrain: Terrain,
}

/// Tsunami projection for an ocean impact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsunamiData {
    pub wave_height_m: f64,
    pub affected_range_km: f64,
    pub arrival_minutes: u32,
    pub casualties: String,
}

/// Crater projection for a land impact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraterData {
    pub diameter_km: f64,
    pub depth_m: f64,
    pub ejecta_range_km: f64,
    pub seismic_magnitude: f64,
}

/// Kinetic energy of an impactor in joules
///
/// Spherical body at the assumed density; velocity in km/s.
pub fn impact_energy(diameter_m: f64, velocity_kms: f64) -> f64 {
    let radius = diameter_m / 2.0;
    let volume = (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3);
    let mass = volume * ASTEROID_DENSITY;
    let velocity_ms = velocity_kms * 1000.0;
    0.5 * mass * velocity_ms * velocity_ms
}

/// Seismic magnitude equivalent to an energy release: M = (log10 E - 4.8) / 1.5
pub fn equivalent_magnitude(energy_joules: f64) -> f64 {
    (energy_joules.log10() - 4.8) / 1.5
}

/// Project the tsunami raised by an ocean impact. A land impact raises none.
pub fn simulate_tsunami(elevation: &ElevationData, asteroid_diameter_m: f64) -> TsunamiData {
    if elevation.elevation_m >= 0.0 {
        return TsunamiData {
            wave_height_m: 0.0,
            affected_range_km: 0.0,
            arrival_minutes: 0,
            casualties: "N/A (Land Impact)".to_string(),
        };
    }

    TsunamiData {
        wave_height_m: (asteroid_diameter_m.sqrt() * 2.0).round(),
        affected_range_km: (asteroid_diameter_m * 6.0).round(),
        arrival_minutes: 120,
        casualties: "50-100 MILLION".to_string(),
    }
}

/// Project the crater left by a land impact at the given angle-agnostic scaling
pub fn simulate_crater(asteroid_diameter_m: f64, velocity_kms: f64) -> CraterData {
    let diameter_km = 1.8 * asteroid_diameter_m * (velocity_kms / 12.0).powf(0.44) / 1000.0;
    CraterData {
        diameter_km: (diameter_km * 10.0).round() / 10.0,
        depth_m: (diameter_km * 0.067 * 1000.0).round(),
        ejecta_range_km: (diameter_km * 40.0).round(),
        seismic_magnitude: (equivalent_magnitude(impact_energy(asteroid_diameter_m, velocity_kms))
            * 10.0)
            .round()
            / 10.0,
    }
}

/// A source of live environment data. Implementations may fail; the
/// [`Environment`] wrapper recovers every failure with a fixed fallback.
pub trait EnvironmentFeed {
    /// The closest approaching NEO over the next week
    fn asteroid(&self) -> Result<AsteroidData>;

    /// A historical earthquake near the given magnitude
    fn earthquake(&self, magnitude: f64) -> Result<(f64, String, f64)>;

    /// Ground elevation in meters at a coordinate
    fn elevation(&self, lat: f64, lon: f64) -> Result<f64>;
}

/// Live NASA NEO + USGS feed over HTTP
pub struct NasaUsgsFeed {
    client: reqwest::blocking::Client,
    api_key: String,
}

impl NasaUsgsFeed {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(StdDuration::from_secs(5))
            .build()?;
        let api_key = std::env::var("NASA_API_KEY").unwrap_or_else(|_| "DEMO_KEY".to_string());
        Ok(Self { client, api_key })
    }
}

impl EnvironmentFeed for NasaUsgsFeed {
    fn asteroid(&self) -> Result<AsteroidData> {
        let today = Utc::now().date_naive();
        let url = format!(
            "https://api.nasa.gov/neo/rest/v1/feed?start_date={}&end_date={}&api_key={}",
            today,
            today + Duration::days(7),
            self.api_key
        );
        let body: serde_json::Value = self.client.get(&url).send()?.error_for_status()?.json()?;

        let objects = body["near_earth_objects"]
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("malformed NEO feed"))?;

        // Closest approach across all dates in the window
        let mut closest: Option<(f64, &serde_json::Value, &serde_json::Value)> = None;
        for asteroids in objects.values().filter_map(|v| v.as_array()) {
            for asteroid in asteroids {
                let Some(approach) = asteroid["close_approach_data"].get(0) else {
                    continue;
                };
                let Some(distance) = approach["miss_distance"]["kilometers"]
                    .as_str()
                    .and_then(|s| s.parse::<f64>().ok())
                else {
                    continue;
                };
                if closest.as_ref().map_or(true, |(d, _, _)| distance < *d) {
                    closest = Some((distance, asteroid, approach));
                }
            }
        }

        let (miss_distance_km, asteroid, approach) =
            closest.ok_or_else(|| anyhow::anyhow!("no asteroid data in feed window"))?;

        let diameter_m = asteroid["estimated_diameter"]["meters"]["estimated_diameter_max"]
            .as_f64()
            .ok_or_else(|| anyhow::anyhow!("missing diameter"))?;
        let velocity_kms = approach["relative_velocity"]["kilometers_per_second"]
            .as_str()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(|| anyhow::anyhow!("missing velocity"))?;
        let close_approach_date: NaiveDate = approach["close_approach_date"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| anyhow::anyhow!("missing approach date"))?;
        let name = asteroid["name"]
            .as_str()
            .unwrap_or("UNNAMED OBJECT")
            .replace(['(', ')'], "");

        // NASA does not publish an impact probability; estimate one from
        // the miss distance for gameplay purposes.
        let earth_radius_km = 6371.0;
        let impact_probability = if miss_distance_km < earth_radius_km * 100.0 {
            (100.0 - (miss_distance_km / (earth_radius_km * 100.0)) * 100.0).max(0.0)
        } else {
            0.0
        };

        Ok(AsteroidData {
            name,
            diameter_m: diameter_m.round(),
            velocity_kms: (velocity_kms * 10.0).round() / 10.0,
            miss_distance_km: miss_distance_km.round(),
            impact_probability: impact_probability.round(),
            eta_days: (close_approach_date - today).num_days(),
            close_approach_date,
        })
    }

    fn earthquake(&self, magnitude: f64) -> Result<(f64, String, f64)> {
        let url = format!(
            "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&minmagnitude={}&maxmagnitude={}&limit=1",
            magnitude - 0.5,
            magnitude + 0.5
        );
        let body: serde_json::Value = self.client.get(&url).send()?.error_for_status()?.json()?;
        let quake = body["features"]
            .get(0)
            .ok_or_else(|| anyhow::anyhow!("no matching earthquake"))?;

        let mag = quake["properties"]["mag"]
            .as_f64()
            .ok_or_else(|| anyhow::anyhow!("missing magnitude"))?;
        let place = quake["properties"]["place"]
            .as_str()
            .unwrap_or("Unknown")
            .to_string();
        let depth = quake["geometry"]["coordinates"]
            .get(2)
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Ok((mag, place, depth))
    }

    fn elevation(&self, lat: f64, lon: f64) -> Result<f64> {
        let url = format!(
            "https://epqs.nationalmap.gov/v1/json?x={}&y={}&units=Meters",
            lon, lat
        );
        let body: serde_json::Value = self.client.get(&url).send()?.error_for_status()?.json()?;
        body["value"]
            .as_f64()
            .ok_or_else(|| anyhow::anyhow!("no elevation value"))
    }
}

/// A feed that never reaches the network; every call reports unavailable,
/// which routes the [`Environment`] wrapper to its fallbacks.
pub struct OfflineFeed;

impl EnvironmentFeed for OfflineFeed {
    fn asteroid(&self) -> Result<AsteroidData> {
        Err(anyhow::anyhow!("offline feed"))
    }

    fn earthquake(&self, _magnitude: f64) -> Result<(f64, String, f64)> {
        Err(anyhow::anyhow!("offline feed"))
    }

    fn elevation(&self, _lat: f64, _lon: f64) -> Result<f64> {
        Err(anyhow::anyhow!("offline feed"))
    }
}

/// The environment collaborator handed to the UI. Infallible from the
/// caller's perspective: fetch failures fall back to fixed records.
pub struct Environment {
    feed: Box<dyn EnvironmentFeed>,
}

impl Environment {
    pub fn new(feed: Box<dyn EnvironmentFeed>) -> Self {
        Self { feed }
    }

    pub fn offline() -> Self {
        Self::new(Box::new(OfflineFeed))
    }

    /// The dramatic fallback asteroid used when the live feed is unavailable
    pub fn fallback_asteroid() -> AsteroidData {
        let eta_days = 183;
        AsteroidData {
            name: "IMPACTOR-2025".to_string(),
            diameter_m: 780.0,
            velocity_kms: 25.3,
            miss_distance_km: 0.0,
            impact_probability: 87.0,
            eta_days,
            close_approach_date: Utc::now().date_naive() + Duration::days(eta_days),
        }
    }

    pub fn asteroid(&self) -> AsteroidData {
        self.feed
            .asteroid()
            .unwrap_or_else(|_| Self::fallback_asteroid())
    }

    /// Earthquake equivalent of an impact energy, from the catalog when
    /// live, otherwise a synthetic record at the computed magnitude.
    pub fn equivalent_earthquake(&self, impact_energy_joules: f64) -> EarthquakeData {
        let target = (equivalent_magnitude(impact_energy_joules) * 10.0).round() / 10.0;
        match self.feed.earthquake(target) {
            Ok((magnitude, location, depth_km)) => EarthquakeData {
                magnitude,
                location,
                depth_km,
                energy_joules: impact_energy_joules,
            },
            Err(_) => EarthquakeData {
                magnitude: target,
                location: "Impact Site".to_string(),
                depth_km: 0.0,
                energy_joules: impact_energy_joules,
            },
        }
    }

    pub fn elevation(&self, lat: f64, lon: f64) -> ElevationData {
        let elevation_m = self.feed.elevation(lat, lon).unwrap_or_else(|_| {
            // Northern-western quadrant reads as open ocean in the fallback
            if lat > 0.0 && lon < 0.0 {
                -150.0
            } else {
                200.0
            }
        });
        ElevationData {
            latitude: lat,
            longitude: lon,
            elevation_m,
            terrain: Terrain::classify(elevation_m),
        }
    }

    pub fn tsunami(&self, lat: f64, lon: f64, asteroid_diameter_m: f64) -> TsunamiData {
        simulate_tsunami(&self.elevation(lat, lon), asteroid_diameter_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_asteroid_is_the_fixed_record() {
        let env = Environment::offline();
        let a = env.asteroid();
        assert_eq!(a.name, "IMPACTOR-2025");
        assert_eq!(a.diameter_m, 780.0);
        assert_eq!(a.velocity_kms, 25.3);
        assert_eq!(a.impact_probability, 87.0);
        assert_eq!(a.eta_days, 183);
    }

    #[test]
    fn impact_energy_of_the_fallback_is_about_2e20_joules() {
        let energy = impact_energy(780.0, 25.3);
        assert!(energy > 1.5e20 && energy < 2.5e20, "got {energy:e}");
    }

    #[test]
    fn magnitude_follows_the_energy_formula() {
        // M = (log10 E - 4.8) / 1.5
        let m = equivalent_magnitude(10f64.powf(4.8 + 1.5 * 8.5));
        assert!((m - 8.5).abs() < 1e-9);
    }

    #[test]
    fn offline_earthquake_uses_the_computed_magnitude() {
        let env = Environment::offline();
        let energy = impact_energy(780.0, 25.3);
        let quake = env.equivalent_earthquake(energy);
        assert_eq!(quake.location, "Impact Site");
        assert_eq!(quake.depth_km, 0.0);
        let expected = (equivalent_magnitude(energy) * 10.0).round() / 10.0;
        assert!((quake.magnitude - expected).abs() < 1e-9);
    }

    #[test]
    fn offline_elevation_splits_ocean_and_land_by_quadrant() {
        let env = Environment::offline();
        assert_eq!(env.elevation(29.78, -95.33).terrain, Terrain::OceanFloor);
        assert_eq!(env.elevation(-12.0, 130.0).terrain, Terrain::Land);
    }

    #[test]
    fn land_impact_raises_no_tsunami() {
        let land = ElevationData {
            latitude: 0.0,
            longitude: 10.0,
            elevation_m: 200.0,
            terrain: Terrain::Land,
        };
        let t = simulate_tsunami(&land, 780.0);
        assert_eq!(t.wave_height_m, 0.0);
        assert_eq!(t.casualties, "N/A (Land Impact)");
    }

    #[test]
    fn ocean_impact_scales_with_diameter() {
        let ocean = ElevationData {
            latitude: 10.0,
            longitude: -140.0,
            elevation_m: -150.0,
            terrain: Terrain::OceanFloor,
        };
        let t = simulate_tsunami(&ocean, 780.0);
        assert_eq!(t.wave_height_m, (780.0f64.sqrt() * 2.0).round());
        assert_eq!(t.affected_range_km, 4680.0);
        assert_eq!(t.arrival_minutes, 120);
    }

    #[test]
    fn crater_projection_follows_the_scaling_law() {
        let c = simulate_crater(780.0, 25.3);
        let expected = 1.8 * 780.0 * (25.3f64 / 12.0).powf(0.44) / 1000.0;
        assert!((c.diameter_km - (expected * 10.0).round() / 10.0).abs() < 1e-9);
        assert_eq!(c.depth_m, (expected * 67.0).round());
        assert_eq!(c.ejecta_range_km, (expected * 40.0).round());
        assert!(c.seismic_magnitude > 10.0);
    }

    #[test]
    fn terrain_classification_boundaries() {
        assert_eq!(Terrain::classify(-1.0), Terrain::OceanFloor);
        assert_eq!(Terrain::classify(0.0), Terrain::Land);
        assert_eq!(Terrain::classify(1000.0), Terrain::Land);
        assert_eq!(Terrain::classify(1000.1), Terrain::Mountain);
    }
}
