// Data-driven refuge configuration.
//
// All tunable parameters live in `RefugeConfig`, loaded from JSON at
// startup. The search never uses magic numbers; it reads `SafeVolumeParams`
// (spiral radius, headroom, fallback clamp) and the respawn planner reads
// the rest (region search radius, coordinate scale, border inset, refuge
// biomes, replacement ground).
//
// Defaults reproduce the stock behavior exactly: a 16-column spiral, four
// cells of headroom below the world ceiling, a fallback height clamped into
// `[70, world_height - 10]`, a 9999-column region search and an 8:1
// overworld-to-nether coordinate scale. Missing JSON fields fall back to
// these defaults.
//
// See also: `placement.rs` for the search that reads `SafeVolumeParams`,
// `locate.rs` for `SafePositionFinder::from_config()`, `respawn.rs` for the
// planner.
//
// **Critical constraint: determinism.** Config values feed directly into
// the search. Identical configs and worlds give identical placements.

use crate::types::{Biome, VoxelType};
use serde::{Deserialize, Serialize};

/// Tunables for the safe-volume spiral search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeVolumeParams {
    /// Chebyshev radius of the column spiral around the requested position.
    pub spiral_radius: u32,
    /// A pocket's floor plus this must stay at or below `world_height - 1`.
    pub headroom: i32,
    /// Lower bound of the fallback height clamp.
    pub fallback_min_y: i32,
    /// Upper bound of the fallback height clamp is `world_height` minus this.
    pub fallback_top_margin: i32,
}

impl Default for SafeVolumeParams {
    fn default() -> Self {
        Self {
            spiral_radius: 16,
            headroom: 4,
            fallback_min_y: 70,
            fallback_top_margin: 10,
        }
    }
}

/// Top-level refuge configuration. Loaded from JSON, never mutated at runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefugeConfig {
    pub safe_volume: SafeVolumeParams,

    /// Radius, in columns, of the nearest-region lookup.
    pub region_search_radius: u32,

    /// Column sampling step of the nearest-region lookup.
    pub region_search_granularity: u32,

    /// Overworld-to-nether horizontal coordinate ratio. Overworld x/z are
    /// divided by this.
    pub coordinate_scale: f64,

    /// Distance kept from the nether border when clamping a scaled origin.
    pub border_inset: f64,

    /// Absolute horizontal coordinate limit, applied on top of the border.
    pub coordinate_limit: f64,

    /// Candidate refuge regions, in priority order for equidistant ties.
    pub refuge_biomes: Vec<Biome>,

    /// Material written over unstable ground beneath a chosen destination.
    pub stable_ground: VoxelType,

    /// Whether the nether dimension is available at all.
    pub nether_enabled: bool,
}

impl Default for RefugeConfig {
    fn default() -> Self {
        Self {
            safe_volume: SafeVolumeParams::default(),
            region_search_radius: 9999,
            region_search_granularity: 1,
            coordinate_scale: 8.0,
            border_inset: 16.0,
            coordinate_limit: 29_999_872.0,
            refuge_biomes: vec![
                Biome::CrimsonForest,
                Biome::WarpedForest,
                Biome::GlowstoneCanyon,
            ],
            stable_ground: VoxelType::Netherrack,
            nether_enabled: true,
        }
    }
}

impl RefugeConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = RefugeConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let restored: RefugeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn default_safe_volume_params() {
        let params = SafeVolumeParams::default();
        assert_eq!(params.spiral_radius, 16);
        assert_eq!(params.headroom, 4);
        assert_eq!(params.fallback_min_y, 70);
        assert_eq!(params.fallback_top_margin, 10);
    }

    #[test]
    fn config_loads_from_json_string() {
        let json = r#"{
            "safe_volume": { "spiral_radius": 8 },
            "coordinate_scale": 4.0,
            "refuge_biomes": ["WarpedForest"],
            "stable_ground": "Blackstone"
        }"#;
        let config = RefugeConfig::from_json(json).unwrap();
        assert_eq!(config.safe_volume.spiral_radius, 8);
        // Unlisted nested fields keep their defaults.
        assert_eq!(config.safe_volume.fallback_min_y, 70);
        assert_eq!(config.coordinate_scale, 4.0);
        assert_eq!(config.refuge_biomes, vec![Biome::WarpedForest]);
        assert_eq!(config.stable_ground, VoxelType::Blackstone);
        assert_eq!(config.region_search_radius, 9999);
        assert!(config.nether_enabled);
    }

    #[test]
    fn empty_json_is_default() {
        let config = RefugeConfig::from_json("{}").unwrap();
        assert_eq!(config, RefugeConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(RefugeConfig::from_json("{\"region_search_radius\": -1}").is_err());
        assert!(RefugeConfig::from_json("not json").is_err());
    }
}
