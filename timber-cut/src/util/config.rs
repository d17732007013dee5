use serde::{Deserialize, Serialize};

use crate::entities::WoodType;

///Configuration of the cut engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CutConfig {
    ///Half extent of the square hit region around a piece's position
    pub hit_half_extent: f64,
    ///Distance from the saw tip to each of the two points defining the cut line
    pub line_extent: f64,
    ///Distance each half is pushed away from the seam after a cut
    pub separation: f64,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            hit_half_extent: 2.0,
            line_extent: 10.0,
            separation: 0.4,
        }
    }
}

///Configuration of a configurator session
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct SawmillConfig {
    ///Configuration of the cut engine
    pub cut_config: CutConfig,
    ///Price per unit of the volume proxy, before the material multiplier
    pub base_rate: f64,
    ///Time (in milliseconds) a miss or failed-cut notice stays visible
    pub notice_ttl_ms: u64,
    ///Thickness (in local units) of a freshly applied plank profile
    pub plank_thickness: f64,
    ///Thickness (in local units) of a freshly applied log profile
    pub log_thickness: f64,
    ///Material selected when a session starts
    pub initial_material: WoodType,
}

impl Default for SawmillConfig {
    fn default() -> Self {
        Self {
            cut_config: CutConfig::default(),
            base_rate: 200.0,
            notice_ttl_ms: 1000,
            plank_thickness: 0.2,
            log_thickness: 1.0,
            initial_material: WoodType::Walnut,
        }
    }
}
