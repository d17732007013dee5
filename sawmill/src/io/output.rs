use serde::{Deserialize, Serialize};

use timber_cut::entities::WoodType;
use timber_cut::io::CutListRow;
use timber_cut::io::ext_repr::ExtCatalog;
use timber_cut::util::SawmillConfig;

use crate::script::{RejectedEvent, TimedNotice};

/// Everything a replayed session produced, written next to the cut list.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SessionOutput {
    pub material: WoodType,
    pub price: u64,
    pub n_cuts: usize,
    pub catalog: ExtCatalog,
    pub cut_list: Vec<CutListRow>,
    pub notices: Vec<TimedNotice>,
    /// Notice still visible when the script ended
    pub active_notice: Option<String>,
    pub rejected: Vec<RejectedEvent>,
    pub config: SawmillConfig,
}
