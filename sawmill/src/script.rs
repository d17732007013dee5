use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use timber_cut::dimensions::{DimAxis, ShapePreset};
use timber_cut::entities::{PieceKey, WoodType};
use timber_cut::io;
use timber_cut::io::ext_repr::ExtCatalog;
use timber_cut::session::{Configurator, ConfiguratorError};
use timber_cut::util::SawmillConfig;

use crate::io::output::SessionOutput;

/// A recorded configurator session: an optional starting catalog and the events to apply to it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SessionScript {
    /// Catalog to start from, the default plank if absent
    #[serde(default)]
    pub catalog: Option<ExtCatalog>,
    pub events: Vec<SessionEvent>,
}

/// One user or scene interaction. Pieces are referred to by their index in display order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    SetMaterial { material: WoodType },
    ToggleSaw,
    /// Saw pose reported by the scene
    SawPose { x: f64, z: f64, rotation: f64 },
    /// Rotation slider
    SawRotation { rotation: f64 },
    Cut,
    /// Advances the session clock
    Wait { ms: u64 },
    Select { index: Option<usize> },
    SelectAt { x: f64, z: f64 },
    ApplyShape { preset: ShapePreset },
    ApplySize { label: String },
    SetDimension { axis: DimAxis, value: f64 },
    MovePiece { index: usize, x: f64, z: f64 },
    Delete { index: usize },
    Reset,
    Load { catalog: ExtCatalog },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimedNotice {
    /// Session time at which the notice was raised
    pub at_ms: u64,
    pub message: String,
}

/// An event the configurator refused, with the reason.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RejectedEvent {
    pub event_index: usize,
    pub message: String,
}

/// Replays a script against a fresh [`Configurator`].
///
/// Refused interactions (invalid dimensions, unknown sizes, out of range indices) are recorded and
/// the replay continues. Only a malformed starting or loaded catalog aborts it.
pub struct Replayer {
    pub configurator: Configurator,
    start: Instant,
    elapsed: Duration,
    n_cuts: usize,
    notices: Vec<TimedNotice>,
    rejected: Vec<RejectedEvent>,
}

impl Replayer {
    pub fn new(config: SawmillConfig, script: &SessionScript) -> Result<Self> {
        let mut configurator = Configurator::new(config)?;
        if let Some(ext_catalog) = &script.catalog {
            configurator
                .load(ext_catalog)
                .context("invalid starting catalog")?;
        }
        Ok(Replayer {
            configurator,
            start: Instant::now(),
            elapsed: Duration::ZERO,
            n_cuts: 0,
            notices: vec![],
            rejected: vec![],
        })
    }

    fn now(&self) -> Instant {
        self.start + self.elapsed
    }

    fn key_at(&self, index: usize) -> Result<PieceKey, ConfiguratorError> {
        self.configurator
            .catalog()
            .keys()
            .nth(index)
            .ok_or(ConfiguratorError::NoTarget)
    }

    pub fn replay(&mut self, events: &[SessionEvent]) -> Result<()> {
        for (i, event) in events.iter().enumerate() {
            debug!("[REPLAY] #{i}: {event:?}");
            match self.apply(event) {
                Ok(()) => (),
                Err(ConfiguratorError::Geometry(err)) if matches!(event, SessionEvent::Load { .. }) => {
                    return Err(err).with_context(|| format!("event #{i} could not be applied"));
                }
                Err(err) => {
                    warn!("[REPLAY] event #{i} rejected: {err}");
                    self.rejected.push(RejectedEvent {
                        event_index: i,
                        message: err.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn apply(&mut self, event: &SessionEvent) -> Result<(), ConfiguratorError> {
        let cfg = &mut self.configurator;
        match event {
            SessionEvent::SetMaterial { material } => cfg.set_material(*material),
            SessionEvent::ToggleSaw => {
                cfg.toggle_saw();
            }
            SessionEvent::SawPose { x, z, rotation } => cfg.report_saw_pose(*x, *z, *rotation),
            SessionEvent::SawRotation { rotation } => cfg.set_saw_rotation(*rotation),
            SessionEvent::Cut => {
                let now = self.now();
                match self.configurator.trigger_cut(now) {
                    Ok(_) => self.n_cuts += 1,
                    Err(ConfiguratorError::Cut(err)) => self.notices.push(TimedNotice {
                        at_ms: self.elapsed.as_millis() as u64,
                        message: err.to_string(),
                    }),
                    Err(err) => return Err(err),
                }
            }
            SessionEvent::Wait { ms } => self.elapsed += Duration::from_millis(*ms),
            SessionEvent::Select { index } => {
                let key = index.map(|i| self.key_at(i)).transpose()?;
                self.configurator.select(key);
            }
            SessionEvent::SelectAt { x, z } => {
                cfg.select_at(*x, *z);
            }
            SessionEvent::ApplyShape { preset } => cfg.apply_shape_preset(*preset)?,
            SessionEvent::ApplySize { label } => cfg.apply_size_preset(label)?,
            SessionEvent::SetDimension { axis, value } => cfg.set_dimension(*axis, *value)?,
            SessionEvent::MovePiece { index, x, z } => {
                let key = self.key_at(*index)?;
                self.configurator.move_piece(key, *x, *z)?;
            }
            SessionEvent::Delete { index } => {
                let key = self.key_at(*index)?;
                self.configurator.delete_piece(key)?;
            }
            SessionEvent::Reset => cfg.reset()?,
            SessionEvent::Load { catalog } => cfg.load(catalog)?,
        }
        Ok(())
    }

    /// Drains pending cut effects, there is no renderer to hand them to.
    fn discard_effects(&mut self) -> usize {
        self.configurator.drain_effects().len()
    }

    pub fn output(mut self) -> SessionOutput {
        let n_effects = self.discard_effects();
        let now = self.now();
        let cfg = &self.configurator;
        info!(
            "[REPLAY] finished: {} pieces, {} cuts ({} effects), {} notices, {} rejected events",
            cfg.catalog().len(),
            self.n_cuts,
            n_effects,
            self.notices.len(),
            self.rejected.len()
        );
        SessionOutput {
            material: cfg.material(),
            price: cfg.price(),
            n_cuts: self.n_cuts,
            catalog: io::export(cfg.catalog()),
            cut_list: io::cut_list(cfg.catalog()),
            active_notice: cfg.notice(now).map(|n| n.message.clone()),
            notices: self.notices,
            rejected: self.rejected,
            config: cfg.config,
        }
    }
}

/// Replays a whole script and collects its output.
pub fn replay(config: SawmillConfig, script: &SessionScript) -> Result<SessionOutput> {
    let mut replayer = Replayer::new(config, script)?;
    replayer.replay(&script.events)?;
    let output = replayer.output();
    debug!(
        "[REPLAY] cut list:\n{}",
        output.cut_list.iter().map(|r| format!("{} {}", r.label, r.kind)).join("\n")
    );
    Ok(output)
}
