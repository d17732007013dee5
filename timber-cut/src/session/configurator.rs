use std::mem;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};
use thiserror::Error;

use crate::cut::{CutEffect, CutEngine, CutError, CutReport, CutRequest};
use crate::dimensions::{self, DimAxis, Dimensions, ShapePreset};
use crate::entities::{Catalog, Piece, PieceKey, PieceKind, StandardSize, WoodType};
use crate::geometry::primitives::{Point, Polygon};
use crate::io;
use crate::session::Notice;
use crate::util::SawmillConfig;

/// Largest blade rotation (in radians, either direction) the saw accepts
pub const MAX_SAW_ROTATION: f64 = 1.57;

/// Last reported position and orientation of the saw, in world space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SawPose {
    pub x: f64,
    pub z: f64,
    pub rotation: f64,
}

#[derive(Debug, Error)]
pub enum ConfiguratorError {
    #[error(transparent)]
    Cut(#[from] CutError),
    #[error("invalid {axis:?} value: {value}")]
    InvalidDimension { axis: DimAxis, value: f64 },
    #[error("unknown standard size: {0}")]
    UnknownSize(String),
    #[error("no piece to edit")]
    NoTarget,
    #[error("saw is not active")]
    SawInactive,
    #[error(transparent)]
    Geometry(#[from] anyhow::Error),
}

/// A configurator session: the catalog being edited plus the saw and material state around it.
///
/// The scene/input layer reports saw poses and triggers cuts, the renderer reads the catalog and
/// drains cut effects, the UI reads dimensions, price, the cut list and the current notice.
#[derive(Clone, Debug)]
pub struct Configurator {
    pub config: SawmillConfig,
    catalog: Catalog,
    cut_engine: CutEngine,
    material: WoodType,
    saw_active: bool,
    saw_pose: SawPose,
    effects: Vec<CutEffect>,
    notice: Option<Notice>,
}

impl Configurator {
    pub fn new(config: SawmillConfig) -> Result<Self> {
        Ok(Configurator {
            catalog: Catalog::with_piece(Configurator::default_piece(&config)?),
            cut_engine: CutEngine::new(config.cut_config),
            material: config.initial_material,
            saw_active: false,
            saw_pose: SawPose::default(),
            effects: vec![],
            notice: None,
            config,
        })
    }

    /// Session continuing from an existing catalog
    pub fn with_catalog(config: SawmillConfig, catalog: Catalog) -> Result<Self> {
        Ok(Configurator {
            catalog,
            ..Configurator::new(config)?
        })
    }

    /// The plank every session starts with: a 2 x 4 unit rectangle at the origin.
    pub fn default_piece(config: &SawmillConfig) -> Result<Piece> {
        let profile = Polygon::try_new(vec![
            Point(-1.0, -2.0),
            Point(1.0, -2.0),
            Point(1.0, 2.0),
            Point(-1.0, 2.0),
        ])?;
        Piece::try_new(profile, config.plank_thickness, Point(0.0, 0.0), PieceKind::Plank)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn material(&self) -> WoodType {
        self.material
    }

    pub fn set_material(&mut self, material: WoodType) {
        info!("[CFG] material set to {}", material.name());
        self.material = material;
    }

    pub fn saw_active(&self) -> bool {
        self.saw_active
    }

    /// Toggles the saw tool. Activating or deactivating it clears the selection.
    pub fn toggle_saw(&mut self) -> bool {
        self.saw_active = !self.saw_active;
        self.catalog.select(None);
        self.saw_active
    }

    pub fn saw_pose(&self) -> SawPose {
        self.saw_pose
    }

    /// Records the saw position reported by the scene layer on every tick.
    /// The blade rotation is set separately, see [`Configurator::set_saw_rotation`].
    pub fn report_saw_position(&mut self, x: f64, z: f64) {
        self.saw_pose.x = x;
        self.saw_pose.z = z;
    }

    /// Records a full saw pose.
    pub fn report_saw_pose(&mut self, x: f64, z: f64, rotation: f64) {
        self.report_saw_position(x, z);
        self.set_saw_rotation(rotation);
    }

    /// Sets the blade rotation, clamped to ±[`MAX_SAW_ROTATION`].
    pub fn set_saw_rotation(&mut self, rotation: f64) {
        self.saw_pose.rotation = rotation.clamp(-MAX_SAW_ROTATION, MAX_SAW_ROTATION);
    }

    /// Cuts at the most recently reported saw pose. Only the active saw cuts.
    ///
    /// A miss or a degenerate cut leaves the catalog untouched and raises a notice that expires
    /// after the configured delay.
    pub fn trigger_cut(&mut self, now: Instant) -> Result<CutReport, ConfiguratorError> {
        if !self.saw_active {
            debug!("[CFG] cut ignored, saw is not active");
            return Err(ConfiguratorError::SawInactive);
        }
        let SawPose { x, z, rotation } = self.saw_pose;
        let request = CutRequest { x, z, rotation };
        match self
            .cut_engine
            .cut(&mut self.catalog, &request, self.material.color())
        {
            Ok(report) => {
                self.effects.push(report.effect.clone());
                Ok(report)
            }
            Err(err) => {
                self.raise_notice(err.to_string(), now);
                Err(err.into())
            }
        }
    }

    fn raise_notice(&mut self, message: String, now: Instant) {
        info!("[CFG] notice: {message}");
        let ttl = Duration::from_millis(self.config.notice_ttl_ms);
        self.notice = Some(Notice::new(message, now, ttl));
    }

    /// The current notice, if it has not expired yet.
    pub fn notice(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_active(now))
    }

    /// Cut effects produced since the last call. Each effect is handed out once.
    pub fn drain_effects(&mut self) -> Vec<CutEffect> {
        mem::take(&mut self.effects)
    }

    pub fn select(&mut self, key: Option<PieceKey>) {
        self.catalog.select(key);
    }

    /// Selects the piece under the world point `(x, z)`, or clears the selection if there is none.
    pub fn select_at(&mut self, x: f64, z: f64) -> Option<PieceKey> {
        let key = self.catalog.piece_at(Point(x, z));
        self.catalog.select(key);
        key
    }

    /// Moves a piece to a new world position (dragging in the scene).
    pub fn move_piece(&mut self, key: PieceKey, x: f64, z: f64) -> Result<(), ConfiguratorError> {
        let position = Point(x, z);
        if !position.is_finite() {
            return Err(anyhow::anyhow!("non-finite position ({x}, {z})").into());
        }
        let piece = self.catalog.get_mut(key).ok_or(ConfiguratorError::NoTarget)?;
        piece.position = position;
        Ok(())
    }

    fn target(&self) -> Result<PieceKey, ConfiguratorError> {
        self.catalog.target_key().ok_or(ConfiguratorError::NoTarget)
    }

    pub fn apply_shape_preset(&mut self, preset: ShapePreset) -> Result<(), ConfiguratorError> {
        let key = self.target()?;
        dimensions::apply_shape_preset(&mut self.catalog, key, preset, &self.config)?;
        Ok(())
    }

    pub fn apply_size_preset(&mut self, label: &str) -> Result<(), ConfiguratorError> {
        let size = StandardSize::by_label(label)
            .ok_or_else(|| ConfiguratorError::UnknownSize(label.to_string()))?;
        let key = self.target()?;
        dimensions::apply_size_preset(&mut self.catalog, key, &size)?;
        Ok(())
    }

    /// Sets a dimension of the target piece from a user-facing value (feet for length, inches otherwise).
    pub fn set_dimension(&mut self, axis: DimAxis, display_value: f64) -> Result<(), ConfiguratorError> {
        if !display_value.is_finite() || display_value <= 0.0 {
            return Err(ConfiguratorError::InvalidDimension {
                axis,
                value: display_value,
            });
        }
        let key = self.target()?;
        dimensions::set_dimension(&mut self.catalog, key, axis, axis.to_local(display_value))?;
        debug!("[CFG] {axis:?} of {key:?} set to {display_value}");
        Ok(())
    }

    /// Removes a piece from the catalog.
    pub fn delete_piece(&mut self, key: PieceKey) -> Result<Piece, ConfiguratorError> {
        self.catalog.remove(key).ok_or(ConfiguratorError::NoTarget)
    }

    /// Back to a single default plank, with no selection, pending effects or notice.
    pub fn reset(&mut self) -> Result<()> {
        self.catalog.reset(Configurator::default_piece(&self.config)?);
        self.effects.clear();
        self.notice = None;
        info!("[CFG] reset");
        Ok(())
    }

    /// Dimensions of the piece edits apply to
    pub fn active_dimensions(&self) -> Option<Dimensions> {
        self.catalog.selected().map(Dimensions::of)
    }

    /// Estimated price of the whole catalog in the active material
    pub fn price(&self) -> u64 {
        dimensions::estimate_price(
            &self.catalog,
            self.material.price_multiplier(),
            self.config.base_rate,
        )
    }

    pub fn cut_list_csv(&self) -> String {
        io::cut_list_csv(&self.catalog)
    }

    /// Replaces the catalog with one imported from its external representation.
    pub fn load(&mut self, ext_catalog: &io::ext_repr::ExtCatalog) -> Result<()> {
        self.catalog = io::import(ext_catalog)?;
        self.effects.clear();
        Ok(())
    }
}
