//! Per-character cape slot.
//!
//! A host calls [`CapeSlot::equip`] every frame the cape should show and
//! [`CapeSlot::end_frame`] once per frame afterwards. The slot builds the
//! model lazily, rebuilds it when the config changes or the cape was
//! missing for a frame, and drops it one frame after it stops being
//! equipped.

use rand::Rng;

use mantle_contact::SolidQuery;
use mantle_math::Vec2;
use mantle_mesh::AmbientLight;
use mantle_solver::TickReport;
use mantle_types::MantleResult;

use crate::config::CapeConfig;
use crate::environment::Environment;
use crate::facing::Facing;
use crate::model::CapeModel;

/// Equip bookkeeping around an optional [`CapeModel`].
#[derive(Default)]
pub struct CapeSlot {
    cape: Option<CapeModel>,
    equipped: bool,
    equipped_last_frame: bool,
    rebuilds: u32,
}

impl CapeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the cape for this frame and simulates it.
    ///
    /// Only the first call per frame has an effect; later calls return
    /// `Ok(None)`.
    #[allow(clippy::too_many_arguments)]
    pub fn equip<R: Rng + ?Sized>(
        &mut self,
        center: Vec2,
        facing: Facing,
        config: &CapeConfig,
        env: &dyn Environment,
        world: &dyn SolidQuery,
        light: &dyn AmbientLight,
        rng: &mut R,
    ) -> MantleResult<Option<TickReport>> {
        if self.equipped {
            return Ok(None);
        }
        self.equipped = true;

        let stale = match &self.cape {
            None => true,
            Some(cape) => !self.equipped_last_frame || cape.needs_rebuild(config.id),
        };
        if stale {
            let anchor = config.attachment_point(center, facing);
            self.cape = Some(CapeModel::new(anchor, facing, config)?);
            self.rebuilds += 1;
            tracing::debug!(config = config.id, rebuilds = self.rebuilds, "cape rebuilt");
        }

        match self.cape.as_mut() {
            Some(cape) => cape
                .update_from_config(center, facing, config, env, world, light, rng)
                .map(Some),
            None => Ok(None),
        }
    }

    /// Closes the frame: a cape that was not equipped this frame is
    /// dropped.
    pub fn end_frame(&mut self) {
        if self.equipped_last_frame && !self.equipped {
            self.cape = None;
        }
        self.equipped_last_frame = self.equipped;
        self.equipped = false;
    }

    /// True when there is a cape that was shown this frame.
    pub fn should_draw(&self) -> bool {
        self.equipped && self.cape.is_some()
    }

    pub fn cape(&self) -> Option<&CapeModel> {
        self.cape.as_ref()
    }

    /// Models built so far.
    pub fn rebuilds(&self) -> u32 {
        self.rebuilds
    }
}
