//! Cape model: one simulated cape and its renderable grid.

use std::time::Instant;

use rand::Rng;

use mantle_cloth::{AnchorCurve, Cloth, ClothDimensions};
use mantle_contact::SolidQuery;
use mantle_math::{Vec2, Vec3};
use mantle_mesh::{AmbientLight, LightingMode, PrepareStats, VertexGrid};
use mantle_solver::{ClothSimulator, TickReport};
use mantle_telemetry::{EventBus, EventKind, SimulationEvent};
use mantle_types::MantleResult;

use crate::config::{CapeConfig, PhysicalProperties};
use crate::environment::Environment;
use crate::facing::Facing;

/// A cape: cloth pinned along an anchor curve, plus the vertex grid that
/// draws it.
///
/// # Lifecycle
///
/// ```text
/// new ─▶ update ─▶ update ─▶ ...      (one update per frame)
///           │
///           └─▶ render_positions / vertex_grid
/// ```
///
/// The grid has one vertex per cloth corner and renders both faces.
pub struct CapeModel {
    cloth: Cloth,
    grid: VertexGrid,
    anchor: AnchorCurve,
    physical: PhysicalProperties,
    config_id: u32,
    corners: Vec<Vec3>,
    frame: u64,
    telemetry: Option<EventBus>,
}

impl CapeModel {
    /// Creates a cape hanging from `initial_position` with its top row
    /// already pinned along the anchor curve.
    pub fn new(initial_position: Vec2, facing: Facing, config: &CapeConfig) -> MantleResult<Self> {
        let dims = config.dimensions;
        let physical = config.physical;

        let mut cloth = Cloth::new(
            initial_position,
            dims,
            physical.segment_drag_variance,
            physical.stretch_threshold,
        );
        pin_top_row(&mut cloth, &config.anchor, initial_position, facing)?;

        let grid = VertexGrid::new(
            dims.vertex_width() as i32,
            dims.vertex_length() as i32,
            true,
        )?;
        let corners = cloth.calculate_segment_corners();

        tracing::debug!(
            config = config.id,
            width = dims.width_segments(),
            length = dims.length_segments(),
            ?facing,
            "cape created"
        );

        Ok(Self {
            cloth,
            grid,
            anchor: config.anchor,
            physical,
            config_id: config.id,
            corners,
            frame: 0,
            telemetry: None,
        })
    }

    /// Advances the cape by one frame.
    ///
    /// Re-pins the top row to `target`, applies wind and gravity, relaxes
    /// the cloth against `world`, and rebuilds the vertex grid with
    /// per-tile lighting from `light`.
    #[allow(clippy::too_many_arguments)]
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        target: Vec2,
        facing: Facing,
        damping: f32,
        constraint_passes: i32,
        env: &dyn Environment,
        world: &dyn SolidQuery,
        light: &dyn AmbientLight,
        rng: &mut R,
    ) -> MantleResult<TickReport> {
        let started = Instant::now();
        self.emit(EventKind::TickBegin {
            anchor: target.to_array(),
            facing: facing.sign() as i8,
        });

        pin_top_row(&mut self.cloth, &self.anchor, target, facing)?;

        let force = self.force(env);
        let report = ClothSimulator::new(&mut self.cloth, damping, constraint_passes)
            .simulate(force, world, rng);

        self.emit(EventKind::ForcesApplied {
            force: force.to_array(),
            moved: report.moved,
            held: report.held,
        });
        self.emit(EventKind::Relaxation {
            passes: report.passes,
            corrections_suppressed: report.corrections_suppressed,
        });

        self.cloth.write_segment_corners(&mut self.corners)?;
        self.prepare_mesh(LightingMode::PerSegment, light)?;

        if self.telemetry.is_some() {
            self.emit(EventKind::TickEnd {
                max_strain: self.cloth.max_strain(),
                wall_time: started.elapsed().as_secs_f64(),
            });
        }
        if let Some(bus) = self.telemetry.as_mut() {
            bus.flush();
        }

        self.frame += 1;
        Ok(report)
    }

    /// [`update`](Self::update) using the config's attachment offset,
    /// damping, and pass count, for a wearer centered at `center`.
    #[allow(clippy::too_many_arguments)]
    pub fn update_from_config<R: Rng + ?Sized>(
        &mut self,
        center: Vec2,
        facing: Facing,
        config: &CapeConfig,
        env: &dyn Environment,
        world: &dyn SolidQuery,
        light: &dyn AmbientLight,
        rng: &mut R,
    ) -> MantleResult<TickReport> {
        self.update(
            config.attachment_point(center, facing),
            facing,
            config.default_damping,
            config.constraint_passes,
            env,
            world,
            light,
            rng,
        )
    }

    /// Rewrites the vertex grid from the current corners.
    pub fn prepare_mesh(&mut self, mode: LightingMode, light: &dyn AmbientLight) -> MantleResult<PrepareStats> {
        let max_z = self.max_z();
        let stats = self.grid.prepare(&self.corners, mode, light, max_z)?;
        self.emit(EventKind::MeshPrepared {
            light_samples: stats.light_samples,
            cache_hits: stats.cache_hits,
        });
        Ok(stats)
    }

    /// Wind plus gravity for this frame, after drag. Wind also lifts the
    /// cape slightly.
    pub fn force(&self, env: &dyn Environment) -> Vec2 {
        let wind = self
            .physical
            .wind
            .force(env.current_wind_speed(), env.time_for_visual_effects());
        let force = Vec2::new(wind, -wind) + Vec2::new(0.0, self.physical.gravity_factor);
        force * (1.0 - self.physical.drag)
    }

    /// True if this cape was built from a different config than `config_id`.
    pub fn needs_rebuild(&self, config_id: u32) -> bool {
        self.config_id != config_id
    }

    /// Corner positions as of the last update, row-major,
    /// `(width + 1) × (length + 1)`.
    pub fn render_positions(&self) -> &[Vec3] {
        &self.corners
    }

    pub fn vertex_grid(&self) -> &VertexGrid {
        &self.grid
    }

    /// Sets the view origin used for subsequent mesh preparation.
    pub fn set_view_origin(&mut self, origin: Vec2) {
        self.grid.set_view_origin(origin);
    }

    pub fn cloth(&self) -> &Cloth {
        &self.cloth
    }

    pub fn dimensions(&self) -> &ClothDimensions {
        self.cloth.dimensions()
    }

    pub fn config_id(&self) -> u32 {
        self.config_id
    }

    /// Frames simulated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Routes this cape's events to `bus`, flushed at the end of every
    /// update.
    pub fn attach_telemetry(&mut self, bus: EventBus) {
        self.telemetry = Some(bus);
    }

    /// Detaches and finalizes the telemetry bus, if any.
    pub fn detach_telemetry(&mut self) -> Option<EventBus> {
        let mut bus = self.telemetry.take()?;
        bus.finalize();
        Some(bus)
    }

    /// Depth half-range used to compress Z; the cape can billow at most
    /// its own width out of the screen plane.
    fn max_z(&self) -> f32 {
        self.cloth.dimensions().anchor_length()
    }

    fn emit(&self, kind: EventKind) {
        if let Some(bus) = &self.telemetry {
            bus.emit(SimulationEvent::new(self.frame, kind));
        }
    }
}

/// Pins every top-row segment to its place on the anchor curve.
fn pin_top_row(cloth: &mut Cloth, anchor: &AnchorCurve, target: Vec2, facing: Facing) -> MantleResult<()> {
    let width = cloth.dimensions().width_segments();
    let anchor_length = cloth.dimensions().anchor_length();
    let segment_size = cloth.dimensions().segment_size();
    let mirror = Vec3::new(facing.sign(), 0.0, 1.0);

    for i in 0..width {
        let progress = i as f32 / (width - 1) as f32;
        let offset = anchor.segment_offset(anchor_length, segment_size, progress);
        cloth.anchor_segment(i as isize, Some(target.extend(0.0) + offset * mirror))?;
    }
    Ok(())
}
