//! Cloth simulator: one tick of force integration plus relaxation.
//!
//! The simulator owns no state. It borrows a [`Cloth`] mutably for the
//! duration of [`ClothSimulator::simulate`] and is meant to be created
//! fresh every frame:
//!
//! ```text
//! ClothSimulator::new(&mut cloth, damping, passes).simulate(force, &world, &mut rng);
//! ```
//!
//! ## Tick
//!
//! 1. **Forces**: position Verlet on every free segment. A move into
//!    solid geometry is refused and the segment holds still.
//! 2. **Relaxation**: `constraint_passes` sweeps over all constraints,
//!    each pulling its two segments half the error towards each other.

use rand::Rng;

use mantle_cloth::{Cloth, Segment};
use mantle_contact::SolidQuery;
use mantle_math::{Vec2, Vec3};

use crate::config::SimulatorConfig;

/// Counters describing one simulated tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Free segments that moved during force application.
    pub moved: u32,
    /// Free segments held in place because their move was blocked.
    pub held: u32,
    /// Relaxation passes performed.
    pub passes: u32,
    /// Per-endpoint relaxation moves refused because of collision.
    pub corrections_suppressed: u32,
}

/// Transient simulator over one cloth.
pub struct ClothSimulator<'a> {
    cloth: &'a mut Cloth,
    damping: f32,
    constraint_passes: i32,
}

impl<'a> ClothSimulator<'a> {
    pub fn new(cloth: &'a mut Cloth, damping: f32, constraint_passes: i32) -> Self {
        Self {
            cloth,
            damping,
            constraint_passes,
        }
    }

    pub fn with_config(cloth: &'a mut Cloth, config: &SimulatorConfig) -> Self {
        Self::new(cloth, config.damping, config.constraint_passes)
    }

    /// Advances the cloth by one tick under `force`.
    ///
    /// `force` is an acceleration in world units per tick². `rng` drives
    /// the per-segment drag jitter and is only consulted when the cloth
    /// has a positive drag variance.
    pub fn simulate<R: Rng + ?Sized>(
        &mut self,
        force: Vec2,
        world: &dyn SolidQuery,
        rng: &mut R,
    ) -> TickReport {
        let mut report = TickReport::default();

        self.apply_force(force, world, rng, &mut report);

        for _ in 0..self.constraint_passes.max(0) {
            self.enforce_constraints(world, &mut report);
            report.passes += 1;
        }

        tracing::trace!(
            world = world.name(),
            moved = report.moved,
            held = report.held,
            passes = report.passes,
            suppressed = report.corrections_suppressed,
            "cloth tick"
        );

        report
    }

    fn apply_force<R: Rng + ?Sized>(
        &mut self,
        force: Vec2,
        world: &dyn SolidQuery,
        rng: &mut R,
        report: &mut TickReport,
    ) {
        let variance = self.cloth.segment_drag_variance();
        let retained = 1.0 - self.damping;
        let (segments, _) = self.cloth.parts_mut();

        for segment in segments.iter_mut().filter(|s| !s.is_anchored) {
            let specific = if variance > 0.0 {
                force * Vec2::new(random_drag(rng, variance), random_drag(rng, variance))
            } else {
                force
            };

            if integrate(segment, specific, retained, world) {
                report.moved += 1;
            } else {
                report.held += 1;
            }
        }
    }

    fn enforce_constraints(&mut self, world: &dyn SolidQuery, report: &mut TickReport) {
        let stretch_threshold = self.cloth.stretch_threshold();
        let (segments, constraints) = self.cloth.parts_mut();

        for constraint in constraints {
            let (first, second) = pair_mut(segments, constraint.a.index(), constraint.b.index());

            let delta = second.position - first.position;
            let ratio = rest_ratio(constraint.rest_length, delta.length());
            let correction = half_correction(delta, ratio);
            // Over-stretched constraints are allowed to pull through obstacles.
            let ignore_collision = ratio < stretch_threshold;

            for (segment, step) in [(first, correction), (second, -correction)] {
                if segment.is_anchored {
                    continue;
                }
                if ignore_collision || !is_blocked(world, segment.position, step) {
                    segment.position += step;
                } else {
                    report.corrections_suppressed += 1;
                }
            }
        }
    }
}

/// Position Verlet step for a single segment. Returns false when the
/// destination is solid and the segment was left untouched.
fn integrate(segment: &mut Segment, force: Vec2, retained: f32, world: &dyn SolidQuery) -> bool {
    // Horizontal force also billows the cloth out of the screen plane.
    let acceleration = Vec3::new(force.x, force.y, force.x.abs());
    let current = segment.position;
    let candidate = current + (current - segment.previous_position) * retained + acceleration;

    if world.is_position_solid(candidate.truncate()) {
        return false;
    }
    segment.position = candidate;
    segment.previous_position = current;
    true
}

/// `rest / current`, or zero when the segments coincide.
#[inline]
fn rest_ratio(rest_length: f32, current_length: f32) -> f32 {
    let ratio = rest_length / current_length;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

#[inline]
fn is_blocked(world: &dyn SolidQuery, position: Vec3, step: Vec3) -> bool {
    world.is_position_solid((position + step).truncate())
}

/// Offset that moves each endpoint half way towards rest length.
#[inline]
fn half_correction(delta: Vec3, ratio: f32) -> Vec3 {
    delta * (1.0 - ratio) * 0.5
}

#[inline]
fn random_drag<R: Rng + ?Sized>(rng: &mut R, variance: f32) -> f32 {
    1.0 + rng.gen_range(-variance..=variance)
}

/// Two distinct elements of a slice, mutably, in argument order.
///
/// # Panics
/// If `a == b` or either index is out of bounds; constraints are built
/// with distinct, in-range endpoints.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    assert_ne!(a, b, "constraint endpoints must differ");
    if a < b {
        let (head, tail) = items.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_mut_returns_in_argument_order() {
        let mut v = [0, 1, 2, 3];
        let (x, y) = pair_mut(&mut v, 3, 1);
        assert_eq!((*x, *y), (3, 1));
        *x = 30;
        *y = 10;
        assert_eq!(v, [0, 10, 2, 30]);
    }

    #[test]
    #[should_panic]
    fn pair_mut_rejects_aliasing() {
        let mut v = [0, 1];
        let _ = pair_mut(&mut v, 1, 1);
    }

    #[test]
    fn rest_ratio_handles_zero_length() {
        assert_eq!(rest_ratio(10.0, 0.0), 0.0);
        assert_eq!(rest_ratio(10.0, 10.0), 1.0);
        assert_eq!(rest_ratio(10.0, 20.0), 0.5);
    }

    #[test]
    fn satisfied_constraint_has_zero_correction() {
        let delta = Vec3::new(10.0, 0.0, 0.0);
        let ratio = rest_ratio(10.0, delta.length());
        assert_eq!(ratio, 1.0);
        assert_eq!(half_correction(delta, ratio), Vec3::ZERO);
    }

    #[test]
    fn stretched_constraint_splits_correction() {
        let delta = Vec3::new(20.0, 0.0, 0.0);
        let correction = half_correction(delta, rest_ratio(10.0, 20.0));
        assert_eq!(correction, Vec3::new(5.0, 0.0, 0.0));
    }
}
