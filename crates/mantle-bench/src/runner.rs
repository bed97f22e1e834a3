//! Benchmark runner: drives a cape through a scenario and collects metrics.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use mantle_cape::{CapeModel, FixedEnvironment};
use mantle_mesh::UniformLight;
use mantle_types::MantleResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Runs a single scenario from a fresh cape.
    pub fn run(scenario: &Scenario) -> MantleResult<BenchmarkMetrics> {
        let config = &scenario.config;
        let start = config.attachment_point(scenario.center_at(0), scenario.facing);
        let mut cape = CapeModel::new(start, scenario.facing, config)?;

        let mut rng = StdRng::seed_from_u64(scenario.seed);
        let mut env = FixedEnvironment::with_wind(scenario.wind_speed);
        let light = UniformLight::default();

        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.frames as usize);
        let mut total_held: u64 = 0;
        let mut total_suppressed: u64 = 0;
        let mut max_extent = 0.0f32;

        let total_start = Instant::now();

        for frame in 0..scenario.frames {
            let center = scenario.center_at(frame);
            let step_start = Instant::now();
            let report = cape.update_from_config(
                center,
                scenario.facing,
                config,
                &env,
                &scenario.world,
                &light,
                &mut rng,
            )?;
            step_times.push(step_start.elapsed().as_secs_f64());
            env.advance(scenario.time_step);

            total_held += report.held as u64;
            total_suppressed += report.corrections_suppressed as u64;

            let anchor = config.attachment_point(center, scenario.facing).extend(0.0);
            max_extent = cape
                .render_positions()
                .iter()
                .map(|p| (*p - anchor).length())
                .fold(max_extent, f32::max);
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        let dims = cape.dimensions();
        let metrics = BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            frames: scenario.frames,
            segment_count: dims.total_segments(),
            constraint_count: dims.total_constraints(),
            triangle_count: cape.vertex_grid().triangle_count(),
            total_wall_time,
            avg_step_time: avg_step,
            min_step_time: if step_times.is_empty() { 0.0 } else { min_step },
            max_step_time: max_step,
            total_held,
            total_suppressed,
            final_max_strain: cape.cloth().max_strain(),
            max_extent,
        };

        tracing::info!(
            scenario = %metrics.scenario,
            frames = metrics.frames,
            avg_step_ms = metrics.avg_step_time * 1000.0,
            strain = metrics.final_max_strain,
            "benchmark finished"
        );

        Ok(metrics)
    }

    /// Runs every scenario and returns metrics for each.
    pub fn run_all() -> MantleResult<Vec<BenchmarkMetrics>> {
        Self::run_kinds(ScenarioKind::all(), None)
    }

    /// Runs the given scenarios, optionally overriding their frame count.
    pub fn run_kinds(kinds: &[ScenarioKind], frames: Option<u32>) -> MantleResult<Vec<BenchmarkMetrics>> {
        kinds
            .iter()
            .map(|&kind| {
                let mut scenario = Scenario::from_kind(kind);
                if let Some(frames) = frames {
                    scenario = scenario.with_frames(frames);
                }
                Self::run(&scenario)
            })
            .collect()
    }
}
