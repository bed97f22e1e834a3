//! Benchmark metrics collected during a scenario run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    pub scenario: String,
    /// Frames simulated.
    pub frames: u32,
    pub segment_count: usize,
    pub constraint_count: usize,
    /// Triangles in the rendered grid, both faces.
    pub triangle_count: usize,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per frame (seconds).
    pub avg_step_time: f64,
    pub min_step_time: f64,
    pub max_step_time: f64,
    /// Segment moves refused by collision, summed over all frames.
    pub total_held: u64,
    /// Relaxation corrections refused by collision, summed over all frames.
    pub total_suppressed: u64,
    /// Largest constraint stretch at the final frame (1.0 = at rest length).
    pub final_max_strain: f32,
    /// Largest distance of any corner from the attachment point.
    pub max_extent: f32,
}

impl BenchmarkMetrics {
    pub fn to_csv_header() -> String {
        "scenario,frames,segments,constraints,triangles,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,held,suppressed,final_max_strain,max_extent".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{},{},{:.4},{:.3}",
            self.scenario,
            self.frames,
            self.segment_count,
            self.constraint_count,
            self.triangle_count,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.total_held,
            self.total_suppressed,
            self.final_max_strain,
            self.max_extent,
        )
    }

    /// Header plus one row per run.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
