//! CLI command implementations.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use mantle_bench::{BenchmarkMetrics, BenchmarkRunner, ScenarioKind};
use mantle_cape::{validate_config, CapeConfig, CapeModel, Facing, FixedEnvironment};
use mantle_contact::{GroundPlane, OpenAir, SolidQuery};
use mantle_math::Vec2;
use mantle_mesh::UniformLight;
use mantle_telemetry::{EventBus, TracingSink};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Options for [`simulate`].
pub struct SimulateArgs<'a> {
    pub config_path: Option<&'a str>,
    pub frames: u32,
    pub wind: f32,
    pub ground: Option<f32>,
    pub seed: u64,
    pub telemetry: bool,
    pub output_path: Option<&'a str>,
}

/// Final cape state written by `simulate --output`.
#[derive(Serialize)]
struct SimulationOutput {
    frames: u32,
    config_id: u32,
    /// Corner grid extents.
    width: usize,
    height: usize,
    /// Row-major corner positions.
    corners: Vec<[f32; 3]>,
    max_strain: f32,
    total_held: u64,
    total_suppressed: u64,
}

/// Simulate a cape on a wearer standing at the origin.
pub fn simulate(args: &SimulateArgs<'_>) -> CommandResult {
    println!("Mantle Simulation");
    println!("─────────────────");

    let config = match args.config_path {
        Some(path) => {
            println!("Config: {path}");
            load_config(path)?
        }
        None => {
            println!("Config: built-in");
            CapeConfig::default()
        }
    };

    let world: Box<dyn SolidQuery> = match args.ground {
        Some(height) => Box::new(GroundPlane::new(height)),
        None => Box::new(OpenAir),
    };
    let center = Vec2::ZERO;
    let facing = Facing::Right;

    let mut cape = CapeModel::new(config.attachment_point(center, facing), facing, &config)?;
    if args.telemetry {
        cape.attach_telemetry(EventBus::new().with_sink(TracingSink::new(tracing::Level::INFO)));
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut env = FixedEnvironment::with_wind(args.wind);
    let light = UniformLight::default();

    let dims = *cape.dimensions();
    println!(
        "Cape:   {}×{} segments of {} ({} constraints)",
        dims.width_segments(),
        dims.length_segments(),
        dims.segment_size(),
        dims.total_constraints()
    );
    println!("World:  {}", world.name());
    println!("Frames: {}", args.frames);
    println!();

    let mut total_held = 0u64;
    let mut total_suppressed = 0u64;
    for _ in 0..args.frames {
        let report = cape.update_from_config(center, facing, &config, &env, world.as_ref(), &light, &mut rng)?;
        total_held += report.held as u64;
        total_suppressed += report.corrections_suppressed as u64;
        env.advance(1.0);
    }
    cape.detach_telemetry();

    let max_strain = cape.cloth().max_strain();
    println!("  Max strain:   {max_strain:.4}");
    println!("  Held moves:   {total_held}");
    println!("  Suppressed:   {total_suppressed}");

    if let Some(path) = args.output_path {
        let output = SimulationOutput {
            frames: args.frames,
            config_id: config.id,
            width: dims.vertex_width(),
            height: dims.vertex_length(),
            corners: cape.render_positions().iter().map(|p| p.to_array()).collect(),
            max_strain,
            total_held,
            total_suppressed,
        };
        std::fs::write(path, serde_json::to_string_pretty(&output)?)?;
        println!();
        println!("Corners written to: {path}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, frames: Option<u32>, output_path: Option<&str>) -> CommandResult {
    println!("Mantle Benchmark Suite");
    println!("══════════════════════");
    println!();

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                return Err(format!(
                    "Unknown scenario: '{scenario_name}'. Available: {}, all",
                    available.join(", ")
                )
                .into());
            }
        }
    };

    let mut all_metrics = Vec::new();
    for kind in kinds {
        println!("Running: {}", kind.name());
        let metrics = BenchmarkRunner::run_kinds(&[kind], frames)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        for m in &metrics {
            println!("  Frames:        {}", m.frames);
            println!("  Wall time:     {:.3}s", m.total_wall_time);
            println!("  Avg step:      {:.3}ms", m.avg_step_time * 1000.0);
            println!("  Max strain:    {:.4}", m.final_max_strain);
            println!("  Suppressed:    {}", m.total_suppressed);
            println!();
        }
        all_metrics.extend(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Validate a cape config.
pub fn validate(path: &str) -> CommandResult {
    println!("Mantle Validator");
    println!("────────────────");
    println!();
    println!("Validating config: {path}");

    let config = load_config(path)?;
    let dims = config.dimensions;
    println!(
        "✅ Config is valid ({}×{} segments, {} constraints).",
        dims.width_segments(),
        dims.length_segments(),
        dims.total_constraints()
    );
    Ok(())
}

/// Print the built-in cape config.
pub fn init() -> CommandResult {
    print!("{}", CapeConfig::default().to_toml_string()?);
    Ok(())
}

fn load_config(path: &str) -> Result<CapeConfig, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    if path.ends_with(".json") {
        let config: CapeConfig = serde_json::from_str(&content)?;
        validate_config(&config)?;
        Ok(config)
    } else if path.ends_with(".toml") {
        Ok(CapeConfig::from_toml_str(&content)?)
    } else {
        Err("Unsupported file format. Use .toml or .json.".into())
    }
}
