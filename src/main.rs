use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use visiontarget::recording::load_frames;
use visiontarget::{FrameContext, FrameWorker, SharedEstimate, TargetDetector, VisionConfig};

#[derive(Parser)]
#[command(name = "visiontarget")]
#[command(about = "Find the two-strip vision target in recorded contours and estimate its distance")]
struct Cli {
    /// JSON file of frames: [[[[x, y], ...], ...], ...]
    #[arg(value_name = "FRAMES")]
    frames_path: PathBuf,

    /// JSON configuration file (missing fields use defaults)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    image_width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    image_height: Option<u32>,

    /// Physical target height in inches
    #[arg(long, value_name = "INCHES")]
    target_height: Option<f64>,

    /// Camera vertical field of view in degrees
    #[arg(long, value_name = "DEGREES")]
    fov: Option<f64>,

    /// Acceptance threshold on the 0-600 scale
    #[arg(long)]
    threshold: Option<f64>,

    /// Reject pairs with any sub-score below this value
    #[arg(long)]
    min_sub_score: Option<f64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn vision_config(&self) -> anyhow::Result<VisionConfig> {
        let mut config = match &self.config {
            Some(path) => VisionConfig::from_json_file(path)?,
            None => VisionConfig::default(),
        };
        if let Some(v) = self.image_width {
            config.image_width = v;
        }
        if let Some(v) = self.image_height {
            config.image_height = v;
        }
        if let Some(v) = self.target_height {
            config.target_height_in = v;
        }
        if let Some(v) = self.fov {
            config.camera_fov_vert_deg = v;
        }
        if let Some(v) = self.threshold {
            config.score_threshold = v;
        }
        if let Some(v) = self.min_sub_score {
            config.min_sub_score = v;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = args.vision_config()?;
    let detector = TargetDetector::new(config.clone()).context("Invalid configuration")?;

    let frames = load_frames(&args.frames_path)?;
    log::info!("Loaded {} frames from {:?}", frames.len(), args.frames_path);

    let estimate = SharedEstimate::new();
    let context = FrameContext {
        verbose: args.verbose,
        ..FrameContext::default()
    };
    let (worker, reports) = FrameWorker::spawn_reporting(detector, estimate.clone(), context)?;

    for frame in frames {
        worker.submit(frame)?;
        let report = reports.recv().context("Frame worker stopped unexpectedly")?;

        // Consumer side: read both values together
        let (current, updates) = estimate.snapshot();
        if updates == 0 {
            println!("Frame {}: no target yet", report.frame);
        } else {
            println!(
                "Frame {}: Center: {:.1}  Distance: {:.1} in  Offset: {:+.2}{}",
                report.frame,
                current.center_x,
                current.distance,
                config.horizontal_offset(current.center_x),
                if report.outcome.is_published() { "" } else { "  (stale)" }
            );
        }
    }

    let stats = worker.shutdown()?;
    println!("\n=== Summary ===");
    println!("Frames processed: {}", stats.frames);
    println!("Targets published: {}", stats.published);
    println!("Too few contours: {}", stats.insufficient_candidates);
    println!("No qualifying pair: {}", stats.no_qualifying_pair);
    println!("Degenerate geometry: {}", stats.degenerate_geometry);

    Ok(())
}
