use std::env;
use std::time::Duration;

use visiontarget::recording::load_frames;
use visiontarget::{FrameContext, FrameWorker, SharedEstimate, TargetDetector};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <frames.json>", args[0]);
        std::process::exit(1);
    }

    env_logger::init();

    let frames = load_frames(&args[1])?;
    println!("Loaded {} frames", frames.len());

    let estimate = SharedEstimate::new();
    let worker = FrameWorker::spawn(
        TargetDetector::default(),
        estimate.clone(),
        FrameContext::default(),
    )?;

    // Producer and consumer run independently: frames go in at ~30 Hz while
    // this thread polls the estimate at its own pace.
    for (i, frame) in frames.into_iter().enumerate() {
        worker.submit(frame)?;
        std::thread::sleep(Duration::from_millis(33));
        if i % 5 == 4 {
            let current = estimate.get();
            println!("Center: {:.1}  Distance: {:.1}", current.center_x, current.distance);
        }
    }

    let stats = worker.shutdown()?;
    println!("\n{:?}", stats);
    Ok(())
}
