use imageproc::contours::{BorderType, Contour};
use imageproc::point::Point;
use visiontarget::detection::scoring::score_pair;
use visiontarget::{BoundingRect, FrameOutcome, SharedEstimate, TargetDetector, VisionConfig};

/// Outline of an axis-aligned box as a contour, the way a border follower reports it.
fn box_contour(x: u32, y: u32, width: u32, height: u32) -> Contour<u32> {
    let (x1, y1) = (x + width - 1, y + height - 1);
    let points = vec![
        Point::new(x, y),
        Point::new(x1, y),
        Point::new(x1, y1),
        Point::new(x, y1),
    ];
    Contour::new(points, BorderType::Outer, None)
}

fn main() -> anyhow::Result<()> {
    let detector = TargetDetector::new(VisionConfig::default())?;
    let estimate = SharedEstimate::new();

    // Two strips 10 px wide and 80 px tall, left edges 30 px apart, plus clutter.
    let frame = vec![
        box_contour(200, 20, 35, 12),
        box_contour(100, 60, 10, 80),
        box_contour(130, 60, 10, 80),
        box_contour(10, 200, 60, 20),
    ];

    println!("=== Pair scores ===");
    let rects: Vec<_> = frame.iter().filter_map(|c| c.bounding_rect()).collect();
    for (i, j) in visiontarget::detection::pairs::candidate_pairs(rects.len()) {
        let score = score_pair(&rects[i], &rects[j]);
        println!("  ({}, {}): total {:6.1}  {:?}", i, j, score.total(), score.as_array());
    }

    println!("\n=== Frame ===");
    match detector.process_frame(&frame, &estimate) {
        FrameOutcome::Published(target) => {
            println!("Center: {:.1}", target.center_x);
            println!("Distance: {:.1} in", target.distance);
        }
        other => println!("No target: {:?}", other),
    }

    Ok(())
}
