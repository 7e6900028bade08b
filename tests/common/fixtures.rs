use imageproc::point::Point;
use visiontarget::{Rect, VisionConfig};

/// Route library logs through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Ideal target: two 10x80 strips with left edges 30 px apart.
/// Bounding box is 40 wide and 80 tall, so every criterion scores 100.
pub fn ideal_pair_at(x: i32, y: i32) -> (Rect, Rect) {
    (Rect::new(x, y, 10, 80), Rect::new(x + 30, y, 10, 80))
}

pub fn ideal_pair() -> (Rect, Rect) {
    ideal_pair_at(0, 0)
}

/// Corner points of a box, in the inclusive-pixel convention of a contour tracer.
pub fn box_points(x: i32, y: i32, width: i32, height: i32) -> Vec<Point<i32>> {
    let (x1, y1) = (x + width - 1, y + height - 1);
    vec![
        Point::new(x, y),
        Point::new(x1, y),
        Point::new(x1, y1),
        Point::new(x, y1),
    ]
}

pub fn rect_points(rect: &Rect) -> Vec<Point<i32>> {
    box_points(rect.x, rect.y, rect.width, rect.height)
}

/// Distance for a target spanning `pixel_height` rows, written out step by step.
pub fn closed_form_distance(config: &VisionConfig, pixel_height: f64) -> f64 {
    let view_height = config.target_height_in * config.image_height as f64 / pixel_height;
    let half_angle = config.camera_fov_vert_deg / 2.0 * std::f64::consts::PI / 180.0;
    view_height / 2.0 / half_angle.tan()
}

/// Shapes that do not pair up with anything into a target.
pub fn clutter() -> Vec<Rect> {
    vec![
        Rect::new(250, 10, 40, 12),
        Rect::new(5, 200, 90, 25),
        Rect::new(180, 150, 15, 15),
    ]
}
