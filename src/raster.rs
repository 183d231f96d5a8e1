//! Scanline polygon fill for the triangle exercise.

use log::debug;

use crate::canvas::Canvas;

/// Map an NDC point (`[-1, 1]²`, y up) to canvas pixel space (y down).
pub fn ndc_to_pixel(canvas: &Canvas, (x, y): (f32, f32)) -> (f32, f32) {
    (
        (x + 1.0) * 0.5 * canvas.width() as f32,
        (1.0 - y) * 0.5 * canvas.height() as f32,
    )
}

/// Fill a polygon given in pixel coordinates.
///
/// Each row is sampled at its center; spans run between sorted pairs of edge
/// crossings. Fewer than three vertices draws nothing.
pub fn fill_polygon(canvas: &mut Canvas, vertices: &[(f32, f32)], rgb: [u8; 3]) {
    if vertices.len() < 3 || canvas.height() == 0 {
        return;
    }

    let (min_y, max_y) = vertices
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    let min_y = (min_y.floor() as i64).max(0);
    let max_y = (max_y.ceil() as i64).min(canvas.height() as i64 - 1);

    let n = vertices.len();
    let mut crossings = Vec::with_capacity(n);
    for y in min_y..=max_y {
        crossings.clear();
        let yf = y as f32 + 0.5;

        for i in 0..n {
            let (x1, y1) = vertices[i];
            let (x2, y2) = vertices[(i + 1) % n];
            if (y1 <= yf && y2 > yf) || (y2 <= yf && y1 > yf) {
                crossings.push(x1 + (yf - y1) / (y2 - y1) * (x2 - x1));
            }
        }

        crossings.sort_unstable_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            canvas.hline(pair[0] as i64, pair[1] as i64, y, rgb);
        }
    }
}

/// Draw a triangle given in normalized device coordinates.
pub fn fill_triangle_ndc(canvas: &mut Canvas, vertices: [(f32, f32); 3], rgb: [u8; 3]) {
    let pixels = vertices.map(|v| ndc_to_pixel(canvas, v));
    debug!("Triangle in pixel space: {:?}", pixels);
    fill_polygon(canvas, &pixels, rgb);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{TRIANGLE_BACKGROUND, TRIANGLE_COLOR, TRIANGLE_VERTICES};

    #[test]
    fn ndc_corners_map_to_canvas_corners() {
        let c = Canvas::new(200, 100);
        assert_eq!(ndc_to_pixel(&c, (-1.0, 1.0)), (0.0, 0.0));
        assert_eq!(ndc_to_pixel(&c, (1.0, -1.0)), (200.0, 100.0));
        assert_eq!(ndc_to_pixel(&c, (0.0, 0.0)), (100.0, 50.0));
    }

    #[test]
    fn triangle_covers_centroid_not_corners() {
        let mut c = Canvas::filled(80, 60, TRIANGLE_BACKGROUND);
        fill_triangle_ndc(&mut c, TRIANGLE_VERTICES, TRIANGLE_COLOR);

        // Centroid in NDC is (0, 0) -> pixel (40, 30).
        assert_eq!(c.get_pixel(40, 30), Some(TRIANGLE_COLOR));
        for (x, y) in [(0, 0), (79, 0), (0, 59), (79, 59)] {
            assert_eq!(c.get_pixel(x, y), Some(TRIANGLE_BACKGROUND));
        }
        // Apex is at the top edge; the row just below the base is clear.
        assert_eq!(c.get_pixel(40, 46), Some(TRIANGLE_BACKGROUND));
    }

    #[test]
    fn degenerate_input_draws_nothing() {
        let mut c = Canvas::new(10, 10);
        fill_polygon(&mut c, &[(0.0, 0.0), (9.0, 9.0)], [255; 3]);
        fill_polygon(&mut c, &[(0.0, 5.0), (5.0, 5.0), (9.0, 5.0)], [255; 3]);
        assert!(c.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn offscreen_polygon_is_clipped() {
        let mut c = Canvas::new(10, 10);
        fill_polygon(&mut c, &[(-50.0, -50.0), (50.0, -50.0), (50.0, 50.0), (-50.0, 50.0)], [1, 2, 3]);
        assert!(c.as_bytes().chunks_exact(3).all(|p| p == [1, 2, 3]));
    }
}
