//! Snapshot rendering for a measurement session.
//!
//! Draws the capture surface with its anchor markers and the dashed line
//! between them into a PNG, base64-encoded for export. Mirrors the on-screen
//! annotation layer so a completed measurement can be saved or shared.

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use std::io::Cursor;

use super::geometry::SurfacePoint;

const BACKGROUND: Rgb<u8> = Rgb([248u8, 250u8, 252u8]);
const GRID: Rgb<u8> = Rgb([226u8, 232u8, 240u8]);
const MARKER_FILL: Rgb<u8> = Rgb([255u8, 255u8, 255u8]);
const MARKER_RING: Rgb<u8> = Rgb([15u8, 23u8, 42u8]);
const LINE: Rgb<u8> = Rgb([15u8, 23u8, 42u8]);

const MARKER_RADIUS: i32 = 8;
const DASH_LEN: f64 = 4.0;

/// Render the measurement surface snapshot as a base64-encoded PNG.
pub fn render_snapshot(width: u32, height: u32, points: &[SurfacePoint]) -> String {
    let mut img = RgbImage::from_fn(width, height, |_, _| BACKGROUND);

    // Quarter grid, matching the on-screen surface.
    for i in 1..4 {
        let x = (width * i / 4) as f32;
        let y = (height * i / 4) as f32;
        draw_line_segment_mut(&mut img, (x, 0.0), (x, height as f32), GRID);
        draw_line_segment_mut(&mut img, (0.0, y), (width as f32, y), GRID);
    }

    if let [start, end] = points {
        draw_dashed_line(&mut img, start, end);
    }

    for point in points.iter().take(2) {
        let center = (point.x.round() as i32, point.y.round() as i32);
        draw_filled_circle_mut(&mut img, center, MARKER_RADIUS, MARKER_FILL);
        for offset in 0..2 {
            draw_hollow_circle_mut(&mut img, center, MARKER_RADIUS - offset, MARKER_RING);
        }
    }

    let mut buffer = Cursor::new(Vec::new());
    let _ = img.write_to(&mut buffer, image::ImageFormat::Png);
    STANDARD.encode(buffer.into_inner())
}

/// 4px-on / 4px-off dashed segment between the two anchors.
fn draw_dashed_line(img: &mut RgbImage, start: &SurfacePoint, end: &SurfacePoint) {
    let total = start.distance_to(end);
    if total <= 0.0 {
        return;
    }
    let (ux, uy) = ((end.x - start.x) / total, (end.y - start.y) / total);

    let mut travelled = 0.0;
    while travelled < total {
        let seg_end = (travelled + DASH_LEN).min(total);
        draw_line_segment_mut(
            img,
            (
                (start.x + ux * travelled) as f32,
                (start.y + uy * travelled) as f32,
            ),
            (
                (start.x + ux * seg_end) as f32,
                (start.y + uy * seg_end) as f32,
            ),
            LINE,
        );
        travelled += DASH_LEN * 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_valid_png() {
        let points = [SurfacePoint::new(40.0, 40.0), SurfacePoint::new(200.0, 160.0)];
        let encoded = render_snapshot(640, 360, &points);
        assert!(!encoded.is_empty());

        let bytes = STANDARD.decode(encoded).unwrap();
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!(img.width(), 640);
        assert_eq!(img.height(), 360);
    }

    #[test]
    fn test_snapshot_without_points() {
        let encoded = render_snapshot(320, 180, &[]);
        let bytes = STANDARD.decode(encoded).unwrap();
        assert!(image::load_from_memory(&bytes).is_ok());
    }
}
