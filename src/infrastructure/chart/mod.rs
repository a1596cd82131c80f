//! Scatter chart rendering onto a plain RGB canvas.
//!
//! x is the sample index, y the compound score on a fixed [-1, 1] axis.
//! Markers are coloured on a cool-warm ramp and the zero line is dashed.

use crate::domain::error::{AppError, Result};
use image::{Rgb, RgbImage};
use std::path::Path;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);

const COOL: [f32; 3] = [59.0, 76.0, 192.0];
const MID: [f32; 3] = [221.0, 221.0, 221.0];
const WARM: [f32; 3] = [180.0, 4.0, 38.0];

#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub marker_radius: i64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        // 8x5 inches at 100 dpi
        Self {
            width: 800,
            height: 500,
            margin_left: 70,
            margin_right: 30,
            margin_top: 40,
            margin_bottom: 60,
            marker_radius: 7,
        }
    }
}

impl ChartLayout {
    fn plot_width(&self) -> u32 {
        self.width - self.margin_left - self.margin_right
    }

    fn plot_height(&self) -> u32 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// Pixel column for sample `index` of `count`.
    pub fn x_for(&self, index: usize, count: usize) -> i64 {
        let left = self.margin_left as f64;
        let width = self.plot_width() as f64;
        if count <= 1 {
            return (left + width / 2.0).round() as i64;
        }
        let step = width / count as f64;
        (left + step * (index as f64 + 0.5)).round() as i64
    }

    /// Pixel row for `score`, clamped to the axis.
    pub fn y_for(&self, score: f64) -> i64 {
        let score = score.clamp(-1.0, 1.0);
        let top = self.margin_top as f64;
        let height = self.plot_height() as f64;
        (top + (1.0 - score) / 2.0 * height).round() as i64
    }
}

/// Cool-warm ramp: blue at -1, light grey at 0, red at +1.
pub fn score_color(score: f64) -> Rgb<u8> {
    let score = score.clamp(-1.0, 1.0) as f32;
    let (from, to, t) = if score < 0.0 {
        (COOL, MID, score + 1.0)
    } else {
        (MID, WARM, score)
    };
    let channel = |i: usize| (from[i] + (to[i] - from[i]) * t).round() as u8;
    Rgb([channel(0), channel(1), channel(2)])
}

pub fn render_scatter(scores: &[f64], layout: &ChartLayout) -> Result<RgbImage> {
    if layout.width <= layout.margin_left + layout.margin_right
        || layout.height <= layout.margin_top + layout.margin_bottom
    {
        return Err(AppError::RenderError(format!(
            "Canvas {}x{} is too small for its margins",
            layout.width, layout.height
        )));
    }

    let mut img = RgbImage::from_pixel(layout.width, layout.height, WHITE);
    let left = layout.margin_left as i64;
    let right = (layout.width - layout.margin_right) as i64;
    let top = layout.margin_top as i64;
    let bottom = (layout.height - layout.margin_bottom) as i64;

    for tick in [-1.0, -0.5, 0.5, 1.0] {
        let y = layout.y_for(tick);
        draw_hline(&mut img, left, right, y, GRID, None);
        draw_hline(&mut img, left - 6, left, y, BLACK, None);
    }

    draw_vline(&mut img, left, top, bottom, BLACK);
    draw_hline(&mut img, left, right, bottom, BLACK, None);

    let zero = layout.y_for(0.0);
    draw_hline(&mut img, left, right, zero, BLACK, Some((8, 6)));
    draw_hline(&mut img, left - 6, left, zero, BLACK, None);

    for (index, score) in scores.iter().enumerate() {
        let x = layout.x_for(index, scores.len());
        draw_vline(&mut img, x, bottom, bottom + 6, BLACK);
        let y = layout.y_for(*score);
        fill_circle(&mut img, x, y, layout.marker_radius + 1, BLACK);
        fill_circle(&mut img, x, y, layout.marker_radius, score_color(*score));
    }

    Ok(img)
}

pub fn save_scatter(scores: &[f64], layout: &ChartLayout, path: &Path) -> Result<()> {
    let img = render_scatter(scores, layout)?;
    img.save(path).map_err(|e| {
        AppError::RenderError(format!("Failed to write chart {}: {}", path.display(), e))
    })
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// `dash` is (on, off) lengths in pixels.
fn draw_hline(img: &mut RgbImage, x0: i64, x1: i64, y: i64, color: Rgb<u8>, dash: Option<(i64, i64)>) {
    for x in x0..=x1 {
        let visible = match dash {
            Some((on, off)) => (x - x0) % (on + off) < on,
            None => true,
        };
        if visible {
            put(img, x, y, color);
        }
    }
}

fn draw_vline(img: &mut RgbImage, x: i64, y0: i64, y1: i64, color: Rgb<u8>) {
    for y in y0..=y1 {
        put(img, x, y, color);
    }
}

fn fill_circle(img: &mut RgbImage, cx: i64, cy: i64, radius: i64, color: Rgb<u8>) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_color_endpoints() {
        assert_eq!(score_color(-1.0), Rgb([59, 76, 192]));
        assert_eq!(score_color(0.0), Rgb([221, 221, 221]));
        assert_eq!(score_color(1.0), Rgb([180, 4, 38]));
        assert_eq!(score_color(7.0), score_color(1.0));
    }

    #[test]
    fn test_axis_mapping_is_monotonic() {
        let layout = ChartLayout::default();
        assert!(layout.y_for(1.0) < layout.y_for(0.0));
        assert!(layout.y_for(0.0) < layout.y_for(-1.0));
        assert_eq!(layout.y_for(1.0), layout.margin_top as i64);
        assert!(layout.x_for(0, 10) < layout.x_for(9, 10));
    }

    #[test]
    fn test_markers_use_score_colour() {
        let layout = ChartLayout::default();
        let img = render_scatter(&[0.9, -0.9], &layout).unwrap();
        let (x, y) = (layout.x_for(0, 2), layout.y_for(0.9));
        assert_eq!(*img.get_pixel(x as u32, y as u32), score_color(0.9));
        let (x, y) = (layout.x_for(1, 2), layout.y_for(-0.9));
        assert_eq!(*img.get_pixel(x as u32, y as u32), score_color(-0.9));
    }

    #[test]
    fn test_zero_line_is_dashed() {
        let layout = ChartLayout::default();
        let img = render_scatter(&[], &layout).unwrap();
        let y = layout.y_for(0.0) as u32;
        let left = layout.margin_left;
        assert_eq!(*img.get_pixel(left + 2, y), BLACK);
        assert_eq!(*img.get_pixel(left + 10, y), WHITE);
    }

    #[test]
    fn test_tiny_canvas_is_render_error() {
        let layout = ChartLayout {
            width: 50,
            height: 50,
            ..Default::default()
        };
        assert!(matches!(render_scatter(&[0.1], &layout), Err(AppError::RenderError(_))));
    }

    #[test]
    fn test_save_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        save_scatter(&[0.2, -0.4, 0.0], &ChartLayout::default(), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
