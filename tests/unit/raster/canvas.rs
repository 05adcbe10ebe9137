use super::*;
use crate::config::scene::{LINE, VISITED};

fn p(x: i32, y: i32) -> PixelPoint {
    PixelPoint::new(x, y)
}

#[test]
fn new_canvas_is_background() {
    let c = Canvas::new(8, 4);
    assert_eq!(c.pixels().len(), 32);
    assert_eq!(c.count(BACKGROUND), 32);
    assert_eq!(c.pixel(8, 0), None);
    assert_eq!(c.pixel(-1, 0), None);
}

#[test]
fn point_is_half_open_square_and_clipped() {
    let mut c = Canvas::new(20, 20);
    c.draw_point(p(10, 10), 4, VISITED);
    assert_eq!(c.count(VISITED), 16);
    assert_eq!(c.pixel(8, 8), Some(VISITED));
    assert_eq!(c.pixel(11, 11), Some(VISITED));
    assert_eq!(c.pixel(12, 12), Some(BACKGROUND));

    let mut c = Canvas::new(20, 20);
    c.draw_point(p(0, 0), 4, VISITED);
    assert_eq!(c.count(VISITED), 4);
}

#[test]
fn vertical_line_fills_column() {
    let mut c = Canvas::new(10, 10);
    c.draw_line(p(3, 8), p(3, 1), LINE);
    assert_eq!(c.count(LINE), 8);
    for y in 1..=8 {
        assert_eq!(c.pixel(3, y), Some(LINE));
    }
}

#[test]
fn horizontal_line_fills_row() {
    let mut c = Canvas::new(10, 10);
    c.draw_line(p(7, 4), p(2, 4), LINE);
    assert_eq!(c.count(LINE), 6);
    for x in 2..=7 {
        assert_eq!(c.pixel(x, 4), Some(LINE));
    }
}

#[test]
fn degenerate_line_is_single_pixel() {
    let mut c = Canvas::new(10, 10);
    c.draw_line(p(5, 5), p(5, 5), LINE);
    assert_eq!(c.count(LINE), 1);
}

#[test]
fn diagonal_line_hits_both_endpoints_without_gaps() {
    let mut c = Canvas::new(10, 10);
    c.draw_line(p(0, 0), p(9, 9), LINE);
    for i in 0..10 {
        assert_eq!(c.pixel(i, i), Some(LINE));
    }
    assert_eq!(c.count(LINE), 10);
}

#[test]
fn steep_line_has_a_pixel_on_every_row() {
    let mut c = Canvas::new(20, 40);
    c.draw_line(p(2, 0), p(6, 39), LINE);
    for y in 0..40 {
        assert!((0..20).any(|x| c.pixel(x, y) == Some(LINE)), "row {y} empty");
    }
}

#[test]
fn shallow_line_has_a_pixel_on_every_column() {
    let mut c = Canvas::new(40, 20);
    c.draw_line(p(39, 3), p(0, 9), LINE);
    for x in 0..40 {
        assert!((0..20).any(|y| c.pixel(x, y) == Some(LINE)), "column {x} empty");
    }
}

#[test]
fn to_rgba_uses_palette() {
    let mut c = Canvas::new(2, 1);
    c.set(1, 0, VISITED);
    let img = c.to_rgba(&Palette::default());
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 255, 255]);
}

#[test]
fn extreme_coordinates_are_clipped_without_overflow() {
    let mut c = Canvas::new(16, 16);
    c.draw_point(p(i32::MAX, i32::MAX), 12, VISITED);
    c.draw_point(p(i32::MIN, i32::MIN), 12, VISITED);
    assert_eq!(c.count(VISITED), 0);

    c.draw_point(p(2, i32::MAX), i32::MAX, VISITED);
    assert_eq!(c.count(VISITED), 0);
}

#[test]
fn lines_toward_far_points_only_walk_the_raster() {
    let mut c = Canvas::new(16, 16);
    c.draw_line(p(4, 4), p(4, i32::MAX), LINE);
    assert_eq!(c.count(LINE), 12);

    let mut c = Canvas::new(16, 16);
    c.draw_line(p(i32::MIN, 8), p(i32::MAX, 8), LINE);
    assert_eq!(c.count(LINE), 16);

    let mut c = Canvas::new(16, 16);
    c.draw_line(p(2, 2), p(9, i32::MAX), LINE);
    assert_eq!(c.pixel(2, 2), Some(LINE));
    assert!(c.count(LINE) <= 16 * 16);
}
