//! Geometry regression test
//!
//! Tests rectangle padding, clipping and union, rectangle lists, ellipse
//! containment and bounding rectangles, and alpha masks built from RGBA.

use autobubble_core::{AlphaMask, Ellipse, Error, OpacityMask, Point2D, PointSet, Rectangle, Rects};
use autobubble_test::RegParams;

#[test]
fn geometry_reg() {
    let mut rp = RegParams::new("geometry");

    // --- Test 1: Rectangle creation, padding and clipping ---
    let r = Rectangle::new(10, 20, 30, 5).expect("rect create");
    rp.compare_values(40.0, r.right() as f64, 0.0);
    rp.compare_values(25.0, r.bottom() as f64, 0.0);
    rp.compare_values(150.0, r.area() as f64, 0.0);
    rp.compare_bool(true, Rectangle::new(0, 0, -1, 4).is_err());

    let padded = r.pad(3, 2).expect("pad");
    rp.compare_rects(&[Rectangle::new_unchecked(7, 18, 36, 9)], &[padded]);
    let clipped = Rectangle::new_unchecked(-5, -5, 20, 10).clip(12, 100);
    rp.compare_bool(true, clipped == Some(Rectangle::new_unchecked(0, 0, 12, 5)));
    rp.compare_bool(true, Rectangle::new_unchecked(50, 50, 5, 5).clip(40, 40).is_none());
    rp.compare_bool(true, r.pad(1 << 30, 0).is_err());
    rp.compare_bool(true, r.translate(0, i32::MAX).is_err());

    // --- Test 2: Rects bounding box and containment ---
    let mut rects: Rects = [
        Rectangle::new_unchecked(0, 0, 10, 10),
        Rectangle::new_unchecked(20, 5, 10, 30),
    ]
    .into_iter()
    .collect();
    let bb = rects.bounding_box().expect("bounding box");
    rp.compare_rects(&[Rectangle::new_unchecked(0, 0, 30, 35)], &[bb]);
    rp.compare_bool(false, rects.contains_point(15, 5));
    rp.compare_bool(true, rects.contains_point(25, 30));
    rects.translate(5, 5).expect("translate");
    rp.compare_bool(true, rects.contains_point(34, 39));
    rp.compare_bool(true, Rects::new().bounding_box().is_none());

    // --- Test 3: Ellipse containment and bounds ---
    let e = Ellipse::from_radii(Point2D::new(10.0, 5.0), 4.0, 2.0);
    rp.compare_values(8.0, e.width, 0.0);
    rp.compare_values(4.0, e.height, 0.0);
    rp.compare_bool(true, e.contains(Point2D::new(14.0, 5.0)));
    rp.compare_bool(false, e.contains(Point2D::new(13.0, 6.5)));
    rp.compare_rects(&[Rectangle::new_unchecked(6, 3, 8, 4)], &[e.bounding_rect()]);
    rp.compare_bool(false, Ellipse::default().contains(Point2D::default()));

    // --- Test 4: PointSet statistics ---
    let pts: PointSet = [(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)]
        .into_iter()
        .map(|(x, y)| Point2D::new(x, y))
        .collect();
    let c = pts.centroid().expect("centroid");
    rp.compare_values(2.0, c.x, 1e-12);
    rp.compare_values(1.0, c.y, 1e-12);
    rp.compare_bool(true, pts.bounding_box() == Some((0.0, 0.0, 4.0, 2.0)));

    // --- Test 5: AlphaMask from RGBA keeps only alpha ---
    let rgba = [255, 255, 255, 0, 0, 0, 0, 1, 9, 9, 9, 255];
    let mask = AlphaMask::from_rgba(3, 1, &rgba).expect("mask");
    rp.compare_bool(false, mask.is_opaque(0, 0));
    rp.compare_bool(true, mask.is_opaque(1, 0));
    rp.compare_bool(true, mask.row_has_opaque(0));
    rp.compare_values(2.0, mask.count_opaque() as f64, 0.0);
    rp.compare_bool(true, AlphaMask::from_rgba(2, 2, &rgba).is_err());
    rp.compare_bool(
        true,
        matches!(
            AlphaMask::from_rgba(u32::MAX, u32::MAX, &rgba),
            Err(Error::InvalidDimension { .. })
        ),
    );

    assert!(rp.cleanup(), "geometry regression test failed");
}
