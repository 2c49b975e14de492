//! Ellipse fitting regression test
//!
//! Tests the circumscribed circle of a square, the optimal ellipse of a
//! single rectangular row, degenerate input, the row cap, and containment
//! of every edge point on random row lists.

use autobubble_core::{Ellipse, Point2D, TextRow};
use autobubble_rows::segment_rows;
use autobubble_shape::{
    EllipseOptions, ShapeError, edge_points, fit_ellipse, fit_ellipse_with, fit_points,
};
use autobubble_test::{RegParams, mask_from_art};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn ellipse_reg() {
    let mut rp = RegParams::new("ellipse");
    let sqrt2 = std::f64::consts::SQRT_2;

    // --- Test 1: square of side 10 centered at the origin ---
    let e = fit_ellipse(&[TextRow::new(-5, 5, -5, 5)]).expect("fit");
    rp.compare_values(0.0, e.center_x, 1e-9);
    rp.compare_values(0.0, e.center_y, 1e-9);
    rp.compare_values(10.0 * sqrt2, e.width, 1e-3);
    rp.compare_values(10.0 * sqrt2, e.height, 1e-3);

    // Same square given directly as points, each corner twice
    let corners = [(-5.0, -5.0), (5.0, -5.0), (-5.0, 5.0), (5.0, 5.0)];
    let doubled: Vec<Point2D> = corners
        .iter()
        .chain(corners.iter())
        .map(|&(x, y)| Point2D::new(x, y))
        .collect();
    let e = fit_points(&doubled).expect("fit");
    rp.compare_values(10.0 * sqrt2, e.width, 1e-3);

    // --- Test 2: a single 60x10 row keeps its aspect ratio ---
    let e = fit_ellipse(&[TextRow::new(10, 20, 30, 90)]).expect("fit");
    rp.compare_values(60.0, e.center_x, 1e-9);
    rp.compare_values(15.0, e.center_y, 1e-9);
    rp.compare_values(60.0 * sqrt2, e.width, 1e-2);
    rp.compare_values(10.0 * sqrt2, e.height, 1e-3);

    // --- Test 3: empty input draws nothing ---
    let e = fit_ellipse(&[]).expect("fit");
    rp.compare_bool(true, e == Ellipse::default());

    // --- Test 4: a one-pixel-high row has only collinear corners ---
    let result = fit_ellipse(&[TextRow::new(3, 3, 0, 10)]);
    rp.compare_bool(
        true,
        matches!(result, Err(ShapeError::NoValidEllipse { combinations: 1 })),
    );

    // --- Test 5: row cap ---
    let rows: Vec<TextRow> = (0..13)
        .map(|i| TextRow::new(i * 12, i * 12 + 8, 0, 40))
        .collect();
    rp.compare_bool(
        true,
        matches!(
            fit_ellipse(&rows),
            Err(ShapeError::TooManyRows { rows: 13, max: 12 })
        ),
    );
    let small = EllipseOptions::new().with_max_rows(Some(2));
    rp.compare_bool(true, fit_ellipse_with(&rows[..2], &small).is_ok());

    // --- Test 6: rows from a mask ---
    let mask = mask_from_art(&[
        "..................",
        "....##########....",
        "....##########....",
        "..................",
        "..##############..",
        "..##############..",
        "..................",
        ".....########.....",
        ".....########.....",
        "..................",
    ])
    .expect("art");
    let rows = segment_rows(&mask).expect("segment");
    rp.compare_values(3.0, rows.len() as f64, 0.0);
    let e = fit_ellipse(&rows).expect("fit");
    let worst = edge_points(&rows)
        .iter()
        .map(|p| e.radial(*p))
        .fold(0.0, f64::max);
    rp.compare_bool(true, worst <= 1.0 + 1e-6);
    rp.compare_bool(true, e.center_x > 2.0 && e.center_x < 16.0);

    assert!(rp.cleanup(), "ellipse regression test failed");
}

#[test]
fn ellipse_containment_reg() {
    let mut rp = RegParams::new("ellipse_containment");
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..40 {
        let n = rng.random_range(1..=5);
        let mut top = rng.random_range(0..20);
        let rows: Vec<TextRow> = (0..n)
            .map(|_| {
                let span = rng.random_range(6..14);
                let left = rng.random_range(0..20);
                let row = TextRow::new(top, top + span, left, left + rng.random_range(40..100));
                top += span + rng.random_range(2..8);
                row
            })
            .collect();

        let e = match fit_ellipse(&rows) {
            Ok(e) => e,
            Err(err) => {
                rp.compare_bool(true, false);
                eprintln!("fit failed for {rows:?}: {err}");
                continue;
            }
        };
        rp.compare_bool(false, e.is_empty());
        for p in edge_points(&rows).iter() {
            rp.compare_bool(true, e.radial(*p) <= 1.0 + 1e-6);
        }
    }

    assert!(rp.cleanup(), "ellipse containment regression test failed");
}
