//! Row segmentation regression test
//!
//! Tests band detection, tight horizontal extents, the trailing band
//! policy, and ordering/tightness properties on random masks.

use autobubble_core::{AlphaMask, OpacityMask, Rectangle, TextRow};
use autobubble_rows::{SegmentOptions, TrailingBand, correct_rows, segment_rows, segment_rows_with};
use autobubble_test::{RegParams, mask_from_art, mask_with_blocks};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn segment_reg() {
    let mut rp = RegParams::new("segment");

    // --- Test 1: single 10x4 block at (5,5)-(15,9) ---
    let mask = mask_with_blocks(30, 30, &[Rectangle::new_unchecked(5, 5, 10, 4)]);
    let rows = segment_rows(&mask).expect("segment");
    rp.compare_rows(&[TextRow::new(5, 8, 5, 15)], &rows);

    // --- Test 2: two bands separated by 20 blank rows ---
    let mask = mask_with_blocks(
        80,
        50,
        &[
            Rectangle::new_unchecked(10, 5, 50, 6),
            Rectangle::new_unchecked(20, 31, 30, 6),
        ],
    );
    let mut rows = segment_rows(&mask).expect("segment");
    let expected = [TextRow::new(5, 10, 10, 60), TextRow::new(31, 36, 20, 50)];
    rp.compare_rows(&expected, &rows);
    rp.compare_values(20.0, (rows[1].top - rows[0].bottom - 1) as f64, 0.0);

    // Edges already differ by >= 2, so correction changes nothing
    correct_rows(&mut rows, 2);
    rp.compare_rows(&expected, &rows);

    // --- Test 3: glyph-like art, bands with ragged glyphs ---
    let mask = mask_from_art(&[
        "............",
        "..#.#..##...",
        "..###..#.#..",
        "..#.#..##...",
        "............",
        "............",
        "....#####...",
        ".....#......",
        "............",
    ])
    .expect("art");
    let rows = segment_rows(&mask).expect("segment");
    rp.compare_rows(
        &[TextRow::new(1, 3, 2, 10), TextRow::new(6, 7, 4, 9)],
        &rows,
    );

    // --- Test 4: text touching the bottom edge ---
    let mask = mask_from_art(&["....", ".##.", "....", "#..#"]).expect("art");
    let dropped = segment_rows(&mask).expect("segment");
    rp.compare_rows(&[TextRow::new(1, 1, 1, 3)], &dropped);
    let closed = segment_rows_with(
        &mask,
        &SegmentOptions::new().with_trailing_band(TrailingBand::Close),
    )
    .expect("segment");
    rp.compare_rows(
        &[TextRow::new(1, 1, 1, 3), TextRow::new(3, 3, 0, 4)],
        &closed,
    );

    // --- Test 5: empty mask ---
    let rows = segment_rows(&AlphaMask::new(16, 16)).expect("segment");
    rp.compare_values(0.0, rows.len() as f64, 0.0);

    assert!(rp.cleanup(), "segment regression test failed");
}

fn random_mask(rng: &mut StdRng) -> AlphaMask {
    let width = rng.random_range(1..40u32);
    let height = rng.random_range(1..40u32);
    let mut mask = AlphaMask::new(width, height);
    let blocks = rng.random_range(0..6);
    for _ in 0..blocks {
        let x = rng.random_range(0..width) as i32;
        let y = rng.random_range(0..height) as i32;
        let w = rng.random_range(1..10);
        let h = rng.random_range(1..5);
        mask.fill_rect(&Rectangle::new_unchecked(x, y, w, h));
    }
    mask
}

#[test]
fn segment_properties_reg() {
    let mut rp = RegParams::new("segment_properties");
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let mask = random_mask(&mut rng);
        for policy in [TrailingBand::Drop, TrailingBand::Close] {
            let options = SegmentOptions::new().with_trailing_band(policy);
            let rows = segment_rows_with(&mask, &options).expect("segment");

            // Strictly increasing, separated by at least one blank row
            let ordered = rows.windows(2).all(|w| w[0].bottom + 1 < w[1].top);
            rp.compare_bool(true, ordered);

            for row in &rows {
                rp.compare_bool(true, row.top <= row.bottom && row.left < row.right);
                rp.compare_bool(true, is_tight(&mask, row));
            }

            if policy == TrailingBand::Close {
                // Every opaque pixel is covered by some row
                let covered = (0..mask.height()).all(|y| {
                    (0..mask.width()).all(|x| {
                        !mask.is_opaque(x, y)
                            || rows.iter().any(|r| {
                                (r.top..=r.bottom).contains(&(y as i32))
                                    && (r.left..r.right).contains(&(x as i32))
                            })
                    })
                });
                rp.compare_bool(true, covered);
            }
        }
    }

    assert!(rp.cleanup(), "segment properties regression test failed");
}

/// The extreme columns hold text and nothing lies outside them.
fn is_tight(mask: &AlphaMask, row: &TextRow) -> bool {
    let column_has_text =
        |x: i32| (row.top..=row.bottom).any(|y| mask.is_opaque(x as u32, y as u32));
    let outside_clear = (0..row.left)
        .chain(row.right..mask.width() as i32)
        .all(|x| !column_has_text(x));
    column_has_text(row.left) && column_has_text(row.right - 1) && outside_clear
}
