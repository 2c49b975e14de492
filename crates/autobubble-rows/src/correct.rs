//! Edge jag correction
//!
//! Consecutive text rows rarely start and end at exactly the same column.
//! Differences smaller than a minimum step read as noise in a rectangular
//! bubble, so they are snapped away. Left and right edges are corrected in
//! two independent passes; an edge is only ever moved onto the value of a
//! neighbouring row's edge.

use autobubble_core::TextRow;

/// Classification of the step between two edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jag {
    /// The edges differ by at least the minimum step
    None,
    /// Small step, first edge greater than the second
    Positive,
    /// Small step, first edge not greater than the second
    Negative,
}

/// Classify the step between `e1` and `e2`.
///
/// A step is a jag when `|e1 - e2| < min_step`.
pub fn jag(e1: i32, e2: i32, min_step: u32) -> Jag {
    if (e1 as i64 - e2 as i64).unsigned_abs() < min_step as u64 {
        if e1 > e2 { Jag::Positive } else { Jag::Negative }
    } else {
        Jag::None
    }
}

/// How far a snapped edge travels back up the row list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Every earlier row takes the snapped value
    #[default]
    All,
    /// Stop at the first earlier row that is separated from the snapped
    /// value by a full step; that row and the rows above it keep their edge
    UntilStep,
}

/// Options for edge jag correction
#[derive(Debug, Clone, Default)]
pub struct CorrectOptions {
    /// Backward propagation rule
    pub propagation: Propagation,
}

impl CorrectOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backward propagation rule
    pub fn with_propagation(mut self, propagation: Propagation) -> Self {
        self.propagation = propagation;
        self
    }
}

/// Remove small jags between the edges of consecutive rows, in place.
///
/// Left pass, for each adjacent pair `(i, i + 1)` top to bottom:
/// - [`Jag::Negative`]: the lower row's left edge takes the upper row's value
/// - [`Jag::Positive`]: row `i` takes the lower row's value, and so does
///   every row above it
///
/// The right pass mirrors the signs. Pairs whose edges already coincide
/// are left alone. Rows are never reordered or removed, and applying the
/// correction twice gives the same result as applying it once.
///
/// # Example
/// ```
/// use autobubble_core::TextRow;
/// use autobubble_rows::correct_rows;
///
/// let mut rows = vec![
///     TextRow::new(0, 9, 0, 90),
///     TextRow::new(20, 29, 30, 90),
///     TextRow::new(40, 49, 28, 90),
/// ];
/// correct_rows(&mut rows, 3);
/// assert!(rows.iter().all(|r| r.left == 28));
/// ```
pub fn correct_rows(rows: &mut [TextRow], min_step: u32) -> &mut [TextRow] {
    correct_rows_with(rows, min_step, &CorrectOptions::default())
}

/// Like [`correct_rows`], with an explicit propagation rule.
///
/// [`Propagation::UntilStep`] keeps rows that already form a real step
/// against the snapped value, so a left edge is never carried past a
/// narrow row's right edge.
pub fn correct_rows_with<'a>(
    rows: &'a mut [TextRow],
    min_step: u32,
    options: &CorrectOptions,
) -> &'a mut [TextRow] {
    if rows.len() < 2 {
        return rows;
    }

    let propagation = options.propagation;
    correct_edge(rows, min_step, propagation, left_edge, Jag::Negative);
    correct_edge(rows, min_step, propagation, right_edge, Jag::Positive);
    rows
}

fn left_edge(row: &mut TextRow) -> &mut i32 {
    &mut row.left
}

fn right_edge(row: &mut TextRow) -> &mut i32 {
    &mut row.right
}

/// One pass over a single edge. `snap_lower_on` is the jag sign for which
/// the lower row follows the upper one; the other sign moves the upper rows.
///
/// Equal edges are skipped: in the right pass they would classify as
/// [`Jag::Negative`] and flatten every earlier row onto the tie, which a
/// second pass would then repeat on rows the first pass left stepped.
fn correct_edge(
    rows: &mut [TextRow],
    min_step: u32,
    propagation: Propagation,
    edge: fn(&mut TextRow) -> &mut i32,
    snap_lower_on: Jag,
) {
    for i in 0..rows.len() - 1 {
        let upper = *edge(&mut rows[i]);
        let lower = *edge(&mut rows[i + 1]);
        if upper == lower {
            continue;
        }
        match jag(upper, lower, min_step) {
            Jag::None => {}
            sign if sign == snap_lower_on => *edge(&mut rows[i + 1]) = upper,
            _ => snap_upward(&mut rows[..=i], lower, min_step, propagation, edge),
        }
    }
}

/// Move the last row of `rows` onto `value`, then the rows above it.
fn snap_upward(
    rows: &mut [TextRow],
    value: i32,
    min_step: u32,
    propagation: Propagation,
    edge: fn(&mut TextRow) -> &mut i32,
) {
    let (last, above) = match rows.split_last_mut() {
        Some(split) => split,
        None => return,
    };
    *edge(last) = value;

    for row in above.iter_mut().rev() {
        let e = edge(row);
        if propagation == Propagation::UntilStep && jag(*e, value, min_step) == Jag::None {
            break;
        }
        *e = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(left: i32, right: i32) -> TextRow {
        TextRow::new(0, 0, left, right)
    }

    #[test]
    fn test_jag_classification() {
        assert_eq!(jag(10, 11, 5), Jag::Negative);
        assert_eq!(jag(11, 10, 5), Jag::Positive);
        assert_eq!(jag(10, 10, 5), Jag::Negative);
        assert_eq!(jag(10, 15, 5), Jag::None);
        assert_eq!(jag(10, 11, 0), Jag::None);
    }

    #[test]
    fn test_jag_extreme_edges() {
        assert_eq!(jag(i32::MIN, i32::MAX, u32::MAX), Jag::None);
    }

    #[test]
    fn test_single_row_untouched() {
        let mut rows = vec![row(3, 9)];
        correct_rows(&mut rows, 100);
        assert_eq!(rows, vec![row(3, 9)]);
    }

    #[test]
    fn test_left_negative_snaps_lower_row() {
        let mut rows = vec![row(10, 100), row(11, 100)];
        correct_rows(&mut rows, 5);
        assert_eq!(rows[1].left, 10);
        assert_eq!(rows[0].left, 10);
    }

    #[test]
    fn test_left_positive_propagates_upward() {
        let mut rows = vec![row(20, 100), row(20, 100), row(18, 100)];
        correct_rows(&mut rows, 5);
        assert!(rows.iter().all(|r| r.left == 18));
    }

    #[test]
    fn test_right_positive_snaps_lower_row() {
        let mut rows = vec![row(0, 100), row(0, 97)];
        correct_rows(&mut rows, 5);
        assert_eq!(rows[1].right, 100);
    }

    #[test]
    fn test_right_negative_propagates_upward() {
        let mut rows = vec![row(0, 97), row(0, 97), row(0, 99)];
        correct_rows(&mut rows, 5);
        assert!(rows.iter().all(|r| r.right == 99));
    }

    #[test]
    fn test_propagation_reaches_every_earlier_row() {
        let mut rows = vec![row(0, 5), row(30, 90), row(28, 90)];
        correct_rows(&mut rows, 3);
        let lefts: Vec<i32> = rows.iter().map(|r| r.left).collect();
        assert_eq!(lefts, vec![28, 28, 28]);
    }

    #[test]
    fn test_right_propagation_reaches_every_earlier_row() {
        let mut rows = vec![row(0, 200), row(0, 100), row(0, 102)];
        correct_rows(&mut rows, 5);
        assert!(rows.iter().all(|r| r.right == 102));
    }

    #[test]
    fn test_until_step_stops_at_real_step() {
        let options = CorrectOptions::new().with_propagation(Propagation::UntilStep);
        let mut rows = vec![row(0, 5), row(30, 90), row(28, 90)];
        correct_rows_with(&mut rows, 3, &options);
        assert_eq!(rows[0], row(0, 5));
        assert_eq!(rows[1].left, 28);
        assert_eq!(rows[2].left, 28);
    }

    #[test]
    fn test_equal_right_edges_stay_idempotent() {
        // (50, 48) extends the last row to 50, leaving a tie below a step
        let mut rows = vec![row(0, 100), row(0, 50), row(0, 48)];
        correct_rows(&mut rows, 5);
        assert_eq!(rows, vec![row(0, 100), row(0, 50), row(0, 50)]);
        let once = rows.clone();
        correct_rows(&mut rows, 5);
        assert_eq!(rows, once);
    }

    #[test]
    fn test_large_steps_kept() {
        let original = vec![row(0, 100), row(30, 60), row(5, 120)];
        let mut rows = original.clone();
        correct_rows(&mut rows, 5);
        assert_eq!(rows, original);
    }
}
