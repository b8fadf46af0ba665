//! Desirability scoring helpers.
//!
//! Arbitration picks the candidate with the highest biased desirability. This
//! module provides the selection rule shared by every arbiter, kept separate
//! from any particular evaluator set so it can be tested on raw scores.

/// Clamps an un-biased desirability into `[0, 1]`.
///
/// Non-finite inputs (NaN) collapse to `0.0` so a broken scoring function can
/// never win arbitration.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Selects the index of the candidate with the strictly greatest score.
///
/// # Semantics
///
/// - Candidates are visited in iteration order
/// - A candidate replaces the current best only if its score is strictly
///   greater, so the first-seen candidate wins exact ties
/// - NaN scores never replace the current best
/// - Returns `None` only when there are no candidates
pub fn select_best<I>(scores: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;

    for (index, score) in scores.into_iter().enumerate() {
        match best {
            None => best = Some((index, score)),
            Some((_, best_score)) if score > best_score || best_score.is_nan() => {
                best = Some((index, score))
            }
            Some(_) => {}
        }
    }

    best
}
