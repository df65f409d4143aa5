use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use super::matrix::Matrix;
use super::trace::Trace;
use super::variant::Variant;
use crate::pairwise::scoring::{self, gaps, symbols, Objective};
use crate::{Alignable, Score};

/// The best non-boundary score of a global matrix and the number of cells reaching it.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve, Constructor)]
pub struct Summary<S: Score> {
    best: S,
    count: usize,
}

impl<S: Score> Summary<S> {
    fn update(summary: &mut Option<Self>, objective: Objective, score: S) {
        match summary {
            None => *summary = Some(Self::new(score, 1)),
            Some(x) if objective.better(score, x.best) => *x = Self::new(score, 1),
            Some(x) if score == x.best => x.count += 1,
            Some(_) => {}
        }
    }
}

/// Filled dynamic programming matrices of a single computation.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Matrices<S: Score> {
    scores: Matrix<S>,
    trace: Option<Matrix<Trace>>,
    summary: Option<Summary<S>>,
}

/// Fills the score matrix F and, unless the variant is score-only, the traceback matrix T.
///
/// Cells are computed row by row, each one depending on (i-1, j-1), (i-1, j) and (i, j-1) only.
/// Global cells record every tied branch, local cells record the first best branch in the
/// DIAGONAL, UP, LEFT order and are reset to zero (STOP) when all branches fall below zero.
pub fn build<S, Scheme, X, Y>(x: &X, y: &Y, scheme: &Scheme, variant: Variant) -> Matrices<S>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = u8>,
    X: Alignable<Symbol = u8>,
    Y: Alignable<Symbol = u8>,
{
    let (rows, cols) = (x.len() + 1, y.len() + 1);
    let objective = scheme.objective();

    let mut scores = Matrix::new(rows, cols, S::zero());
    let mut trace = variant
        .traces()
        .then(|| Matrix::new(rows, cols, Trace::empty()));
    let mut summary = None;

    // Boundaries
    if let Some(trace) = trace.as_mut() {
        trace[(0, 0)] = Trace::STOP;
    }
    for i in 1..rows {
        if variant != Variant::Local {
            scores[(i, 0)] = scores[(i - 1, 0)] + gaps::Scorer::seq1_gap(scheme, i - 1);
        }
        if let Some(trace) = trace.as_mut() {
            trace[(i, 0)] = match variant {
                Variant::Local => Trace::STOP,
                _ => Trace::UP,
            };
        }
    }
    for j in 1..cols {
        if variant != Variant::Local {
            scores[(0, j)] = scores[(0, j - 1)] + gaps::Scorer::seq2_gap(scheme, j - 1);
        }
        if let Some(trace) = trace.as_mut() {
            trace[(0, j)] = match variant {
                Variant::Local => Trace::STOP,
                _ => Trace::LEFT,
            };
        }
    }

    for i in 1..rows {
        let s1 = x.at(i - 1);
        for j in 1..cols {
            let diagonal = scores[(i - 1, j - 1)]
                + symbols::Scorer::score(scheme, i - 1, s1, j - 1, y.at(j - 1));
            let up = scores[(i - 1, j)] + gaps::Scorer::seq1_gap(scheme, i - 1);
            let left = scores[(i, j - 1)] + gaps::Scorer::seq2_gap(scheme, j - 1);

            let (score, moves) = match variant {
                Variant::Global => {
                    let best = objective.best(objective.best(diagonal, up), left);
                    let mut moves = Trace::empty();
                    for (candidate, flag) in
                        [(diagonal, Trace::DIAGONAL), (up, Trace::UP), (left, Trace::LEFT)]
                    {
                        if candidate == best {
                            moves |= flag;
                        }
                    }
                    Summary::update(&mut summary, objective, best);
                    (best, moves)
                }
                Variant::Local => {
                    let mut best = (diagonal, Trace::DIAGONAL);
                    if objective.better(up, best.0) {
                        best = (up, Trace::UP);
                    }
                    if objective.better(left, best.0) {
                        best = (left, Trace::LEFT);
                    }
                    // Zero wins only if it is strictly better, ties keep the branch
                    if objective.better(S::zero(), best.0) {
                        best = (S::zero(), Trace::STOP);
                    }
                    best
                }
                Variant::EditDistance => (
                    objective.best(objective.best(diagonal, up), left),
                    Trace::empty(),
                ),
            };

            scores[(i, j)] = score;
            if let Some(trace) = trace.as_mut() {
                debug_assert!(!moves.is_empty());
                trace[(i, j)] = moves;
            }
        }
    }

    log::debug!(
        "Filled {} DP matrices {}x{}, corner score {}",
        variant,
        rows,
        cols,
        scores[(rows - 1, cols - 1)]
    );

    Matrices {
        scores,
        trace,
        summary,
    }
}
