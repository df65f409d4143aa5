use derive_getters::{Dissolve, Getters};

use super::builder::Summary;
use super::matrix::Matrix;
use super::trace::Trace;
use super::variant::Variant;
use crate::pairwise::alignment::Alignment;
use crate::Score;

/// Result of a single engine call: the filled matrices and everything reconstructed from them.
///
/// * Global: every optimal end-to-end alignment, in traceback order, plus the summary of the
///   best non-boundary cell.
/// * Local: exactly one alignment, possibly empty.
/// * Edit distance: no traceback matrix and no alignments, only the score.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Solution<S: Score> {
    variant: Variant,
    score: S,
    scores: Matrix<S>,
    trace: Option<Matrix<Trace>>,
    alignments: Vec<Alignment<S>>,
    summary: Option<Summary<S>>,
}

impl<S: Score> Solution<S> {
    pub(super) fn new(
        variant: Variant,
        score: S,
        scores: Matrix<S>,
        trace: Option<Matrix<Trace>>,
        alignments: Vec<Alignment<S>>,
        summary: Option<Summary<S>>,
    ) -> Self {
        Self {
            variant,
            score,
            scores,
            trace,
            alignments,
            summary,
        }
    }

    /// The first (or the only) reconstructed alignment.
    pub fn best(&self) -> Option<&Alignment<S>> {
        self.alignments.first()
    }
}
