use derive_getters::Dissolve;
use derive_more::Constructor;

use super::{similarity, Score, Similarity};

/// Similarity scoring parameters. The gap penalty is subtracted once per gapped column.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Constructor, Dissolve)]
pub struct Params<S: Score> {
    pub match_score: S,
    pub mismatch_score: S,
    pub gap_penalty: S,
}

impl<S: Score> Params<S> {
    pub fn scheme(&self) -> Similarity<S> {
        similarity(self.match_score, self.mismatch_score, self.gap_penalty)
    }
}

impl<S: Score> Default for Params<S> {
    fn default() -> Self {
        Params {
            match_score: S::one() + S::one(),
            mismatch_score: S::zero() - S::one(),
            gap_penalty: S::one() + S::one(),
        }
    }
}
