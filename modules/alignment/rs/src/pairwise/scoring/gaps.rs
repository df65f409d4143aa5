use crate::pairwise::scoring::Score;

// Gap scoring function MUST be additive and context independent: every gapped column is scored alone
pub trait Scorer {
    type Score: Score;

    /// Score of the first sequence symbol at `pos` aligned against a gap.
    fn seq1_gap(&self, pos: usize) -> Self::Score;

    /// Score of the second sequence symbol at `pos` aligned against a gap.
    fn seq2_gap(&self, pos: usize) -> Self::Score;
}

pub trait PosInvariantScorer {
    type GapScore: Score;

    fn gap(&self) -> Self::GapScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::GapScore;

    #[inline(always)]
    fn seq1_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }

    #[inline(always)]
    fn seq2_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }
}

/// Linear gaps: every gapped column adds the same `score`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Linear<S: Score> {
    pub score: S,
}

impl<S: Score> PosInvariantScorer for Linear<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap(&self) -> Self::GapScore {
        self.score
    }
}

impl<S: Score> Linear<S> {
    /// Linear gaps subtracting `penalty` per gapped column.
    pub fn penalty(penalty: S) -> Self {
        Self { score: -penalty }
    }
}
