pub use delegate::Delegate;
pub use params::Params;

pub use crate::Score;

mod delegate;
pub mod gaps;
mod params;
pub mod symbols;

/// Direction of the optimisation: similarity scores are maximised, distances are minimised.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Objective {
    Similarity,
    Distance,
}

impl Objective {
    /// Returns `true` if `a` is strictly preferred over `b`.
    #[inline(always)]
    pub fn better<S: Score>(&self, a: S, b: S) -> bool {
        match self {
            Objective::Similarity => a > b,
            Objective::Distance => a < b,
        }
    }

    /// The preferred of two scores.
    #[inline(always)]
    pub fn best<S: Score>(&self, a: S, b: S) -> S {
        if self.better(b, a) { b } else { a }
    }
}

pub trait Scheme:
    gaps::Scorer<Score = <Self as Scheme>::Score>
    + symbols::Scorer<Score = <Self as Scheme>::Score, Symbol = <Self as Scheme>::Symbol>
{
    type Score: Score;
    type Symbol;

    fn objective(&self) -> Objective;
}

/// Match/mismatch scoring with linear gaps, maximised.
pub type Similarity<S> = Delegate<S, u8, symbols::Equality<S, u8>, gaps::Linear<S>>;

/// Unit-cost substitutions and gaps, minimised.
pub type Levenshtein<S> = Delegate<S, u8, symbols::UnitCost<S, u8>, gaps::Linear<S>>;

pub fn compose<ScoreType, Symbol, S, G>(
    symbols: S,
    gaps: G,
    objective: Objective,
) -> Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    Delegate::new(symbols, gaps, objective)
}

/// Similarity scoring: `equal`/`different` per diagonal column, minus `gap_penalty` per gap.
pub fn similarity<S: Score>(equal: S, different: S, gap_penalty: S) -> Similarity<S> {
    compose(
        symbols::Equality::new(equal, different),
        gaps::Linear::penalty(gap_penalty),
        Objective::Similarity,
    )
}

/// Levenshtein edit distance scoring.
pub fn levenshtein<S: Score>() -> Levenshtein<S> {
    compose(
        symbols::UnitCost::new(),
        gaps::Linear { score: S::one() },
        Objective::Distance,
    )
}
