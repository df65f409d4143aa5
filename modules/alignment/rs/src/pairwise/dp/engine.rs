use std::marker::PhantomData;

use eyre::Result;

use super::builder;
use super::solution::Solution;
use super::traceback;
use super::variant::Variant;
use crate::pairwise::scoring::{self, Params, Similarity};
use crate::{Alignable, Error, Score, Which};

/// Default maximum length of each input sequence.
pub const DEFAULT_CAPACITY: usize = 100;

/// Pairwise alignment engine bound to a scoring scheme.
///
/// Every call allocates fresh matrices, an engine holds no mutable state and can be shared
/// between threads as long as the scheme can.
#[derive(Clone, Debug)]
pub struct Engine<S, Scheme>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = u8>,
{
    scheme: Scheme,
    capacity: usize,
    _phantom: PhantomData<S>,
}

impl<S, Scheme> Engine<S, Scheme>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = u8>,
{
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            capacity: DEFAULT_CAPACITY,
            _phantom: PhantomData,
        }
    }

    /// Overrides the maximum accepted length of each input sequence.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn check_capacity(&self, sequence: Which, length: usize) -> Result<()> {
        if length > self.capacity {
            return Err(Error::CapacityExceeded {
                sequence,
                length,
                capacity: self.capacity,
            }
            .into());
        }
        Ok(())
    }

    /// Fills the matrices for the requested variant and reconstructs its alignments.
    ///
    /// Global and local variants use the engine's scheme. The edit distance always uses unit
    /// costs regardless of the scheme. Inputs longer than the capacity are rejected before
    /// anything is allocated.
    pub fn align<X, Y>(&self, x: &X, y: &Y, variant: Variant) -> Result<Solution<S>>
    where
        X: Alignable<Symbol = u8>,
        Y: Alignable<Symbol = u8>,
    {
        self.check_capacity(Which::First, x.len())?;
        self.check_capacity(Which::Second, y.len())?;

        log::debug!(
            "Running {} alignment for sequences of length {} and {}",
            variant,
            x.len(),
            y.len()
        );

        let solution = match variant {
            Variant::EditDistance => solve(x, y, &scoring::levenshtein::<S>(), variant),
            Variant::Global | Variant::Local => solve(x, y, &self.scheme, variant),
        };

        log::debug!(
            "{} alignment finished: score {}, {} alignment(s)",
            variant,
            solution.score(),
            solution.alignments().len()
        );
        Ok(solution)
    }

    /// Needleman-Wunsch alignment with all co-optimal paths.
    pub fn global<X, Y>(&self, x: &X, y: &Y) -> Result<Solution<S>>
    where
        X: Alignable<Symbol = u8>,
        Y: Alignable<Symbol = u8>,
    {
        self.align(x, y, Variant::Global)
    }

    /// Smith-Waterman alignment with a single best path.
    pub fn local<X, Y>(&self, x: &X, y: &Y) -> Result<Solution<S>>
    where
        X: Alignable<Symbol = u8>,
        Y: Alignable<Symbol = u8>,
    {
        self.align(x, y, Variant::Local)
    }

    /// Levenshtein distance between the two sequences.
    pub fn distance<X, Y>(&self, x: &X, y: &Y) -> Result<S>
    where
        X: Alignable<Symbol = u8>,
        Y: Alignable<Symbol = u8>,
    {
        Ok(*self.align(x, y, Variant::EditDistance)?.score())
    }
}

fn solve<S, Scheme, X, Y>(x: &X, y: &Y, scheme: &Scheme, variant: Variant) -> Solution<S>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = u8>,
    X: Alignable<Symbol = u8>,
    Y: Alignable<Symbol = u8>,
{
    let (scores, trace, summary) = builder::build(x, y, scheme, variant).dissolve();
    let corner = scores[(x.len(), y.len())];

    let (score, alignments) = match (variant, &trace) {
        (Variant::Global, Some(trace)) => {
            (corner, traceback::all_optimal(&scores, trace, x, y))
        }
        (Variant::Local, Some(trace)) => {
            let alignment = traceback::best(&scores, trace, x, y);
            (*alignment.score(), vec![alignment])
        }
        _ => (corner, Vec::new()),
    };

    if let Some(summary) = &summary {
        log::debug!(
            "Best inner cell score {} reached by {} cell(s)",
            summary.best(),
            summary.count()
        );
    }
    for alignment in &alignments {
        log::trace!("{}", alignment);
    }
    Solution::new(variant, score, scores, trace, alignments, summary)
}

impl<S: Score> Default for Engine<S, Similarity<S>> {
    fn default() -> Self {
        Params::default().into()
    }
}

impl<S: Score> From<Params<S>> for Engine<S, Similarity<S>> {
    fn from(params: Params<S>) -> Self {
        Engine::new(params.scheme())
    }
}
