use std::fmt::Display;
use std::ops::Range;

use derive_getters::{Dissolve, Getters};

use seqsim_core_rs::num::PrimUInt;

use super::op::Op;
use super::step::Step;
use crate::pairwise::scoring::{gaps, symbols};
use crate::Score;

/// Padding symbol used for gaps in the aligned rows.
pub const GAP: u8 = b'-';

/// A single column of an alignment as collected during the traceback.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Column {
    pub op: Op,
    pub first: u8,
    pub second: u8,
}

impl Column {
    pub fn diagonal(first: u8, second: u8) -> Self {
        let op = if first == second {
            Op::Match
        } else {
            Op::Mismatch
        };
        Self { op, first, second }
    }

    /// First sequence symbol against a gap.
    pub fn up(first: u8) -> Self {
        Self {
            op: Op::GapSecond,
            first,
            second: GAP,
        }
    }

    /// Second sequence symbol against a gap.
    pub fn left(second: u8) -> Self {
        Self {
            op: Op::GapFirst,
            first: GAP,
            second,
        }
    }
}

/// A pairwise alignment between two sequences.
///
/// `seq1` and `seq2` are the half-open ranges of the aligned regions, `aligned1` and `aligned2`
/// are the padded rows (gaps are [`GAP`]) and `ops` holds one operation per column.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Alignment<S: Score> {
    score: S,
    seq1: Range<usize>,
    seq2: Range<usize>,
    aligned1: Vec<u8>,
    aligned2: Vec<u8>,
    ops: Vec<Op>,
}

impl<S: Score> Alignment<S> {
    /// Empty alignment anchored at the given position in both sequences.
    pub fn empty(score: S, seq1: usize, seq2: usize) -> Self {
        Self {
            score,
            seq1: seq1..seq1,
            seq2: seq2..seq2,
            aligned1: Vec::new(),
            aligned2: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Builds an alignment from traceback columns, stored most-recent-first.
    /// `end` is the (exclusive) end of the aligned region in both sequences.
    pub fn from_traceback(score: S, end: (usize, usize), reversed: &[Column]) -> Self {
        let mut aligned1 = Vec::with_capacity(reversed.len());
        let mut aligned2 = Vec::with_capacity(reversed.len());
        let mut ops = Vec::with_capacity(reversed.len());

        let (mut len1, mut len2) = (0, 0);
        for column in reversed.iter().rev() {
            let (c1, c2) = column.op.consumes();
            len1 += c1;
            len2 += c2;

            aligned1.push(column.first);
            aligned2.push(column.second);
            ops.push(column.op);
        }
        debug_assert!(len1 <= end.0 && len2 <= end.1);

        Self {
            score,
            seq1: (end.0 - len1)..end.0,
            seq2: (end.1 - len2)..end.1,
            aligned1,
            aligned2,
            ops,
        }
    }

    /// Checks if the alignment is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Padded length of the alignment (number of columns).
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Number of columns with identical symbols in both sequences.
    pub fn matches(&self) -> usize {
        self.ops.iter().filter(|x| **x == Op::Match).count()
    }

    /// Hamming-style distance between the padded rows: every column that is not a match.
    pub fn mismatches(&self) -> usize {
        self.len() - self.matches()
    }

    /// Percent identity, 100 * matches / length. Zero for an empty alignment.
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        100.0 * self.matches() as f64 / self.len() as f64
    }

    /// Alignment steps with consecutive identical operations collapsed.
    pub fn steps<Len: PrimUInt>(&self) -> Vec<Step<Len>> {
        Step::encode(&self.ops)
    }

    /// Returns the RLE representation of the alignment.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps::<u32>().iter())
    }

    /// Aligned regions of both sequences with all gaps removed.
    pub fn ungapped(&self) -> (Vec<u8>, Vec<u8>) {
        let mut seq1 = Vec::with_capacity(self.seq1.len());
        let mut seq2 = Vec::with_capacity(self.seq2.len());
        for ((op, s1), s2) in self.ops.iter().zip(&self.aligned1).zip(&self.aligned2) {
            let (c1, c2) = op.consumes();
            if c1 > 0 {
                seq1.push(*s1);
            }
            if c2 > 0 {
                seq2.push(*s2);
            }
        }
        (seq1, seq2)
    }

    /// Recomputes the score of the alignment column by column under the given scoring.
    pub fn rescore<Scheme>(&self, scheme: &Scheme) -> S
    where
        Scheme: symbols::Scorer<Score = S, Symbol = u8> + gaps::Scorer<Score = S>,
    {
        let (mut pos1, mut pos2) = (self.seq1.start, self.seq2.start);
        let mut total = S::zero();
        for ((op, s1), s2) in self.ops.iter().zip(&self.aligned1).zip(&self.aligned2) {
            total = total
                + match op {
                    Op::Match | Op::Mismatch => {
                        symbols::Scorer::score(scheme, pos1, s1, pos2, s2)
                    }
                    Op::GapSecond => gaps::Scorer::seq1_gap(scheme, pos1),
                    Op::GapFirst => gaps::Scorer::seq2_gap(scheme, pos2),
                };
            let (c1, c2) = op.consumes();
            pos1 += c1;
            pos2 += c2;
        }
        total
    }
}

impl<S: Score> Display for Alignment<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}[{}..{}] vs [{}..{}] ({})",
            self.score,
            self.seq1.start,
            self.seq1.end,
            self.seq2.start,
            self.seq2.end,
            self.rle()
        )
    }
}
