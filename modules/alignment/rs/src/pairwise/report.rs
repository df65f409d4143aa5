use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::pairwise::alignment::{Alignment, Op};
use crate::pairwise::dp::{Matrix, Solution, Variant};
use crate::{Alignable, Score};

const SEPARATOR_WIDTH: usize = 40;
const CELL_WIDTH: usize = 5;

/// Human-readable report of a [`Solution`]: the score matrix followed by the reconstructed
/// alignments (or the distance for the edit distance variant).
pub struct Report<'a, S: Score, X, Y> {
    solution: &'a Solution<S>,
    x: &'a X,
    y: &'a Y,
}

impl<'a, S, X, Y> Report<'a, S, X, Y>
where
    S: Score,
    X: Alignable<Symbol = u8>,
    Y: Alignable<Symbol = u8>,
{
    pub fn new(solution: &'a Solution<S>, x: &'a X, y: &'a Y) -> Self {
        Self { solution, x, y }
    }

    fn write_matrix(&self, f: &mut Formatter<'_>, scores: &Matrix<S>) -> std::fmt::Result {
        writeln!(f, "Score matrix:")?;
        writeln!(
            f,
            "{}{}",
            " ".repeat(CELL_WIDTH + 1),
            self.y
                .symbols()
                .map(|s| format!("{:>width$}", *s as char, width = CELL_WIDTH))
                .join("")
        )?;
        for (i, row) in scores.iter_rows().enumerate() {
            let label = if i == 0 { ' ' } else { *self.x.at(i - 1) as char };
            writeln!(
                f,
                "{}{}",
                label,
                row.iter().map(|v| format!("{:>width$}", v, width = CELL_WIDTH)).join("")
            )?;
        }
        Ok(())
    }
}

fn write_alignment<S: Score>(
    f: &mut Formatter<'_>,
    index: usize,
    alignment: &Alignment<S>,
) -> std::fmt::Result {
    let markers: String = alignment
        .ops()
        .iter()
        .map(|op| if *op == Op::Match { '|' } else { ' ' })
        .collect();

    writeln!(f, "Alignment {index}:")?;
    writeln!(f, "{}", String::from_utf8_lossy(alignment.aligned1()))?;
    writeln!(f, "{markers}")?;
    writeln!(f, "{}", String::from_utf8_lossy(alignment.aligned2()))?;
    writeln!(f, "Percent identity: {:.2}%", alignment.identity())?;
    writeln!(f, "Hamming distance: {}", alignment.mismatches())?;
    writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))
}

impl<S, X, Y> Display for Report<'_, S, X, Y>
where
    S: Score,
    X: Alignable<Symbol = u8>,
    Y: Alignable<Symbol = u8>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_matrix(f, self.solution.scores())?;

        match self.solution.variant() {
            Variant::EditDistance => {
                writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;
                writeln!(f, "Levenshtein distance: {}", self.solution.score())
            }
            Variant::Local => {
                writeln!(f)?;
                for (ind, alignment) in self.solution.alignments().iter().enumerate() {
                    write_alignment(f, ind + 1, alignment)?;
                }
                writeln!(f, "Score: {}", self.solution.score())
            }
            Variant::Global => {
                writeln!(f)?;
                for (ind, alignment) in self.solution.alignments().iter().enumerate() {
                    write_alignment(f, ind + 1, alignment)?;
                }
                writeln!(
                    f,
                    "Total number of optimal alignments: {}",
                    self.solution.alignments().len()
                )
            }
        }
    }
}
