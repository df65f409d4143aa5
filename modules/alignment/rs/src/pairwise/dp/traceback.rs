use super::matrix::Matrix;
use super::trace::Trace;
use crate::pairwise::alignment::{Alignment, Column};
use crate::{Alignable, Score};

/// A pending branch of the depth-first traceback.
#[derive(Copy, Clone, Debug)]
struct Frame {
    row: usize,
    col: usize,
    // Number of columns collected before entering this cell
    depth: usize,
    // Column emitted by the move from the parent cell
    column: Option<Column>,
}

fn column<X, Y>(via: Trace, parent: (usize, usize), x: &X, y: &Y) -> Column
where
    X: Alignable<Symbol = u8>,
    Y: Alignable<Symbol = u8>,
{
    let (row, col) = parent;
    match via {
        Trace::DIAGONAL => Column::diagonal(*x.at(row - 1), *y.at(col - 1)),
        Trace::UP => Column::up(*x.at(row - 1)),
        Trace::LEFT => Column::left(*y.at(col - 1)),
        _ => unreachable!("Traceback columns are produced by single moves only"),
    }
}

/// Enumerates every optimal end-to-end path from the bottom-right corner of the traceback matrix.
///
/// Branches are explored depth-first, DIAGONAL before UP before LEFT, so the order of the returned
/// alignments is deterministic. The walk uses an explicit stack: its depth is bounded by the
/// path length rather than the call stack, but the number of paths itself can grow exponentially
/// with the number of ties.
pub fn all_optimal<S, X, Y>(scores: &Matrix<S>, trace: &Matrix<Trace>, x: &X, y: &Y) -> Vec<Alignment<S>>
where
    S: Score,
    X: Alignable<Symbol = u8>,
    Y: Alignable<Symbol = u8>,
{
    let end = (trace.rows() - 1, trace.cols() - 1);
    let score = scores[end];

    let mut result = Vec::new();
    let mut path: Vec<Column> = Vec::with_capacity(end.0 + end.1);
    let mut stack = vec![Frame {
        row: end.0,
        col: end.1,
        depth: 0,
        column: None,
    }];

    while let Some(frame) = stack.pop() {
        path.truncate(frame.depth);
        path.extend(frame.column);

        let cell = trace[(frame.row, frame.col)];
        if cell.is_stop() {
            result.push(Alignment::from_traceback(score, end, &path));
            continue;
        }
        debug_assert!(!cell.is_empty(), "Dangling traceback cell");

        // Last pushed is explored first
        for via in Trace::PRIORITY.iter().rev().filter(|x| cell.contains(**x)) {
            let (row, col) = via.step(frame.row, frame.col);
            stack.push(Frame {
                row,
                col,
                depth: path.len(),
                column: Some(column(*via, (frame.row, frame.col), x, y)),
            });
        }
    }

    log::trace!("Enumerated {} optimal path(s)", result.len());
    result
}

/// The cell where the best local alignment ends.
///
/// Rows and then columns are scanned from the bottom-right corner backwards, and a cell replaces
/// the current candidate only if its score is strictly greater. Among equal maxima the one with
/// the largest row (and then the largest column) wins. `None` if no cell scores above zero.
pub fn local_start<S: Score>(scores: &Matrix<S>) -> Option<(usize, usize)> {
    let mut best = S::zero();
    let mut start = None;
    for row in (0..scores.rows()).rev() {
        for col in (0..scores.cols()).rev() {
            if scores[(row, col)] > best {
                best = scores[(row, col)];
                start = Some((row, col));
            }
        }
    }
    start
}

/// Follows the single recorded branch from the best cell until a STOP cell is reached.
pub fn best<S, X, Y>(scores: &Matrix<S>, trace: &Matrix<Trace>, x: &X, y: &Y) -> Alignment<S>
where
    S: Score,
    X: Alignable<Symbol = u8>,
    Y: Alignable<Symbol = u8>,
{
    let end = match local_start(scores) {
        Some(end) => end,
        None => return Alignment::empty(S::zero(), 0, 0),
    };

    let mut path = Vec::new();
    let (mut row, mut col) = end;
    loop {
        let cell = trace[(row, col)];
        if cell.is_stop() {
            break;
        }
        let Some(via) = cell.moves().next() else {
            debug_assert!(false, "Dangling traceback cell ({row}, {col})");
            break;
        };
        path.push(column(via, (row, col), x, y));
        (row, col) = via.step(row, col);
    }

    Alignment::from_traceback(scores[end], end, &path)
}
