use std::fmt::Display;
use std::ops::{BitOr, BitOrAssign};

/// Traceback bitmask: the set of recurrence branches that produced a cell's optimum.
#[derive(Copy, Clone, Eq, PartialEq, Default, Hash)]
pub struct Trace(u8);

impl Trace {
    /// No predecessor, the traceback terminates here.
    pub const STOP: Trace = Trace(1);
    /// Substitution or match, consumes a symbol from both sequences.
    pub const DIAGONAL: Trace = Trace(2);
    /// Deletion, consumes a symbol of the first sequence (gap in the second).
    pub const UP: Trace = Trace(4);
    /// Insertion, consumes a symbol of the second sequence (gap in the first).
    pub const LEFT: Trace = Trace(8);

    /// Moves in the order they are explored during the traceback.
    pub const PRIORITY: [Trace; 3] = [Trace::DIAGONAL, Trace::UP, Trace::LEFT];

    pub const fn empty() -> Self {
        Trace(0)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, other: Trace) -> bool {
        !other.is_empty() && self.0 & other.0 == other.0
    }

    pub fn is_stop(&self) -> bool {
        self.contains(Trace::STOP)
    }

    /// Set moves in the traceback priority order.
    pub fn moves(&self) -> impl Iterator<Item = Trace> + '_ {
        Trace::PRIORITY
            .into_iter()
            .filter(move |x| self.contains(*x))
    }

    /// The predecessor cell of (row, col) for a single move.
    pub fn step(&self, row: usize, col: usize) -> (usize, usize) {
        match *self {
            Trace::DIAGONAL => (row - 1, col - 1),
            Trace::UP => (row - 1, col),
            Trace::LEFT => (row, col - 1),
            _ => unreachable!("Predecessor is defined only for single moves"),
        }
    }
}

impl BitOr for Trace {
    type Output = Trace;

    fn bitor(self, rhs: Self) -> Self::Output {
        Trace(self.0 | rhs.0)
    }
}

impl BitOrAssign for Trace {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (flag, symbol) in [
            (Trace::STOP, 'S'),
            (Trace::DIAGONAL, 'D'),
            (Trace::UP, 'U'),
            (Trace::LEFT, 'L'),
        ] {
            if self.contains(flag) {
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Trace({self})")
    }
}
