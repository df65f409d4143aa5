use std::fmt::Display;

/// Recurrence used to fill the dynamic programming matrices.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Variant {
    /// Needleman-Wunsch, end-to-end alignment with all optimal paths.
    Global,
    /// Smith-Waterman, the best scoring pair of substrings.
    Local,
    /// Levenshtein distance, score only.
    EditDistance,
}

impl Variant {
    /// Whether the variant records the traceback matrix.
    pub fn traces(&self) -> bool {
        !matches!(self, Variant::EditDistance)
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Variant::Global => write!(f, "global"),
            Variant::Local => write!(f, "local"),
            Variant::EditDistance => write!(f, "edit distance"),
        }
    }
}
