pub use error::{Error, Which};
pub use seqsim_core_rs::alignment::Alignable;
use seqsim_core_rs::num::PrimSInt;

mod error;
pub mod pairwise;

/// Pairwise alignment score - any signed primitive integer.
pub trait Score: PrimSInt {}

impl<T: PrimSInt> Score for T {}
