pub use alignment::{Alignment, Op, Step};

pub mod alignment;
pub mod dp;
pub mod report;
pub mod scoring;
