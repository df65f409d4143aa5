pub use builder::{build, Matrices, Summary};
pub use engine::{Engine, DEFAULT_CAPACITY};
pub use matrix::Matrix;
pub use solution::Solution;
pub use trace::Trace;
pub use variant::Variant;

mod builder;
mod engine;
mod matrix;
mod solution;
pub mod traceback;
mod trace;
mod variant;
