// src/extractors/mod.rs
pub mod assemble;
pub mod metrics;
pub mod navigate;
pub mod section;
pub mod table;
pub mod text;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use assemble::assemble;
#[allow(unused_imports)]
pub use navigate::{Located, NavigationStep, StepOp};
