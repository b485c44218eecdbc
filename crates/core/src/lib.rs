//! bitview-core: the same bits, many types
//!
//! This library backs a small teaching tool that shows data types are an
//! interpretation laid over raw bits, not a property of the bits themselves:
//! - The same 32-bit value written in four notations
//! - One storage cell assigned five unrelated bit patterns
//! - Each pattern read back through an explicit reinterpretation
//!
//! # Architecture
//!
//! - `notation`: radix conventions, literal rendering and parsing
//! - `literals`: per-notation literal tables for every concept
//! - `container`: the generic 32-bit cell and its `as_*` readings
//! - `report`: text output for usage and the demonstration
//!
//! # Design Principles
//!
//! - **No implicit punning**: every reinterpretation is a named method
//! - **No unsafe**: bit casts go through `from_bits` and byte arrays
//! - **Deterministic**: output depends only on the selected notation

pub mod container;
pub mod error;
pub mod literals;
pub mod notation;
pub mod report;

// Re-export commonly used types
pub use container::GenericContainer;
pub use error::{Error, Result};
pub use literals::Concept;
pub use notation::Notation;
