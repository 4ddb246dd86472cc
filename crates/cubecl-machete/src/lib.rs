//! Capability queries for the Machete quantized matmul kernels.
//!
//! Machete multiplies half precision activations with prepacked 4-bit or 8-bit integer
//! weights. This crate answers which weight types, activation types and group sizes the
//! kernels support, and whether a weight shape fits the prepacked layout, so callers can
//! decide on a kernel before preparing any data.

mod config;
mod error;
mod query;
mod scalar;
mod selection;

pub use config::*;
pub use error::*;
pub use query::*;
pub use scalar::*;
pub use selection::*;
