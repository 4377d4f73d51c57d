//! Foundation types for Seam.
//!
//! This crate provides the value types shared by the diff and merge engines.
//! Every other Seam crate depends on `seam-types`.
//!
//! # Key Types
//!
//! - [`Side`] — which of the two compared sequences a position refers to
//! - [`Chunk`] — a contiguous half-open span within one sequence
//! - [`Delta`] / [`DeltaKind`] — one classified difference region
//! - [`Revision`] — the ordered, navigable set of deltas of one comparison
//! - [`RangeError`] — a position outside a sequence's valid range

pub mod chunk;
pub mod delta;
pub mod error;
pub mod revision;
pub mod side;

pub use chunk::Chunk;
pub use delta::{Delta, DeltaKind};
pub use error::RangeError;
pub use revision::Revision;
pub use side::Side;
