//! # polyvec-containers
//!
//! Storage primitives shared by the polyvec polynomial representations.
//!
//! This crate provides:
//! - `Vector<T>`: an owned, resizable sequence with bounds-checked access
//! - `IndexedValue<T>`: an immutable (index, value) pair
//! - `ContainerError`: the error reported by checked accessors
//!
//! Neither type imposes an ordering on its contents. Ordering invariants
//! belong to the representation that stores them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod pair;
pub mod vector;

#[cfg(test)]
mod proptests;

pub use error::ContainerError;
pub use pair::IndexedValue;
pub use vector::Vector;
