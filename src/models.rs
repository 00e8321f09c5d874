//! Typed psychrometric models.
//!
//! Models are the primary public interface of this crate. They take [`uom`]
//! quantities, validate them once, and delegate the arithmetic to the fixed-unit
//! correlations in [`crate::support::psychro`].
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the computation and domain logic live. The model module re-exports the
//! parts of `core` that make up its public API.

pub mod psychrometrics;
