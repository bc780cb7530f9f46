//! qlib-math: a small validated numeric vector type.
//!
//! [`Vector`] holds a fixed, non-empty sequence of `f64` components and
//! supports componentwise arithmetic, scalar scaling, Euclidean measures and
//! aggregate statistics over lists of vectors. Every operation runs its
//! precondition guards from [`math::validator`] before touching state, so a
//! failed call never leaves a vector half-updated.
pub mod config;
pub mod error;
pub mod math;

pub use config::ToleranceConfig;
pub use error::{ErrorKind, Result, VectorError};
pub use math::{CommonValidator, Number, NumberCheck, Vector};
