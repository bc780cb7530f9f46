//! The vector type and the guards it relies on.
//!
//! `validator` holds stateless precondition checks; numeric type checks are
//! delegated to a [`NumberCheck`] so callers can swap the rule out.
pub mod number;
pub mod validator;
pub mod vector;

pub use number::{CommonValidator, Number, NumberCheck};
pub use vector::Vector;
