use std::any::Any;
use std::fmt;

/// A dynamically typed numeric input: either an integer or a float.
///
/// Components arrive as `Number`s so that a sequence mixing both kinds can be
/// detected and rejected on construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Recover a `Number` from a type-erased primitive.
    ///
    /// Returns `None` for anything that is not a built-in integer or float.
    /// `u64`, `usize`, `u128` and `i128` values outside the `i64` range are
    /// carried as floats.
    pub fn from_any(value: &dyn Any) -> Option<Number> {
        macro_rules! try_int {
            ($($t:ty),*) => {
                $(
                    if let Some(v) = value.downcast_ref::<$t>() {
                        return Some(match i64::try_from(*v) {
                            Ok(i) => Number::Int(i),
                            Err(_) => Number::Float(*v as f64),
                        });
                    }
                )*
            };
        }

        if let Some(n) = value.downcast_ref::<Number>() {
            return Some(*n);
        }
        if let Some(v) = value.downcast_ref::<f64>() {
            return Some(Number::Float(*v));
        }
        if let Some(v) = value.downcast_ref::<f32>() {
            return Some(Number::Float(f64::from(*v)));
        }
        try_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
        None
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Values outside the i64 range are carried as floats, as in `from_any`.
macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    match i64::try_from(value) {
                        Ok(i) => Number::Int(i),
                        Err(_) => Number::Float(value as f64),
                    }
                }
            }
        )*
    };
}

impl_from_wide_int!(i128, isize, u64, u128, usize);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{:?}", v),
        }
    }
}

/// Decides whether a type-erased value counts as a number.
pub trait NumberCheck {
    fn is_number(&self, value: &dyn Any) -> bool;
}

impl<F> NumberCheck for F
where
    F: Fn(&dyn Any) -> bool,
{
    fn is_number(&self, value: &dyn Any) -> bool {
        self(value)
    }
}

/// Default number check: accepts every built-in integer and float type.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommonValidator;

impl NumberCheck for CommonValidator {
    fn is_number(&self, value: &dyn Any) -> bool {
        Number::from_any(value).is_some()
    }
}
