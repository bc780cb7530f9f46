use std::any::Any;
use std::fmt;
use std::slice::Iter;

use crate::config::ToleranceConfig;
use crate::error::{Result, VectorError};
use crate::math::number::{CommonValidator, Number, NumberCheck};
use crate::math::validator;

/// A fixed-length, non-empty sequence of `f64` components.
///
/// Components are addressed 1-based by the index accessors. `add`,
/// `subtract` and `multiply_with_scalar` mutate the receiver in place; the
/// `*_copy` and `scaled` variants leave it untouched and return a new vector.
#[derive(Clone, PartialEq)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Build a vector from integers or floats.
    ///
    /// Fails if `components` is empty or mixes integers with floats.
    /// Integers are coerced to `f64`.
    pub fn new<I, N>(components: I) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        let numbers: Vec<Number> = components.into_iter().map(Into::into).collect();
        Ok(Self {
            components: Self::validated(&numbers)?,
        })
    }

    fn validated(numbers: &[Number]) -> Result<Vec<f64>> {
        validator::guard_components_not_empty(numbers)?;
        validator::guard_components_of_type_float_or_int(numbers)?;
        Ok(numbers.iter().map(Number::as_f64).collect())
    }

    fn set_components(&mut self, numbers: &[Number]) -> Result<()> {
        self.components = Self::validated(numbers)?;
        Ok(())
    }

    pub fn get_components(&self) -> &[f64] {
        &self.components
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.components.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.components.clone()
    }

    fn checked_offset(&self, index: i64) -> Result<usize> {
        validator::guard_index_greater_than_zero(index)?;
        validator::guard_index_within_length(index, self.components.len())?;
        // both guards passed, so 1 <= index <= len
        Ok(index as usize - 1)
    }

    /// Value of the component at the 1-based `index`.
    pub fn get_component_by_index(&self, index: i64) -> Result<f64> {
        let offset = self.checked_offset(index)?;
        Ok(self.components[offset])
    }

    /// Overwrite the component at the 1-based `index`.
    pub fn set_value_of_component(&mut self, index: i64, value: f64) -> Result<()> {
        let offset = self.checked_offset(index)?;
        self.components[offset] = value;
        Ok(())
    }

    pub fn get_number_of_components(&self) -> usize {
        self.components.len()
    }

    /// Componentwise `self += other`.
    pub fn add(&mut self, other: &Vector) -> Result<()> {
        validator::guard_equal_length_of_components(self, other)?;
        for (a_i, b_i) in self.components.iter_mut().zip(other.iter()) {
            *a_i += b_i;
        }
        Ok(())
    }

    /// Componentwise `self -= other`.
    pub fn subtract(&mut self, other: &Vector) -> Result<()> {
        validator::guard_equal_length_of_components(self, other)?;
        for (a_i, b_i) in self.components.iter_mut().zip(other.iter()) {
            *a_i -= b_i;
        }
        Ok(())
    }

    pub fn add_copy(&self, other: &Vector) -> Result<Vector> {
        let mut sum = self.clone();
        sum.add(other)?;
        Ok(sum)
    }

    pub fn subtract_copy(&self, other: &Vector) -> Result<Vector> {
        let mut difference = self.clone();
        difference.subtract(other)?;
        Ok(difference)
    }

    /// Multiply every component by `scalar`, which may be any built-in
    /// integer or float. Anything else is rejected before mutation.
    ///
    /// ```
    /// use qlib_math::Vector;
    ///
    /// let mut v = Vector::new([1, 2]).unwrap();
    /// v.multiply_with_scalar(&3).unwrap();
    /// assert_eq!(v.get_components(), &[3.0, 6.0]);
    /// assert!(v.multiply_with_scalar(&"3").is_err());
    /// ```
    pub fn multiply_with_scalar(&mut self, scalar: &dyn Any) -> Result<()> {
        self.multiply_with_scalar_using(scalar, &CommonValidator)
    }

    /// Like [`Vector::multiply_with_scalar`], with an explicit number check.
    ///
    /// A check may accept values that `Number` cannot represent; those are
    /// rejected as not-a-number all the same.
    pub fn multiply_with_scalar_using(
        &mut self,
        scalar: &dyn Any,
        check: &dyn NumberCheck,
    ) -> Result<()> {
        validator::guard_is_a_number(check, scalar)?;
        let factor = Number::from_any(scalar)
            .ok_or(VectorError::NotANumber)?
            .as_f64();
        let scaled: Vec<Number> = self
            .components
            .iter()
            .map(|c| Number::Float(c * factor))
            .collect();
        self.set_components(&scaled)
    }

    /// A new vector with every component multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Vector {
        Vector {
            components: self.components.iter().map(|c| c * factor).collect(),
        }
    }

    /// Equality against an arbitrary value; fails if `other` is not a vector.
    pub fn try_eq(&self, other: &dyn Any) -> Result<bool> {
        validator::guard_is_of_type_vector(other)?;
        Ok(other
            .downcast_ref::<Vector>()
            .map_or(false, |other| self == other))
    }

    /// Componentwise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Vector, tolerance: &ToleranceConfig) -> Result<bool> {
        validator::guard_equal_length_of_components(self, other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .all(|(&a, &b)| tolerance.accepts(a, b)))
    }

    pub fn sum_of_squares(&self) -> f64 {
        dot_scalar_f64(&self.components, &self.components)
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.sum_of_squares().sqrt()
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        validator::guard_equal_length_of_components(self, other)?;
        Ok(dot_scalar_f64(&self.components, &other.components))
    }

    pub fn squared_distance(&self, other: &Vector) -> Result<f64> {
        validator::guard_equal_length_of_components(self, other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum())
    }

    /// Euclidean distance between `self` and `other`.
    pub fn distance(&self, other: &Vector) -> Result<f64> {
        Ok(self.squared_distance(other)?.sqrt())
    }

    /// Componentwise sum of a non-empty list of equal-length vectors.
    pub fn sum_up_vectors(vectors: &[Vector]) -> Result<Vector> {
        validator::guard_list_of_vectors_not_empty(vectors)?;
        validator::guard_equal_length_of_components_in_list(vectors)?;

        let number_of_components = vectors[0].get_number_of_components();
        log::trace!(
            "summing {} vectors of {} components",
            vectors.len(),
            number_of_components
        );

        let mut sum_of_components = vec![0.0f64; number_of_components];
        for vector in vectors {
            for (acc, value) in sum_of_components.iter_mut().zip(vector.iter()) {
                *acc += value;
            }
        }

        Ok(Vector {
            components: sum_of_components,
        })
    }

    /// Componentwise mean of a non-empty list of equal-length vectors.
    /// The inputs are left untouched.
    ///
    /// The mean is the componentwise sum scaled by `1 / count`, so a sum
    /// beyond `f64::MAX` overflows to infinity before it is scaled back.
    pub fn mean_of_vectors(vectors: &[Vector]) -> Result<Vector> {
        validator::guard_list_of_vectors_not_empty(vectors)?;
        validator::guard_equal_length_of_components_in_list(vectors)?;

        let number_of_vectors = vectors.len();
        log::trace!("averaging {} vectors", number_of_vectors);

        let mut sum_of_vectors = Vector::sum_up_vectors(vectors)?;
        sum_of_vectors.multiply_with_scalar(&(1.0 / number_of_vectors as f64))?;
        Ok(sum_of_vectors)
    }
}

fn dot_scalar_f64(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Vector::new(value)
    }
}

impl TryFrom<Vec<i64>> for Vector {
    type Error = VectorError;

    fn try_from(value: Vec<i64>) -> Result<Self> {
        Vector::new(value)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(value: &[f64]) -> Result<Self> {
        Vector::new(value.iter().copied())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.components
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.components.iter().enumerate() {
            write!(f, "{:?}", value)?;
            if idx + 1 != self.components.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({})", self)
    }
}
