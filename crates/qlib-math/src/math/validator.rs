//! Precondition guards for [`Vector`] operations.
//!
//! Each guard either returns `Ok(())` or the error describing the violated
//! rule. Guards hold no state and never touch the values they inspect.

use std::any::Any;

use crate::error::{Result, VectorError};
use crate::math::number::{Number, NumberCheck};
use crate::math::vector::Vector;

fn reject(err: VectorError) -> Result<()> {
    log::debug!("guard rejected input: {}", err);
    Err(err)
}

pub fn guard_components_not_empty(components: &[Number]) -> Result<()> {
    if components.is_empty() {
        return reject(VectorError::EmptyComponents);
    }
    Ok(())
}

/// Components must be all integers or all floats.
pub fn guard_components_of_type_float_or_int(components: &[Number]) -> Result<()> {
    if components.iter().all(Number::is_float) || components.iter().all(Number::is_int) {
        Ok(())
    } else {
        reject(VectorError::MixedComponentTypes)
    }
}

pub fn guard_is_of_type_vector(object_to_check: &dyn Any) -> Result<()> {
    if !object_to_check.is::<Vector>() {
        return reject(VectorError::NotAVector);
    }
    Ok(())
}

pub fn guard_index_greater_than_zero(index: i64) -> Result<()> {
    if index <= 0 {
        return reject(VectorError::NonPositiveIndex(index));
    }
    Ok(())
}

/// `index` is 1-based; callers run [`guard_index_greater_than_zero`] first.
pub fn guard_index_within_length(index: i64, len: usize) -> Result<()> {
    match usize::try_from(index) {
        Ok(i) if i <= len => Ok(()),
        _ => reject(VectorError::IndexOutOfRange { index, len }),
    }
}

pub fn guard_equal_length_of_components(vector_a: &Vector, vector_b: &Vector) -> Result<()> {
    let expected = vector_a.get_number_of_components();
    let found = vector_b.get_number_of_components();
    if expected != found {
        return reject(VectorError::LengthMismatch { expected, found });
    }
    Ok(())
}

/// Every vector must share the length of the first one. An empty list passes.
pub fn guard_equal_length_of_components_in_list(vectors: &[Vector]) -> Result<()> {
    let Some(first) = vectors.first() else {
        return Ok(());
    };
    let expected = first.get_number_of_components();
    match vectors
        .iter()
        .map(Vector::get_number_of_components)
        .find(|&len| len != expected)
    {
        Some(found) => reject(VectorError::LengthMismatch { expected, found }),
        None => Ok(()),
    }
}

pub fn guard_is_a_number(check: &dyn NumberCheck, input_of_random_type: &dyn Any) -> Result<()> {
    if !check.is_number(input_of_random_type) {
        return reject(VectorError::NotANumber);
    }
    Ok(())
}

pub fn guard_list_of_vectors_not_empty(list_of_vectors: &[Vector]) -> Result<()> {
    if list_of_vectors.is_empty() {
        return reject(VectorError::EmptyVectorList);
    }
    Ok(())
}
