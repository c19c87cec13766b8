//! ## Column Value Extraction
//!
//! This module bridges Arrow arrays to the plain value sequences the labelers operate on.
//! A column is either numeric (`Float64`, `Int64`, or `Boolean` coerced to 0/1) or a token
//! column (`Utf8`); any other Arrow data type is rejected with a `TypeMismatch` error.
//!
//! Missing values are represented as explicit `None` entries rather than sentinel values,
//! so the missing-value policy is a single branch applied uniformly across all labelers.
//! In numeric columns, `NaN` is treated as missing in addition to Arrow nulls.

use arrow::array::{Array, ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::datatypes::DataType;

use crate::exceptions::{ItemsetFactoryError, ItemsetFactoryResult};

/// Raw values of a single column, aligned by row position with all other columns.
/// Missing entries (Arrow nulls, and NaN in numeric columns) are `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    /// Values of a continuous or boolean-coded column.
    Numeric(Vec<Option<f64>>),
    /// Values of a categorical (string) column.
    Tokens(Vec<Option<String>>),
}

impl ColumnValues {
    /// Number of rows in the column, missing entries included.
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Numeric(values) => values.len(),
            ColumnValues::Tokens(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Extracts the values of an Arrow array into a typed column.
    ///
    /// Supported data types are `Float64` and `Int64` (numeric), `Boolean` (coerced to
    /// numeric 0/1 so that boolean-coded columns classify the same way regardless of
    /// physical type), and `Utf8` (tokens). `name` is only used in error messages.
    pub fn from_array(name: &str, array: &ArrayRef) -> ItemsetFactoryResult<Self> {
        match array.data_type() {
            DataType::Float64 => {
                let array = downcast::<Float64Array>(name, array)?;
                let values = (0..array.len())
                    .map(|i| {
                        if array.is_null(i) || array.value(i).is_nan() {
                            None
                        } else {
                            Some(array.value(i))
                        }
                    })
                    .collect();
                Ok(ColumnValues::Numeric(values))
            }
            DataType::Int64 => {
                let array = downcast::<Int64Array>(name, array)?;
                let values = (0..array.len())
                    .map(|i| {
                        if array.is_null(i) {
                            None
                        } else {
                            Some(array.value(i) as f64)
                        }
                    })
                    .collect();
                Ok(ColumnValues::Numeric(values))
            }
            DataType::Boolean => {
                let array = downcast::<BooleanArray>(name, array)?;
                let values = (0..array.len())
                    .map(|i| {
                        if array.is_null(i) {
                            None
                        } else {
                            Some(if array.value(i) { 1.0 } else { 0.0 })
                        }
                    })
                    .collect();
                Ok(ColumnValues::Numeric(values))
            }
            DataType::Utf8 => {
                let array = downcast::<StringArray>(name, array)?;
                let values = (0..array.len())
                    .map(|i| {
                        if array.is_null(i) {
                            None
                        } else {
                            Some(array.value(i).to_string())
                        }
                    })
                    .collect();
                Ok(ColumnValues::Tokens(values))
            }
            dt => Err(ItemsetFactoryError::TypeMismatch(format!(
                "Column '{}' has unsupported data type {:?}; expected Float64, Int64, Boolean, or Utf8",
                name, dt
            ))),
        }
    }
}

/// Downcasts an Arrow array to a concrete array type, reporting the column on failure.
fn downcast<'a, T: 'static>(name: &str, array: &'a ArrayRef) -> ItemsetFactoryResult<&'a T> {
    array.as_any().downcast_ref::<T>().ok_or_else(|| {
        ItemsetFactoryError::TypeMismatch(format!(
            "Column '{}' could not be downcast to its declared data type",
            name
        ))
    })
}
