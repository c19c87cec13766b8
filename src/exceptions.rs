//! ## Custom Errors for Itemset Factory
//!
//! This module defines custom error types for the Itemset Factory library.
//! It uses the `thiserror` crate to derive the `Error` trait for custom error types.
//! The `ItemsetFactoryError` enum includes variants representing different error scenarios
//! encountered throughout the library, making error handling straightforward and clear.
//!
//! The `ItemsetFactoryResult` type alias simplifies error handling by providing a convenient
//! alias for results returned by the library.
//!
//! Every error raised during encoding names the offending column in its message, and any
//! column-level error aborts the whole assembly: no partial transaction store is returned.

use thiserror::Error;

/// Errors specific to the Itemset Factory library.
#[derive(Debug, Error)]
pub enum ItemsetFactoryError {
    /// Wraps errors from DataFusion.
    #[error("DataFusion error: {0}")]
    DataFusionError(#[from] datafusion::error::DataFusionError),

    /// Wraps errors from Arrow.
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Indicates an invalid encoder configuration (e.g., a bin count below 2).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Indicates a column whose values violate the selected labeler's precondition,
    /// or a column of an unsupported Arrow data type.
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// Indicates a continuous column with no non-missing values to compute cutoffs from.
    #[error("Empty column: {0}")]
    EmptyColumn(String),

    /// Indicates the label method was called before calling fit for a stateful labeler.
    #[error("Labels requested before fit for stateful labeler")]
    FitNotCalled,
}

/// A convenient result type for Itemset Factory operations.
pub type ItemsetFactoryResult<T> = std::result::Result<T, ItemsetFactoryError>;
