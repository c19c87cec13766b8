//! # Value Labelers
//!
//! The submodules contain the three labeling strategies a column can be routed to:
//!
//! - **ContinuousLabeler:** Quantile-bins a numeric column into "lessthan"/"morethan" labels.
//! - **BooleanLabeler:** Maps a {0, 1}-coded column to "yes"/"no" labels.
//! - **CategoricalLabeler:** Maps each distinct token to an "is_&lt;value&gt;" label.
//!
//! This module also holds the pieces shared by all three: the missing-value policy
//! ([`NaAction`]), the column classifier ([`classify`]), and the closed dispatch enum
//! ([`ColumnLabeler`]) that pairs a column with its fitted labeler exactly once.

pub mod boolean;
pub mod categorical;
pub mod continuous;

use crate::column::ColumnValues;
use crate::exceptions::{ItemsetFactoryError, ItemsetFactoryResult};

/// What to do with a missing value when labeling a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaAction {
    /// Emit an explicit `<title>_is_na` token.
    Label,
    /// Drop the entry from the row's itemset.
    Exclude,
}

impl Default for NaAction {
    fn default() -> Self {
        NaAction::Exclude
    }
}

/// Applies the missing-value policy for one cell: either the `is_na` token or an
/// exclusion marker (`None`).
pub(crate) fn missing_label(title: &str, na_action: NaAction) -> Option<String> {
    match na_action {
        NaAction::Label => Some(format!("{}_is_na", title)),
        NaAction::Exclude => None,
    }
}

/// The labeling strategy selected for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelerKind {
    Continuous,
    Boolean,
    Categorical,
}

/// Inspects a column's values and selects the labeling strategy.
///
/// Token columns are categorical. Numeric columns whose distinct non-missing values are
/// exactly {0, 1} are boolean; every other numeric column is continuous, including the
/// degenerate all-missing and single-valued cases. Classification is total: it never
/// errors and never mutates the column.
pub fn classify(values: &ColumnValues) -> LabelerKind {
    match values {
        ColumnValues::Tokens(_) => LabelerKind::Categorical,
        ColumnValues::Numeric(values) => {
            let mut distinct: Vec<f64> = values.iter().flatten().copied().collect();
            distinct.sort_by(f64::total_cmp);
            distinct.dedup();
            if distinct == [0.0, 1.0] {
                LabelerKind::Boolean
            } else {
                LabelerKind::Continuous
            }
        }
    }
}

/// A labeler fitted to one column.
///
/// The set of strategies is closed: exactly these three variants exist, and the variant
/// is chosen once per column by [`classify`] rather than by type inspection inside the
/// row loop.
pub enum ColumnLabeler {
    Continuous(continuous::ContinuousLabeler),
    Boolean(boolean::BooleanLabeler),
    Categorical(categorical::CategoricalLabeler),
}

impl ColumnLabeler {
    /// Classifies `values` and returns the matching labeler, already fitted to them.
    ///
    /// `cutoffs` applies to continuous columns and `which_yes` to boolean columns; the
    /// missing-value policy applies to all three strategies.
    pub fn for_column(
        title: &str,
        values: &ColumnValues,
        cutoffs: usize,
        which_yes: f64,
        na_action: NaAction,
    ) -> ItemsetFactoryResult<Self> {
        match classify(values) {
            LabelerKind::Continuous => {
                let mut labeler = continuous::ContinuousLabeler::new(title, cutoffs, na_action);
                match values {
                    ColumnValues::Numeric(values) => labeler.fit(values)?,
                    ColumnValues::Tokens(_) => unreachable!("token column classified continuous"),
                }
                Ok(ColumnLabeler::Continuous(labeler))
            }
            LabelerKind::Boolean => Ok(ColumnLabeler::Boolean(boolean::BooleanLabeler::new(
                title, which_yes, na_action,
            ))),
            LabelerKind::Categorical => {
                let mut labeler = categorical::CategoricalLabeler::new(title, na_action);
                match values {
                    ColumnValues::Tokens(values) => labeler.fit(values),
                    ColumnValues::Numeric(_) => {
                        unreachable!("numeric column classified categorical")
                    }
                }
                Ok(ColumnLabeler::Categorical(labeler))
            }
        }
    }

    /// Produces one label per row, with `None` marking entries excluded by the
    /// missing-value policy. The column must match the variant the labeler was
    /// built for; a mismatch is a `TypeMismatch` error.
    pub fn label(&self, values: &ColumnValues) -> ItemsetFactoryResult<Vec<Option<String>>> {
        match (self, values) {
            (ColumnLabeler::Continuous(labeler), ColumnValues::Numeric(values)) => {
                labeler.label(values)
            }
            (ColumnLabeler::Boolean(labeler), ColumnValues::Numeric(values)) => {
                labeler.label(values)
            }
            (ColumnLabeler::Categorical(labeler), ColumnValues::Tokens(values)) => {
                Ok(labeler.label(values))
            }
            _ => Err(ItemsetFactoryError::TypeMismatch(format!(
                "Column '{}' does not match the {:?} labeler it was paired with",
                self.title(),
                self.kind()
            ))),
        }
    }

    /// The strategy this labeler implements.
    pub fn kind(&self) -> LabelerKind {
        match self {
            ColumnLabeler::Continuous(_) => LabelerKind::Continuous,
            ColumnLabeler::Boolean(_) => LabelerKind::Boolean,
            ColumnLabeler::Categorical(_) => LabelerKind::Categorical,
        }
    }

    /// The title of the column this labeler was fitted to.
    pub fn title(&self) -> &str {
        match self {
            ColumnLabeler::Continuous(labeler) => labeler.title(),
            ColumnLabeler::Boolean(labeler) => labeler.title(),
            ColumnLabeler::Categorical(labeler) => labeler.title(),
        }
    }

    /// The label vocabulary this labeler can produce for non-missing values.
    pub fn vocabulary(&self) -> &[String] {
        match self {
            ColumnLabeler::Continuous(labeler) => labeler.vocabulary(),
            ColumnLabeler::Boolean(labeler) => labeler.vocabulary(),
            ColumnLabeler::Categorical(labeler) => labeler.vocabulary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_column_is_categorical() {
        let values = ColumnValues::Tokens(vec![Some("a".to_string()), None]);
        assert_eq!(classify(&values), LabelerKind::Categorical);
    }

    #[test]
    fn test_zero_one_column_is_boolean() {
        let values = ColumnValues::Numeric(vec![Some(0.0), Some(1.0), Some(1.0), None]);
        assert_eq!(classify(&values), LabelerKind::Boolean);
    }

    #[test]
    fn test_other_numeric_columns_are_continuous() {
        // {0, 1, 2} is not the boolean pair.
        let values = ColumnValues::Numeric(vec![Some(0.0), Some(1.0), Some(2.0)]);
        assert_eq!(classify(&values), LabelerKind::Continuous);
        // Neither is {0} alone.
        let values = ColumnValues::Numeric(vec![Some(0.0), Some(0.0)]);
        assert_eq!(classify(&values), LabelerKind::Continuous);
        // An all-missing column still routes to continuous.
        let values = ColumnValues::Numeric(vec![None, None]);
        assert_eq!(classify(&values), LabelerKind::Continuous);
    }

    #[test]
    fn test_label_rejects_mismatched_column() {
        let numeric = ColumnValues::Numeric(vec![Some(1.0), Some(2.0), Some(3.0)]);
        let labeler = ColumnLabeler::for_column("x", &numeric, 2, 1.0, NaAction::Exclude).unwrap();
        let tokens = ColumnValues::Tokens(vec![Some("a".to_string())]);
        let err = labeler.label(&tokens).unwrap_err();
        assert!(format!("{}", err).contains("Type mismatch:"));
    }
}
