//! ## Boolean Value Labeler
//!
//! Maps a {0, 1}-coded numeric column to `title_yes`/`title_no` labels. Which of the two
//! codes means "yes" is configurable (`which_yes`, conventionally 1).
//!
//! The labeler is precondition-checked: the classifier only routes columns whose
//! distinct non-missing values are exactly {0, 1} here, but a direct caller handing in
//! any other value gets a `TypeMismatch` error rather than a silent mislabel.

use crate::exceptions::{ItemsetFactoryError, ItemsetFactoryResult};
use crate::labelers::{missing_label, NaAction};

/// Labels a boolean-coded column. Stateless: no fitting step is required.
pub struct BooleanLabeler {
    title: String,
    which_yes: f64,
    na_action: NaAction,
    /// Fixed vocabulary: the "no" label followed by the "yes" label.
    labels: Vec<String>,
}

impl BooleanLabeler {
    pub fn new(title: &str, which_yes: f64, na_action: NaAction) -> Self {
        Self {
            title: title.to_string(),
            which_yes,
            na_action,
            labels: vec![format!("{}_no", title), format!("{}_yes", title)],
        }
    }

    /// Produces one label per row. Missing values follow the missing-value policy; a
    /// value equal to `which_yes` gets the "yes" label and the other code the "no"
    /// label. Any non-missing value outside {0, 1} fails with `TypeMismatch`.
    pub fn label(&self, values: &[Option<f64>]) -> ItemsetFactoryResult<Vec<Option<String>>> {
        values
            .iter()
            .map(|value| match value {
                None => Ok(missing_label(&self.title, self.na_action)),
                Some(x) if *x == 0.0 || *x == 1.0 => {
                    let label = if *x == self.which_yes {
                        &self.labels[1]
                    } else {
                        &self.labels[0]
                    };
                    Ok(Some(label.clone()))
                }
                Some(x) => Err(ItemsetFactoryError::TypeMismatch(format!(
                    "Column '{}' was routed to the boolean labeler but contains value {} outside {{0, 1}}",
                    self.title, x
                ))),
            })
            .collect()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The fixed label vocabulary: `[no, yes]`.
    pub fn vocabulary(&self) -> &[String] {
        &self.labels
    }
}
