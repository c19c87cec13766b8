//! ## Categorical Value Labeler
//!
//! Maps each distinct token in a column to a `title_is_<value>` label. Labels are keyed
//! by value, not by position: the fitted vocabulary fixes an order for inspection and
//! debugging, but a row's label depends only on the token it holds.
//!
//! The vocabulary order is the order of first appearance in the column, which is stable
//! and deterministic for a fixed input.

use std::collections::HashSet;

use crate::labelers::{missing_label, NaAction};

/// Labels a token column. `fit` collects the distinct-value vocabulary; `label` itself
/// is value-keyed and works row by row.
pub struct CategoricalLabeler {
    title: String,
    na_action: NaAction,
    /// Distinct non-missing values in order of first appearance.
    categories: Vec<String>,
    labels: Vec<String>,
}

impl CategoricalLabeler {
    pub fn new(title: &str, na_action: NaAction) -> Self {
        Self {
            title: title.to_string(),
            na_action,
            categories: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Collects the distinct non-missing values in order of first appearance and builds
    /// the label vocabulary from them.
    pub fn fit(&mut self, values: &[Option<String>]) {
        let mut seen = HashSet::new();
        for value in values.iter().flatten() {
            if seen.insert(value.clone()) {
                self.categories.push(value.clone());
            }
        }
        self.labels = self
            .categories
            .iter()
            .map(|value| format!("{}_is_{}", self.title, value))
            .collect();
    }

    /// Produces one label per row. Missing values follow the missing-value policy;
    /// every other token maps to `<title>_is_<token>`.
    pub fn label(&self, values: &[Option<String>]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|value| match value {
                None => missing_label(&self.title, self.na_action),
                Some(token) => Some(format!("{}_is_{}", self.title, token)),
            })
            .collect()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Distinct values seen during `fit`, in order of first appearance.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The fitted label vocabulary, aligned with `categories`.
    pub fn vocabulary(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn test_labels_are_value_keyed() {
        let values = tokens(&[Some("a"), Some("b"), Some("a"), None]);
        let mut labeler = CategoricalLabeler::new("title", NaAction::Exclude);
        labeler.fit(&values);
        let labeled = labeler.label(&values);
        assert_eq!(labeled[0].as_deref(), Some("title_is_a"));
        assert_eq!(labeled[1].as_deref(), Some("title_is_b"));
        assert_eq!(labeled[2].as_deref(), Some("title_is_a"));
        assert_eq!(labeled[3], None);
    }

    #[test]
    fn test_vocabulary_follows_first_appearance() {
        let values = tokens(&[Some("z"), Some("a"), Some("z"), Some("m")]);
        let mut labeler = CategoricalLabeler::new("t", NaAction::Exclude);
        labeler.fit(&values);
        assert_eq!(labeler.categories(), &["z", "a", "m"]);
        assert_eq!(
            labeler.vocabulary(),
            &[
                "t_is_z".to_string(),
                "t_is_a".to_string(),
                "t_is_m".to_string()
            ]
        );
    }

    #[test]
    fn test_na_label_policy() {
        let values = tokens(&[Some("a"), None]);
        let mut labeler = CategoricalLabeler::new("t", NaAction::Label);
        labeler.fit(&values);
        let labeled = labeler.label(&values);
        assert_eq!(labeled[1].as_deref(), Some("t_is_na"));
    }
}
