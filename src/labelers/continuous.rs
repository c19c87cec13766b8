//! ## Continuous Value Labeler
//!
//! Quantile-bins a numeric column into roughly equal-population buckets and maps each
//! value to a "lessthan"/"morethan" label relative to the computed cutoffs.
//!
//! Cutoff values are calculated by sorting the non-missing data and taking the value at
//! the 1-based position `ceil((i+1)/cutoffs * n)` for each of the `cutoffs - 1` interior
//! boundaries. Labels come out as `title_lessthan_<cutoff>` for each cutoff in ascending
//! order, plus a final `title_morethan_<last_cutoff>` for values above every cutoff.
//!
//! Degenerate inputs are handled deterministically: a column with zero non-missing
//! values fails with `EmptyColumn`, and when heavy ties (or a single distinct value)
//! produce repeated boundaries, adjacent duplicate cutoffs are collapsed so the label
//! vocabulary stays unique. Collapsing reduces the effective bucket count; with a single
//! non-missing value the labeler degenerates to one cutoff and two labels.

use crate::exceptions::{ItemsetFactoryError, ItemsetFactoryResult};
use crate::labelers::{missing_label, NaAction};

/// Labels a numeric column by quantile binning. Stateful: `fit` computes the cutoff set
/// and label vocabulary, `label` applies them row by row.
pub struct ContinuousLabeler {
    title: String,
    cutoffs: usize,
    na_action: NaAction,
    /// Ascending cutoff values, adjacent duplicates collapsed. Empty until fitted.
    bounds: Vec<f64>,
    /// One label per bucket: `bounds.len()` "lessthan" labels plus the final "morethan".
    labels: Vec<String>,
}

impl ContinuousLabeler {
    /// Creates an unfitted labeler. `cutoffs` is the requested bucket count; it is
    /// validated in `fit`.
    pub fn new(title: &str, cutoffs: usize, na_action: NaAction) -> Self {
        Self {
            title: title.to_string(),
            cutoffs,
            na_action,
            bounds: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Computes the cutoff set and label vocabulary from the column's non-missing values.
    ///
    /// Fails with `InvalidConfiguration` if `cutoffs < 2` and with `EmptyColumn` if the
    /// column has no non-missing values.
    pub fn fit(&mut self, values: &[Option<f64>]) -> ItemsetFactoryResult<()> {
        if self.cutoffs < 2 {
            return Err(ItemsetFactoryError::InvalidConfiguration(format!(
                "Column '{}': cutoffs must be at least 2, got {}",
                self.title, self.cutoffs
            )));
        }
        let mut sorted: Vec<f64> = values.iter().flatten().copied().collect();
        if sorted.is_empty() {
            return Err(ItemsetFactoryError::EmptyColumn(format!(
                "Column '{}' has no non-missing values to compute cutoffs from",
                self.title
            )));
        }
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mut bounds = Vec::with_capacity(self.cutoffs - 1);
        for i in 0..self.cutoffs - 1 {
            // 1-based position into the sorted sequence; always within 1..=n.
            let position = ((i + 1) as f64 / self.cutoffs as f64 * n as f64).ceil() as usize;
            bounds.push(sorted[position - 1]);
        }
        // Heavy ties can repeat a boundary; collapse duplicates so labels stay unique.
        bounds.dedup();

        let mut labels: Vec<String> = bounds
            .iter()
            .map(|value| format!("{}_lessthan_{}", self.title, value))
            .collect();
        labels.push(format!("{}_morethan_{}", self.title, bounds[bounds.len() - 1]));

        self.bounds = bounds;
        self.labels = labels;
        Ok(())
    }

    /// Produces one label per row. Missing values follow the missing-value policy;
    /// everything else gets the label of the first cutoff with `x <= cutoff`, ties at a
    /// boundary going to the lessthan side, and values above all cutoffs the final
    /// morethan label.
    pub fn label(&self, values: &[Option<f64>]) -> ItemsetFactoryResult<Vec<Option<String>>> {
        if self.labels.is_empty() {
            return Err(ItemsetFactoryError::FitNotCalled);
        }
        let labeled = values
            .iter()
            .map(|value| match value {
                None => missing_label(&self.title, self.na_action),
                Some(x) => {
                    let bucket = self
                        .bounds
                        .iter()
                        .position(|bound| *x <= *bound)
                        .unwrap_or(self.bounds.len());
                    Some(self.labels[bucket].clone())
                }
            })
            .collect();
        Ok(labeled)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The fitted cutoff values, ascending, adjacent duplicates collapsed.
    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// The fitted label vocabulary, in ascending bucket order.
    pub fn vocabulary(&self) -> &[String] {
        &self.labels
    }
}
