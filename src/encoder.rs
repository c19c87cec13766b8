//! ## Transaction Encoder
//!
//! The encoder is the row assembler: it runs the column classifier and the matching
//! labeler over every column of a dataset, then transposes the column-wise labels into
//! row-wise itemsets, dropping the entries excluded by the missing-value policy.
//!
//! The input boundary is a DataFusion `DataFrame` (materialized via `collect`) or an
//! in-memory Arrow `RecordBatch`; the output is a [`TransactionStore`], one itemset per
//! source row in source row order, ready to hand to an association-rule miner.
//!
//! Columns are labeled independently by pure functions over their own data, so the
//! per-column work runs on the rayon thread pool; results are collected back in column
//! order, which keeps the output identical to sequential execution.

use arrow::compute::concat_batches;
use arrow::record_batch::RecordBatch;
use datafusion::prelude::*;
use rayon::prelude::*;

use crate::column::ColumnValues;
use crate::exceptions::{ItemsetFactoryError, ItemsetFactoryResult};
use crate::labelers::{ColumnLabeler, NaAction};

/// Per-invocation configuration for the encoder.
#[derive(Debug, Clone)]
pub struct EncoderOptions {
    /// Bin count for continuous columns. Must be at least 2.
    pub cutoffs: usize,
    /// Which coded value means "yes" in a boolean column.
    pub which_yes: f64,
    /// Whether missing values become an explicit `is_na` token or are dropped from the
    /// row's itemset.
    pub na_action: NaAction,
    /// Log each column's computed label vocabulary via `tracing::debug!`. Useful for
    /// debugging; has no effect on the output data.
    pub verbose_labels: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            cutoffs: 4,
            which_yes: 1.0,
            na_action: NaAction::Exclude,
            verbose_labels: false,
        }
    }
}

/// The transaction encoding of a dataset: one itemset per source row, in source row
/// order. Immutable once built; this is the contract boundary handed to the external
/// frequent-itemset miner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionStore {
    transactions: Vec<Vec<String>>,
}

impl TransactionStore {
    /// Number of itemsets, which equals the input row count.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The itemsets in source row order. Within each itemset, labels keep the column
    /// order of the source table.
    pub fn transactions(&self) -> &[Vec<String>] {
        &self.transactions
    }

    /// Consumes the store, yielding the raw list-of-itemsets shape miners expect.
    pub fn into_transactions(self) -> Vec<Vec<String>> {
        self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<String>> {
        self.transactions.iter()
    }
}

/// Converts a dataset into a [`TransactionStore`] by classifying and labeling every
/// column, then compacting each row into a sparse itemset.
#[derive(Debug)]
pub struct TransactionEncoder {
    options: EncoderOptions,
}

impl TransactionEncoder {
    /// Creates an encoder, validating the configuration up front.
    pub fn new(options: EncoderOptions) -> ItemsetFactoryResult<Self> {
        if options.cutoffs < 2 {
            return Err(ItemsetFactoryError::InvalidConfiguration(format!(
                "cutoffs must be at least 2, got {}",
                options.cutoffs
            )));
        }
        Ok(Self { options })
    }

    /// Creates an encoder with the default configuration (4 bins, `which_yes = 1`,
    /// missing values excluded).
    pub fn with_defaults() -> Self {
        Self {
            options: EncoderOptions::default(),
        }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Materializes the DataFrame and encodes it. A DataFrame that collects to zero
    /// batches produces an empty store.
    pub async fn encode(&self, df: &DataFrame) -> ItemsetFactoryResult<TransactionStore> {
        let batches = df.clone().collect().await?;
        let Some(first) = batches.first() else {
            return Ok(TransactionStore {
                transactions: Vec::new(),
            });
        };
        let batch = concat_batches(&first.schema(), &batches)?;
        self.encode_batch(&batch)
    }

    /// Encodes an in-memory record batch.
    ///
    /// Columns are processed in schema order; any column-level failure (unsupported
    /// type, empty continuous column, violated labeler precondition) aborts the whole
    /// encode with an error naming the column.
    pub fn encode_batch(&self, batch: &RecordBatch) -> ItemsetFactoryResult<TransactionStore> {
        let schema = batch.schema();
        let mut columns = Vec::with_capacity(batch.num_columns());
        for (field, array) in schema.fields().iter().zip(batch.columns()) {
            columns.push((
                field.name().clone(),
                ColumnValues::from_array(field.name(), array)?,
            ));
        }

        // Columns are independent, so labeling parallelizes freely; collecting into a
        // Vec preserves column order.
        let labeled: Vec<Vec<Option<String>>> = columns
            .par_iter()
            .map(|(title, values)| self.label_column(title, values))
            .collect::<ItemsetFactoryResult<_>>()?;

        // Transpose the column-wise labels into row-wise itemsets, dropping excluded
        // entries and preserving column order among the rest.
        let num_rows = batch.num_rows();
        let mut transactions = Vec::with_capacity(num_rows);
        for row in 0..num_rows {
            let mut itemset = Vec::new();
            for column in &labeled {
                if let Some(label) = &column[row] {
                    itemset.push(label.clone());
                }
            }
            transactions.push(itemset);
        }
        Ok(TransactionStore { transactions })
    }

    /// Classifies one column, fits the matching labeler, and labels every row.
    fn label_column(
        &self,
        title: &str,
        values: &ColumnValues,
    ) -> ItemsetFactoryResult<Vec<Option<String>>> {
        let labeler = ColumnLabeler::for_column(
            title,
            values,
            self.options.cutoffs,
            self.options.which_yes,
            self.options.na_action,
        )?;
        if self.options.verbose_labels {
            tracing::debug!(
                column = title,
                kind = ?labeler.kind(),
                vocabulary = ?labeler.vocabulary(),
                "computed label vocabulary"
            );
        }
        labeler.label(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = EncoderOptions::default();
        assert_eq!(options.cutoffs, 4);
        assert_eq!(options.which_yes, 1.0);
        assert_eq!(options.na_action, NaAction::Exclude);
        assert!(!options.verbose_labels);
    }

    #[test]
    fn test_constructor_rejects_too_few_cutoffs() {
        let options = EncoderOptions {
            cutoffs: 1,
            ..EncoderOptions::default()
        };
        let err = TransactionEncoder::new(options).unwrap_err();
        assert!(matches!(err, ItemsetFactoryError::InvalidConfiguration(_)));
    }
}
