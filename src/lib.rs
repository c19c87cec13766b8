//! # Itemset Factory
//!
//! Itemset Factory converts a tabular dataset with mixed categorical, boolean, and
//! continuous columns (and missing values) into a transaction encoding: for each row,
//! a sparse ordered sequence of string tokens describing which discretized
//! feature-value bucket each column fell into. This is the input format expected by
//! frequent-itemset and association-rule mining algorithms, which operate on sets of
//! discrete items rather than numeric feature vectors.
//!
//! The main entry point is [`encoder::TransactionEncoder`], which accepts a DataFusion
//! `DataFrame` (or an in-memory Arrow `RecordBatch`) and produces an
//! [`encoder::TransactionStore`]. Per column, a classifier selects one of three
//! labeling strategies:
//!
//! - **Continuous** ([`labelers::continuous::ContinuousLabeler`]): quantile binning
//!   into `title_lessthan_<cutoff>` / `title_morethan_<cutoff>` labels.
//! - **Boolean** ([`labelers::boolean::BooleanLabeler`]): `title_yes` / `title_no`
//!   labels for columns coded as {0, 1}.
//! - **Categorical** ([`labelers::categorical::CategoricalLabeler`]):
//!   `title_is_<value>` labels for token columns.
//!
//! Missing values are handled uniformly by a per-invocation policy
//! ([`labelers::NaAction`]): either an explicit `title_is_na` token or exclusion from
//! the row's itemset.
//!
//! Errors are returned as `ItemsetFactoryError` and results are wrapped in
//! `ItemsetFactoryResult`. Rule mining itself, dataset loading, and any CLI are out
//! of scope; the produced store is handed to an external miner as-is.

pub mod column;
pub mod encoder;
pub mod exceptions;
pub mod labelers;
mod logging;
