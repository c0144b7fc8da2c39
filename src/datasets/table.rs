//! Immutable tabular data.

use std::fmt;

use arrow::{record_batch::RecordBatch, util::pretty::pretty_format_batches};

#[derive(Debug, Clone, PartialEq)]
/// Named columns in header order and rows in file order.
///
/// Clones share the underlying Arrow buffers, so handing a cached table to
/// several callers never copies the data and never lets one caller change
/// what another sees.
pub struct Table {
    batch: RecordBatch,
}

impl Table {
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|field| field.name().clone())
            .collect()
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = pretty_format_batches(std::slice::from_ref(&self.batch)).map_err(|_| fmt::Error)?;
        write!(f, "{}", grid)?;
        write!(f, "\n[{} rows x {} columns]", self.num_rows(), self.num_columns())
    }
}
