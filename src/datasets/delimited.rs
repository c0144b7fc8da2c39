//! Comma-delimited text with a header row.

use std::{io::Cursor, sync::Arc};

use arrow::{
    compute::concat_batches,
    csv::{reader::Format, ReaderBuilder},
    error::ArrowError,
    record_batch::RecordBatch,
};

use super::{DatasetError, Table};

/// Parses `bytes` as UTF-8 CSV with a header row.
///
/// Column types are inferred from every record. A record whose column count
/// differs from the header fails the whole parse.
pub fn parse_csv(name: &str, bytes: &[u8]) -> Result<Table, DatasetError> {
    let text = std::str::from_utf8(bytes).map_err(|source| DatasetError::Encoding {
        name: name.to_string(),
        source,
    })?;

    let format = Format::default().with_header(true);
    let (schema, _) = format
        .infer_schema(Cursor::new(text.as_bytes()), None)
        .map_err(|e| DatasetError::parse(name, e))?;
    if schema.fields().is_empty() {
        return Err(DatasetError::parse(
            name,
            ArrowError::CsvError("no header row".to_string()),
        ));
    }
    let schema = Arc::new(schema);

    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .build(Cursor::new(text.as_bytes()))
        .map_err(|e| DatasetError::parse(name, e))?;

    let batches = reader
        .collect::<Result<Vec<RecordBatch>, _>>()
        .map_err(|e| DatasetError::parse(name, e))?;

    let batch = concat_batches(&schema, &batches).map_err(|e| DatasetError::parse(name, e))?;

    Ok(Table::new(batch))
}
