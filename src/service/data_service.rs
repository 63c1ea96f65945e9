use crate::prelude::*;
use anyhow::anyhow;
use serde_json::Value;
use std::path::Path;

/// Reads one raw record source: a JSON document holding an array of row
/// objects. Column semantics are left to the store; the only contract here
/// is the array-of-rows shape.
pub async fn load_rows(path: &Path) -> Result<Vec<Value>> {
    let bytes = tokio::fs::read(path).await?;
    match serde_json::from_slice::<Value>(&bytes)? {
        Value::Array(rows) => Ok(rows),
        _ => {
            let err = format!("{} does not hold a JSON array of rows", path.display());
            tracing::error!(err);
            Err(anyhow!(err))
        }
    }
}
