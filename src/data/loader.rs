use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{error, info, warn};
use serde_json::Value as JsonValue;

use super::model::{Catalog, Product};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a product catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with column names, one product per row
/// * `.json` – `[{ "gender": "...", "name": "...", ... }, ...]`
pub fn load_file(path: &Path) -> Result<Catalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported catalog extension: .{other}"),
    }
}

/// Load the catalog, degrading to an empty one when the file is missing or
/// unreadable. Product endpoints then simply return nothing.
pub fn load_or_empty(path: &Path) -> Catalog {
    if !path.exists() {
        warn!("Products file not found at {}", path.display());
        return Catalog::default();
    }
    match load_file(path) {
        Ok(catalog) => {
            if catalog.is_empty() {
                warn!("Products file {} has no rows", path.display());
            } else {
                info!("Loaded {} products from {}", catalog.len(), path.display());
            }
            catalog
        }
        Err(e) => {
            error!("Failed to load products: {e:#}");
            Catalog::default()
        }
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, every cell kept as text.
///
/// Rows may be shorter or longer than the header: a short row keeps only the
/// columns it has, cells past the last header are dropped.
fn load_csv(path: &Path) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut products = Vec::new();

    // Data rows are numbered from 1; the header is row 0.
    for (i, result) in reader.records().enumerate() {
        let row_no = i + 1;
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let product: Product = headers
            .iter()
            .zip(record.iter())
            .map(|(col, value)| (col.clone(), value.to_string()))
            .collect();
        products.push(product);
    }

    Ok(Catalog::from_products(products))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "id": 1, "name": "Linen Blazer", "gender": "male", "price": 89.5 },
///   ...
/// ]
/// ```
///
/// Non-string scalars are stringified; `null` becomes an empty string.
fn load_json(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut products = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let fields: BTreeMap<String, String> = obj
            .iter()
            .map(|(key, val)| (key.clone(), json_to_field(val)))
            .collect();

        products.push(Product::from_fields(fields));
    }

    Ok(Catalog::from_products(products))
}

fn json_to_field(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
