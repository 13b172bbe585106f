use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product – one row of the catalog
// ---------------------------------------------------------------------------

/// A catalog entry: untyped string fields keyed by column name.
///
/// Only `gender` is ever interpreted; every other field passes through
/// untouched. Serialises as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product {
    fields: BTreeMap<String, String>,
}

impl Product {
    pub fn from_fields(fields: BTreeMap<String, String>) -> Self {
        Product { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// The `gender` field, or `""` when the row has none.
    pub fn gender(&self) -> &str {
        self.get("gender").unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Product {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Product {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded product list
// ---------------------------------------------------------------------------

/// Loaded once at startup and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
