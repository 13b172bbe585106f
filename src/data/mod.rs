//! Data layer: product records, catalog loading, and filtering.
//!
//! Architecture:
//! ```text
//!  products.csv / products.json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Catalog
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Catalog   │  Vec<Product>, read-only once loaded
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  gender match, floor of 3, shuffle
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod filter;
