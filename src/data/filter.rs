use rand::seq::SliceRandom;
use rand::Rng;

use super::model::Product;

/// Below this many gender matches the gender filter is dropped and the whole
/// catalog is used instead.
pub const MIN_FILTERED_PRODUCTS: usize = 3;

/// Products whose `gender` equals `gender` ignoring case, in catalog order.
/// A missing or empty `gender` matches everything.
pub fn by_gender(catalog: &[Product], gender: Option<&str>) -> Vec<Product> {
    match gender.filter(|g| !g.is_empty()) {
        Some(g) => {
            let wanted = g.to_lowercase();
            catalog
                .iter()
                .filter(|p| p.gender().to_lowercase() == wanted)
                .cloned()
                .collect()
        }
        None => catalog.to_vec(),
    }
}

/// Recommendation pool: gender matches in random order.
///
/// When fewer than [`MIN_FILTERED_PRODUCTS`] products match, the full catalog
/// is shuffled and returned instead. The catalog itself is never touched;
/// truncation to a page is left to the caller.
pub fn filter<R: Rng + ?Sized>(catalog: &[Product], gender: Option<&str>, rng: &mut R) -> Vec<Product> {
    let mut picked = by_gender(catalog, gender);
    if picked.len() < MIN_FILTERED_PRODUCTS {
        picked = catalog.to_vec();
    }
    picked.shuffle(rng);
    picked
}
