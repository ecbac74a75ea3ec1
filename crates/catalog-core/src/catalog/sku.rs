//! Deterministic SKU derivation.
//!
//! Format: `BRAND-COLL-CATE-PROD`, four characters per segment, e.g.
//! `BLUE-AMBR-TABL-AMBR`.

const SEGMENT_LEN: usize = 4;
const PAD: char = 'X';

/// Derive the SKU for a product from its descriptive fields.
///
/// Always returns 19 characters matching `[A-Z0-9]{4}(-[A-Z0-9]{4}){3}`.
pub fn generate_sku(brand: &str, collection: &str, category: &str, product_name: &str) -> String {
    [brand, collection, category, product_name]
        .iter()
        .map(|field| segment(field))
        .collect::<Vec<_>>()
        .join("-")
}

/// Keep ASCII alphanumerics, upper-case, pad with `X`, truncate to four.
fn segment(input: &str) -> String {
    let mut seg: String = input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .take(SEGMENT_LEN)
        .collect();

    while seg.len() < SEGMENT_LEN {
        seg.push(PAD);
    }
    seg
}
