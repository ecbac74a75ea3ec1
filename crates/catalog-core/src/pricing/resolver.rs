//! Base-currency normalization and compound discount resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::Product;
use crate::error::CatalogError;
use crate::money::{format_idr, Currency, CurrencyRates};
use crate::pricing::Discount;

/// Normalize a product's list price to IDR.
///
/// Exactly one source is consulted: EUR if positive, else USD if positive,
/// else the IDR price (zero when absent). Sources are never combined.
pub fn calculate_base_idr(product: &Product, rates: &CurrencyRates) -> f64 {
    if let Some(eur) = product.price_eur.filter(|p| *p > 0.0) {
        return eur * rates.rate_for(Currency::EUR);
    }
    if let Some(usd) = product.price_usd.filter(|p| *p > 0.0) {
        return usd * rates.rate_for(Currency::USD);
    }
    product.idr_price()
}

/// Apply every discount effective at `now` multiplicatively, then round.
///
/// Two 20% discounts keep 64% of the price, not 60%. Order does not matter.
pub fn calculate_nett_price<'a, I>(
    base_amount: f64,
    discounts: I,
    now: DateTime<Utc>,
) -> Result<i64, CatalogError>
where
    I: IntoIterator<Item = &'a Discount>,
{
    if !base_amount.is_finite() || base_amount < 0.0 {
        return Err(CatalogError::InvalidAmount(base_amount));
    }

    let mut multiplier = 1.0;
    for discount in discounts.into_iter().filter(|d| d.is_effective(now)) {
        discount.validate()?;
        multiplier *= discount.retained_fraction();
    }

    Ok((base_amount * multiplier).round() as i64)
}

/// Price information shown alongside a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Base price in IDR before discounts.
    pub base_idr: i64,
    /// Price in IDR after effective discounts.
    pub final_idr: i64,
    /// Effective discounts, e.g. "20% + 10%". Empty when none apply.
    pub discount_display: String,
}

impl PriceBreakdown {
    pub fn has_discount(&self) -> bool {
        !self.discount_display.is_empty()
    }

    pub fn savings(&self) -> i64 {
        self.base_idr - self.final_idr
    }

    pub fn display_final(&self) -> String {
        format_idr(self.final_idr)
    }
}

/// Look up the discounts a product references, in id order.
///
/// Ids with no matching discount are skipped.
pub fn resolve_discounts<'a>(product: &Product, discounts: &'a [Discount]) -> Vec<&'a Discount> {
    product
        .discount_ids
        .iter()
        .filter_map(|id| {
            let found = discounts.iter().find(|d| &d.id == id);
            if found.is_none() {
                warn!(product = %product.id, discount = %id, "Product references unknown discount");
            }
            found
        })
        .collect()
}

/// Full price breakdown for a product at instant `now`.
pub fn price_product(
    product: &Product,
    discounts: &[Discount],
    rates: &CurrencyRates,
    now: DateTime<Utc>,
) -> Result<PriceBreakdown, CatalogError> {
    let base = calculate_base_idr(product, rates);
    let attached = resolve_discounts(product, discounts);
    let final_idr = calculate_nett_price(base, attached.iter().copied(), now)?;

    let discount_display = attached
        .iter()
        .filter(|d| d.is_effective(now))
        .map(|d| d.label())
        .collect::<Vec<_>>()
        .join(" + ");

    Ok(PriceBreakdown {
        base_idr: base.round() as i64,
        final_idr,
        discount_display,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    fn live(id: &str, value: f64) -> Discount {
        Discount::percentage(id, value, now() - Duration::days(7), now() + Duration::days(7))
    }

    fn none() -> &'static [Discount] {
        &[]
    }

    fn product() -> Product {
        Product::new("p-1", "GULLO", "Sofa", "Restart", "Restart Sofa", now())
    }

    #[test]
    fn test_compound_discounts() {
        let stacked = [live("a", 20.0), live("b", 20.0)];
        assert_eq!(calculate_nett_price(1_000_000.0, &stacked, now()).unwrap(), 640_000);

        let single = [live("c", 40.0)];
        assert_eq!(calculate_nett_price(1_000_000.0, &single, now()).unwrap(), 600_000);
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = [live("a", 15.0), live("b", 35.0), live("c", 5.0)];
        let backward = [live("c", 5.0), live("b", 35.0), live("a", 15.0)];
        assert_eq!(
            calculate_nett_price(2_345_678.0, &forward, now()).unwrap(),
            calculate_nett_price(2_345_678.0, &backward, now()).unwrap()
        );
    }

    #[test]
    fn test_expired_and_inactive_discounts_ignored() {
        let expired = Discount::percentage("old", 50.0, now() - Duration::days(30), now() - Duration::days(1));
        let mut inactive = live("off", 50.0);
        inactive.is_active = false;
        let upcoming = Discount::percentage("soon", 50.0, now() + Duration::days(1), now() + Duration::days(30));

        let discounts = [expired, inactive, upcoming, live("on", 10.0)];
        assert_eq!(calculate_nett_price(1_000_000.0, &discounts, now()).unwrap(), 900_000);
    }

    #[test]
    fn test_no_discounts_rounds_base() {
        assert_eq!(calculate_nett_price(1_234.5, none(), now()).unwrap(), 1_235);
        assert_eq!(calculate_nett_price(0.0, none(), now()).unwrap(), 0);
    }

    #[test]
    fn test_contract_violations() {
        assert_eq!(
            calculate_nett_price(-1.0, none(), now()),
            Err(CatalogError::InvalidAmount(-1.0))
        );
        assert!(calculate_nett_price(f64::NAN, none(), now()).is_err());

        let negative = [live("neg", -10.0)];
        assert!(matches!(
            calculate_nett_price(1_000.0, &negative, now()),
            Err(CatalogError::InvalidDiscountValue { .. })
        ));
    }

    #[test]
    fn test_currency_precedence() {
        let rates = CurrencyRates::new(17_000.0, 16_000.0).unwrap();
        let mut p = product();
        p.price_eur = Some(10.0);
        p.price_usd = Some(5.0);
        p.price_idr = Some(999_999.0);
        assert_eq!(calculate_base_idr(&p, &rates), 170_000.0);

        p.price_eur = Some(0.0);
        assert_eq!(calculate_base_idr(&p, &rates), 80_000.0);

        p.price_usd = None;
        assert_eq!(calculate_base_idr(&p, &rates), 999_999.0);

        p.price_idr = None;
        assert_eq!(calculate_base_idr(&p, &rates), 0.0);
    }

    #[test]
    fn test_price_product_breakdown() {
        let rates = CurrencyRates::new(17_000.0, 16_000.0).unwrap();
        let mut p = product();
        p.price_eur = Some(100.0);
        p.discount_ids.insert("a-summer".into());
        p.discount_ids.insert("b-member".into());
        p.discount_ids.insert("z-missing".into());

        let discounts = vec![live("b-member", 10.0), live("a-summer", 20.0), live("unrelated", 50.0)];
        let breakdown = price_product(&p, &discounts, &rates, now()).unwrap();

        assert_eq!(breakdown.base_idr, 1_700_000);
        assert_eq!(breakdown.final_idr, 1_224_000);
        assert_eq!(breakdown.discount_display, "20% + 10%");
        assert_eq!(breakdown.savings(), 476_000);
        assert_eq!(breakdown.display_final(), "Rp 1.224.000");
        assert!(breakdown.has_discount());
    }

    #[test]
    fn test_price_product_without_discounts() {
        let mut p = product();
        p.price_idr = Some(5_000_000.0);

        let breakdown = price_product(&p, &[], &CurrencyRates::default(), now()).unwrap();
        assert_eq!(breakdown.base_idr, 5_000_000);
        assert_eq!(breakdown.final_idr, 5_000_000);
        assert!(!breakdown.has_discount());
        assert_eq!(breakdown.savings(), 0);
    }
}
