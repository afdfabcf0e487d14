//! Price resolution.
//!
//! A product's displayed price comes from one of three sources, checked in a
//! fixed priority order: an active weekly offer (absolute override), an active
//! solde (percentage or fixed discount on the sell price), or the base sell
//! price. The decision is captured as a [`PriceSource`] so the precedence is
//! explicit and testable, then turned into the [`PriceInfo`] the API serves.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{Discount, Solde, WeeklyOffer};

/// Time-window gate shared by soldes and weekly offers.
///
/// A promotion applies only while its `is_active` flag is set AND the
/// reference instant falls inside `[start_date, end_date]`, closed on both
/// ends. This mirrors the `NOW() BETWEEN start_date AND end_date` filter the
/// queries use, and must be re-evaluated on every read — activity flips as
/// time passes without any write to the row.
pub trait PromotionWindow {
    fn is_active_flag(&self) -> bool;
    fn start_date(&self) -> DateTime<Utc>;
    fn end_date(&self) -> DateTime<Utc>;

    fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active_flag() && self.start_date() <= now && now <= self.end_date()
    }
}

impl PromotionWindow for Solde {
    fn is_active_flag(&self) -> bool {
        self.is_active
    }

    fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }
}

impl PromotionWindow for WeeklyOffer {
    fn is_active_flag(&self) -> bool {
        self.is_active
    }

    fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }
}

/// The part of a weekly offer the resolver needs.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyTerms {
    pub offer_price: Decimal,
    pub description: String,
}

/// Which price source applies to a product, chosen by `select_source`.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceSource {
    Base,
    Weekly(WeeklyTerms),
    Sale(Discount),
}

/// The resolved price for one product, as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceInfo {
    pub original_price: Decimal,
    pub final_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_description: Option<String>,
}

/// Picks the applicable price source. Weekly offers override soldes, so they
/// are checked first and short-circuit.
pub fn select_source(weekly: Option<WeeklyTerms>, sale: Option<Discount>) -> PriceSource {
    if let Some(terms) = weekly {
        return PriceSource::Weekly(terms);
    }
    if let Some(discount) = sale {
        return PriceSource::Sale(discount);
    }
    PriceSource::Base
}

/// Computes the final price for a chosen source.
///
/// Percentage results round to 2 decimal places, midpoint away from zero.
/// A fixed discount larger than the sell price clamps the final price to
/// zero — such a solde is a data-entry mistake, but it must never render a
/// negative price.
pub fn apply(sell_price: Decimal, source: PriceSource) -> PriceInfo {
    match source {
        PriceSource::Base => PriceInfo {
            original_price: sell_price,
            final_price: sell_price,
            discount_type: None,
            discount_value: None,
            offer_description: None,
        },
        PriceSource::Weekly(terms) => PriceInfo {
            original_price: sell_price,
            final_price: terms.offer_price,
            discount_type: Some("weekly"),
            discount_value: None,
            offer_description: Some(terms.description),
        },
        PriceSource::Sale(Discount::Percentage(percent)) => {
            let final_price = (sell_price * (Decimal::ONE_HUNDRED - percent)
                / Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

            PriceInfo {
                original_price: sell_price,
                final_price,
                discount_type: Some("percentage"),
                discount_value: Some(percent),
                offer_description: None,
            }
        }
        PriceSource::Sale(Discount::Fixed(amount)) => {
            let mut final_price = sell_price - amount;
            if final_price < Decimal::ZERO {
                tracing::warn!(
                    "Fixed discount {} exceeds sell price {}, clamping to zero",
                    amount,
                    sell_price
                );
                final_price = Decimal::ZERO;
            }

            PriceInfo {
                original_price: sell_price,
                final_price,
                discount_type: Some("fixed"),
                discount_value: Some(amount),
                offer_description: None,
            }
        }
    }
}

/// Resolves a product's price from its sell price and the zero-or-one active
/// promotion of each kind touching it.
pub fn resolve(
    sell_price: Decimal,
    weekly: Option<WeeklyTerms>,
    sale: Option<Discount>,
) -> PriceInfo {
    apply(sell_price, select_source(weekly, sale))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::dec;

    use super::*;

    fn weekly(price: Decimal) -> Option<WeeklyTerms> {
        Some(WeeklyTerms {
            offer_price: price,
            description: "Offre de la semaine".to_string(),
        })
    }

    #[test]
    fn no_promotion_returns_base_price() {
        let info = resolve(dec!(100), None, None);

        assert_eq!(info.original_price, dec!(100));
        assert_eq!(info.final_price, dec!(100));
        assert_eq!(info.discount_type, None);
        assert_eq!(info.discount_value, None);
        assert_eq!(info.offer_description, None);
    }

    #[test]
    fn percentage_discount_applies() {
        let info = resolve(dec!(100), None, Some(Discount::Percentage(dec!(20))));

        assert_eq!(info.original_price, dec!(100));
        assert_eq!(info.final_price, dec!(80));
        assert_eq!(info.discount_type, Some("percentage"));
        assert_eq!(info.discount_value, Some(dec!(20)));
    }

    #[test]
    fn fixed_discount_applies() {
        let info = resolve(dec!(100), None, Some(Discount::Fixed(dec!(35))));

        assert_eq!(info.final_price, dec!(65));
        assert_eq!(info.discount_type, Some("fixed"));
        assert_eq!(info.discount_value, Some(dec!(35)));
    }

    #[test]
    fn weekly_offer_overrides_sell_price() {
        let info = resolve(dec!(100), weekly(dec!(65)), None);

        assert_eq!(info.original_price, dec!(100));
        assert_eq!(info.final_price, dec!(65));
        assert_eq!(info.discount_type, Some("weekly"));
        assert_eq!(info.discount_value, None);
        assert_eq!(
            info.offer_description.as_deref(),
            Some("Offre de la semaine")
        );
    }

    #[test]
    fn weekly_offer_wins_over_solde() {
        let info = resolve(
            dec!(100),
            weekly(dec!(65)),
            Some(Discount::Percentage(dec!(20))),
        );

        assert_eq!(info.final_price, dec!(65));
        assert_eq!(info.discount_type, Some("weekly"));
        // the solde's value must not leak through
        assert_eq!(info.discount_value, None);
    }

    #[test]
    fn weekly_price_is_absolute_even_above_sell_price() {
        let info = resolve(dec!(50), weekly(dec!(70)), None);

        assert_eq!(info.final_price, dec!(70));
    }

    #[test]
    fn fixed_discount_exceeding_price_clamps_to_zero() {
        let info = resolve(dec!(50), None, Some(Discount::Fixed(dec!(60))));

        assert_eq!(info.final_price, Decimal::ZERO);
        assert_eq!(info.discount_type, Some("fixed"));
    }

    #[test]
    fn percentage_result_rounds_to_two_decimals() {
        // 99.99 * 0.67 = 66.9933
        let info = resolve(dec!(99.99), None, Some(Discount::Percentage(dec!(33))));

        assert_eq!(info.final_price, dec!(66.99));
    }

    #[test]
    fn full_percentage_discount_reaches_zero() {
        let info = resolve(dec!(80), None, Some(Discount::Percentage(dec!(100))));

        assert_eq!(info.final_price, Decimal::ZERO);
    }

    #[test]
    fn source_selection_priority_is_exhaustive() {
        let terms = WeeklyTerms {
            offer_price: dec!(10),
            description: String::new(),
        };

        assert_eq!(select_source(None, None), PriceSource::Base);
        assert_eq!(
            select_source(Some(terms.clone()), None),
            PriceSource::Weekly(terms.clone())
        );
        assert_eq!(
            select_source(None, Some(Discount::Fixed(dec!(5)))),
            PriceSource::Sale(Discount::Fixed(dec!(5)))
        );
        assert_eq!(
            select_source(Some(terms.clone()), Some(Discount::Fixed(dec!(5)))),
            PriceSource::Weekly(terms)
        );
    }

    fn offer_between(start: DateTime<Utc>, end: DateTime<Utc>, is_active: bool) -> WeeklyOffer {
        WeeklyOffer {
            id: 1,
            product_id: 1,
            offer_description: "Offre".to_string(),
            offer_price: dec!(10),
            start_date: start,
            end_date: end,
            is_active,
            created_at: start,
        }
    }

    #[test]
    fn window_is_closed_on_both_ends() {
        let start = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 7, 31, 23, 59, 59).unwrap();
        let offer = offer_between(start, end, true);

        assert!(offer.is_active_at(start));
        assert!(offer.is_active_at(end));
        assert!(offer.is_active_at(Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap()));
    }

    #[test]
    fn window_excludes_instants_outside_the_interval() {
        let start = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 7, 31, 23, 59, 59).unwrap();
        let offer = offer_between(start, end, true);

        assert!(!offer.is_active_at(Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 59).unwrap()));
        assert!(!offer.is_active_at(Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn inactive_flag_overrides_the_window() {
        let start = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 7, 31, 23, 59, 59).unwrap();
        let offer = offer_between(start, end, false);

        assert!(!offer.is_active_at(Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap()));
    }
}
