use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Solde {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub discount_percent: Option<Decimal>,
    pub discount_fixed: Option<Decimal>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A solde's discount terms, decoded from the two nullable columns.
/// The schema permits both columns to be set at once; percentage wins,
/// so the rest of the code never sees an ambiguous pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discount {
    Percentage(Decimal),
    Fixed(Decimal),
}

impl Discount {
    pub fn from_columns(percent: Option<Decimal>, fixed: Option<Decimal>) -> Option<Self> {
        if let Some(percent) = percent {
            Some(Discount::Percentage(percent))
        } else {
            fixed.map(Discount::Fixed)
        }
    }
}

impl Solde {
    pub fn discount(&self) -> Option<Discount> {
        Discount::from_columns(self.discount_percent, self.discount_fixed)
    }
}

#[derive(Debug, Serialize)]
pub struct SoldeResponse {
    #[serde(flatten)]
    pub solde: Solde,
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    fn solde(percent: Option<Decimal>, fixed: Option<Decimal>) -> Solde {
        Solde {
            id: 1,
            name: "Soldes d'été".to_string(),
            description: None,
            discount_percent: percent,
            discount_fixed: fixed,
            start_date: Utc::now(),
            end_date: Utc::now(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn decodes_percentage() {
        let discount = solde(Some(dec!(20)), None).discount();
        assert_eq!(discount, Some(Discount::Percentage(dec!(20))));
    }

    #[test]
    fn decodes_fixed() {
        let discount = solde(None, Some(dec!(15))).discount();
        assert_eq!(discount, Some(Discount::Fixed(dec!(15))));
    }

    #[test]
    fn percentage_wins_when_both_columns_are_set() {
        let discount = solde(Some(dec!(20)), Some(dec!(15))).discount();
        assert_eq!(discount, Some(Discount::Percentage(dec!(20))));
    }

    #[test]
    fn no_columns_means_no_discount() {
        assert_eq!(solde(None, None).discount(), None);
    }
}
