use chrono::NaiveDate;

use crate::types::{CreditPackage, PackageBadge, Transaction, TransactionStatus};

/// Balance shown for the mock account.
pub const CREDIT_BALANCE: u32 = 85;

pub fn packages() -> Vec<CreditPackage> {
    vec![
        CreditPackage {
            id: 1,
            credits: 100,
            price_vnd: 199_000,
            price_usd_cents: 899,
            badge: None,
        },
        CreditPackage {
            id: 2,
            credits: 500,
            price_vnd: 899_000,
            price_usd_cents: 3999,
            badge: Some(PackageBadge::MostPopular),
        },
        CreditPackage {
            id: 3,
            credits: 1000,
            price_vnd: 1_599_000,
            price_usd_cents: 6999,
            badge: Some(PackageBadge::BestValue),
        },
    ]
}

pub fn find_package(id: u32) -> Option<CreditPackage> {
    packages().into_iter().find(|p| p.id == id)
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            date: NaiveDate::from_ymd_opt(2023, 11, 25).unwrap_or_default(),
            credits: 500,
            amount_vnd: 899_000,
            amount_usd_cents: 3999,
            status: TransactionStatus::Completed,
        },
        Transaction {
            id: 2,
            date: NaiveDate::from_ymd_opt(2023, 10, 12).unwrap_or_default(),
            credits: 100,
            amount_vnd: 199_000,
            amount_usd_cents: 899,
            status: TransactionStatus::Completed,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packages_have_unique_ids_and_one_of_each_badge() {
        let packs = packages();
        let mut ids: Vec<_> = packs.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), packs.len());
        let popular = packs
            .iter()
            .filter(|p| p.badge == Some(PackageBadge::MostPopular))
            .count();
        let best = packs
            .iter()
            .filter(|p| p.badge == Some(PackageBadge::BestValue))
            .count();
        assert_eq!((popular, best), (1, 1));
    }

    #[test]
    fn test_find_package() {
        assert_eq!(find_package(2).map(|p| p.credits), Some(500));
        assert!(find_package(9).is_none());
    }

    #[test]
    fn test_history_is_newest_first() {
        let history = transactions();
        assert!(history.windows(2).all(|w| w[0].date >= w[1].date));
    }
}
