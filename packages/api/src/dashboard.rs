use crate::connections::initial_connections;
use crate::credits::CREDIT_BALANCE;
use crate::types::UserSummary;

/// Profile of the signed-in mock account.
pub fn current_user() -> UserSummary {
    UserSummary {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        credits: CREDIT_BALANCE,
        plan: "Professional".to_string(),
        connected_accounts: initial_connections().len(),
        recent_contents: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_matches_catalogs() {
        let user = current_user();
        assert_eq!(user.credits, 85);
        assert_eq!(user.connected_accounts, 2);
        assert!(user.recent_contents.is_empty());
    }
}
