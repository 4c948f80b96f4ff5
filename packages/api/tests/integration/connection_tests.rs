use api::types::{ConnectionDetails, NewConnection, Platform};
use api::{ConnectionBook, ConnectionError};

fn draft(platform: Option<Platform>, account_name: &str) -> NewConnection {
    NewConnection {
        platform,
        account_name: account_name.to_string(),
        details: ConnectionDetails {
            url: Some("https://shop.example".to_string()),
            username: "owner".to_string(),
            api_key: "key".to_string(),
            api_secret: Some("secret".to_string()),
        },
        auto_post: true,
    }
}

#[test]
fn test_seeded_book_has_two_accounts() {
    let book = ConnectionBook::seeded();
    assert_eq!(book.len(), 2);
    assert!(book.get(1).unwrap().auto_post);
    assert!(!book.get(2).unwrap().auto_post);
}

#[test]
fn test_new_id_is_max_plus_one() {
    let mut book = ConnectionBook::seeded();
    book.remove(1).unwrap();
    let id = book.add(&draft(Some(Platform::Twitter), "@scribe")).unwrap();
    assert_eq!(id, 3);

    let mut empty = ConnectionBook::default();
    assert_eq!(empty.add(&draft(Some(Platform::TikTok), "scribe")).unwrap(), 1);
}

#[test]
fn test_add_requires_platform_and_account_name() {
    let mut book = ConnectionBook::seeded();
    assert_eq!(
        book.add(&draft(None, "acct")),
        Err(ConnectionError::PlatformRequired)
    );
    assert_eq!(
        book.add(&draft(Some(Platform::Facebook), "  ")),
        Err(ConnectionError::AccountNameRequired)
    );
    assert_eq!(book.len(), 2);
}

#[test]
fn test_add_keeps_only_platform_fields() {
    let mut book = ConnectionBook::default();
    let site = book.add(&draft(Some(Platform::WordPress), "shop")).unwrap();
    let social = book.add(&draft(Some(Platform::Facebook), "page")).unwrap();

    let site = book.get(site).unwrap();
    assert_eq!(site.details.url.as_deref(), Some("https://shop.example"));
    assert_eq!(site.details.api_secret, None);

    let social = book.get(social).unwrap();
    assert_eq!(social.details.url, None);
    assert_eq!(social.details.api_secret.as_deref(), Some("secret"));
}

#[test]
fn test_toggle_and_remove() {
    let mut book = ConnectionBook::seeded();
    assert_eq!(book.toggle_auto_post(2), Ok(true));
    assert_eq!(book.toggle_auto_post(2), Ok(false));
    assert_eq!(book.toggle_auto_post(42), Err(ConnectionError::NotFound(42)));

    let removed = book.remove(1).unwrap();
    assert_eq!(removed.account_name, "myblog.com");
    assert!(book.get(1).is_none());
    assert_eq!(book.remove(1), Err(ConnectionError::NotFound(1)));
}
