#![cfg(test)]

use crate::types::{
    Audience, ContentLength, ContentType, Lang, Platform, Topic, UnsupportedLang,
};

#[test]
fn lang_codes() {
    assert_eq!(Lang::Vi.code(), "vi");
    assert_eq!(Lang::En.code(), "en");
    assert_eq!(Lang::default(), Lang::Vi);
    assert_eq!(Lang::En.to_string(), "en");
}

#[test]
fn lang_from_code_accepts_region_tags() {
    assert_eq!(Lang::from_code("vi-VN"), Some(Lang::Vi));
    assert_eq!(Lang::from_code(" EN-us "), Some(Lang::En));
    assert_eq!(Lang::from_code("en-GB"), Some(Lang::En));
    assert_eq!(Lang::from_code("fr"), None);
    assert_eq!(Lang::from_code(""), None);
}

#[test]
fn lang_parse_rejects_unsupported() {
    assert_eq!("vi".parse::<Lang>(), Ok(Lang::Vi));
    assert_eq!(
        "fr".parse::<Lang>(),
        Err(UnsupportedLang("fr".to_string()))
    );
}

#[test]
fn lang_serializes_as_code() {
    assert_eq!(serde_json::to_string(&Lang::En).unwrap(), "\"en\"");
    let lang: Lang = serde_json::from_str("\"vi\"").unwrap();
    assert_eq!(lang, Lang::Vi);
    assert!(serde_json::from_str::<Lang>("\"fr\"").is_err());
}

#[test]
fn option_values_round_trip() {
    for topic in Topic::ALL {
        assert_eq!(Topic::from_value(topic.value()), Some(topic));
        assert!(topic.key().starts_with("topic."));
    }
    for audience in Audience::ALL {
        assert_eq!(Audience::from_value(audience.value()), Some(audience));
    }
    for kind in ContentType::ALL {
        assert_eq!(ContentType::from_value(kind.value()), Some(kind));
    }
    for length in ContentLength::ALL {
        assert_eq!(ContentLength::from_value(length.value()), Some(length));
    }
    for platform in Platform::ALL {
        assert_eq!(Platform::from_value(platform.value()), Some(platform));
    }
    assert_eq!(Topic::from_value("sports"), None);
}

#[test]
fn content_type_serializes_camel_case() {
    assert_eq!(
        serde_json::to_string(&ContentType::ProductDescription).unwrap(),
        "\"productDescription\""
    );
}

#[test]
fn only_wordpress_is_a_site() {
    assert!(Platform::WordPress.is_site());
    assert!(!Platform::Facebook.is_site());
    assert!(!Platform::TikTok.is_site());
}
