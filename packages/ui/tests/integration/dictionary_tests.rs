use api::types::{Audience, ContentType, PackageBadge, Topic, TransactionStatus};
use api::{AuthError, ConnectionError};
use ui::i18n::GLOBAL;
use ui::{dictionaries, Dictionary, Lang, Translator};

fn table(name: &str) -> &'static Dictionary {
    dictionaries()
        .into_iter()
        .find(|d| d.name() == name)
        .unwrap_or_else(|| panic!("no dictionary named {name}"))
}

fn assert_resolves(table: &'static Dictionary, key: &str) {
    for lang in Lang::ALL {
        let tr = Translator::scoped(lang, table);
        assert!(
            tr.lookup(key).is_some(),
            "key {key} missing for {lang} in {}",
            table.name()
        );
    }
}

#[test]
fn test_tables_have_unique_names() {
    let mut names: Vec<_> = dictionaries().iter().map(|d| d.name()).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn test_every_table_is_well_formed() {
    for dict in dictionaries() {
        assert!(!dict.is_empty(), "{} is empty", dict.name());
        assert!(
            dict.duplicate_keys().is_empty(),
            "{} repeats {:?}",
            dict.name(),
            dict.duplicate_keys()
        );
        assert!(
            dict.incomplete_keys().is_empty(),
            "{} has incomplete {:?}",
            dict.name(),
            dict.incomplete_keys()
        );
    }
}

#[test]
fn test_local_keys_are_not_shadowed_by_global() {
    for dict in dictionaries().into_iter().skip(1) {
        let shadowed: Vec<_> = dict.keys().filter(|k| GLOBAL.contains(k)).collect();
        assert!(shadowed.is_empty(), "{} shadows {:?}", dict.name(), shadowed);
    }
}

#[test]
fn test_auth_errors_resolve_on_their_pages() {
    let login = table("login");
    assert_resolves(login, AuthError::UsernameRequired.key());
    assert_resolves(login, AuthError::PasswordRequired.key());

    let register = table("register");
    for err in [
        AuthError::FullNameRequired,
        AuthError::EmailRequired,
        AuthError::InvalidEmail,
        AuthError::PasswordRequired,
        AuthError::PasswordMismatch,
        AuthError::TermsNotAccepted,
    ] {
        assert_resolves(register, err.key());
    }

    let forgot = table("forgot_password");
    assert_resolves(forgot, AuthError::EmailRequired.key());
    assert_resolves(forgot, AuthError::InvalidEmail.key());
}

#[test]
fn test_content_options_resolve() {
    let create = table("dashboard_create_content");
    for topic in Topic::ALL {
        assert_resolves(create, topic.key());
    }
    for audience in Audience::ALL {
        assert_resolves(create, audience.key());
    }
    for kind in ContentType::ALL {
        assert_resolves(create, kind.value());
    }
}

#[test]
fn test_topic_labels() {
    let create = table("dashboard_create_content");
    let vi = Translator::scoped(Lang::Vi, create);
    let en = Translator::scoped(Lang::En, create);
    assert_eq!(vi.t(Topic::Technology.key()), "Công nghệ");
    assert_eq!(en.t(Topic::Food.key()), "Food");
    assert_eq!(vi.t(Audience::Students.key()), "Học sinh/Sinh viên");
}

#[test]
fn test_credit_labels_resolve() {
    let credits = table("dashboard_credits");
    for badge in [PackageBadge::MostPopular, PackageBadge::BestValue] {
        assert_resolves(credits, badge.key());
    }
    for status in [TransactionStatus::Completed, TransactionStatus::Pending] {
        assert_resolves(credits, status.key());
    }
    assert_resolves(credits, "credits");
}

#[test]
fn test_connection_errors_resolve() {
    let connections = table("dashboard_connections");
    for err in [
        ConnectionError::PlatformRequired,
        ConnectionError::AccountNameRequired,
        ConnectionError::NotFound(1),
    ] {
        assert_resolves(connections, err.key());
    }
}

#[test]
fn test_sidebar_labels_resolve() {
    let sidebar = table("dashboard_sidebar");
    for section in ui::DashboardSection::ALL {
        assert_resolves(sidebar, section.label_key());
    }
}

#[test]
fn test_plan_copy_resolves_globally() {
    for plan in api::pricing::plans() {
        assert!(GLOBAL.contains(plan.title_key));
        for feature in &plan.features {
            assert!(GLOBAL.contains(feature.key), "missing {}", feature.key);
        }
    }
}
