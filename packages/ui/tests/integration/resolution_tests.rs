use ui::i18n::GLOBAL;
use ui::{lookup, t, Dictionary, Entry, Lang, Translator};

static LOGIN_PAGE: Dictionary = Dictionary::new(
    "login_page",
    &[(
        "loginTitle",
        Entry::new("Đăng nhập vào tài khoản", "Log in to your account"),
    )],
);

#[test]
fn test_every_global_key_resolves_to_its_stored_string() {
    for lang in Lang::ALL {
        for key in GLOBAL.keys() {
            let stored = GLOBAL.lookup(key, lang).unwrap();
            assert_eq!(t(lang, key), stored, "key={key} lang={lang}");
            assert_eq!(lookup(lang, key), Some(stored));
        }
    }
}

#[test]
fn test_login_resolves_per_language() {
    assert_eq!(t(Lang::En, "login"), "Login");
    assert_eq!(t(Lang::Vi, "login"), "Đăng nhập");
    assert_eq!(t(Lang::En, "unknownKey"), "unknownKey");
}

#[test]
fn test_absent_key_falls_back_to_itself() {
    for lang in Lang::ALL {
        assert_eq!(t(lang, "definitelyNotAKey"), "definitelyNotAKey");
        assert_eq!(lookup(lang, "definitelyNotAKey"), None);
        assert_eq!(t(lang, ""), "");
    }
}

#[test]
fn test_scoped_resolver_reaches_local_table() {
    assert!(!GLOBAL.contains("loginTitle"));
    let en = Translator::scoped(Lang::En, &LOGIN_PAGE);
    assert_eq!(en.t("loginTitle"), "Log in to your account");
    let vi = Translator::scoped(Lang::Vi, &LOGIN_PAGE);
    assert_eq!(vi.t("loginTitle"), "Đăng nhập vào tài khoản");
}

#[test]
fn test_scoped_resolver_still_prefers_global() {
    let en = Translator::scoped(Lang::En, &LOGIN_PAGE);
    assert_eq!(en.t("register"), t(Lang::En, "register"));
}

#[test]
fn test_scoped_resolver_falls_back_to_key() {
    let en = Translator::scoped(Lang::En, &LOGIN_PAGE);
    assert_eq!(en.t("nowhere"), "nowhere");
    assert_eq!(en.lookup("nowhere"), None);
}

#[test]
fn test_resolution_is_stable() {
    let tr = Translator::scoped(Lang::Vi, &LOGIN_PAGE);
    for key in ["login", "loginTitle", "missing"] {
        assert_eq!(tr.t(key), tr.t(key));
    }
}

#[test]
fn test_translator_for_new_language_produces_new_strings() {
    let before = Translator::scoped(Lang::Vi, &LOGIN_PAGE);
    let after = Translator::scoped(Lang::En, &LOGIN_PAGE);
    assert_eq!(before.t("heroTitle"), GLOBAL.lookup("heroTitle", Lang::Vi).unwrap());
    assert_eq!(after.t("heroTitle"), GLOBAL.lookup("heroTitle", Lang::En).unwrap());
    assert_eq!(after.t("loginTitle"), "Log in to your account");
    assert_eq!(after.lang(), Lang::En);
}

#[test]
fn test_unsupported_codes_are_rejected() {
    assert!("fr".parse::<Lang>().is_err());
    assert!("".parse::<Lang>().is_err());
    assert_eq!("EN".parse::<Lang>(), Ok(Lang::En));
    assert_eq!("vi-VN".parse::<Lang>(), Ok(Lang::Vi));
}
