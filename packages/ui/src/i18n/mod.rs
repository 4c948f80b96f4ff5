//! Bilingual text resolution.
//!
//! Copy is looked up by key in static [`Dictionary`] tables. The process-wide
//! [`GLOBAL`] table is always consulted first; pages that carry their own copy
//! resolve through a [`Translator`] scoped to a page-local table, which is only
//! tried once the global table misses. A key found nowhere renders as itself
//! and is logged at `warn`.
//!
//! The selected language lives in a `Signal<Lang>` provided by
//! [`I18nProvider`]; reading it through the hooks below subscribes the calling
//! component, so switching languages re-renders every consumer.

use dioxus::prelude::*;
use tracing::{info, warn};

pub use api::types::{Lang, UnsupportedLang};

mod global;
pub use global::GLOBAL;

/// Strings of one key in both languages. An empty string means "missing".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub vi: &'static str,
    pub en: &'static str,
}

impl Entry {
    pub const fn new(vi: &'static str, en: &'static str) -> Self {
        Self { vi, en }
    }

    pub fn get(&self, lang: Lang) -> Option<&'static str> {
        let text = match lang {
            Lang::Vi => self.vi,
            Lang::En => self.en,
        };
        (!text.is_empty()).then_some(text)
    }

    pub fn is_complete(&self) -> bool {
        Lang::ALL.into_iter().all(|lang| self.get(lang).is_some())
    }
}

/// A named, immutable key → [`Entry`] table built into the binary.
#[derive(Debug, PartialEq, Eq)]
pub struct Dictionary {
    name: &'static str,
    entries: &'static [(&'static str, Entry)],
}

impl Dictionary {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, Entry)]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, key: &str) -> Option<&'static Entry> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, e)| e)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    /// Hit/miss lookup. A present key with an empty string for `lang` is a miss.
    pub fn lookup(&self, key: &str, lang: Lang) -> Option<&'static str> {
        self.entry(key).and_then(|e| e.get(lang))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Keys listed more than once, in table order.
    pub fn duplicate_keys(&self) -> Vec<&'static str> {
        let mut seen = Vec::with_capacity(self.entries.len());
        let mut dups = Vec::new();
        for key in self.keys() {
            if seen.contains(&key) {
                if !dups.contains(&key) {
                    dups.push(key);
                }
            } else {
                seen.push(key);
            }
        }
        dups
    }

    pub fn incomplete_keys(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|(_, e)| !e.is_complete())
            .map(|(k, _)| *k)
            .collect()
    }
}

/// Global hit/miss lookup, without the key fallback.
pub fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    GLOBAL.lookup(key, lang)
}

/// Translate `key` through the global table, falling back to the key itself.
pub fn t(lang: Lang, key: &str) -> String {
    Translator::global(lang).t(key)
}

/// Resolver bound to a language and, optionally, one page-local table.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Lang,
    local: Option<&'static Dictionary>,
}

/// Tables are static, so two translators are equal when they point at the same
/// table. Props diffing never walks the entries.
impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        self.lang == other.lang
            && match (self.local, other.local) {
                (Some(a), Some(b)) => std::ptr::eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl Translator {
    pub fn global(lang: Lang) -> Self {
        Self { lang, local: None }
    }

    pub fn scoped(lang: Lang, local: &'static Dictionary) -> Self {
        Self {
            lang,
            local: Some(local),
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Global table first, then the local one.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        lookup(self.lang, key).or_else(|| self.local.and_then(|d| d.lookup(key, self.lang)))
    }

    pub fn t(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(text) => text.to_string(),
            None => {
                warn!(
                    "i18n.t: translation key not found key={} lang={} scope={}",
                    key,
                    self.lang,
                    self.local.map_or("global", |d| d.name())
                );
                key.to_string()
            }
        }
    }
}

/// Read/write handle on the selected language.
#[derive(Clone, Copy, PartialEq)]
pub struct LanguageSelector {
    lang: Signal<Lang>,
}

impl LanguageSelector {
    pub fn current(&self) -> Lang {
        (self.lang)()
    }

    pub fn set(&self, next: Lang) {
        let mut lang = self.lang;
        if *lang.peek() != next {
            info!("i18n.set_lang: lang={}", next);
            lang.set(next);
        }
    }

    /// Parse a textual code at the boundary; unsupported codes never reach the
    /// signal.
    pub fn set_code(&self, code: &str) -> Result<Lang, UnsupportedLang> {
        let next: Lang = code.parse()?;
        self.set(next);
        Ok(next)
    }

    pub fn translator(&self) -> Translator {
        Translator::global(self.current())
    }
}

/// Provide the `Signal<Lang>` to the tree, starting from the configured default.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let default_lang = crate::use_config().default_lang;
    let lang = use_signal(|| default_lang);
    use_context_provider(|| lang);

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    warn!("i18n.use_lang: missing I18nProvider context, using a local signal");
    use_signal(Lang::default)
}

pub fn use_language_selector() -> LanguageSelector {
    LanguageSelector { lang: use_lang() }
}

pub fn use_translator() -> Translator {
    Translator::global(use_lang()())
}

pub fn use_scoped(local: &'static Dictionary) -> Translator {
    Translator::scoped(use_lang()(), local)
}

/// Every table shipped with the app, global first.
pub fn dictionaries() -> Vec<&'static Dictionary> {
    vec![
        &GLOBAL,
        &crate::landing::TEXT,
        &crate::auth::login::TEXT,
        &crate::auth::register::TEXT,
        &crate::auth::forgot_password::TEXT,
        &crate::dashboard::sidebar::TEXT,
        &crate::dashboard::header::TEXT,
        &crate::dashboard::overview::TEXT,
        &crate::dashboard::create_content::TEXT,
        &crate::dashboard::credits::TEXT,
        &crate::dashboard::connections::TEXT,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: Dictionary = Dictionary::new(
        "sample",
        &[
            ("loginTitle", Entry::new("Đăng nhập vào tài khoản", "Log in to your account")),
            ("half", Entry::new("Chỉ tiếng Việt", "")),
            ("login", Entry::new("Không dùng", "Never used")),
        ],
    );

    #[test]
    fn entry_treats_empty_string_as_missing() {
        let entry = Entry::new("Có", "");
        assert_eq!(entry.get(Lang::Vi), Some("Có"));
        assert_eq!(entry.get(Lang::En), None);
        assert!(!entry.is_complete());
    }

    #[test]
    fn global_lookup_reports_hits_and_misses() {
        assert_eq!(lookup(Lang::En, "login"), Some("Login"));
        assert_eq!(lookup(Lang::En, "unknownKey"), None);
        assert_eq!(t(Lang::Vi, "unknownKey"), "unknownKey");
    }

    #[test]
    fn scoped_falls_through_to_local() {
        let tr = Translator::scoped(Lang::En, &SAMPLE);
        assert_eq!(tr.t("loginTitle"), "Log in to your account");
        assert_eq!(tr.lookup("missing"), None);
        assert_eq!(tr.t("missing"), "missing");
    }

    #[test]
    fn global_shadows_local() {
        let tr = Translator::scoped(Lang::En, &SAMPLE);
        assert_eq!(tr.t("login"), "Login");
    }

    #[test]
    fn incomplete_local_entry_falls_back_to_key() {
        assert_eq!(Translator::scoped(Lang::Vi, &SAMPLE).t("half"), "Chỉ tiếng Việt");
        assert_eq!(Translator::scoped(Lang::En, &SAMPLE).t("half"), "half");
        assert_eq!(SAMPLE.incomplete_keys(), vec!["half"]);
    }

    #[test]
    fn duplicate_keys_are_reported_once() {
        static DUPS: Dictionary = Dictionary::new(
            "dups",
            &[
                ("a", Entry::new("a", "a")),
                ("b", Entry::new("b", "b")),
                ("a", Entry::new("x", "x")),
                ("a", Entry::new("y", "y")),
            ],
        );
        assert_eq!(DUPS.duplicate_keys(), vec!["a"]);
        // First occurrence wins.
        assert_eq!(DUPS.lookup("a", Lang::En), Some("a"));
    }

    #[test]
    fn translators_compare_by_table_identity() {
        static TWIN: Dictionary = Dictionary::new("sample", &[("half", Entry::new("Chỉ tiếng Việt", ""))]);
        static TWIN_AGAIN: Dictionary = Dictionary::new("sample", &[("half", Entry::new("Chỉ tiếng Việt", ""))]);

        assert_eq!(Translator::scoped(Lang::En, &SAMPLE), Translator::scoped(Lang::En, &SAMPLE));
        assert_eq!(Translator::global(Lang::Vi), Translator::global(Lang::Vi));
        assert_ne!(Translator::scoped(Lang::En, &TWIN), Translator::scoped(Lang::En, &TWIN_AGAIN));
        assert_ne!(Translator::scoped(Lang::En, &SAMPLE), Translator::global(Lang::En));
        assert_ne!(Translator::scoped(Lang::Vi, &SAMPLE), Translator::scoped(Lang::En, &SAMPLE));
    }

    mod selector {
        use std::cell::RefCell;
        use std::time::Duration;

        use super::super::*;

        #[derive(Default)]
        struct Seen {
            mounts: usize,
            renders: Vec<String>,
            rejected: Option<UnsupportedLang>,
            after_reject: Option<Lang>,
        }

        thread_local! {
            static SEEN: RefCell<Seen> = RefCell::new(Seen::default());
        }

        fn app() -> Element {
            rsx! {
                I18nProvider {
                    Switcher {}
                    Consumer {}
                }
            }
        }

        /// Rejects an unsupported code, then switches to English.
        #[component]
        fn Switcher() -> Element {
            let selector = use_language_selector();
            use_hook(|| {
                spawn(async move {
                    let result = selector.set_code("fr");
                    SEEN.with(|seen| {
                        let mut seen = seen.borrow_mut();
                        seen.rejected = result.err();
                        seen.after_reject = Some(selector.current());
                    });
                    selector.set(Lang::En);
                })
            });
            rsx! {}
        }

        #[component]
        fn Consumer() -> Element {
            use_hook(|| SEEN.with(|seen| seen.borrow_mut().mounts += 1));
            let text = use_translator().t("login");
            SEEN.with(|seen| seen.borrow_mut().renders.push(text.clone()));
            rsx! { p { "{text}" } }
        }

        #[tokio::test(start_paused = true)]
        async fn switching_language_rerenders_consumers() {
            let mut dom = VirtualDom::new(app);
            dom.rebuild_in_place();
            let _ = tokio::time::timeout(Duration::from_secs(1), async {
                loop {
                    dom.wait_for_work().await;
                    let _ = dom.render_immediate_to_vec();
                }
            })
            .await;

            SEEN.with(|seen| {
                let seen = seen.borrow();
                assert_eq!(seen.renders.first().map(String::as_str), Some("Đăng nhập"));
                assert_eq!(seen.renders.last().map(String::as_str), Some("Login"));
                assert_eq!(seen.mounts, 1, "consumer re-rendered in place");
                assert_eq!(seen.rejected, Some(UnsupportedLang("fr".to_string())));
                assert_eq!(seen.after_reject, Some(Lang::Vi));
            });
        }
    }
}
