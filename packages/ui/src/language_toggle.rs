use dioxus::prelude::*;

use crate::i18n::{use_language_selector, Lang};

/// Globe button opening a popover with one entry per language.
#[component]
pub fn LanguageToggle() -> Element {
    let selector = use_language_selector();
    let tr = selector.translator();
    let current = selector.current();
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "lang_toggle",
            button {
                class: "icon_btn",
                "aria-label": tr.t("language"),
                "aria-expanded": "{open}",
                onclick: move |_| open.toggle(),
                span { class: "globe", "🌐" }
            }
            if open() {
                div { class: "popover",
                    for lang in Lang::ALL {
                        button {
                            key: "{lang}",
                            class: if lang == current { "btn small primary" } else { "btn small" },
                            onclick: move |_| {
                                selector.set(lang);
                                open.set(false);
                            },
                            {lang.native_name()}
                        }
                    }
                }
            }
        }
    }
}
