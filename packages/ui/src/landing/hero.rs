use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let tr = crate::use_translator();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "hero", class: "hero",
            div { class: "hero_copy",
                h1 { {tr.t("heroTitle")} }
                p { class: "lead", {tr.t("heroSubtitle")} }

                div { class: "cta_row",
                    Link { class: "btn primary large", to: "/register", {tr.t("getStarted")} }
                    a { class: "btn large", href: "#features", {tr.t("learnMore")} }
                }
            }
            div { class: "hero_art", "aria-hidden": "true",
                div { class: "hero_card",
                    div { class: "line wide" }
                    div { class: "line" }
                    div { class: "line short" }
                    div { class: "score_pill", "SEO 92/100" }
                }
            }
        }
    }
}
