use dioxus::prelude::*;

use super::TEXT;

#[component]
pub fn Footer() -> Element {
    let tr = crate::use_scoped(&TEXT);
    let year = api::format::current_year();

    rsx! {
        footer { class: "footer",
            div { class: "grid four",
                div {
                    h3 { "SEO Scribe" }
                    p { class: "muted", {tr.t("footerTagline")} }
                }
                div {
                    h3 { {tr.t("footerLinks")} }
                    ul {
                        li { Link { to: "/", {tr.t("home")} } }
                        li { a { href: "#features", {tr.t("features")} } }
                        li { a { href: "#pricing", {tr.t("pricing")} } }
                    }
                }
                div {
                    h3 { {tr.t("footerLegal")} }
                    ul {
                        li { Link { to: "/terms", {tr.t("terms")} } }
                        li { Link { to: "/privacy", {tr.t("privacy")} } }
                    }
                }
                div {
                    h3 { {tr.t("footerContact")} }
                    p { class: "muted", {tr.t("contactEmail")} }
                    p { class: "muted", {tr.t("contactPhone")} }
                }
            }
            div { class: "footer_legal",
                {format!("© {year} SEO Scribe. {}", tr.t("rightsReserved"))}
            }
        }
    }
}
