use dioxus::prelude::*;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let tr = crate::use_translator();
    tracing::debug!("not_found: path=/{}", segments.join("/"));

    rsx! {
        section { class: "not_found",
            h1 { "404" }
            h2 { {tr.t("notFoundTitle")} }
            p { class: "muted", {tr.t("notFoundBody")} }
            Link { class: "btn primary", to: "/", {tr.t("backHome")} }
        }
    }
}
