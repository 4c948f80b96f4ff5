use dioxus::prelude::*;

use crate::LanguageToggle;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let tr = crate::use_translator();
    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav { class: "navbar",
            div { class: "navbar_inner",
                Link { class: "brand", to: "/", "SEO Scribe" }

                div { class: "nav_links desktop_only",
                    Link { class: "nav_link", to: "/", {tr.t("home")} }
                    a { class: "nav_link", href: "#features", {tr.t("features")} }
                    a { class: "nav_link", href: "#pricing", {tr.t("pricing")} }
                    div { class: "nav_actions",
                        LanguageToggle {}
                        Link { class: "btn small", to: "/login", {tr.t("login")} }
                        Link { class: "btn small primary", to: "/register", {tr.t("register")} }
                    }
                }

                div { class: "nav_mobile mobile_only",
                    LanguageToggle {}
                    button {
                        class: "icon_btn",
                        "aria-label": if menu_open() { tr.t("closeMenu") } else { tr.t("openMenu") },
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }

            if menu_open() {
                div { class: "mobile_menu mobile_only",
                    Link { class: "nav_link", to: "/", onclick: move |_| menu_open.set(false), {tr.t("home")} }
                    a { class: "nav_link", href: "#features", onclick: move |_| menu_open.set(false), {tr.t("features")} }
                    a { class: "nav_link", href: "#pricing", onclick: move |_| menu_open.set(false), {tr.t("pricing")} }
                    div { class: "mobile_actions",
                        Link { class: "btn small", to: "/login", onclick: move |_| menu_open.set(false), {tr.t("login")} }
                        Link { class: "btn small primary", to: "/register", onclick: move |_| menu_open.set(false), {tr.t("register")} }
                    }
                }
            }
        }
    }
}
