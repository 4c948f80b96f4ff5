use dioxus::prelude::*;

use super::DashboardSection;
use crate::i18n::{Dictionary, Entry};

pub(crate) static TEXT: Dictionary = Dictionary::new(
    "dashboard_sidebar",
    &[
        ("dashboard", Entry::new("Bảng điều khiển", "Dashboard")),
        ("createContent", Entry::new("Tạo bài viết", "Create Content")),
        ("subscription", Entry::new("Gói đăng ký", "Subscription")),
        ("navConnections", Entry::new("Kết nối", "Connections")),
        ("settings", Entry::new("Cài đặt", "Settings")),
        ("logout", Entry::new("Đăng xuất", "Log out")),
    ],
);

#[component]
pub fn DashboardSidebar(#[props(!optional)] active: Option<DashboardSection>) -> Element {
    let tr = crate::use_scoped(&TEXT);
    let navigator = use_navigator();
    let mut mobile_open = use_signal(|| false);

    rsx! {
        div { class: "sidebar_toggle mobile_only",
            button {
                class: "icon_btn",
                "aria-label": if mobile_open() { tr.t("closeMenu") } else { tr.t("openMenu") },
                onclick: move |_| mobile_open.toggle(),
                if mobile_open() { "✕" } else { "☰" }
            }
            span { class: "brand", "SEO Scribe" }
        }

        aside { class: if mobile_open() { "sidebar open" } else { "sidebar" },
            div { class: "sidebar_brand desktop_only", span { class: "brand", "SEO Scribe" } }

            nav { class: "sidebar_nav",
                for section in DashboardSection::ALL {
                    Link {
                        key: "{section.path()}",
                        class: if active == Some(section) { "sidebar_item active" } else { "sidebar_item" },
                        to: section.path(),
                        onclick: move |_| mobile_open.set(false),
                        span { class: "sidebar_icon", {section.icon()} }
                        {tr.t(section.label_key())}
                    }
                }
            }

            div { class: "sidebar_footer",
                button {
                    class: "sidebar_item danger",
                    onclick: move |_| {
                        tracing::info!("dashboard.logout");
                        mobile_open.set(false);
                        navigator.push("/");
                    },
                    span { class: "sidebar_icon", "⎋" }
                    {tr.t("logout")}
                }
            }
        }
    }
}
