use dioxus::prelude::*;

use crate::i18n::{Dictionary, Entry};

pub(crate) static TEXT: Dictionary = Dictionary::new(
    "dashboard_overview",
    &[
        ("welcomeBack", Entry::new("Chào mừng trở lại", "Welcome back")),
        ("overview", Entry::new("Tổng quan", "Overview")),
        ("createNewContent", Entry::new("Tạo bài viết mới", "Create new content")),
        (
            "quickActionBody",
            Entry::new(
                "Tạo bài viết được tối ưu cho SEO và đăng lên website hoặc mạng xã hội của bạn",
                "Create SEO-optimized content and publish it to your website or social media",
            ),
        ),
        ("creditsRemaining", Entry::new("Tín dụng còn lại", "Credits remaining")),
        ("buyMore", Entry::new("Mua thêm", "Buy more")),
        ("currentPlan", Entry::new("Gói hiện tại", "Current plan")),
        ("upgrade", Entry::new("Nâng cấp", "Upgrade")),
        ("connectedAccounts", Entry::new("Tài khoản đã kết nối", "Connected accounts")),
        ("manage", Entry::new("Quản lý", "Manage")),
        ("recentContents", Entry::new("Bài viết gần đây", "Recent contents")),
        ("viewAll", Entry::new("Xem tất cả", "View all")),
        (
            "noContentYet",
            Entry::new(
                "Bạn chưa có bài viết nào. Hãy tạo bài viết đầu tiên!",
                "You don't have any content yet. Create your first content!",
            ),
        ),
    ],
);

#[component]
pub fn DashboardOverview() -> Element {
    let tr = crate::use_scoped(&TEXT);
    let user = use_hook(api::current_user);

    rsx! {
        div { class: "stack",
            div { class: "page_header",
                h1 { {format!("{}, {}!", tr.t("welcomeBack"), user.name)} }
                p { class: "muted", {tr.t("overview")} }
            }

            div { class: "card quick_action",
                div {
                    h2 { {tr.t("createNewContent")} }
                    p { class: "muted_light", {tr.t("quickActionBody")} }
                }
                Link { class: "btn large", to: "/dashboard/create", "✎ " {tr.t("createNewContent")} }
            }

            div { class: "grid three",
                StatCard {
                    title: tr.t("creditsRemaining"),
                    icon: "💳",
                    value: user.credits.to_string(),
                    action: tr.t("buyMore"),
                    to: "/dashboard/credits",
                }
                StatCard {
                    title: tr.t("currentPlan"),
                    icon: "📦",
                    value: user.plan.clone(),
                    action: tr.t("upgrade"),
                    to: "/dashboard/subscription",
                }
                StatCard {
                    title: tr.t("connectedAccounts"),
                    icon: "🔗",
                    value: user.connected_accounts.to_string(),
                    action: tr.t("manage"),
                    to: "/dashboard/connections",
                }
            }

            div { class: "card",
                div { class: "card_header row",
                    h3 { {tr.t("recentContents")} }
                    if !user.recent_contents.is_empty() {
                        Link { class: "btn small", to: "/dashboard/create", {tr.t("viewAll")} }
                    }
                }
                if user.recent_contents.is_empty() {
                    div { class: "empty_state",
                        p { class: "muted", {tr.t("noContentYet")} }
                        Link { class: "btn primary", to: "/dashboard/create", "✎ " {tr.t("createNewContent")} }
                    }
                } else {
                    ul { class: "content_list",
                        for title in user.recent_contents.iter() {
                            li { key: "{title}", "{title}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: String, icon: &'static str, value: String, action: String, to: &'static str) -> Element {
    rsx! {
        div { class: "card stat_card",
            div { class: "stat_header",
                span { class: "stat_title", "{title}" }
                span { class: "muted", "{icon}" }
            }
            div { class: "stat_value", "{value}" }
            Link { class: "btn small", to, "{action}" }
        }
    }
}
