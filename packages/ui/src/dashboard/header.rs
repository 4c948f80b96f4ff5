use dioxus::prelude::*;

use crate::i18n::{Dictionary, Entry};
use crate::LanguageToggle;

pub(crate) static TEXT: Dictionary = Dictionary::new(
    "dashboard_header",
    &[
        ("notifications", Entry::new("Thông báo", "Notifications")),
        ("profile", Entry::new("Hồ sơ", "Profile")),
        ("settings", Entry::new("Cài đặt", "Settings")),
        ("logout", Entry::new("Đăng xuất", "Log out")),
        ("accountMenu", Entry::new("Tài khoản", "Account")),
    ],
);

/// Top bar of the dashboard: language toggle, notifications and the avatar
/// dropdown for the signed-in account.
#[component]
pub fn DashboardHeader() -> Element {
    let tr = crate::use_scoped(&TEXT);
    let navigator = use_navigator();
    let user = use_hook(api::current_user);
    let mut open = use_signal(|| false);

    let avatar = initials(&user.name);

    rsx! {
        header { class: "dashboard_header",
            div { class: "spacer" }
            div { class: "header_actions",
                LanguageToggle {}
                button { class: "icon_btn", "aria-label": tr.t("notifications"), "🔔" }

                div { class: "account_menu",
                    button {
                        class: "avatar_btn",
                        "aria-label": tr.t("accountMenu"),
                        onclick: move |_| open.toggle(),
                        span { class: "avatar_fallback", "{avatar}" }
                    }

                    if open() {
                        div { class: "dropdown",
                            div { class: "dropdown_label",
                                div { class: "strong", "{user.name}" }
                                div { class: "hint", "{user.email}" }
                            }
                            div { class: "dropdown_separator" }
                            button { class: "dropdown_item", onclick: move |_| open.set(false), "👤 " {tr.t("profile")} }
                            button { class: "dropdown_item", onclick: move |_| open.set(false), "⚙ " {tr.t("settings")} }
                            div { class: "dropdown_separator" }
                            button {
                                class: "dropdown_item danger",
                                onclick: move |_| {
                                    open.set(false);
                                    navigator.push("/");
                                },
                                "⎋ "
                                {tr.t("logout")}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Uppercased first letter of every word, as shown in the avatar.
pub(crate) fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "U".to_string()
    } else {
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn initials_take_every_word() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("nguyễn văn an"), "NVA");
        assert_eq!(initials("  cher "), "C");
        assert_eq!(initials(""), "U");
    }
}
