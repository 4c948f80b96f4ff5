use api::types::{Connection, NewConnection, Platform};
use api::{ConnectionBook, ConnectionError};
use dioxus::prelude::*;

use crate::i18n::{Dictionary, Entry, Translator};

pub(crate) static TEXT: Dictionary = Dictionary::new(
    "dashboard_connections",
    &[
        ("connectionsTitle", Entry::new("Kết nối", "Connections")),
        ("manageConnections", Entry::new("Quản lý kết nối mạng xã hội", "Manage social media connections")),
        ("activeConnections", Entry::new("Kết nối đã kích hoạt", "Active Connections")),
        (
            "activeDescription",
            Entry::new("Tài khoản mạng xã hội và website đã kết nối", "Connected social media accounts and websites"),
        ),
        ("newConnection", Entry::new("Thêm kết nối mới", "Add New Connection")),
        (
            "newDescription",
            Entry::new("Kết nối tài khoản mạng xã hội hoặc website của bạn", "Connect your social media account or website"),
        ),
        ("platform", Entry::new("Nền tảng", "Platform")),
        ("accountName", Entry::new("Tên tài khoản", "Account Name")),
        ("accountNamePlaceholder", Entry::new("Nhập tên tài khoản", "Enter account name")),
        ("status", Entry::new("Trạng thái", "Status")),
        ("actions", Entry::new("Thao tác", "Actions")),
        ("connected", Entry::new("Đã kết nối", "Connected")),
        ("delete", Entry::new("Xóa", "Delete")),
        ("selectPlatform", Entry::new("Chọn nền tảng", "Select Platform")),
        ("platformDetails", Entry::new("Chi tiết nền tảng", "Platform Details")),
        ("websiteUrl", Entry::new("URL Website", "Website URL")),
        ("username", Entry::new("Tên người dùng", "Username")),
        ("usernameSuffix", Entry::new("tên người dùng", "username")),
        ("apiKey", Entry::new("API Key", "API Key")),
        ("apiKeySuffix", Entry::new("khóa API", "API key")),
        ("apiSecret", Entry::new("API Secret", "API Secret")),
        ("apiSecretSuffix", Entry::new("bí mật API", "API secret")),
        ("saveConnection", Entry::new("Lưu kết nối", "Save Connection")),
        ("cancel", Entry::new("Hủy", "Cancel")),
        ("confirmDelete", Entry::new("Bạn có chắc chắn muốn xóa kết nối này?", "Are you sure you want to delete this connection?")),
        ("autoPost", Entry::new("Tự động đăng bài", "Auto Post")),
        (
            "autoPostHint",
            Entry::new("Tự động đăng bài viết mới lên tài khoản này", "Automatically publish new content to this account"),
        ),
        ("connectionSaved", Entry::new("Đã lưu kết nối thành công", "Connection saved successfully")),
        ("connectionRemoved", Entry::new("Đã xóa kết nối", "Connection removed")),
        (
            "noConnections",
            Entry::new(
                "Bạn chưa có kết nối nào. Hãy thêm kết nối đầu tiên!",
                "You don't have any connections yet. Add your first connection!",
            ),
        ),
        ("platformRequired", Entry::new("Vui lòng chọn nền tảng", "Please select a platform")),
        ("accountNameRequired", Entry::new("Vui lòng nhập tên tài khoản", "Please enter an account name")),
        ("connectionNotFound", Entry::new("Không tìm thấy kết nối", "Connection not found")),
    ],
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConnectionsTab {
    Active,
    New,
}

fn platform_icon(platform: Platform) -> &'static str {
    match platform {
        Platform::WordPress => "📄",
        Platform::Facebook => "f",
        Platform::Twitter => "𝕏",
        Platform::TikTok => "♪",
    }
}

/// Placeholder such as "Facebook username", built from the platform label
/// and a translated suffix.
fn platform_placeholder(tr: Translator, platform: Platform, suffix_key: &str) -> String {
    format!("{} {}", platform.label(), tr.t(suffix_key))
}

#[component]
pub fn ConnectionsPage() -> Element {
    let tr = crate::use_scoped(&TEXT);
    let toasts = crate::use_toasts();
    let mut book = use_signal(ConnectionBook::seeded);
    let mut tab = use_signal(|| ConnectionsTab::Active);

    let on_saved = move |draft: NewConnection| -> Result<(), ConnectionError> {
        book.with_mut(|b| b.add(&draft))?;
        toasts.success(tr.t("connectionSaved"), Some(draft.account_name.trim().to_string()));
        tab.set(ConnectionsTab::Active);
        Ok(())
    };

    rsx! {
        div { class: "stack",
            div { class: "page_header",
                h1 { {tr.t("connectionsTitle")} }
                p { class: "muted", {tr.t("manageConnections")} }
            }

            div { class: "tabs narrow",
                button {
                    class: if tab() == ConnectionsTab::Active { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(ConnectionsTab::Active),
                    {tr.t("activeConnections")}
                }
                button {
                    class: if tab() == ConnectionsTab::New { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(ConnectionsTab::New),
                    "+ "
                    {tr.t("newConnection")}
                }
            }

            {match tab() {
                ConnectionsTab::Active => rsx! {
                    ActiveConnections {
                        tr,
                        connections: book.read().all().to_vec(),
                        on_toggle: move |id: u32| {
                            if let Err(err) = book.with_mut(|b| b.toggle_auto_post(id)) {
                                tracing::warn!("connections.toggle: {err}");
                            }
                        },
                        on_delete: move |id: u32| {
                            match book.with_mut(|b| b.remove(id)) {
                                Ok(removed) => toasts.info(tr.t("connectionRemoved"), Some(removed.account_name)),
                                Err(err) => toasts.error(tr.t(err.key()), None),
                            }
                        },
                        on_add: move |_| tab.set(ConnectionsTab::New),
                    }
                },
                ConnectionsTab::New => rsx! {
                    NewConnectionForm {
                        tr,
                        on_cancel: move |_| tab.set(ConnectionsTab::Active),
                        on_save: on_saved,
                    }
                },
            }}
        }
    }
}

#[component]
fn ActiveConnections(
    tr: Translator,
    connections: Vec<Connection>,
    on_toggle: EventHandler<u32>,
    on_delete: EventHandler<u32>,
    on_add: EventHandler<()>,
) -> Element {
    let mut confirming = use_signal(|| None::<u32>);

    rsx! {
        div { class: "card",
            div { class: "card_header",
                h3 { {tr.t("activeConnections")} }
                p { class: "muted", {tr.t("activeDescription")} }
            }
            if connections.is_empty() {
                div { class: "empty_state",
                    p { class: "muted", {tr.t("noConnections")} }
                    button { class: "btn primary", onclick: move |_| on_add.call(()), "+ " {tr.t("newConnection")} }
                }
            } else {
                div { class: "table_scroll",
                    table { class: "table",
                        thead {
                            tr {
                                th { {tr.t("platform")} }
                                th { {tr.t("accountName")} }
                                th { {tr.t("status")} }
                                th { {tr.t("autoPost")} }
                                th { class: "right", {tr.t("actions")} }
                            }
                        }
                        tbody {
                            for connection in connections {
                                tr { key: "{connection.id}",
                                    td {
                                        span { class: "platform_cell",
                                            span { class: "platform_icon", {platform_icon(connection.platform)} }
                                            {connection.platform.label()}
                                        }
                                    }
                                    td { "{connection.account_name}" }
                                    td { span { class: "badge success", "✓ " {tr.t("connected")} } }
                                    td {
                                        label { class: "switch",
                                            input {
                                                r#type: "checkbox",
                                                checked: connection.auto_post,
                                                "aria-label": tr.t("autoPost"),
                                                onchange: move |_| on_toggle.call(connection.id),
                                            }
                                            span { class: "slider" }
                                        }
                                    }
                                    td { class: "right",
                                        if confirming() == Some(connection.id) {
                                            div { class: "confirm_inline",
                                                span { class: "small", {tr.t("confirmDelete")} }
                                                button {
                                                    class: "btn small danger",
                                                    onclick: move |_| {
                                                        confirming.set(None);
                                                        on_delete.call(connection.id);
                                                    },
                                                    {tr.t("delete")}
                                                }
                                                button {
                                                    class: "btn small",
                                                    onclick: move |_| confirming.set(None),
                                                    {tr.t("cancel")}
                                                }
                                            }
                                        } else {
                                            button {
                                                class: "btn small ghost",
                                                "aria-label": tr.t("delete"),
                                                onclick: move |_| confirming.set(Some(connection.id)),
                                                "🗑"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NewConnectionForm(
    tr: Translator,
    on_cancel: EventHandler<()>,
    on_save: Callback<NewConnection, Result<(), ConnectionError>>,
) -> Element {
    let mut draft = use_signal(NewConnection::default);
    let mut error = use_signal(|| None::<ConnectionError>);

    let selected = draft.read().platform;
    let can_save = selected.is_some() && !draft.read().account_name.trim().is_empty();

    let mut select_platform = move |platform: Platform| {
        draft.with_mut(|d| {
            d.platform = Some(platform);
            d.details.url = platform.is_site().then(String::new);
            d.details.api_secret = (!platform.is_site()).then(String::new);
        });
        error.set(None);
    };

    let submit = move |_| match on_save.call(draft()) {
        Ok(()) => {
            draft.set(NewConnection::default());
            error.set(None);
        }
        Err(err) => error.set(Some(err)),
    };

    rsx! {
        div { class: "card",
            div { class: "card_header",
                h3 { {tr.t("newConnection")} }
                p { class: "muted", {tr.t("newDescription")} }
            }

            div { class: "form",
                div { class: "field",
                    label { {tr.t("selectPlatform")} }
                    div { class: "grid four",
                        for platform in Platform::ALL {
                            button {
                                key: "{platform.value()}",
                                class: if selected == Some(platform) { "platform_option selected" } else { "platform_option" },
                                onclick: move |_| select_platform(platform),
                                span { class: "platform_icon large", {platform_icon(platform)} }
                                span { {platform.label()} }
                            }
                        }
                    }
                }

                if let Some(platform) = selected {
                    div { class: "field",
                        label { r#for: "accountName", {tr.t("accountName")} }
                        input {
                            id: "accountName",
                            placeholder: tr.t("accountNamePlaceholder"),
                            value: draft.read().account_name.clone(),
                            oninput: move |e| draft.write().account_name = e.value(),
                        }
                    }

                    div { class: "subsection",
                        h4 { {tr.t("platformDetails")} }
                        if platform.is_site() {
                            div { class: "field",
                                label { r#for: "websiteUrl", {tr.t("websiteUrl")} }
                                input {
                                    id: "websiteUrl",
                                    r#type: "url",
                                    placeholder: "https://example.com",
                                    value: draft.read().details.url.clone().unwrap_or_default(),
                                    oninput: move |e| draft.write().details.url = Some(e.value()),
                                }
                            }
                        }
                        div { class: "field",
                            label { r#for: "username", {tr.t("username")} }
                            input {
                                id: "username",
                                placeholder: platform_placeholder(tr, platform, "usernameSuffix"),
                                value: draft.read().details.username.clone(),
                                oninput: move |e| draft.write().details.username = e.value(),
                            }
                        }
                        div { class: "field",
                            label { r#for: "apiKey", {tr.t("apiKey")} }
                            input {
                                id: "apiKey",
                                placeholder: platform_placeholder(tr, platform, "apiKeySuffix"),
                                value: draft.read().details.api_key.clone(),
                                oninput: move |e| draft.write().details.api_key = e.value(),
                            }
                        }
                        if !platform.is_site() {
                            div { class: "field",
                                label { r#for: "apiSecret", {tr.t("apiSecret")} }
                                input {
                                    id: "apiSecret",
                                    r#type: "password",
                                    placeholder: platform_placeholder(tr, platform, "apiSecretSuffix"),
                                    value: draft.read().details.api_secret.clone().unwrap_or_default(),
                                    oninput: move |e| draft.write().details.api_secret = Some(e.value()),
                                }
                            }
                        }
                    }

                    div { class: "row switch_row",
                        div {
                            div { class: "strong", {tr.t("autoPost")} }
                            div { class: "muted small", {tr.t("autoPostHint")} }
                        }
                        label { class: "switch",
                            input {
                                r#type: "checkbox",
                                checked: draft.read().auto_post,
                                onchange: move |e| draft.write().auto_post = e.checked(),
                            }
                            span { class: "slider" }
                        }
                    }
                }

                if let Some(err) = error() {
                    p { class: "field_error", role: "alert", {tr.t(err.key())} }
                }
            }

            div { class: "card_footer row",
                button {
                    class: "btn",
                    onclick: move |_| {
                        draft.set(NewConnection::default());
                        error.set(None);
                        on_cancel.call(());
                    },
                    {tr.t("cancel")}
                }
                button {
                    class: "btn primary",
                    disabled: !can_save,
                    onclick: submit,
                    {tr.t("saveConnection")}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::types::Lang;

    #[test]
    fn placeholders_follow_the_language() {
        let en = Translator::scoped(Lang::En, &TEXT);
        assert_eq!(
            platform_placeholder(en, Platform::Facebook, "usernameSuffix"),
            "Facebook username"
        );
        let vi = Translator::scoped(Lang::Vi, &TEXT);
        assert_eq!(
            platform_placeholder(vi, Platform::TikTok, "apiKeySuffix"),
            "TikTok khóa API"
        );
    }

    #[test]
    fn error_keys_resolve_locally() {
        let tr = Translator::scoped(Lang::En, &TEXT);
        for err in [
            ConnectionError::PlatformRequired,
            ConnectionError::AccountNameRequired,
            ConnectionError::NotFound(7),
        ] {
            assert_ne!(tr.t(err.key()), err.key());
        }
    }
}
