use api::AuthError;
use dioxus::prelude::*;

use super::AuthCard;
use crate::i18n::{Dictionary, Entry};
use crate::pending::{simulate_latency, use_in_flight};

pub(crate) static TEXT: Dictionary = Dictionary::new(
    "login",
    &[
        ("loginTitle", Entry::new("Đăng nhập vào tài khoản", "Log in to your account")),
        ("username", Entry::new("Tên đăng nhập", "Username")),
        ("password", Entry::new("Mật khẩu", "Password")),
        ("usernameRequired", Entry::new("Vui lòng nhập tên đăng nhập", "Username is required")),
        ("passwordRequired", Entry::new("Vui lòng nhập mật khẩu", "Password is required")),
        ("forgotPassword", Entry::new("Quên mật khẩu?", "Forgot password?")),
        ("noAccount", Entry::new("Chưa có tài khoản?", "Don't have an account?")),
        ("loading", Entry::new("Đang xử lý...", "Processing...")),
    ],
);

#[component]
pub fn LoginPage() -> Element {
    let tr = crate::use_scoped(&TEXT);
    let config = crate::use_config();
    let navigator = use_navigator();
    let in_flight = use_in_flight();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(Vec::<AuthError>::new);

    let field_error = move |err: AuthError| errors().contains(&err);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let user = username();
        let pass = password();
        let problems = api::auth::validate_login(&user, &pass);
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        errors.set(Vec::new());

        let delay = config.latency.auth;
        in_flight.run("auth.signin", async move {
            simulate_latency(delay).await;
            match api::signin(&user, &pass) {
                Ok(_) => {
                    navigator.push("/dashboard");
                }
                Err(err) => errors.set(vec![err]),
            }
        });
    };

    rsx! {
        AuthCard { title: tr.t("login"), subtitle: tr.t("loginTitle"),
            form { class: "form", onsubmit,
                div { class: "field",
                    label { r#for: "username", {tr.t("username")} }
                    input {
                        id: "username",
                        r#type: "text",
                        autocomplete: "username",
                        "aria-invalid": field_error(AuthError::UsernameRequired),
                        value: "{username}",
                        oninput: move |e| username.set(e.value()),
                    }
                    if field_error(AuthError::UsernameRequired) {
                        p { class: "field_error", role: "alert", {tr.t(AuthError::UsernameRequired.key())} }
                    }
                }
                div { class: "field",
                    label { r#for: "password", {tr.t("password")} }
                    input {
                        id: "password",
                        r#type: "password",
                        autocomplete: "current-password",
                        "aria-invalid": field_error(AuthError::PasswordRequired),
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    if field_error(AuthError::PasswordRequired) {
                        p { class: "field_error", role: "alert", {tr.t(AuthError::PasswordRequired.key())} }
                    }
                }
                div { class: "form_row",
                    Link { class: "link", to: "/forgot-password", {tr.t("forgotPassword")} }
                }
                button {
                    class: "btn primary full large",
                    r#type: "submit",
                    disabled: in_flight.is_busy(),
                    if in_flight.is_busy() { {tr.t("loading")} } else { {tr.t("login")} }
                }
                p { class: "form_footer",
                    {tr.t("noAccount")}
                    " "
                    Link { class: "link", to: "/register", {tr.t("register")} }
                }
            }
        }
    }
}
