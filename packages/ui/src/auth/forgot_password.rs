use api::AuthError;
use dioxus::prelude::*;

use super::AuthCard;
use crate::i18n::{Dictionary, Entry};
use crate::pending::{simulate_latency, use_in_flight};

pub(crate) static TEXT: Dictionary = Dictionary::new(
    "forgot_password",
    &[
        ("forgotPasswordTitle", Entry::new("Quên mật khẩu", "Forgot password")),
        (
            "forgotPasswordSubtitle",
            Entry::new(
                "Nhập địa chỉ email của bạn để nhận hướng dẫn đặt lại mật khẩu",
                "Enter your email address to receive password reset instructions",
            ),
        ),
        ("email", Entry::new("Email", "Email")),
        ("resetButton", Entry::new("Gửi hướng dẫn đặt lại", "Send reset instructions")),
        ("backToLogin", Entry::new("Quay lại đăng nhập", "Back to login")),
        ("loading", Entry::new("Đang xử lý...", "Processing...")),
        (
            "resetLinkSent",
            Entry::new(
                "Hướng dẫn đặt lại mật khẩu đã được gửi đến email của bạn.",
                "Password reset instructions have been sent to your email.",
            ),
        ),
        ("emailRequired", Entry::new("Vui lòng nhập email.", "Email is required.")),
        ("invalidEmail", Entry::new("Địa chỉ email không hợp lệ.", "Email address is invalid.")),
    ],
);

#[component]
pub fn ForgotPasswordPage() -> Element {
    let tr = crate::use_scoped(&TEXT);
    let config = crate::use_config();
    let in_flight = use_in_flight();

    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<AuthError>);
    let mut submitted = use_signal(|| false);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let address = email();
        if let Err(err) = api::auth::validate_email(&address) {
            error.set(Some(err));
            return;
        }
        error.set(None);

        let delay = config.latency.auth;
        in_flight.run("auth.request_password_reset", async move {
            simulate_latency(delay).await;
            match api::request_password_reset(&address) {
                Ok(()) => submitted.set(true),
                Err(err) => error.set(Some(err)),
            }
        });
    };

    rsx! {
        AuthCard { title: tr.t("forgotPasswordTitle"), subtitle: tr.t("forgotPasswordSubtitle"),
            if submitted() {
                div { class: "notice success", role: "alert", {tr.t("resetLinkSent")} }
                Link { class: "btn full", to: "/login", {tr.t("backToLogin")} }
            } else {
                form { class: "form", onsubmit,
                    div { class: "field",
                        label { r#for: "email", {tr.t("email")} }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                        if let Some(err) = error() {
                            p { class: "field_error", role: "alert", {tr.t(err.key())} }
                        }
                    }
                    button {
                        class: "btn primary full",
                        r#type: "submit",
                        disabled: in_flight.is_busy(),
                        if in_flight.is_busy() { {tr.t("loading")} } else { {tr.t("resetButton")} }
                    }
                    p { class: "form_footer",
                        Link { class: "link", to: "/login", {tr.t("backToLogin")} }
                    }
                }
            }
        }
    }
}
