use api::{AuthError, Registration};
use dioxus::prelude::*;

use super::AuthCard;
use crate::i18n::{Dictionary, Entry};
use crate::pending::{simulate_latency, use_in_flight};

pub(crate) static TEXT: Dictionary = Dictionary::new(
    "register",
    &[
        ("registerTitle", Entry::new("Tạo tài khoản mới", "Create a new account")),
        ("registerSubtitle", Entry::new("Điền thông tin để tạo tài khoản của bạn", "Fill in your details to create your account")),
        ("fullName", Entry::new("Họ và tên", "Full name")),
        ("email", Entry::new("Email", "Email")),
        ("password", Entry::new("Mật khẩu", "Password")),
        ("confirmPassword", Entry::new("Xác nhận mật khẩu", "Confirm password")),
        (
            "termsAndConditions",
            Entry::new(
                "Tôi đồng ý với Điều khoản sử dụng và Chính sách bảo mật",
                "I agree to the Terms of Service and Privacy Policy",
            ),
        ),
        ("registerButton", Entry::new("Đăng ký", "Register")),
        ("alreadyHaveAccount", Entry::new("Đã có tài khoản?", "Already have an account?")),
        ("loading", Entry::new("Đang xử lý...", "Processing...")),
        ("fullNameRequired", Entry::new("Vui lòng nhập họ và tên.", "Full name is required.")),
        ("emailRequired", Entry::new("Vui lòng nhập email.", "Email is required.")),
        ("invalidEmail", Entry::new("Địa chỉ email không hợp lệ.", "Email address is invalid.")),
        ("passwordRequired", Entry::new("Vui lòng nhập mật khẩu.", "Password is required.")),
        (
            "passwordMismatch",
            Entry::new("Mật khẩu và xác nhận mật khẩu không khớp.", "Password and confirm password do not match."),
        ),
        (
            "termsNotAccepted",
            Entry::new(
                "Bạn phải đồng ý với Điều khoản sử dụng và Chính sách bảo mật.",
                "You must agree to the Terms of Service and Privacy Policy.",
            ),
        ),
        ("registerSuccess", Entry::new("Tài khoản của bạn đã được tạo.", "Your account has been created.")),
    ],
);

#[component]
pub fn RegisterPage() -> Element {
    let tr = crate::use_scoped(&TEXT);
    let config = crate::use_config();
    let in_flight = use_in_flight();

    let mut form = use_signal(Registration::default);
    let mut error = use_signal(|| None::<AuthError>);
    let mut registered = use_signal(|| false);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let draft = form();
        if let Err(err) = api::auth::validate_registration(&draft) {
            error.set(Some(err));
            return;
        }
        error.set(None);

        let delay = config.latency.auth;
        in_flight.run("auth.signup", async move {
            simulate_latency(delay).await;
            match api::signup(&draft) {
                Ok(()) => registered.set(true),
                Err(err) => error.set(Some(err)),
            }
        });
    };

    if registered() {
        return rsx! {
            AuthCard { title: tr.t("registerTitle"), subtitle: tr.t("registerSubtitle"),
                div { class: "notice success", role: "alert", {tr.t("registerSuccess")} }
                Link { class: "btn full", to: "/login", {tr.t("login")} }
            }
        };
    }

    rsx! {
        AuthCard { title: tr.t("registerTitle"), subtitle: tr.t("registerSubtitle"),
            form { class: "form", onsubmit,
                if let Some(err) = error() {
                    div { class: "notice error", role: "alert", {tr.t(err.key())} }
                }
                div { class: "field",
                    label { r#for: "fullName", {tr.t("fullName")} }
                    input {
                        id: "fullName",
                        r#type: "text",
                        value: form.read().full_name.clone(),
                        oninput: move |e| form.write().full_name = e.value(),
                    }
                }
                div { class: "field",
                    label { r#for: "email", {tr.t("email")} }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: form.read().email.clone(),
                        oninput: move |e| form.write().email = e.value(),
                    }
                }
                div { class: "field",
                    label { r#for: "password", {tr.t("password")} }
                    input {
                        id: "password",
                        r#type: "password",
                        value: form.read().password.clone(),
                        oninput: move |e| form.write().password = e.value(),
                    }
                }
                div { class: "field",
                    label { r#for: "confirmPassword", {tr.t("confirmPassword")} }
                    input {
                        id: "confirmPassword",
                        r#type: "password",
                        value: form.read().confirm_password.clone(),
                        oninput: move |e| form.write().confirm_password = e.value(),
                    }
                }
                div { class: "field checkbox",
                    input {
                        id: "terms",
                        r#type: "checkbox",
                        checked: form.read().accepted_terms,
                        onchange: move |e| form.write().accepted_terms = e.checked(),
                    }
                    label { r#for: "terms", {tr.t("termsAndConditions")} }
                }
                button {
                    class: "btn primary full",
                    r#type: "submit",
                    disabled: in_flight.is_busy(),
                    if in_flight.is_busy() { {tr.t("loading")} } else { {tr.t("registerButton")} }
                }
                p { class: "form_footer",
                    {tr.t("alreadyHaveAccount")}
                    " "
                    Link { class: "link", to: "/login", {tr.t("login")} }
                }
            }
        }
    }
}
