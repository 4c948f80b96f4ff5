use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    rsx! { ui::LoginPage {} }
}

#[component]
pub fn Register() -> Element {
    rsx! { ui::RegisterPage {} }
}

#[component]
pub fn ForgotPassword() -> Element {
    rsx! { ui::ForgotPasswordPage {} }
}
