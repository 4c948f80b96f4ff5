//! Sign-in, sign-up and password reset forms.
//!
//! Each form validates through `api::auth`, waits out the configured auth
//! latency, then shows its terminal state.

use dioxus::prelude::*;

pub(crate) mod forgot_password;
pub(crate) mod login;
pub(crate) mod register;

pub use forgot_password::ForgotPasswordPage;
pub use login::LoginPage;
pub use register::RegisterPage;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

/// Card wrapper shared by the three forms.
#[component]
fn AuthCard(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }
        div { class: "auth_page",
            div { class: "card auth_card",
                div { class: "card_header",
                    h2 { "{title}" }
                    p { class: "muted", "{subtitle}" }
                }
                {children}
            }
        }
    }
}
