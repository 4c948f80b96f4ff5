//! This crate contains all shared UI for the workspace.

pub mod i18n;
pub use i18n::{
    dictionaries, lookup, t, use_lang, use_language_selector, use_scoped, use_translator,
    Dictionary, Entry, I18nProvider, Lang, LanguageSelector, Translator, UnsupportedLang,
};

mod config;
pub use config::use_config;

mod pending;
pub use pending::{simulate_latency, use_in_flight, InFlight};

mod toast;
pub use toast::{use_toasts, ToastKind, ToastProvider, Toasts};

mod theme;
pub use theme::ScribeTheme;

mod language_toggle;
pub use language_toggle::LanguageToggle;

mod navbar;
pub use navbar::Navbar;

mod landing;
pub use landing::LandingPage;

mod auth;
pub use auth::{ForgotPasswordPage, LoginPage, RegisterPage};

mod dashboard;
pub use dashboard::{
    ConnectionsPage, CreateContentPage, CreditsPage, DashboardLayout, DashboardOverview,
    DashboardSection,
};

mod not_found;
pub use not_found::NotFoundPage;
