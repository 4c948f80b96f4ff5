use api::config::AppConfig;
use dioxus::prelude::*;
use tracing::info;
use ui::DashboardSection;

use views::{
    Connections, CreateContent, Credits, Dashboard, ForgotPassword, Home, Login, NotFound,
    Register,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicShell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/forgot-password")]
        ForgotPassword {},
    #[end_layout]
    #[layout(DashboardShell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/dashboard/create")]
        CreateContent {},
        #[route("/dashboard/credits")]
        Credits {},
        #[route("/dashboard/connections")]
        Connections {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("startup: invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = dioxus::logger::init(config.log_level) {
        eprintln!("startup: logger already initialized: {err}");
    }
    log_runtime_config(&config);

    LaunchBuilder::new().with_context(config).launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config(config: &AppConfig) {
    info!(
        "startup: platform=desktop default_lang={} log_level={}",
        config.default_lang, config.log_level
    );
    info!(
        "startup: latency auth={:?} generate={:?} save={:?}",
        config.latency.auth, config.latency.generate, config.latency.save
    );
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::ScribeTheme {}
        ui::I18nProvider {
            ui::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Marketing and auth pages under the shared navbar.
#[component]
fn PublicShell() -> Element {
    rsx! {
        ui::Navbar {}
        main { class: "route_view", Outlet::<Route> {} }
    }
}

/// Dashboard pages inside the sidebar layout, with the current route's entry
/// highlighted.
#[component]
fn DashboardShell() -> Element {
    let route = use_route::<Route>();
    let section = DashboardSection::from_path(&route.to_string());

    rsx! {
        ui::DashboardLayout { section, Outlet::<Route> {} }
    }
}
