use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! { ui::DashboardOverview {} }
}

#[component]
pub fn CreateContent() -> Element {
    rsx! { ui::CreateContentPage {} }
}

#[component]
pub fn Credits() -> Element {
    rsx! { ui::CreditsPage {} }
}

#[component]
pub fn Connections() -> Element {
    rsx! { ui::ConnectionsPage {} }
}
