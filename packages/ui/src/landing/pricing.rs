use api::format::format_vnd;
use api::pricing::plans;
use api::types::BillingCycle;
use dioxus::prelude::*;

use super::TEXT;

#[component]
pub fn PricingSection() -> Element {
    let tr = crate::use_scoped(&TEXT);
    let mut cycle = use_signal(BillingCycle::default);
    let yearly = cycle() == BillingCycle::Yearly;
    let plans = use_hook(plans);

    rsx! {
        section { id: "pricing", class: "section",
            div { class: "section_header",
                h2 { {tr.t("pricingTitle")} }
                div { class: "rule" }

                div { class: "billing_switch",
                    span { class: if !yearly { "active" } else { "" }, {tr.t("monthly")} }
                    label { class: "switch",
                        input {
                            r#type: "checkbox",
                            id: "billing-toggle",
                            checked: yearly,
                            onchange: move |e| {
                                cycle.set(if e.checked() { BillingCycle::Yearly } else { BillingCycle::Monthly })
                            },
                        }
                        span { class: "slider" }
                    }
                    span { class: if yearly { "active" } else { "" }, {tr.t("yearly")} }
                }
                p { class: "hint",
                    if yearly { {tr.t("saveYearly")} }
                }
            }

            div { class: "grid three",
                for plan in plans.iter() {
                    div {
                        key: "{plan.id}",
                        class: if plan.highlight { "card plan_card highlight" } else { "card plan_card" },
                        if plan.highlight {
                            div { class: "badge popular", {tr.t("mostPopular")} }
                        }
                        h3 { {tr.t(plan.title_key)} }
                        div { class: "plan_price",
                            span { class: "amount", {format_vnd(plan.price(cycle()))} }
                            span { class: "muted",
                                if yearly { {tr.t("perYear")} } else { {tr.t("perMonth")} }
                            }
                        }
                        ul { class: "plan_features",
                            for feature in plan.features.iter() {
                                li { key: "{feature.key}",
                                    span { class: "check", "✓" }
                                    span { class: "feature_name", {format!("{}: ", tr.t(feature.key))} }
                                    "{feature.value}"
                                }
                            }
                        }
                        button {
                            class: if plan.highlight { "btn primary full" } else { "btn full" },
                            {tr.t("choosePlan")}
                        }
                    }
                }
            }
        }
    }
}
