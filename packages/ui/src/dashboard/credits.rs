use api::credits::{self, CREDIT_BALANCE};
use api::format::{format_date, format_money, format_per_credit};
use api::types::{CreditPackage, PackageBadge, Transaction, TransactionStatus};
use dioxus::prelude::*;

use crate::i18n::{Dictionary, Entry, Translator};

pub(crate) static TEXT: Dictionary = Dictionary::new(
    "dashboard_credits",
    &[
        ("subtitle", Entry::new("Quản lý và mua tín dụng cho tài khoản của bạn", "Manage and purchase credits for your account")),
        ("buyCredits", Entry::new("Mua tín dụng", "Buy Credits")),
        ("availableCredits", Entry::new("Tín dụng hiện có", "Available Credits")),
        ("purchaseCredits", Entry::new("Mua tín dụng", "Purchase Credits")),
        ("transactionHistory", Entry::new("Lịch sử giao dịch", "Transaction History")),
        ("chooseCreditPackage", Entry::new("Chọn gói tín dụng", "Choose Credit Package")),
        ("packageSubtitle", Entry::new("Chọn gói tín dụng phù hợp với nhu cầu của bạn", "Choose a credit package that suits your needs")),
        ("selectPayment", Entry::new("Chọn phương thức thanh toán", "Select Payment Method")),
        ("paymentDetails", Entry::new("Thông tin thanh toán", "Payment Details")),
        ("cardNumber", Entry::new("Số thẻ", "Card Number")),
        ("cardholderName", Entry::new("Tên chủ thẻ", "Cardholder Name")),
        ("expiryDate", Entry::new("Ngày hết hạn", "Expiry Date")),
        ("cvc", Entry::new("CVC", "CVC")),
        ("payNow", Entry::new("Thanh toán ngay", "Pay Now")),
        ("historySubtitle", Entry::new("Lịch sử giao dịch mua tín dụng của bạn", "Your credit purchase transaction history")),
        ("date", Entry::new("Ngày", "Date")),
        ("description", Entry::new("Mô tả", "Description")),
        ("amount", Entry::new("Số tiền", "Amount")),
        ("status", Entry::new("Trạng thái", "Status")),
        ("completed", Entry::new("Hoàn thành", "Completed")),
        ("pending", Entry::new("Đang xử lý", "Pending")),
        ("mostPopular", Entry::new("Phổ biến nhất", "Most Popular")),
        ("bestValue", Entry::new("Giá trị nhất", "Best Value")),
        ("noTransactions", Entry::new("Chưa có giao dịch nào", "No transactions yet")),
        ("purchase", Entry::new("Mua", "Purchase")),
        ("creditsUnit", Entry::new("tín dụng", "credits")),
    ],
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CreditsTab {
    Purchase,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaymentMethod {
    Stripe,
    MoMo,
    VnPay,
}

impl PaymentMethod {
    const ALL: [PaymentMethod; 3] = [PaymentMethod::Stripe, PaymentMethod::MoMo, PaymentMethod::VnPay];

    fn label(self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "Stripe",
            PaymentMethod::MoMo => "MoMo",
            PaymentMethod::VnPay => "VNPay",
        }
    }

    fn class(self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "method_logo stripe",
            PaymentMethod::MoMo => "method_logo momo",
            PaymentMethod::VnPay => "method_logo vnpay",
        }
    }
}

fn badge_class(badge: PackageBadge) -> &'static str {
    match badge {
        PackageBadge::MostPopular => "corner_badge primary",
        PackageBadge::BestValue => "corner_badge success",
    }
}

fn status_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "badge success",
        TransactionStatus::Pending => "badge warning",
    }
}

/// Label of the pay button: the chosen price, or a prompt when nothing is selected.
fn pay_label(tr: Translator, selected: Option<&CreditPackage>) -> String {
    match selected {
        Some(pack) => format!(
            "{} - {}",
            tr.t("payNow"),
            format_money(tr.lang(), pack.price_vnd, pack.price_usd_cents)
        ),
        None => tr.t("chooseCreditPackage"),
    }
}

#[component]
pub fn CreditsPage() -> Element {
    let tr = crate::use_scoped(&TEXT);
    let mut tab = use_signal(|| CreditsTab::Purchase);

    rsx! {
        div { class: "stack",
            div { class: "page_header",
                h1 { {tr.t("credits")} }
                p { class: "muted", {tr.t("subtitle")} }
            }

            div { class: "card balance_card",
                div {
                    h2 { {tr.t("availableCredits")} }
                    p { class: "balance_value", "{CREDIT_BALANCE}" }
                }
                span { class: "balance_icon", "👛" }
            }

            div { class: "tabs narrow",
                button {
                    class: if tab() == CreditsTab::Purchase { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(CreditsTab::Purchase),
                    {tr.t("purchaseCredits")}
                }
                button {
                    class: if tab() == CreditsTab::History { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(CreditsTab::History),
                    {tr.t("transactionHistory")}
                }
            }

            {match tab() {
                CreditsTab::Purchase => rsx! { PurchaseTab { tr } },
                CreditsTab::History => rsx! { HistoryTab { text: tr } },
            }}
        }
    }
}

#[component]
fn PurchaseTab(tr: Translator) -> Element {
    let packs = use_hook(credits::packages);
    let mut selected = use_signal(|| None::<u32>);
    let mut method = use_signal(|| None::<PaymentMethod>);

    let chosen = selected().and_then(|id| packs.iter().find(|p| p.id == id).cloned());
    let lang = tr.lang();

    rsx! {
        div { class: "card",
            div { class: "card_header",
                h3 { {tr.t("chooseCreditPackage")} }
                p { class: "muted", {tr.t("packageSubtitle")} }
            }
            div { class: "grid three",
                for pack in packs.iter().cloned() {
                    div {
                        key: "{pack.id}",
                        class: if selected() == Some(pack.id) { "package selected" } else { "package" },
                        onclick: move |_| {
                            tracing::debug!("credits.select_package: id={}", pack.id);
                            selected.set(Some(pack.id));
                        },
                        if let Some(badge) = pack.badge {
                            span { class: badge_class(badge), {tr.t(badge.key())} }
                        }
                        if selected() == Some(pack.id) {
                            span { class: "check_mark", "✓" }
                        }
                        div { class: "package_credits",
                            div { class: "stat_value", "{pack.credits}" }
                            div { class: "muted small", {tr.t("creditsUnit")} }
                        }
                        div { class: "package_price",
                            div { class: "price", {format_money(lang, pack.price_vnd, pack.price_usd_cents)} }
                            div { class: "muted small", {format_per_credit(lang, &pack)} }
                        }
                    }
                }
            }
            div { class: "card_footer",
                button {
                    class: "btn primary full",
                    disabled: chosen.is_none(),
                    {pay_label(tr, chosen.as_ref())}
                }
            }
        }

        div { class: "card",
            div { class: "card_header", h3 { {tr.t("selectPayment")} } }
            div { class: "grid three",
                for m in PaymentMethod::ALL {
                    button {
                        key: "{m.label()}",
                        class: if method() == Some(m) { "payment_method selected" } else { "payment_method" },
                        onclick: move |_| method.set(Some(m)),
                        span { class: m.class(), {m.label()} }
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryTab(text: Translator) -> Element {
    let history = use_hook(credits::transactions);

    rsx! {
        div { class: "card",
            div { class: "card_header",
                h3 { {text.t("transactionHistory")} }
                p { class: "muted", {text.t("historySubtitle")} }
            }
            if history.is_empty() {
                div { class: "empty_state muted", {text.t("noTransactions")} }
            } else {
                div { class: "table_scroll",
                    table { class: "table",
                        thead {
                            tr {
                                th { {text.t("date")} }
                                th { {text.t("description")} }
                                th { class: "right", {text.t("amount")} }
                                th { class: "right", {text.t("status")} }
                            }
                        }
                        tbody {
                            for row in history.iter() {
                                TransactionRow { key: "{row.id}", text, row: row.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TransactionRow(text: Translator, row: Transaction) -> Element {
    let lang = text.lang();
    rsx! {
        tr {
            td { {format_date(lang, row.date)} }
            td { {format!("{}: {} {}", text.t("purchase"), row.credits, text.t("creditsUnit"))} }
            td { class: "right", {format_money(lang, row.amount_vnd, row.amount_usd_cents)} }
            td { class: "right",
                span { class: status_class(row.status), {text.t(row.status.key())} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::types::Lang;

    #[test]
    fn pay_label_prompts_until_a_package_is_chosen() {
        let tr = Translator::scoped(Lang::En, &TEXT);
        assert_eq!(pay_label(tr, None), "Choose Credit Package");
    }

    #[test]
    fn pay_label_shows_localized_price() {
        let pack = credits::find_package(2).unwrap();
        let en = Translator::scoped(Lang::En, &TEXT);
        assert_eq!(pay_label(en, Some(&pack)), "Pay Now - $39.99");
        let vi = Translator::scoped(Lang::Vi, &TEXT);
        assert_eq!(pay_label(vi, Some(&pack)), "Thanh toán ngay - 899.000\u{a0}₫");
    }
}
