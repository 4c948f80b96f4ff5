//! Money and date formatting for the two supported languages.
//!
//! Vietnamese shows Vietnamese đồng, English shows US dollars. Prices are
//! stored in both currencies so no conversion happens at display time.

use chrono::{Datelike, NaiveDate};

use crate::types::{CreditPackage, Lang};

pub fn group_thousands(n: u64, sep: char) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

pub fn format_vnd(amount: u64) -> String {
    format!("{}\u{a0}₫", group_thousands(amount, '.'))
}

pub fn format_usd_cents(cents: u64) -> String {
    format!("${}.{:02}", group_thousands(cents / 100, ','), cents % 100)
}

pub fn format_money(lang: Lang, vnd: u64, usd_cents: u64) -> String {
    match lang {
        Lang::Vi => format_vnd(vnd),
        Lang::En => format_usd_cents(usd_cents),
    }
}

pub fn format_per_credit(lang: Lang, package: &CreditPackage) -> String {
    let credits = u64::from(package.credits.max(1));
    match lang {
        Lang::Vi => {
            let per = (package.price_vnd + credits / 2) / credits;
            format!("{}đ/credit", group_thousands(per, '.'))
        }
        Lang::En => {
            let per = (package.price_usd_cents + credits / 2) / credits;
            format!("{}/credit", format_usd_cents(per))
        }
    }
}

pub fn format_date(lang: Lang, date: NaiveDate) -> String {
    match lang {
        Lang::Vi => date.format("%d/%m/%Y").to_string(),
        Lang::En => format!("{}/{}/{}", date.month(), date.day(), date.year()),
    }
}

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}
