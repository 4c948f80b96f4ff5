//! Marketing page: hero, feature cards, pricing, call to action and footer.

use dioxus::prelude::*;

use crate::i18n::{Dictionary, Entry};

mod footer;
mod hero;
mod pricing;

pub use footer::Footer;
pub use hero::Hero;
pub use pricing::PricingSection;

pub(crate) static TEXT: Dictionary = Dictionary::new(
    "landing",
    &[
        ("mostPopular", Entry::new("Phổ biến nhất", "Most Popular")),
        ("saveYearly", Entry::new("Tiết kiệm 15% khi thanh toán theo năm", "Save 15% with yearly billing")),
        (
            "footerTagline",
            Entry::new(
                "Công cụ tạo nội dung chuẩn SEO hàng đầu cho website và mạng xã hội",
                "The leading SEO content creation tool for websites and social media",
            ),
        ),
        ("footerLinks", Entry::new("Liên kết", "Links")),
        ("footerLegal", Entry::new("Pháp lý", "Legal")),
        ("terms", Entry::new("Điều khoản sử dụng", "Terms of Service")),
        ("privacy", Entry::new("Chính sách bảo mật", "Privacy Policy")),
        ("footerContact", Entry::new("Liên hệ", "Contact")),
        ("contactEmail", Entry::new("Email: support@seoscribe.vn", "Email: support@seoscribe.com")),
        ("contactPhone", Entry::new("Điện thoại: +84 123 456 789", "Phone: +84 123 456 789")),
        ("rightsReserved", Entry::new("Đã đăng ký bản quyền.", "All rights reserved.")),
    ],
);

struct Feature {
    icon: &'static str,
    title_key: &'static str,
    description_key: &'static str,
    tone: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🔍",
        title_key: "featureSEOTitle",
        description_key: "featureSEODesc",
        tone: "tone_blue",
    },
    Feature {
        icon: "📱",
        title_key: "featureSocialTitle",
        description_key: "featureSocialDesc",
        tone: "tone_green",
    },
    Feature {
        icon: "🤖",
        title_key: "featureAITitle",
        description_key: "featureAIDesc",
        tone: "tone_purple",
    },
];

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

#[component]
pub fn LandingPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }
        Hero {}
        FeaturesSection {}
        PricingSection {}
        CallToAction {}
        Footer {}
    }
}

#[component]
fn FeaturesSection() -> Element {
    let tr = crate::use_translator();
    rsx! {
        section { id: "features", class: "section white",
            div { class: "section_header",
                h2 { {tr.t("featuresTitle")} }
                div { class: "rule" }
            }
            div { class: "grid three",
                for feature in FEATURES.iter() {
                    div { key: "{feature.title_key}", class: "card feature_card",
                        div { class: "feature_icon {feature.tone}", "{feature.icon}" }
                        h3 { {tr.t(feature.title_key)} }
                        p { class: "muted", {tr.t(feature.description_key)} }
                    }
                }
            }
        }
    }
}

#[component]
fn CallToAction() -> Element {
    let tr = crate::use_translator();
    rsx! {
        section { class: "section cta_band",
            h2 { {tr.t("ctaTitle")} }
            p { class: "lead", {tr.t("ctaSubtitle")} }
            div { class: "cta_row center",
                Link { class: "btn large", to: "/register", {tr.t("getStarted")} }
                a { class: "btn large outline_light", href: "mailto:support@seoscribe.com", {tr.t("contactUs")} }
            }
        }
    }
}
