use api::credits::CREDIT_BALANCE;
use api::types::{Audience, ContentLength, ContentRequest, ContentType, Platform, Topic};
use api::GENERATION_COST;
use dioxus::prelude::*;

use crate::i18n::{Dictionary, Entry, Translator};
use crate::pending::{simulate_latency, use_in_flight};

pub(crate) static TEXT: Dictionary = Dictionary::new(
    "dashboard_create_content",
    &[
        ("createContentTitle", Entry::new("Tạo bài viết SEO", "Create SEO Content")),
        ("inputContentDetails", Entry::new("Nhập thông tin cho bài viết của bạn", "Input details for your content")),
        (
            "formDescription",
            Entry::new(
                "Điền thông tin để tạo bài viết được tối ưu hóa cho SEO",
                "Fill in the details to create SEO-optimized content",
            ),
        ),
        ("title", Entry::new("Tiêu đề", "Title")),
        ("titlePlaceholder", Entry::new("Nhập tiêu đề bài viết", "Enter content title")),
        ("topic", Entry::new("Chủ đề", "Topic")),
        ("keywords", Entry::new("Từ khóa", "Keywords")),
        ("keywordsPlaceholder", Entry::new("Nhập từ khóa SEO cách nhau bởi dấu phẩy", "Enter SEO keywords separated by commas")),
        ("contentType", Entry::new("Loại nội dung", "Content Type")),
        ("blogPost", Entry::new("Bài viết blog", "Blog Post")),
        ("socialPost", Entry::new("Bài đăng mạng xã hội", "Social Media Post")),
        ("productDescription", Entry::new("Mô tả sản phẩm", "Product Description")),
        ("instructions", Entry::new("Hướng dẫn bổ sung", "Additional Instructions")),
        (
            "instructionsPlaceholder",
            Entry::new(
                "Nhập chi tiết hoặc yêu cầu đặc biệt cho bài viết",
                "Enter details or special requirements for the content",
            ),
        ),
        ("targetAudience", Entry::new("Đối tượng mục tiêu", "Target Audience")),
        ("contentLength", Entry::new("Độ dài nội dung", "Content Length")),
        ("short", Entry::new("Ngắn", "Short")),
        ("medium", Entry::new("Trung bình", "Medium")),
        ("long", Entry::new("Dài", "Long")),
        ("generateContent", Entry::new("Tạo nội dung", "Generate Content")),
        ("generating", Entry::new("Đang tạo nội dung...", "Generating content...")),
        ("saving", Entry::new("Đang lưu...", "Saving...")),
        ("editor", Entry::new("Chỉnh sửa", "Editor")),
        ("preview", Entry::new("Xem trước", "Preview")),
        ("seoScore", Entry::new("Điểm SEO", "SEO Score")),
        ("saveAsDraft", Entry::new("Lưu nháp", "Save as Draft")),
        ("draftSaved", Entry::new("Đã lưu bản nháp", "Draft saved")),
        ("generationFailed", Entry::new("Không thể tạo nội dung", "Could not generate content")),
        ("downloadPDF", Entry::new("Tải PDF", "Download PDF")),
        ("share", Entry::new("Chia sẻ", "Share")),
        ("publishTo", Entry::new("Xuất bản đến", "Publish to")),
        ("generatedContent", Entry::new("Nội dung đã tạo", "Generated Content")),
        ("useCredits", Entry::new("Sử dụng tín dụng", "Use Credits")),
        ("creditCost", Entry::new("Tạo bài viết này sẽ sử dụng", "Creating this content will use")),
        ("creditsUnit", Entry::new("tín dụng", "credits")),
        ("creditsRemaining", Entry::new("Tín dụng còn lại", "Credits remaining")),
        ("buyMoreCredits", Entry::new("Mua thêm tín dụng", "Buy more credits")),
        // Topics
        ("topic.technology", Entry::new("Công nghệ", "Technology")),
        ("topic.health", Entry::new("Sức khỏe", "Health")),
        ("topic.finance", Entry::new("Tài chính", "Finance")),
        ("topic.education", Entry::new("Giáo dục", "Education")),
        ("topic.travel", Entry::new("Du lịch", "Travel")),
        ("topic.food", Entry::new("Ẩm thực", "Food")),
        ("topic.fashion", Entry::new("Thời trang", "Fashion")),
        ("topic.business", Entry::new("Kinh doanh", "Business")),
        ("topic.marketing", Entry::new("Marketing", "Marketing")),
        ("topic.entertainment", Entry::new("Giải trí", "Entertainment")),
        // Audiences
        ("audience.general", Entry::new("Đại chúng", "General")),
        ("audience.professional", Entry::new("Chuyên gia", "Professional")),
        ("audience.students", Entry::new("Học sinh/Sinh viên", "Students")),
        ("audience.parents", Entry::new("Phụ huynh", "Parents")),
        ("audience.seniors", Entry::new("Người cao tuổi", "Seniors")),
        ("audience.businesses", Entry::new("Doanh nghiệp", "Businesses")),
    ],
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorTab {
    Editor,
    Preview,
}

#[component]
pub fn CreateContentPage() -> Element {
    let tr = crate::use_scoped(&TEXT);
    let config = crate::use_config();
    let toasts = crate::use_toasts();
    let generating = use_in_flight();
    let saving = use_in_flight();

    let mut form = use_signal(ContentRequest::default);
    let mut html = use_signal(String::new);
    let mut seo_score = use_signal(|| None::<u8>);
    let mut tab = use_signal(|| EditorTab::Editor);

    let can_generate = !generating.is_busy() && form.read().is_ready();

    let on_generate = move |_| {
        let request = form();
        let topic_label = request.topic.map(|t| tr.t(t.key())).unwrap_or_default();
        let audience_label = tr.t(request.audience.key());
        let delay = config.latency.generate;
        generating.run("content.generate", async move {
            simulate_latency(delay).await;
            match api::generate_content(&request, &topic_label, &audience_label) {
                Ok(out) => {
                    html.set(out.html);
                    seo_score.set(Some(out.seo_score));
                    tab.set(EditorTab::Editor);
                }
                Err(err) => {
                    tracing::warn!("content.generate: rejected ({err})");
                    toasts.error(tr.t("generationFailed"), Some(err.to_string()));
                }
            }
        });
    };

    let on_save = move |_| {
        let snapshot = html();
        let delay = config.latency.save;
        saving.run("content.save_draft", async move {
            simulate_latency(delay).await;
            api::save_draft(&snapshot);
            toasts.success(tr.t("draftSaved"), None);
        });
    };

    rsx! {
        div { class: "stack",
            div { class: "page_header",
                h1 { {tr.t("createContentTitle")} }
                p { class: "muted", {tr.t("inputContentDetails")} }
            }

            div { class: "grid sidebar_right",
                div { class: "card",
                    div { class: "card_header",
                        h3 { {tr.t("createContentTitle")} }
                        p { class: "muted", {tr.t("formDescription")} }
                    }
                    div { class: "form",
                        div { class: "field",
                            label { r#for: "title", {tr.t("title")} }
                            input {
                                id: "title",
                                placeholder: tr.t("titlePlaceholder"),
                                value: form.read().title.clone(),
                                oninput: move |e| form.write().title = e.value(),
                            }
                        }
                        div { class: "grid two",
                            div { class: "field",
                                label { r#for: "topic", {tr.t("topic")} }
                                select {
                                    id: "topic",
                                    onchange: move |e| form.write().topic = Topic::from_value(&e.value()),
                                    option { value: "", disabled: true, selected: form.read().topic.is_none(), {tr.t("topic")} }
                                    for topic in Topic::ALL {
                                        option {
                                            key: "{topic.value()}",
                                            value: topic.value(),
                                            selected: form.read().topic == Some(topic),
                                            {tr.t(topic.key())}
                                        }
                                    }
                                }
                            }
                            div { class: "field",
                                label { r#for: "contentType", {tr.t("contentType")} }
                                select {
                                    id: "contentType",
                                    onchange: move |e| {
                                        if let Some(kind) = ContentType::from_value(&e.value()) {
                                            form.write().content_type = kind;
                                        }
                                    },
                                    for kind in ContentType::ALL {
                                        option {
                                            key: "{kind.value()}",
                                            value: kind.value(),
                                            selected: form.read().content_type == kind,
                                            {tr.t(kind.value())}
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "field",
                            label { r#for: "keywords", {tr.t("keywords")} }
                            input {
                                id: "keywords",
                                placeholder: tr.t("keywordsPlaceholder"),
                                value: form.read().keywords.clone(),
                                oninput: move |e| form.write().keywords = e.value(),
                            }
                        }
                        div { class: "grid two",
                            div { class: "field",
                                label { r#for: "targetAudience", {tr.t("targetAudience")} }
                                select {
                                    id: "targetAudience",
                                    onchange: move |e| {
                                        if let Some(audience) = Audience::from_value(&e.value()) {
                                            form.write().audience = audience;
                                        }
                                    },
                                    for audience in Audience::ALL {
                                        option {
                                            key: "{audience.value()}",
                                            value: audience.value(),
                                            selected: form.read().audience == audience,
                                            {tr.t(audience.key())}
                                        }
                                    }
                                }
                            }
                            div { class: "field",
                                label { r#for: "contentLength", {tr.t("contentLength")} }
                                select {
                                    id: "contentLength",
                                    onchange: move |e| {
                                        if let Some(length) = ContentLength::from_value(&e.value()) {
                                            form.write().length = length;
                                        }
                                    },
                                    for length in ContentLength::ALL {
                                        option {
                                            key: "{length.value()}",
                                            value: length.value(),
                                            selected: form.read().length == length,
                                            {tr.t(length.value())}
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "field",
                            label { r#for: "instructions", {tr.t("instructions")} }
                            textarea {
                                id: "instructions",
                                rows: 4,
                                placeholder: tr.t("instructionsPlaceholder"),
                                value: form.read().instructions.clone(),
                                oninput: move |e| form.write().instructions = e.value(),
                            }
                        }
                    }
                    div { class: "card_footer row",
                        span { class: "muted",
                            {format!("{}: ", tr.t("creditsRemaining"))}
                            strong { "{CREDIT_BALANCE}" }
                        }
                        button {
                            class: "btn primary",
                            disabled: !can_generate,
                            onclick: on_generate,
                            if generating.is_busy() {
                                span { class: "spinner" }
                                {tr.t("generating")}
                            } else {
                                "✨ "
                                {tr.t("generateContent")}
                            }
                        }
                    }
                }

                CreditSidebar { tr }
            }

            if let Some(score) = seo_score() {
                div { class: "card",
                    div { class: "card_header row",
                        h3 {
                            if form.read().title.trim().is_empty() {
                                {tr.t("generatedContent")}
                            } else {
                                {form.read().title.clone()}
                            }
                        }
                        span { class: "badge success", {format!("{}: {score}/100", tr.t("seoScore"))} }
                    }

                    div { class: "tabs",
                        button {
                            class: if tab() == EditorTab::Editor { "tab active" } else { "tab" },
                            onclick: move |_| tab.set(EditorTab::Editor),
                            {tr.t("editor")}
                        }
                        button {
                            class: if tab() == EditorTab::Preview { "tab active" } else { "tab" },
                            onclick: move |_| tab.set(EditorTab::Preview),
                            {tr.t("preview")}
                        }
                    }

                    {match tab() {
                        EditorTab::Editor => rsx! {
                            textarea {
                                class: "editor mono",
                                value: html(),
                                oninput: move |e| html.set(e.value()),
                            }
                        },
                        EditorTab::Preview => rsx! {
                            div { class: "preview prose", dangerous_inner_html: html() }
                        },
                    }}

                    div { class: "card_footer row wrap",
                        div { class: "button_row",
                            button {
                                class: "btn",
                                disabled: saving.is_busy(),
                                onclick: on_save,
                                if saving.is_busy() {
                                    span { class: "spinner" }
                                    {tr.t("saving")}
                                } else {
                                    {tr.t("saveAsDraft")}
                                }
                            }
                            button { class: "btn", "⬇ " {tr.t("downloadPDF")} }
                            button { class: "btn", "↗ " {tr.t("share")} }
                        }
                        select { class: "publish_select",
                            option { value: "", selected: true, disabled: true, {tr.t("publishTo")} }
                            for platform in [Platform::WordPress, Platform::Facebook, Platform::Twitter] {
                                option { key: "{platform.value()}", value: platform.value(), {platform.label()} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CreditSidebar(tr: Translator) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card_header", h3 { {tr.t("useCredits")} } }
            div { class: "notice info",
                {format!("{} {} {}", tr.t("creditCost"), GENERATION_COST, tr.t("creditsUnit"))}
            }
            div { class: "balance_box",
                div { class: "row",
                    span { class: "strong", {tr.t("creditsRemaining")} }
                    span { class: "stat_value", "{CREDIT_BALANCE}" }
                }
                Link { class: "btn small full", to: "/dashboard/credits", {tr.t("buyMoreCredits")} }
            }
        }
    }
}
