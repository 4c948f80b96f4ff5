use std::fmt;

use crate::types::ContentRequest;

/// Credits charged for one generation.
pub const GENERATION_COST: u32 = 5;

const MOCK_SEO_SCORE: u8 = 92;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
    pub html: String,
    pub seo_score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentError {
    TitleRequired,
    TopicRequired,
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::TitleRequired => f.write_str("a title is required"),
            ContentError::TopicRequired => f.write_str("a topic is required"),
        }
    }
}

impl std::error::Error for ContentError {}

/// Stand-in for the generation endpoint: a fixed document built around the
/// request. Labels are passed already translated so the text follows the UI
/// language.
pub fn generate_content(
    request: &ContentRequest,
    topic_label: &str,
    audience_label: &str,
) -> Result<GeneratedContent, ContentError> {
    if request.title.trim().is_empty() {
        return Err(ContentError::TitleRequired);
    }
    if request.topic.is_none() {
        return Err(ContentError::TopicRequired);
    }

    tracing::info!(
        "content.generate: type={} length={} audience={}",
        request.content_type.value(),
        request.length.value(),
        request.audience.value()
    );

    let html = format!(
        r#"<h1>{title}</h1>
<p>This is a generated content about {topic} for {audience}.</p>
<p>Keywords: {keywords}</p>
<h2>Introduction</h2>
<p>Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nulla facilisi. Phasellus fermentum tincidunt nibh, at gravida enim rhoncus at.</p>
<h2>Main Content</h2>
<p>Vestibulum ante ipsum primis in faucibus orci luctus et ultrices posuere cubilia Curae; Donec velit neque, auctor sit amet aliquam vel, ullamcorper sit amet ligula.</p>
<p>Proin eget tortor risus. Vivamus magna justo, lacinia eget consectetur sed, convallis at tellus. Cras ultricies ligula sed magna dictum porta.</p>
<h2>Conclusion</h2>
<p>Sed porttitor lectus nibh. Cras ultricies ligula sed magna dictum porta. Nulla porttitor accumsan tincidunt.</p>
"#,
        title = escape_html(request.title.trim()),
        topic = escape_html(topic_label),
        audience = escape_html(audience_label),
        keywords = escape_html(request.keywords.trim()),
    );

    Ok(GeneratedContent {
        html,
        seo_score: MOCK_SEO_SCORE,
    })
}

/// Saving a draft always succeeds; only the size is recorded.
pub fn save_draft(html: &str) {
    tracing::info!("content.save_draft: bytes={}", html.len());
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Topic;

    fn request() -> ContentRequest {
        ContentRequest {
            title: "Rust for SEO".to_string(),
            topic: Some(Topic::Technology),
            keywords: "rust, seo".to_string(),
            ..ContentRequest::default()
        }
    }

    #[test]
    fn test_generated_document_mentions_request() {
        let out = generate_content(&request(), "Technology", "General").unwrap();
        assert!(out.html.starts_with("<h1>Rust for SEO</h1>"));
        assert!(out.html.contains("about Technology for General."));
        assert!(out.html.contains("<p>Keywords: rust, seo</p>"));
        assert_eq!(out.seo_score, 92);
    }

    #[test]
    fn test_user_input_is_escaped() {
        let req = ContentRequest {
            title: "<script>alert('x')</script>".to_string(),
            ..request()
        };
        let out = generate_content(&req, "Công nghệ", "Đại chúng").unwrap();
        assert!(!out.html.contains("<script>"));
        assert!(out.html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(out.html.contains("Công nghệ"));
    }

    #[test]
    fn test_requires_title_and_topic() {
        let no_title = ContentRequest {
            title: "   ".to_string(),
            ..request()
        };
        assert_eq!(
            generate_content(&no_title, "t", "a"),
            Err(ContentError::TitleRequired)
        );
        let no_topic = ContentRequest {
            topic: None,
            ..request()
        };
        assert_eq!(
            generate_content(&no_topic, "t", "a"),
            Err(ContentError::TopicRequired)
        );
        assert!(!no_topic.is_ready());
        assert!(request().is_ready());
    }
}
