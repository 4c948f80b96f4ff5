use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Supported languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Vi,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Vi, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Vi => "vi",
            Lang::En => "en",
        }
    }

    /// Name of the language written in that language, as shown by the toggle.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::Vi => "Tiếng Việt",
            Lang::En => "English",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "vi" | "vi-vn" => Some(Lang::Vi),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A language code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLang(pub String);

impl fmt::Display for UnsupportedLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language code {:?} (expected vi or en)", self.0)
    }
}

impl std::error::Error for UnsupportedLang {}

impl FromStr for Lang {
    type Err = UnsupportedLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| UnsupportedLang(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Technology,
    Health,
    Finance,
    Education,
    Travel,
    Food,
    Fashion,
    Business,
    Marketing,
    Entertainment,
}

impl Topic {
    pub const ALL: [Topic; 10] = [
        Topic::Technology,
        Topic::Health,
        Topic::Finance,
        Topic::Education,
        Topic::Travel,
        Topic::Food,
        Topic::Fashion,
        Topic::Business,
        Topic::Marketing,
        Topic::Entertainment,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Topic::Technology => "technology",
            Topic::Health => "health",
            Topic::Finance => "finance",
            Topic::Education => "education",
            Topic::Travel => "travel",
            Topic::Food => "food",
            Topic::Fashion => "fashion",
            Topic::Business => "business",
            Topic::Marketing => "marketing",
            Topic::Entertainment => "entertainment",
        }
    }

    /// Translation key of the topic label.
    pub fn key(self) -> &'static str {
        match self {
            Topic::Technology => "topic.technology",
            Topic::Health => "topic.health",
            Topic::Finance => "topic.finance",
            Topic::Education => "topic.education",
            Topic::Travel => "topic.travel",
            Topic::Food => "topic.food",
            Topic::Fashion => "topic.fashion",
            Topic::Business => "topic.business",
            Topic::Marketing => "topic.marketing",
            Topic::Entertainment => "topic.entertainment",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Topic::ALL.into_iter().find(|t| t.value() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    General,
    Professional,
    Students,
    Parents,
    Seniors,
    Businesses,
}

impl Audience {
    pub const ALL: [Audience; 6] = [
        Audience::General,
        Audience::Professional,
        Audience::Students,
        Audience::Parents,
        Audience::Seniors,
        Audience::Businesses,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Audience::General => "general",
            Audience::Professional => "professional",
            Audience::Students => "students",
            Audience::Parents => "parents",
            Audience::Seniors => "seniors",
            Audience::Businesses => "businesses",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Audience::General => "audience.general",
            Audience::Professional => "audience.professional",
            Audience::Students => "audience.students",
            Audience::Parents => "audience.parents",
            Audience::Seniors => "audience.seniors",
            Audience::Businesses => "audience.businesses",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Audience::ALL.into_iter().find(|a| a.value() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentType {
    #[default]
    BlogPost,
    SocialPost,
    ProductDescription,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [
        ContentType::BlogPost,
        ContentType::SocialPost,
        ContentType::ProductDescription,
    ];

    /// Form value, which doubles as the translation key.
    pub fn value(self) -> &'static str {
        match self {
            ContentType::BlogPost => "blogPost",
            ContentType::SocialPost => "socialPost",
            ContentType::ProductDescription => "productDescription",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        ContentType::ALL.into_iter().find(|c| c.value() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl ContentLength {
    pub const ALL: [ContentLength; 3] =
        [ContentLength::Short, ContentLength::Medium, ContentLength::Long];

    pub fn value(self) -> &'static str {
        match self {
            ContentLength::Short => "short",
            ContentLength::Medium => "medium",
            ContentLength::Long => "long",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        ContentLength::ALL.into_iter().find(|l| l.value() == value)
    }
}

/// Parameters of a content generation request, as filled in on the create page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentRequest {
    pub title: String,
    pub topic: Option<Topic>,
    pub keywords: String,
    pub content_type: ContentType,
    pub instructions: String,
    pub audience: Audience,
    pub length: ContentLength,
}

impl ContentRequest {
    /// Generation needs a title and a topic.
    pub fn is_ready(&self) -> bool {
        !self.title.trim().is_empty() && self.topic.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageBadge {
    MostPopular,
    BestValue,
}

impl PackageBadge {
    pub fn key(self) -> &'static str {
        match self {
            PackageBadge::MostPopular => "mostPopular",
            PackageBadge::BestValue => "bestValue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditPackage {
    pub id: u32,
    pub credits: u32,
    pub price_vnd: u64,
    pub price_usd_cents: u64,
    pub badge: Option<PackageBadge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Pending,
}

impl TransactionStatus {
    pub fn key(self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub date: NaiveDate,
    pub credits: u32,
    pub amount_vnd: u64,
    pub amount_usd_cents: u64,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanFeature {
    /// Translation key of the feature name.
    pub key: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingPlan {
    pub id: &'static str,
    pub title_key: &'static str,
    pub monthly_vnd: u64,
    pub yearly_vnd: u64,
    pub features: Vec<PlanFeature>,
    pub highlight: bool,
}

impl PricingPlan {
    pub fn price(&self, cycle: BillingCycle) -> u64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_vnd,
            BillingCycle::Yearly => self.yearly_vnd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    WordPress,
    Facebook,
    Twitter,
    TikTok,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::WordPress,
        Platform::Facebook,
        Platform::Twitter,
        Platform::TikTok,
    ];

    /// Form value, which doubles as the translation key.
    pub fn value(self) -> &'static str {
        match self {
            Platform::WordPress => "wordpress",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::TikTok => "tiktok",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::WordPress => "WordPress",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::TikTok => "TikTok",
        }
    }

    /// WordPress sites are addressed by URL; social accounts need an API secret.
    pub fn is_site(self) -> bool {
        matches!(self, Platform::WordPress)
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Platform::ALL.into_iter().find(|p| p.value() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionDetails {
    pub url: Option<String>,
    pub username: String,
    pub api_key: String,
    pub api_secret: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: u32,
    pub platform: Platform,
    pub account_name: String,
    pub details: ConnectionDetails,
    pub status: ConnectionStatus,
    pub auto_post: bool,
}

/// Draft of a connection being added on the "new connection" tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewConnection {
    pub platform: Option<Platform>,
    pub account_name: String,
    pub details: ConnectionDetails,
    pub auto_post: bool,
}

impl Default for NewConnection {
    fn default() -> Self {
        Self {
            platform: None,
            account_name: String::new(),
            details: ConnectionDetails::default(),
            auto_post: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: String,
    pub email: String,
    pub credits: u32,
    pub plan: String,
    pub connected_accounts: usize,
    pub recent_contents: Vec<String>,
}

/// Result of a simulated sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
}
