use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content kind of a page row.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum PageKind {
    Page,
    Post,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Page => "page",
            PageKind::Post => "post",
        }
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dashboard visibility filter. `Scheduled` means published with a future
/// publication instant, `Draft` means not published at all.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum PageVisibility {
    All,
    Published,
    Draft,
    Scheduled,
}

impl PageVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageVisibility::All => "all",
            PageVisibility::Published => "published",
            PageVisibility::Draft => "draft",
            PageVisibility::Scheduled => "scheduled",
        }
    }
}

impl std::fmt::Display for PageVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective publication state of a single page, computed server-side.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum PageStatus {
    Published,
    Draft,
    Scheduled,
}

impl std::fmt::Display for PageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PageStatus::Published => "published",
            PageStatus::Draft => "draft",
            PageStatus::Scheduled => "scheduled",
        };
        f.write_str(s)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PageDto {
    pub id: i32,
    pub site_id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: PageKind,
    pub status: PageStatus,
    pub published_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PaginatedPagesDto {
    pub pages: Vec<PageDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreatePageDto {
    pub title: String,
    /// Defaults to a slugified title when absent.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: PageKind,
    pub published: bool,
    /// Defaults to now; a future value schedules the page.
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdatePageDto {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
}
