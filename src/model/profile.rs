//! Shapes returned by the external identity indexer.
//!
//! A site is mirrored on the indexer as a profile keyed by its handle, and
//! published posts appear as notes under that handle. Unknown response
//! fields are ignored, absent lists default to empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProfileDto {
    pub username: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub avatars: Vec<String>,
    pub date_updated: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProfilesDto {
    pub total: u64,
    #[serde(default)]
    pub list: Vec<ProfileDto>,
}

/// Profile fields pushed to the indexer on a site update. Absent fields are
/// left untouched on the remote profile.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ProfileUpdateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatars: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NoteSummaryDto {
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NoteBodyDto {
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NoteDto {
    pub id: String,
    pub title: Option<String>,
    pub summary: Option<NoteSummaryDto>,
    pub body: Option<NoteBodyDto>,
    pub date_published: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NotesDto {
    pub total: u64,
    #[serde(default)]
    pub list: Vec<NoteDto>,
}
