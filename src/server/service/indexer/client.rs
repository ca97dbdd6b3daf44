use reqwest::Client;
use url::Url;

use crate::{
    model::profile::{NotesDto, ProfileUpdateDto, ProfilesDto},
    server::error::AppError,
};

/// HTTP client for the identity indexer.
///
/// Cheap to clone: the inner reqwest client is reference-counted. All
/// requests go through `error_for_status`, so indexer-side failures surface
/// as `AppError::ReqwestErr`.
#[derive(Clone)]
pub struct IndexerClient {
    http: Client,
    base_url: Url,
}

impl IndexerClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Looks up profiles by (source, identity, platform).
    pub async fn get_profiles(
        &self,
        source: &str,
        identity: &str,
        platform: &str,
    ) -> Result<ProfilesDto, AppError> {
        let profiles = self
            .http
            .get(self.endpoint("profiles")?)
            .query(&[
                ("source", source),
                ("identity", identity),
                ("platform", platform),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<ProfilesDto>()
            .await?;

        Ok(profiles)
    }

    /// Pushes a profile update for (source, identity, platform).
    pub async fn set_profile(
        &self,
        source: &str,
        identity: &str,
        platform: &str,
        update: &ProfileUpdateDto,
    ) -> Result<(), AppError> {
        self.http
            .post(self.endpoint("profiles")?)
            .query(&[
                ("source", source),
                ("identity", identity),
                ("platform", platform),
                ("action", "update"),
            ])
            .json(update)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// Lists notes published under a site handle.
    pub async fn get_notes(&self, site: &str, take: u64) -> Result<NotesDto, AppError> {
        let take = take.to_string();
        let notes = self
            .http
            .get(self.endpoint("notes")?)
            .query(&[("site", site), ("take", take.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<NotesDto>()
            .await?;

        Ok(notes)
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url.join(path).map_err(|e| {
            AppError::InternalError(format!("Invalid indexer endpoint '{}': {}", path, e))
        })
    }
}
