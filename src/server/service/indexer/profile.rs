use crate::{
    model::profile::{ProfileDto, ProfileUpdateDto},
    server::{error::AppError, service::indexer::IndexerClient},
};

/// Identity source under which site profiles are recorded on the indexer.
pub const PROFILE_SOURCE: &str = "Quill Profile";
/// Platform for lookups by account address.
pub const PLATFORM_ACCOUNT: &str = "Ethereum";
/// Platform for lookups by site handle.
pub const PLATFORM_SITE: &str = "Quill";

/// Read/write access to site profiles on the indexer.
pub struct ProfileService<'a> {
    indexer: &'a IndexerClient,
}

impl<'a> ProfileService<'a> {
    pub fn new(indexer: &'a IndexerClient) -> Self {
        Self { indexer }
    }

    /// Gets the profile for a site handle.
    ///
    /// Profiles are sorted by last update, newest first, and the freshest
    /// one wins.
    ///
    /// # Returns
    /// - `Ok(Some(ProfileDto))` - Profile found
    /// - `Ok(None)` - The indexer knows no profile under that handle
    /// - `Err(AppError::ReqwestErr)` - Indexer request failed
    pub async fn get_site(&self, handle: &str) -> Result<Option<ProfileDto>, AppError> {
        let mut profiles = self
            .indexer
            .get_profiles(PROFILE_SOURCE, handle, PLATFORM_SITE)
            .await?
            .list;

        sort_newest_first(&mut profiles);

        Ok(profiles.into_iter().next())
    }

    /// Gets all site profiles owned by an account address.
    ///
    /// # Returns
    /// - `Ok(Some(profiles))` - Profiles sorted by last update, newest first
    /// - `Ok(None)` - The address owns no sites
    /// - `Err(AppError::ReqwestErr)` - Indexer request failed
    pub async fn get_user_sites(&self, address: &str) -> Result<Option<Vec<ProfileDto>>, AppError> {
        let mut profiles = self
            .indexer
            .get_profiles(PROFILE_SOURCE, address, PLATFORM_ACCOUNT)
            .await?
            .list;

        if profiles.is_empty() {
            return Ok(None);
        }

        sort_newest_first(&mut profiles);

        Ok(Some(profiles))
    }

    /// Pushes a site profile update to the indexer.
    pub async fn update_site(
        &self,
        handle: &str,
        update: &ProfileUpdateDto,
    ) -> Result<(), AppError> {
        self.indexer
            .set_profile(PROFILE_SOURCE, handle, PLATFORM_SITE, update)
            .await
    }
}

/// Sorts by `date_updated` descending; profiles without a timestamp sink to
/// the end.
fn sort_newest_first(profiles: &mut [ProfileDto]) {
    profiles.sort_by(|a, b| b.date_updated.cmp(&a.date_updated));
}
