//! Site service for business logic.
//!
//! Covers subdomain availability, site provisioning with its default
//! content, owner-gated updates, and subscription management. Everything
//! here is sequential validation-then-write; consistency is delegated to the
//! database.

use sea_orm::DatabaseConnection;
use serde_json::json;
use uuid::Uuid;

use crate::{
    model::page::PageKind,
    server::{
        data::{membership::MembershipRepository, page::PageRepository, site::SiteRepository},
        error::{auth::AuthError, site::SiteError, AppError},
        model::{
            membership::{CreateMembershipParam, MembershipRole, Subscription},
            page::CreatePageParam,
            site::{CreateSiteParam, NavigationItem, Site, UpdateSiteParam},
        },
        util::reserved::is_reserved,
    },
};

/// Service providing business logic for sites and subscriptions.
pub struct SiteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a subdomain can be claimed.
    ///
    /// Reserved words are rejected outright. A subdomain held by a
    /// soft-deleted site is reclaimed on the spot: the tombstone row is
    /// hard-deleted so the subdomain becomes available again. A subdomain
    /// held by a live site is only acceptable when that site is the one
    /// being updated.
    ///
    /// # Arguments
    /// - `subdomain` - The requested subdomain
    /// - `updating_site_id` - When updating an existing site, its id; `None`
    ///   during creation
    ///
    /// # Returns
    /// - `Ok(())` - Subdomain is available to the caller
    /// - `Err(AppError::SiteErr(ReservedSubdomain))` - Reserved word
    /// - `Err(AppError::SiteErr(SubdomainTaken))` - Held by another live site
    pub async fn check_subdomain(
        &self,
        subdomain: &str,
        updating_site_id: Option<i32>,
    ) -> Result<(), AppError> {
        if is_reserved(subdomain) {
            return Err(SiteError::ReservedSubdomain(subdomain.to_string()).into());
        }

        let site_repo = SiteRepository::new(self.db);
        let Some(existing) = site_repo.find_by_subdomain(subdomain).await? else {
            return Ok(());
        };

        if existing.deleted_at.is_some() {
            // Hard-delete the tombstone so the subdomain can be used again.
            site_repo.delete_hard(existing.id).await?;
            return Ok(());
        }

        if updating_site_id != Some(existing.id) {
            return Err(SiteError::SubdomainTaken.into());
        }

        Ok(())
    }

    /// Creates a site for a user.
    ///
    /// Runs the availability check, then provisions the site with its owner
    /// membership, the two default navigation entries, and the two seeded
    /// pages the navigation points at.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated user becoming the owner
    /// - `name` - Display name of the site
    /// - `subdomain` - Requested subdomain
    ///
    /// # Returns
    /// - `Ok(Site)` - The created site
    /// - `Err(AppError::SiteErr)` - Subdomain reserved or taken
    /// - `Err(AppError)` - Database error during provisioning
    pub async fn create_site(
        &self,
        user_id: i32,
        name: String,
        subdomain: String,
    ) -> Result<Site, AppError> {
        self.check_subdomain(&subdomain, None).await?;

        let navigation = default_navigation();
        let site = SiteRepository::new(self.db)
            .create(CreateSiteParam {
                owner_user_id: user_id,
                name,
                subdomain,
                navigation,
            })
            .await?;

        let page_repo = PageRepository::new(self.db);
        let now = chrono::Utc::now();

        page_repo
            .create(CreatePageParam {
                site_id: site.id,
                title: "About".to_string(),
                slug: "about".to_string(),
                excerpt: None,
                content: format!("My name is {} and I'm a new site.", site.name),
                kind: PageKind::Page,
                published: true,
                published_at: now,
            })
            .await?;

        page_repo
            .create(CreatePageParam {
                site_id: site.id,
                title: "Archives".to_string(),
                slug: "archives".to_string(),
                excerpt: None,
                content: "All of my posts, in one place.".to_string(),
                kind: PageKind::Page,
                published: true,
                published_at: now,
            })
            .await?;

        Ok(site)
    }

    /// Applies an owner-gated partial update to a site.
    ///
    /// When the subdomain changes, the availability check runs with the
    /// updating site's id so keeping the current subdomain is always allowed.
    ///
    /// # Returns
    /// - `Ok(Site)` - The updated site
    /// - `Err(AppError::AuthErr(AccessDenied))` - Viewer does not own the site
    /// - `Err(AppError::SiteErr)` - New subdomain reserved or taken
    pub async fn update_site(
        &self,
        user_id: i32,
        site_id: i32,
        param: UpdateSiteParam,
    ) -> Result<Site, AppError> {
        self.require_owner(user_id, site_id).await?;

        if let Some(subdomain) = &param.subdomain {
            self.check_subdomain(subdomain, Some(site_id)).await?;
        }

        SiteRepository::new(self.db).update(site_id, param).await
    }

    /// Soft-deletes a site, owner-gated.
    ///
    /// The subdomain stays reserved until the availability check reclaims it.
    pub async fn delete_site(&self, user_id: i32, site_id: i32) -> Result<(), AppError> {
        self.require_owner(user_id, site_id).await?;
        SiteRepository::new(self.db).soft_delete(site_id).await
    }

    /// Finds a live site by subdomain.
    pub async fn get_site_by_subdomain(&self, subdomain: &str) -> Result<Option<Site>, AppError> {
        SiteRepository::new(self.db)
            .find_active_by_subdomain(subdomain)
            .await
    }

    /// Ensures the user holds an owner membership on the site.
    ///
    /// # Returns
    /// - `Ok(())` - User owns the site
    /// - `Err(AppError::AuthErr(AccessDenied))` - No owner membership
    pub async fn require_owner(&self, user_id: i32, site_id: i32) -> Result<(), AppError> {
        let membership = MembershipRepository::new(self.db)
            .find(user_id, site_id, MembershipRole::Owner)
            .await?;

        if membership.is_none() {
            return Err(AuthError::AccessDenied {
                user_id,
                reason: format!("User is not an owner of site {}", site_id),
            }
            .into());
        }

        Ok(())
    }

    /// Gets the user's subscription to a site, if any.
    pub async fn get_subscription(
        &self,
        user_id: i32,
        site_id: i32,
    ) -> Result<Option<Subscription>, AppError> {
        let membership = MembershipRepository::new(self.db)
            .find(user_id, site_id, MembershipRole::Subscriber)
            .await?;

        Ok(membership.map(Subscription::from_membership))
    }

    /// Subscribes a user to a site.
    ///
    /// Creates the subscriber membership when none exists; otherwise updates
    /// the existing membership's config blob, so subscribing twice never
    /// produces a second row.
    ///
    /// # Arguments
    /// - `user_id` - The subscribing user
    /// - `site_id` - The site being subscribed to
    /// - `email` - Email delivery preference stored in the config blob
    ///
    /// # Returns
    /// - `Ok(Subscription)` - The created or updated subscription
    /// - `Err(AppError::NotFound)` - No live site with that id
    pub async fn subscribe(
        &self,
        user_id: i32,
        site_id: i32,
        email: Option<bool>,
    ) -> Result<Subscription, AppError> {
        let site = SiteRepository::new(self.db).find_by_id(site_id).await?;
        if site.map_or(true, |s| s.deleted_at.is_some()) {
            return Err(AppError::NotFound("Site not found".to_string()));
        }

        let membership_repo = MembershipRepository::new(self.db);
        let config = json!({ "email": email });

        let membership = match membership_repo
            .find(user_id, site_id, MembershipRole::Subscriber)
            .await?
        {
            Some(existing) => membership_repo.update_config(existing.id, config).await?,
            None => {
                membership_repo
                    .create(CreateMembershipParam {
                        user_id,
                        site_id,
                        role: MembershipRole::Subscriber,
                        config: Some(config),
                    })
                    .await?
            }
        };

        Ok(Subscription::from_membership(membership))
    }

    /// Removes a user's subscription to a site.
    ///
    /// # Returns
    /// - `Ok(())` - Subscription removed
    /// - `Err(AppError::SiteErr(SubscriptionNotFound))` - The user was not
    ///   subscribed
    pub async fn unsubscribe(&self, user_id: i32, site_id: i32) -> Result<(), AppError> {
        let Some(subscription) = self.get_subscription(user_id, site_id).await? else {
            return Err(SiteError::SubscriptionNotFound.into());
        };

        MembershipRepository::new(self.db)
            .delete(subscription.membership_id)
            .await
    }
}

/// Default navigation seeded on every new site. The urls match the slugs of
/// the two seeded pages.
fn default_navigation() -> Vec<NavigationItem> {
    vec![
        NavigationItem {
            id: Uuid::new_v4().to_string(),
            label: "About".to_string(),
            url: "/about".to_string(),
        },
        NavigationItem {
            id: Uuid::new_v4().to_string(),
            label: "Archives".to_string(),
            url: "/archives".to_string(),
        },
    ]
}
