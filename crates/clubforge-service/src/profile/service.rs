//! Profile fetch and update operations.

use std::sync::Arc;

use tracing::info;

use clubforge_core::events::{DomainEvent, EventPayload, ProfileEvent};
use clubforge_core::types::lookup::Lookup;
use clubforge_core::AppResult;
use clubforge_database::repositories::profile::ProfileRepository;
use clubforge_entity::profile::{Profile, UpdateProfile};

use crate::context::SessionContext;
use crate::feed::ChangeFeed;

/// Manages the current user's profile.
#[derive(Debug, Clone)]
pub struct ProfileService {
    /// Profile repository.
    profile_repo: Arc<ProfileRepository>,
    /// Change feed for profile-update notifications.
    feed: ChangeFeed,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(profile_repo: Arc<ProfileRepository>, feed: ChangeFeed) -> Self {
        Self { profile_repo, feed }
    }

    /// Fetches the current user's profile.
    ///
    /// A user whose profile row is missing gets `NotFound` as data, not
    /// as an error.
    pub async fn fetch(&self, ctx: &SessionContext) -> AppResult<Lookup<Profile>> {
        let profile = self.profile_repo.find_by_user(ctx.user_id).await?;
        Ok(Lookup::from(profile))
    }

    /// Updates the current user's profile.
    ///
    /// Supplied values pass through as given; a `None` clears the field.
    pub async fn update(&self, ctx: &SessionContext, data: UpdateProfile) -> AppResult<Profile> {
        let before = self.profile_repo.find_by_user(ctx.user_id).await?;
        let profile = self.profile_repo.update(ctx.user_id, &data).await?;

        let changed_fields = changed_fields(before.as_ref(), &profile);

        info!(
            user_id = %ctx.user_id,
            changed = ?changed_fields,
            "Profile updated"
        );

        self.feed.publish(DomainEvent::new(
            Some(ctx.user_id),
            EventPayload::Profile(ProfileEvent::Updated {
                user_id: ctx.user_id,
                changed_fields,
            }),
        ));

        Ok(profile)
    }
}

/// Names the display fields that differ between two profile snapshots.
fn changed_fields(before: Option<&Profile>, after: &Profile) -> Vec<String> {
    let mut changed = Vec::new();
    let differs = |pick: fn(&Profile) -> &Option<String>| match before {
        Some(b) => pick(b) != pick(after),
        None => pick(after).is_some(),
    };

    if differs(|p| &p.display_name) {
        changed.push("display_name".to_string());
    }
    if differs(|p| &p.avatar_url) {
        changed.push("avatar_url".to_string());
    }
    if differs(|p| &p.bio) {
        changed.push("bio".to_string());
    }
    changed
}
