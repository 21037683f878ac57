//! Join, leave, and membership-status operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use clubforge_core::error::AppError;
use clubforge_core::events::{DomainEvent, EventPayload, MembershipEvent};
use clubforge_core::types::lookup::Lookup;
use clubforge_core::AppResult;
use clubforge_database::repositories::club::ClubRepository;
use clubforge_database::repositories::membership::MembershipRepository;
use clubforge_entity::membership::{CreateMembership, Membership};

use crate::context::SessionContext;
use crate::feed::ChangeFeed;

/// Manages club memberships for authenticated users.
#[derive(Debug, Clone)]
pub struct MembershipService {
    /// Membership repository.
    membership_repo: Arc<MembershipRepository>,
    /// Club repository, to verify join targets exist.
    club_repo: Arc<ClubRepository>,
    /// Change feed for join/leave notifications.
    feed: ChangeFeed,
}

impl MembershipService {
    /// Creates a new membership service.
    pub fn new(
        membership_repo: Arc<MembershipRepository>,
        club_repo: Arc<ClubRepository>,
        feed: ChangeFeed,
    ) -> Self {
        Self {
            membership_repo,
            club_repo,
            feed,
        }
    }

    /// Returns the current user's membership in a club, if any.
    ///
    /// Not being a member is ordinary state, not an error.
    pub async fn status(&self, ctx: &SessionContext, club_id: Uuid) -> AppResult<Lookup<Membership>> {
        let membership = self
            .membership_repo
            .find_by_club_and_user(club_id, ctx.user_id)
            .await?;
        Ok(Lookup::from(membership))
    }

    /// Joins the current user to a club.
    ///
    /// The database unique constraint arbitrates concurrent joins: the
    /// second insert for the same (club, user) pair reports `Conflict`
    /// regardless of what a prior status check said.
    pub async fn join(&self, ctx: &SessionContext, club_id: Uuid) -> AppResult<Membership> {
        self.club_repo
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| AppError::not_found("Club not found"))?;

        let membership = self
            .membership_repo
            .create(&CreateMembership {
                club_id,
                user_id: ctx.user_id,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            club_id = %club_id,
            membership_id = %membership.id,
            "Club joined"
        );

        self.feed.publish(DomainEvent::new(
            Some(ctx.user_id),
            EventPayload::Membership(MembershipEvent::Joined {
                membership_id: membership.id,
                club_id,
                user_id: ctx.user_id,
            }),
        ));

        Ok(membership)
    }

    /// Removes a membership by its identifier.
    ///
    /// Only the owning user may remove it. An already-removed membership
    /// reports `NotFound`; repeating a leave is not silently idempotent.
    pub async fn leave(&self, ctx: &SessionContext, membership_id: Uuid) -> AppResult<()> {
        let membership = self
            .membership_repo
            .find_by_id(membership_id)
            .await?
            .ok_or_else(|| AppError::not_found("Membership not found"))?;

        if membership.user_id != ctx.user_id {
            return Err(AppError::authorization(
                "You can only leave your own memberships",
            ));
        }

        let deleted = self.membership_repo.delete(membership_id).await?;
        if !deleted {
            return Err(AppError::not_found("Membership not found"));
        }

        info!(
            user_id = %ctx.user_id,
            club_id = %membership.club_id,
            membership_id = %membership_id,
            "Club left"
        );

        self.feed.publish(DomainEvent::new(
            Some(ctx.user_id),
            EventPayload::Membership(MembershipEvent::Left {
                membership_id,
                club_id: membership.club_id,
                user_id: ctx.user_id,
            }),
        ));

        Ok(())
    }
}
