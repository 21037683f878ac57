//! Club directory listing and lookup.

use std::sync::Arc;

use uuid::Uuid;

use clubforge_core::types::lookup::Lookup;
use clubforge_core::AppResult;
use clubforge_database::repositories::club::ClubRepository;
use clubforge_database::repositories::membership::MembershipRepository;
use clubforge_entity::club::filter::filter_clubs;
use clubforge_entity::club::Club;

/// Read-only access to the club directory.
#[derive(Debug, Clone)]
pub struct ClubService {
    /// Club repository.
    club_repo: Arc<ClubRepository>,
    /// Membership repository, for member counts.
    membership_repo: Arc<MembershipRepository>,
}

impl ClubService {
    /// Creates a new club service.
    pub fn new(club_repo: Arc<ClubRepository>, membership_repo: Arc<MembershipRepository>) -> Self {
        Self {
            club_repo,
            membership_repo,
        }
    }

    /// Lists clubs ordered by name, narrowed by an optional search term.
    ///
    /// The term matches case-insensitively against club name, description,
    /// and tags. A missing or blank term returns the full directory.
    pub async fn list(&self, term: Option<&str>) -> AppResult<Vec<Club>> {
        let clubs = self.club_repo.find_all_ordered().await?;
        Ok(filter_clubs(clubs, term))
    }

    /// Looks up a single club by its slug.
    ///
    /// An unknown slug is not an error: the caller decides how to render
    /// absence.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Lookup<Club>> {
        let club = self.club_repo.find_by_slug(slug).await?;
        Ok(Lookup::from(club))
    }

    /// Counts members of a club.
    pub async fn member_count(&self, club_id: Uuid) -> AppResult<u64> {
        self.membership_repo.count_by_club(club_id).await
    }
}
