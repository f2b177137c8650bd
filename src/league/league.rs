use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{EventQueries, MatchQueries, TeamQueries, TenantQueries};
use crate::league::error::LeagueError;
use crate::league::scorers::{discipline, top_scorers};
use crate::league::standings::compute_standings;
use crate::league::validation::LeagueValidator;
use crate::models::game::*;
use crate::models::standings::{GroupStandingsResponse, ScorersResponse};
use crate::models::tenant::DashboardSummary;

/// Main league service for everything that happens after fixtures are saved
pub struct LeagueService {
    matches: MatchQueries,
    events: EventQueries,
    teams: TeamQueries,
    tenants: TenantQueries,
    validator: LeagueValidator,
}

impl LeagueService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            matches: MatchQueries::new(pool.clone()),
            events: EventQueries::new(pool.clone()),
            teams: TeamQueries::new(pool.clone()),
            tenants: TenantQueries::new(pool),
            validator: LeagueValidator::new(),
        }
    }

    pub async fn list_matches(
        &self,
        tenant_id: Uuid,
        query: &MatchListQuery,
    ) -> Result<Vec<MatchWithTeams>, LeagueError> {
        if let Some(round) = query.round {
            self.validator.validate_round_number(round)?;
        }
        Ok(self.matches.list_matches(tenant_id, query.group_id, query.round).await?)
    }

    /// Record or overwrite a match score
    pub async fn update_match_result(
        &self,
        tenant_id: Uuid,
        match_id: Uuid,
        home_score: i32,
        away_score: i32,
    ) -> Result<Match, LeagueError> {
        self.validator.validate_match_scores(home_score, away_score)?;

        self.matches
            .update_result(tenant_id, match_id, home_score, away_score)
            .await?
            .ok_or_else(|| LeagueError::NotFound(format!("Match {}", match_id)))
    }

    async fn require_match(&self, tenant_id: Uuid, match_id: Uuid) -> Result<Match, LeagueError> {
        self.matches
            .get_match(tenant_id, match_id)
            .await?
            .ok_or_else(|| LeagueError::NotFound(format!("Match {}", match_id)))
    }

    /// Add a goal, assist or card. The team must be playing the match and the
    /// player, if named, must be registered with that team.
    pub async fn add_event(
        &self,
        tenant_id: Uuid,
        match_id: Uuid,
        request: &CreateMatchEventRequest,
    ) -> Result<MatchEvent, LeagueError> {
        self.validator.validate_event_minute(request.minute)?;

        let game = self.require_match(tenant_id, match_id).await?;
        if !game.involves(request.team_id) {
            return Err(LeagueError::validation(format!(
                "Team {} is not playing match {}",
                request.team_id, match_id
            )));
        }

        if let Some(player_id) = request.player_id {
            let player = self
                .teams
                .get_player(tenant_id, player_id)
                .await?
                .ok_or_else(|| LeagueError::NotFound(format!("Player {}", player_id)))?;
            if player.team_id != request.team_id {
                return Err(LeagueError::validation(format!(
                    "Player {} does not play for team {}",
                    player_id, request.team_id
                )));
            }
        }

        let event = self
            .events
            .create_event(match_id, request.team_id, request.player_id, request.kind, request.minute)
            .await?;

        tracing::info!("Recorded {} for match {} (team {})", event.kind, match_id, event.team_id);
        Ok(event)
    }

    pub async fn list_events(&self, tenant_id: Uuid, match_id: Uuid) -> Result<Vec<MatchEvent>, LeagueError> {
        self.require_match(tenant_id, match_id).await?;
        Ok(self.events.list_events(match_id).await?)
    }

    pub async fn delete_event(&self, tenant_id: Uuid, match_id: Uuid, event_id: Uuid) -> Result<(), LeagueError> {
        self.require_match(tenant_id, match_id).await?;
        if self.events.delete_event(match_id, event_id).await? {
            Ok(())
        } else {
            Err(LeagueError::NotFound(format!("Event {}", event_id)))
        }
    }

    /// Current table of a group from its decided matches
    pub async fn group_standings(&self, tenant_id: Uuid, group_id: Uuid) -> Result<GroupStandingsResponse, LeagueError> {
        let group = self
            .teams
            .get_group(tenant_id, group_id)
            .await?
            .ok_or_else(|| LeagueError::NotFound(format!("Group {}", group_id)))?;

        let teams = self.teams.list_teams(tenant_id, Some(group_id)).await?;
        let matches = self.matches.group_matches(tenant_id, group_id).await?;

        Ok(GroupStandingsResponse {
            group_id: group.id,
            group_name: group.name,
            standings: compute_standings(&teams, &matches),
        })
    }

    pub async fn scorers(&self, tenant_id: Uuid, limit: Option<usize>) -> Result<ScorersResponse, LeagueError> {
        let limit = self.validator.validate_limit(limit)?;
        let events = self.events.player_events(tenant_id).await?;

        Ok(ScorersResponse {
            scorers: top_scorers(&events, limit),
            discipline: discipline(&events),
        })
    }

    pub async fn dashboard(&self, tenant_id: Uuid) -> Result<DashboardSummary, LeagueError> {
        Ok(self.tenants.dashboard_summary(tenant_id).await?)
    }
}
