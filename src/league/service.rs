use std::collections::HashMap;
use uuid::Uuid;

use crate::config::settings::FixtureDefaults;
use crate::league::duplicates::{detect_duplicates, unverified_report};
use crate::league::error::LeagueError;
use crate::league::fixtures::FixtureGenerator;
use crate::league::store::{MatchStore, TeamDirectory};
use crate::league::validation::LeagueValidator;
use crate::models::fixture::*;

/// Drives fixture generation, duplicate checks and saving against a store
pub struct FixtureService<S> {
    store: S,
    generator: FixtureGenerator,
    validator: LeagueValidator,
    defaults: FixtureDefaults,
}

impl<S> FixtureService<S>
where
    S: TeamDirectory + MatchStore,
{
    pub fn new(store: S, defaults: FixtureDefaults) -> Self {
        Self {
            store,
            generator: FixtureGenerator::new(defaults.round_strategy),
            validator: LeagueValidator::new(),
            defaults,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Team rosters of the selected groups, in selection order
    pub async fn load_rosters(
        &self,
        tenant_id: Uuid,
        group_ids: &[Uuid],
    ) -> Result<Vec<GroupRoster>, LeagueError> {
        let mut rosters = Vec::with_capacity(group_ids.len());
        for &group_id in group_ids {
            let team_ids = self
                .store
                .group_team_ids(tenant_id, group_id)
                .await?
                .ok_or_else(|| LeagueError::NotFound(format!("Group {}", group_id)))?;
            rosters.push(GroupRoster::new(group_id, team_ids));
        }
        Ok(rosters)
    }

    /// Generate fixtures for the selected groups without saving anything
    pub async fn preview(
        &self,
        tenant_id: Uuid,
        request: &GenerateFixturesRequest,
    ) -> Result<FixturePreview, LeagueError> {
        if request.group_ids.is_empty() {
            return Err(LeagueError::validation("Select at least one group"));
        }

        let rosters = self.load_rosters(tenant_id, &request.group_ids).await?;
        let outcome = self.generator.generate(&rosters, &request.options)?;
        let duplicate_check = self.check_duplicates(tenant_id, &outcome.fixtures).await;

        Ok(FixturePreview {
            outcome,
            duplicate_check,
        })
    }

    /// Compare candidates with the tenant's persisted matches.
    /// A failed lookup is logged and reported as unverified with no conflicts.
    pub async fn check_duplicates(&self, tenant_id: Uuid, candidates: &[Fixture]) -> DuplicateCheck {
        match self.store.existing_pairs(tenant_id).await {
            Ok(existing) => DuplicateCheck {
                verified: true,
                report: detect_duplicates(candidates, existing),
            },
            Err(e) => {
                tracing::warn!(
                    "Could not read existing matches for tenant {}, assuming no duplicates: {}",
                    tenant_id,
                    e
                );
                DuplicateCheck {
                    verified: false,
                    report: unverified_report(candidates),
                }
            }
        }
    }

    /// Save confirmed fixtures one by one.
    /// Stops at the first failed write; fixtures saved before it stay saved.
    pub async fn commit(
        &self,
        tenant_id: Uuid,
        request: &CommitFixturesRequest,
    ) -> Result<CommitOutcome, LeagueError> {
        self.validator.validate_fixtures(&request.fixtures)?;
        self.ensure_group_membership(tenant_id, &request.fixtures).await?;

        let duplicate_check = self.check_duplicates(tenant_id, &request.fixtures).await;
        if duplicate_check.report.has_conflicts() && !request.confirm_duplicates {
            tracing::info!(
                "Refusing to save {} fixtures: {} already exist",
                duplicate_check.report.total,
                duplicate_check.report.existing
            );
            return Err(LeagueError::DuplicateConflict(duplicate_check.report));
        }

        let mut match_ids = Vec::with_capacity(request.fixtures.len());
        for fixture in &request.fixtures {
            let new_match = NewMatch::from_fixture(tenant_id, fixture, self.defaults.default_kickoff);
            match self.store.insert_match(&new_match).await {
                Ok(id) => match_ids.push(id),
                Err(source) => {
                    tracing::error!(
                        "Failed to save fixture {} vs {} after {} saved: {}",
                        new_match.home_team_id,
                        new_match.away_team_id,
                        match_ids.len(),
                        source
                    );
                    return Err(LeagueError::Persistence {
                        saved: match_ids.len(),
                        source,
                    });
                }
            }
        }

        tracing::info!("Saved {} fixtures for tenant {}", match_ids.len(), tenant_id);

        Ok(CommitOutcome {
            saved: match_ids.len(),
            match_ids,
            duplicate_check,
        })
    }

    /// Both teams of every fixture must currently belong to its group
    async fn ensure_group_membership(
        &self,
        tenant_id: Uuid,
        fixtures: &[Fixture],
    ) -> Result<(), LeagueError> {
        let mut group_ids: Vec<Uuid> = fixtures.iter().map(|f| f.group_id).collect();
        group_ids.sort();
        group_ids.dedup();

        let rosters: HashMap<Uuid, Vec<Uuid>> = self
            .load_rosters(tenant_id, &group_ids)
            .await?
            .into_iter()
            .map(|roster| (roster.group_id, roster.team_ids))
            .collect();

        for fixture in fixtures {
            let members = rosters.get(&fixture.group_id).map(Vec::as_slice).unwrap_or(&[]);
            for team_id in [fixture.team_x, fixture.team_y] {
                if !members.contains(&team_id) {
                    return Err(LeagueError::validation(format!(
                        "Team {} is not a member of group {}",
                        team_id, fixture.group_id
                    )));
                }
            }
        }

        Ok(())
    }
}
