use chrono::{Duration, NaiveDate};

use crate::models::fixture::{Fixture, ScheduleOptions};

/// Service responsible for dating the rounds of a generated schedule
pub struct RoundCalendar;

impl RoundCalendar {
    pub fn new() -> Self {
        Self
    }

    /// Date of `round` when round 1 is played on `first_round_date`
    /// and later rounds follow every `days_between_rounds` days
    pub fn date_for_round(
        &self,
        first_round_date: NaiveDate,
        days_between_rounds: i64,
        round: i32,
    ) -> NaiveDate {
        if round < 1 {
            tracing::warn!("Invalid round number: {}, defaulting to round 1", round);
            return first_round_date;
        }

        let offset = Duration::days(days_between_rounds * (round - 1) as i64);
        first_round_date + offset
    }

    /// Fill in date and time on every fixture from its round
    pub fn apply(&self, fixtures: &mut [Fixture], schedule: &ScheduleOptions) {
        for fixture in fixtures.iter_mut() {
            fixture.date = Some(self.date_for_round(
                schedule.first_round_date,
                schedule.days_between_rounds,
                fixture.round,
            ));
            fixture.time = schedule.kickoff_time;
        }

        tracing::debug!(
            "Dated {} fixtures from {} every {} days",
            fixtures.len(),
            schedule.first_round_date,
            schedule.days_between_rounds
        );
    }
}

impl Default for RoundCalendar {
    fn default() -> Self {
        Self::new()
    }
}
