use std::collections::HashMap;
use uuid::Uuid;

use crate::models::game::{EventKind, PlayerEvent};
use crate::models::standings::{DisciplineRow, ScorerRow};

/// Players with at least one goal or assist, by goals then assists.
/// Ties fall back to the player's name.
pub fn top_scorers(events: &[PlayerEvent], limit: usize) -> Vec<ScorerRow> {
    let mut rows: HashMap<Uuid, ScorerRow> = HashMap::new();

    for event in events {
        let (goals, assists) = match event.kind {
            EventKind::Goal => (1, 0),
            EventKind::Assist => (0, 1),
            _ => continue,
        };
        let row = rows.entry(event.player_id).or_insert_with(|| ScorerRow {
            player_id: event.player_id,
            player_name: event.player_name.clone(),
            team_id: event.team_id,
            team_name: event.team_name.clone(),
            goals: 0,
            assists: 0,
        });
        row.goals += goals;
        row.assists += assists;
    }

    let mut scorers: Vec<ScorerRow> = rows.into_values().collect();
    scorers.sort_by(|a, b| {
        b.goals
            .cmp(&a.goals)
            .then_with(|| b.assists.cmp(&a.assists))
            .then_with(|| a.player_name.cmp(&b.player_name))
    });
    scorers.truncate(limit);
    scorers
}

/// Card counts per booked player, reds first
pub fn discipline(events: &[PlayerEvent]) -> Vec<DisciplineRow> {
    let mut rows: HashMap<Uuid, DisciplineRow> = HashMap::new();

    for event in events {
        let (yellow, red) = match event.kind {
            EventKind::YellowCard => (1, 0),
            EventKind::RedCard => (0, 1),
            _ => continue,
        };
        let row = rows.entry(event.player_id).or_insert_with(|| DisciplineRow {
            player_id: event.player_id,
            player_name: event.player_name.clone(),
            team_id: event.team_id,
            team_name: event.team_name.clone(),
            yellow_cards: 0,
            red_cards: 0,
        });
        row.yellow_cards += yellow;
        row.red_cards += red;
    }

    let mut table: Vec<DisciplineRow> = rows.into_values().collect();
    table.sort_by(|a, b| {
        b.red_cards
            .cmp(&a.red_cards)
            .then_with(|| b.yellow_cards.cmp(&a.yellow_cards))
            .then_with(|| a.player_name.cmp(&b.player_name))
    });
    table
}
