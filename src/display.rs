//! Strings the front end paints. Pure, so the wording is testable off-browser.

use crate::config::DisplayFields;
use crate::engine::{ParlayResult, Pick};
use crate::odds;
use crate::table::RowTable;
use crate::topology::GameTopology;

/// Shown wherever the table has no record for a team.
pub const PLACEHOLDER: &str = "—";

/// Name and moneyline for one team button.
#[derive(Clone, Debug, PartialEq)]
pub struct TeamLabel {
    pub team_id: String,
    pub game: u32,
    pub name: String,
    pub moneyline: String,
}

/// Initial paint: every team on the board, game by game.
pub fn team_labels(topology: &GameTopology, table: &RowTable) -> Vec<TeamLabel> {
    topology
        .team_ids()
        .map(|id| {
            let record = table.lookup(id);
            TeamLabel {
                team_id: id.to_string(),
                game: topology.game_of(id).unwrap_or_default(),
                name: record.map_or_else(|| id.to_string(), |r| r.team_name.clone()),
                moneyline: record.map_or_else(|| PLACEHOLDER.to_string(), |r| r.moneyline.clone()),
            }
        })
        .collect()
}

/// Dropdown under a selected team.
#[derive(Clone, Debug, PartialEq)]
pub struct PickDetail {
    pub team_id: String,
    pub heading: String,
    pub lines: Vec<String>,
}

pub fn pick_detail(pick: &Pick<'_>, fields: DisplayFields) -> PickDetail {
    let Some(record) = pick.record else {
        return PickDetail {
            team_id: pick.team_id.to_string(),
            heading: format!("Game {}: {}", pick.game, pick.team_id),
            lines: vec!["Odds not loaded yet".to_string()],
        };
    };

    let standing = if record.is_favored { "Favored" } else { "Not favored" };
    let mut lines = vec![standing.to_string()];
    if fields.book_probability {
        lines.push(format!(
            "Book probability: {}",
            percent(record.book_probability * 100.0, 1)
        ));
    }
    let decimal = odds::moneyline_to_decimal(&record.moneyline);
    if fields.implied_probability {
        let implied = percent(record.implied_probability * 100.0, 1);
        // the feed's figure next to what the posted line alone implies
        match decimal.and_then(odds::break_even_probability) {
            Some(p) => lines.push(format!(
                "Implied probability: {} (line break-even {})",
                implied,
                percent(p * 100.0, 1)
            )),
            None => lines.push(format!("Implied probability: {}", implied)),
        }
    }
    if fields.profit {
        lines.push(format!("Profit: ${:.2}", record.profit));
    }
    if let Some(d) = decimal {
        lines.push(format!(
            "Odds: {} | {} | {}",
            record.moneyline,
            odds::format_decimal(d),
            odds::format_fractional(d)
        ));
    }

    PickDetail {
        team_id: record.team_id.clone(),
        heading: format!("Game {}: {}", pick.game, record.team_name),
        lines,
    }
}

/// One sentence per leg, then the parlay summary.
pub fn result_lines(result: &ParlayResult) -> (Vec<String>, String) {
    let legs = result
        .legs
        .iter()
        .map(|leg| {
            format!(
                "Game {}: {} has a {} chance of winning. If you bet ${} on this team, you would get ${:.2} in profit.",
                leg.game,
                leg.team_name,
                percent(leg.win_chance_pct, 0),
                money(result.stake),
                leg.profit
            )
        })
        .collect();

    let summary = format!(
        "For the {n}-game parlay, the probability of all {n} teams winning is {book}. \
         But in order to break even, you have to win this bet {implied} of the time. \
         If you bet ${stake} on this parlay, you would get ${payout:.2}",
        n = result.legs.len(),
        book = percent(result.book_probability_pct, 1),
        implied = percent(result.implied_probability_pct, 1),
        stake = money(result.stake),
        payout = result.wager_payout,
    );

    (legs, summary)
}

pub fn percent(value: f64, places: usize) -> String {
    format!("{:.*}%", places, value)
}

// whole stakes print without cents
fn money(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}
