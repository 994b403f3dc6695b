//! Odds table: one record per team, parsed from the CSV feed.
//!
//! Column order: `teamId, teamName, <unused>, impliedProbability,
//! bookProbability, moneyline, profit, perDollarWagerFactor, isFavored`.

use std::collections::HashMap;

const COLUMN_COUNT: usize = 9;

#[derive(Clone, Debug, PartialEq)]
pub struct TeamRecord {
    pub team_id: String,
    pub team_name: String,
    /// Break-even win probability implied by the payout odds, 0..=1.
    pub implied_probability: f64,
    /// Sportsbook win probability, 0..=1.
    pub book_probability: f64,
    pub moneyline: String,
    /// Amount returned per unit stake if this team wins.
    pub profit: f64,
    pub per_dollar_wager_factor: f64,
    pub is_favored: bool,
}

/// A row the parser skipped or shadowed.
#[derive(Clone, Debug, PartialEq)]
pub struct RowIssue {
    /// 1-based line number in the source text.
    pub line: usize,
    pub reason: String,
}

/// Read-only team lookup. Empty until the feed has loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowTable {
    records: Vec<TeamRecord>,
    index: HashMap<String, usize>,
}

impl RowTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from already-parsed records. Later duplicates are dropped.
    pub fn from_records<I: IntoIterator<Item = TeamRecord>>(records: I) -> Self {
        let mut table = Self::default();
        for record in records {
            table.push(record);
        }
        table
    }

    /// Parse CSV text. Bad rows are skipped and reported, never fatal.
    pub fn parse(text: &str) -> (Self, Vec<RowIssue>) {
        let mut table = Self::default();
        let mut issues = Vec::new();

        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_no = i + 1;
            match parse_row(line) {
                Ok(record) => {
                    let id = record.team_id.clone();
                    if !table.push(record) {
                        issues.push(RowIssue {
                            line: line_no,
                            reason: format!("duplicate team id {id}, keeping first"),
                        });
                    }
                }
                Err(reason) => issues.push(RowIssue {
                    line: line_no,
                    reason,
                }),
            }
        }

        (table, issues)
    }

    pub fn lookup(&self, team_id: &str) -> Option<&TeamRecord> {
        self.index.get(team_id).map(|&i| &self.records[i])
    }

    /// Records in file order.
    pub fn records(&self) -> impl Iterator<Item = &TeamRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn push(&mut self, record: TeamRecord) -> bool {
        if self.index.contains_key(&record.team_id) {
            return false;
        }
        self.index.insert(record.team_id.clone(), self.records.len());
        self.records.push(record);
        true
    }
}

fn parse_row(line: &str) -> Result<TeamRecord, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != COLUMN_COUNT {
        return Err(format!(
            "expected {} columns, found {}",
            COLUMN_COUNT,
            fields.len()
        ));
    }
    if fields[0].is_empty() {
        return Err("empty team id".to_string());
    }

    Ok(TeamRecord {
        team_id: fields[0].to_string(),
        team_name: fields[1].to_string(),
        implied_probability: parse_probability(fields[3], "implied probability")?,
        book_probability: parse_probability(fields[4], "book probability")?,
        moneyline: fields[5].to_string(),
        profit: parse_amount(fields[6], "profit")?,
        per_dollar_wager_factor: parse_amount(fields[7], "wager factor")?,
        is_favored: parse_favored(fields[8])?,
    })
}

fn parse_amount(s: &str, what: &str) -> Result<f64, String> {
    // exported sheets sometimes keep the currency sign
    let cleaned = s.trim_start_matches('$');
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("invalid {what}: {s:?}")),
    }
}

fn parse_probability(s: &str, what: &str) -> Result<f64, String> {
    let v = parse_amount(s, what)?;
    if !(0.0..=1.0).contains(&v) {
        return Err(format!("{what} out of range: {v}"));
    }
    Ok(v)
}

fn parse_favored(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "favored" | "favorite" => Ok(true),
        "false" | "no" | "0" | "underdog" | "" => Ok(false),
        other => Err(format!("invalid favored flag: {other:?}")),
    }
}
