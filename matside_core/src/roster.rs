//! Roster loading from delimited registration exports.
//!
//! Column positions, multipliers and the file dialect come from [`Config`];
//! nothing here is specific to one export layout.

use crate::config::{ColumnLayout, Config};
use crate::{Athlete, AthleteId, Error, Result, SkillLevel};
use fs2::FileExt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load a roster file, sorted ascending by effective weight
pub fn load_roster(path: &Path, config: &Config) -> Result<Vec<Athlete>> {
    let file = File::open(path)?;
    // Acquire shared lock for reading
    FileExt::lock_shared(&file)?;

    let athletes = read_roster(&file, config);

    FileExt::unlock(&file)?;
    let athletes = athletes?;
    tracing::info!("Loaded {} athletes from {:?}", athletes.len(), path);
    Ok(athletes)
}

/// Parse roster rows from any reader, sorted ascending by effective weight
///
/// Fails on the first bad row; blank rows are skipped.
pub fn read_roster<R: Read>(reader: R, config: &Config) -> Result<Vec<Athlete>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(config.input.has_headers)
        .delimiter(config.input.delimiter as u8)
        .flexible(true)
        .from_reader(reader);

    let mut athletes = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(athletes.len() + 1);
        let id = AthleteId(athletes.len());
        athletes.push(parse_athlete(&record, line, id, config)?);
    }

    athletes.sort_by(|a, b| a.effective_weight().total_cmp(&b.effective_weight()));
    Ok(athletes)
}

fn parse_athlete(
    record: &csv::StringRecord,
    line: usize,
    id: AthleteId,
    config: &Config,
) -> Result<Athlete> {
    let columns: &ColumnLayout = &config.columns;
    let field = move |column: &'static str, index: usize| {
        record.get(index).ok_or(Error::MissingColumn {
            line,
            column,
            index,
        })
    };

    let first_name = field("first name", columns.first_name)?;
    let last_name = field("last name", columns.last_name)?;
    let weight = field("weight", columns.weight)?;
    let school = field("school", columns.school)?;
    // Exports drop trailing empty cells, so a missing skill column is blank
    let skill_label = record.get(columns.skill_level).unwrap_or("");

    let raw_weight = parse_weight(weight).ok_or_else(|| Error::MalformedWeight {
        line,
        value: weight.to_string(),
    })?;

    let skill_level =
        SkillLevel::from_label(skill_label).ok_or_else(|| Error::UnknownSkillLevel {
            line,
            label: skill_label.trim().to_string(),
        })?;

    Athlete::new(
        id,
        &format!("{} {}", first_name, last_name),
        raw_weight,
        school,
        skill_level,
        &config.skill,
    )
}

/// Parse a weight cell after dropping everything but digits and dots
///
/// `"152 lbs"` and `"152.5lb"` both parse; `"heavy"` does not.
pub fn parse_weight(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().ok()
}
