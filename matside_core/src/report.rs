//! Pairing report output.
//!
//! The report is a delimited file: a header row, one row per match, a
//! marker row, then one row per athlete left without a match. Weights are
//! the effective (skill-adjusted) weights. Cells are written verbatim,
//! never quoted, so every row keeps its fixed layout.

use crate::{Error, Pairings, Result};
use fs2::FileExt;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const HEADER: [&str; 3] = ["Wrestler 1", " Wrestler 2", " Mat"];
const UNMATCHED_MARKER: &str = "WRESTLERS WITHOUT MATCHES:";

/// Write the report to any writer
pub fn write_report<W: Write>(writer: W, pairings: &Pairings) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(HEADER)?;

    // Mat column is left for the table crew to fill in
    for m in &pairings.matches {
        writer.write_record([m.red_corner().as_str(), m.green_corner().as_str(), ""])?;
    }

    writer.write_record([UNMATCHED_MARKER])?;
    for athlete in &pairings.unmatched {
        writer.write_record([athlete.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}

/// Render the report into a string
pub fn render_report(pairings: &Pairings) -> Result<String> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, pairings)?;
    String::from_utf8(buffer).map_err(|e| Error::Io(std::io::Error::other(e)))
}

/// Save the report to a file
///
/// Atomically writes the report by:
/// 1. Writing to a temp file next to the target
/// 2. Syncing to disk
/// 3. Renaming over the target
///
/// A failure at any step leaves no partial report behind.
pub fn save_report(path: &Path, pairings: &Pairings) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = NamedTempFile::new_in(parent)?;
    FileExt::lock_exclusive(temp.as_file())?;

    {
        let writer = std::io::BufWriter::new(temp.as_file());
        write_report(writer, pairings)?;
    }

    temp.as_file().sync_all()?;
    FileExt::unlock(temp.as_file())?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::info!(
        "Wrote {} matches and {} unmatched athletes to {:?}",
        pairings.matches.len(),
        pairings.unmatched.len(),
        path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SkillMultipliers;
    use crate::{Athlete, AthleteId, Match, Round, SkillLevel};

    fn athlete(id: usize, name: &str, weight: f64, school: &str, skill: SkillLevel) -> Athlete {
        Athlete::new(
            AthleteId(id),
            name,
            weight,
            school,
            skill,
            &SkillMultipliers::default(),
        )
        .unwrap()
    }

    fn sample_pairings() -> Pairings {
        let a = athlete(0, "Ann Lee", 100.0, "North", SkillLevel::Beginner);
        let b = athlete(1, "Bo Kim", 100.0, "South", SkillLevel::Intermediate);
        let c = athlete(2, "Cy Orr", 150.0, "North", SkillLevel::Experienced);
        Pairings {
            matches: vec![Match::new(a, b, Round::First)],
            unmatched: vec![c],
        }
    }

    #[test]
    fn test_render_layout() {
        let rendered = render_report(&sample_pairings()).unwrap();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Wrestler 1, Wrestler 2, Mat",
                "Ann Lee (North 100.0 lbs),Bo Kim (South 103.0 lbs),",
                "WRESTLERS WITHOUT MATCHES:",
                "Cy Orr 157.5 lbs North experienced",
            ]
        );
    }

    #[test]
    fn test_render_empty() {
        let rendered = render_report(&Pairings::default()).unwrap();
        assert_eq!(
            rendered,
            "Wrestler 1, Wrestler 2, Mat\nWRESTLERS WITHOUT MATCHES:\n"
        );
    }

    #[test]
    fn test_render_keeps_quotes_verbatim() {
        let a = athlete(0, "Jo \"JJ\" Smith", 100.0, "North", SkillLevel::Beginner);
        let b = athlete(1, "Bo Kim", 102.0, "St. \"Pat's\"", SkillLevel::Beginner);
        let c = athlete(2, "Al \"Tank\" Ruiz", 150.0, "North", SkillLevel::Beginner);
        let pairings = Pairings {
            matches: vec![Match::new(a, b, Round::Second)],
            unmatched: vec![c],
        };

        let rendered = render_report(&pairings).unwrap();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(
            lines[1],
            "Jo \"JJ\" Smith (North 100.0 lbs),Bo Kim (St. \"Pat's\" 102.0 lbs),"
        );
        assert_eq!(lines[3], "Al \"Tank\" Ruiz 150.0 lbs North beginner");
    }

    #[test]
    fn test_save_report_replaces_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("matches.csv");
        std::fs::write(&path, "stale").unwrap();

        save_report(&path, &sample_pairings()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Wrestler 1, Wrestler 2, Mat\n"));
        assert!(contents.contains("Cy Orr 157.5 lbs North experienced"));

        // Only the report itself remains, no temp files
        let entries = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_save_report_missing_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("matches.csv");

        let err = save_report(&path, &sample_pairings()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!path.exists());
    }
}
