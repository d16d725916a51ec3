use std::fs;
use std::path::{Path, PathBuf};

use super::error::StorageError;
use crate::model::{ApplicationDraft, SubmittedApplication};

/// Writes a snapshot as pretty JSON at the given path.
///
/// Missing parent directories are created.
pub fn export_json(snapshot: &SubmittedApplication, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut content = snapshot.to_json_pretty()?;
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

/// Returns the default export path for a snapshot inside `dir`.
///
/// Format: `{dir}/jobapply-{name-slug}-{YYYYMMDDHHMMSS}.json`, using the
/// submission time in UTC.
pub fn default_export_path(snapshot: &SubmittedApplication, dir: &Path) -> PathBuf {
    let slug = slugify(snapshot.full_name());
    let stamp = snapshot.submitted_at().format("%Y%m%d%H%M%S");
    dir.join(format!("jobapply-{slug}-{stamp}.json"))
}

/// Reads a draft from a JSON file. Missing keys default to empty values.
pub fn read_draft(path: &Path) -> Result<ApplicationDraft, StorageError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        "applicant".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    use super::*;
    use crate::model::{Position, Skill, submit_at};

    fn make_snapshot(name: &str) -> SubmittedApplication {
        let mut draft = ApplicationDraft::new();
        draft.full_name = name.to_string();
        draft.email = "ada@example.com".into();
        draft.phone = "5551234".into();
        draft.set_position(Position::Developer);
        draft.experience = "4".into();
        draft.toggle_skill(Skill::JavaScript);
        draft.interview_time = "2026-10-20 14:30".into();
        submit_at(&draft, Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 5).unwrap()).unwrap()
    }

    // --- export_json ---

    #[test]
    fn export_writes_readable_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        let snapshot = make_snapshot("Ada Lovelace");

        export_json(&snapshot, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("}\n"));
        let back: SubmittedApplication = serde_json::from_str(&content).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn export_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.json");
        export_json(&make_snapshot("Ada"), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn export_into_a_file_path_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let result = export_json(&make_snapshot("Ada"), &blocker.join("out.json"));
        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    // --- default_export_path ---

    #[test]
    fn default_path_uses_name_and_timestamp() {
        let path = default_export_path(&make_snapshot("Ada Lovelace"), Path::new("/tmp/apps"));
        assert_eq!(
            path,
            PathBuf::from("/tmp/apps/jobapply-ada-lovelace-20261016120005.json")
        );
    }

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(slugify("  O'Brien, Jr. "), "o-brien-jr");
    }

    #[test]
    fn slug_falls_back_for_non_ascii_names() {
        assert_eq!(slugify("李雷"), "applicant");
    }

    // --- read_draft ---

    #[test]
    fn read_draft_parses_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("draft.json");
        fs::write(&path, r#"{"fullName":"Ada","skills":["Python","Java"]}"#).unwrap();
        let draft = read_draft(&path).unwrap();
        assert_eq!(draft.full_name, "Ada");
        assert_eq!(draft.skills.len(), 2);
    }

    #[test]
    fn read_draft_rejects_unknown_skill() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("draft.json");
        fs::write(&path, r#"{"skills":["Cobol"]}"#).unwrap();
        assert!(matches!(read_draft(&path), Err(StorageError::Json(_))));
    }

    #[test]
    fn read_draft_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            read_draft(&dir.path().join("nope.json")),
            Err(StorageError::Io(_))
        ));
    }
}
