//! The printable diploma: a pure projection of final progress, the persisted
//! name, and the current date. Export writes it as plain text next to the
//! name store; printing the file is left to the host environment.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;

use crate::session::progress::{ALL_CATEGORIES, CATEGORY_MAX, Progress};

/// Scores strictly above this get the stronger verdict.
pub const VERDICT_THRESHOLD: u32 = 30;

pub const CERTIFICATE_FILE: &str = "certificate.txt";

pub fn verdict_label(score: u32) -> &'static str {
    if score > VERDICT_THRESHOLD {
        "Expert"
    } else {
        "Analyst"
    }
}

/// Results-screen conclusion for the same threshold.
pub fn verdict_text(score: u32) -> &'static str {
    if score > VERDICT_THRESHOLD {
        "You are a master at disengaging System 1! You take the time to examine and \
         question even what looks polished."
    } else {
        "Your brain is very efficient at taking shortcuts. Good for saving energy, \
         dangerous in a digital stream of disinformation."
    }
}

/// Compose the certificate text. Pure: same inputs, same document.
pub fn compose(progress: &Progress, name: &str, date: NaiveDate) -> String {
    let name = if name.trim().is_empty() {
        "Participant"
    } else {
        name.trim()
    };
    let rule = "=".repeat(62);
    let thin = "-".repeat(62);

    let mut doc = String::new();
    doc.push_str(&format!("{rule}\n"));
    doc.push_str("                         D I P L O M A\n");
    doc.push_str("           Source Criticism & Digital Awareness\n");
    doc.push_str(&format!("{rule}\n\n"));
    doc.push_str("This certifies that\n\n");
    doc.push_str(&format!("    {name}\n\n"));
    doc.push_str(
        "has completed the challenges of the Kallkoll trainer,\n\
         demonstrating the ability to engage System 2, identify\n\
         cognitive biases, and see through disinformation.\n\n",
    );
    doc.push_str(&format!("{thin}\n"));
    doc.push_str(&format!(
        "  Total score:       {}\n  Cognitive profile: {}\n",
        progress.score,
        verdict_label(progress.score)
    ));
    doc.push_str(&format!("{thin}\n"));
    for category in ALL_CATEGORIES {
        doc.push_str(&format!(
            "  {:<22} {:>2} / {CATEGORY_MAX}\n",
            category.label(),
            progress.category(category)
        ));
    }
    doc.push_str(&format!("{thin}\n"));
    doc.push_str(&format!("  Date: {}\n", date.format("%-d %B %Y")));
    doc.push_str(&format!("{rule}\n"));
    doc
}

/// Write the composed certificate under `dir`, returning the written path.
pub fn export(dir: &Path, progress: &Progress, name: &str, date: NaiveDate) -> Result<PathBuf> {
    let path = dir.join(CERTIFICATE_FILE);
    fs::write(&path, compose(progress, name, date))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::progress::{Category, ChallengeOutcome};

    fn progress_with_score(points: u32) -> Progress {
        let mut progress = Progress::new();
        progress.award(ChallengeOutcome {
            points,
            category: Category::Logic,
            explanation: String::new(),
            correct: true,
        });
        progress
    }

    #[test]
    fn test_verdict_threshold_is_strict() {
        assert_eq!(verdict_label(30), "Analyst");
        assert_eq!(verdict_label(31), "Expert");
        assert_eq!(verdict_label(50), "Expert");
        assert_eq!(verdict_label(0), "Analyst");
    }

    #[test]
    fn test_compose_is_pure_and_contains_fields() {
        let progress = progress_with_score(40);
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let a = compose(&progress, "Kim", date);
        let b = compose(&progress, "Kim", date);
        assert_eq!(a, b);
        assert!(a.contains("Kim"));
        assert!(a.contains("40"));
        assert!(a.contains("Expert"));
        assert!(a.contains("30 August 2026"));
    }

    #[test]
    fn test_empty_name_uses_placeholder() {
        let progress = progress_with_score(10);
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let doc = compose(&progress, "   ", date);
        assert!(doc.contains("Participant"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let progress = progress_with_score(10);
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let path = export(dir.path(), &progress, "Kim", date).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, compose(&progress, "Kim", date));
    }
}
