//! Serialization of the frozen categories into the four list files.
//!
//! Each file is written independently: a failure on one is logged and
//! recorded while the others are still attempted. Files are staged in a
//! temp file next to the target and renamed into place.

mod header;

pub use header::{format_timestamp, render_header, render_list, TIMESTAMP_FORMAT};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::classify::{Categories, Category};

/// One list that made it to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub category: Category,
    pub path: PathBuf,
    pub entries: usize,
}

/// One list that could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub category: Category,
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<WrittenFile>,
    pub failed: Vec<FailedFile>,
}

impl WriteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.written.len() == Category::ALL.len()
    }
}

/// Write `contents` to `path` via a same-directory temp file and rename.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write {}", tmp.path().display()))?;
    tmp.as_file().sync_all().context("sync failed")?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to rename into {}", path.display()))?;
    Ok(())
}

/// Write one category's list into `dir`.
pub fn write_category(
    dir: &Path,
    category: Category,
    entries: &[String],
    generated_at: &DateTime<Utc>,
) -> Result<PathBuf> {
    let path = dir.join(category.file_name());
    write_atomic(&path, &render_list(category, generated_at, entries))?;
    Ok(path)
}

/// Create `dir` if needed and write all four lists.
///
/// Only a failure to create the directory is returned as an error; per-file
/// failures end up in [`WriteReport::failed`].
pub fn write_all(
    dir: &Path,
    categories: &Categories,
    generated_at: &DateTime<Utc>,
) -> Result<WriteReport> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut report = WriteReport::default();
    for category in Category::ALL {
        let entries = categories.get(category);
        match write_category(dir, category, entries, generated_at) {
            Ok(path) => {
                tracing::info!("wrote {} ({} entries)", path.display(), entries.len());
                report.written.push(WrittenFile {
                    category,
                    path,
                    entries: entries.len(),
                });
            }
            Err(e) => {
                let path = dir.join(category.file_name());
                tracing::error!("failed to write {}: {:#}", path.display(), e);
                report.failed.push(FailedFile {
                    category,
                    path,
                    error: format!("{:#}", e),
                });
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn writes_four_files_even_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("output");
        let report = write_all(&out, &classify(""), &ts()).unwrap();
        assert!(report.is_complete());
        for category in Category::ALL {
            let text = fs::read_to_string(out.join(category.file_name())).unwrap();
            assert!(text.contains(&format!("# Total: 0 {}", category.noun())));
        }
    }

    #[test]
    fn file_contents_match_categories() {
        let dir = tempfile::tempdir().unwrap();
        let cats = classify("9.9.9.9\nhttp://evil.example.co.uk/\n");
        write_all(dir.path(), &cats, &ts()).unwrap();

        let ips = fs::read_to_string(dir.path().join("ips.txt")).unwrap();
        assert_eq!(
            ips,
            "# USOM Malicious IP List\n# Last Updated: 2025-09-01 12:00:00 UTC\n# Total: 1 IP\n\n9.9.9.9\n"
        );
        let ubl = fs::read_to_string(dir.path().join("urls_UBL.txt")).unwrap();
        assert!(ubl.ends_with("\n\n*://*.example.co.uk/*\n"));
        let pihole = fs::read_to_string(dir.path().join("urls_pihole.txt")).unwrap();
        assert!(pihole.ends_with("\n\nevil.example.co.uk\n"));
    }

    #[test]
    fn one_failing_file_does_not_stop_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        // A directory squatting on the target name makes that rename fail.
        fs::create_dir(dir.path().join("urls.txt")).unwrap();
        fs::write(dir.path().join("urls.txt").join("keep"), "x").unwrap();

        let report = write_all(dir.path(), &classify("evil.com\n1.1.1.1\n"), &ts()).unwrap();
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].category, Category::Urls);
        assert_eq!(report.written.len(), 3);
        assert!(!report.is_complete());
        assert!(dir.path().join("urls_UBL.txt").is_file());
    }

    #[test]
    fn rewrite_replaces_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path(), &classify("old.com\n"), &ts()).unwrap();
        write_all(dir.path(), &classify("new.com\n"), &ts()).unwrap();
        let pihole = fs::read_to_string(dir.path().join("urls_pihole.txt")).unwrap();
        assert!(pihole.contains("new.com"));
        assert!(!pihole.contains("old.com"));
    }
}
