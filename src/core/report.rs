use std::fs;
use std::path::Path;

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::core::buckets::Buckets;
use crate::types::{AppError, AppResult, YearStatus};

pub const COMPLETED_SECTION_START: &str = "<!-- start completed section -->";
pub const COMPLETED_SECTION_END: &str = "<!-- end completed section -->";
pub const STAR_COUNT_START: &str = "<!-- start star count -->";
pub const STAR_COUNT_END: &str = "<!-- end star count -->";

const PASS_GLYPH: &str = "⭐️";
const FAIL_GLYPH: &str = "❌";

// First digit run after the shields.io message key, e.g. `&message=42`
static STAR_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&message=\d+").expect("star token pattern is valid"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("start marker `{0}` not found")]
    StartMarkerMissing(String),
    #[error("end marker `{0}` not found after start marker")]
    EndMarkerMissing(String),
}

/// Render the full report body that goes between the readme's section
/// markers. Buckets with no years contribute no section.
pub fn render_report(buckets: &Buckets) -> String {
    let sections: [(&str, &[(u32, YearStatus)]); 3] = [
        ("## In Progress ✅", &buckets.in_progress),
        ("## Completed ⭐️", &buckets.completed),
        ("## Not Started ❌", &buckets.not_started),
    ];

    let mut lines: Vec<String> = Vec::new();
    for (header, years) in sections {
        if years.is_empty() {
            continue;
        }
        lines.push(header.to_string());
        for (year, days) in years {
            lines.push(format!("### {year}"));
            lines.push(format!("<details><summary>Days for {year}</summary>"));
            lines.push("<p>".to_string());
            lines.push(String::new());
            lines.extend(year_overview(days));
            lines.push(String::new());
            lines.push("</p>".to_string());
            lines.push("</details>".to_string());
            lines.push(String::new());
        }
    }
    lines.join("\n")
}

fn year_overview(days: &YearStatus) -> Vec<String> {
    let mut lines = vec![
        "| day   | part one | part two |".to_string(),
        "| :---: | :------: | :------: |".to_string(),
    ];
    for (day, status) in days {
        lines.push(format!(
            "| {day:02} | {} | {} |",
            glyph(status.part_one),
            glyph(status.part_two)
        ));
    }
    lines
}

fn glyph(passing: bool) -> &'static str {
    if passing { PASS_GLYPH } else { FAIL_GLYPH }
}

/// Replace the region delimited by `start` and `end` (inclusive) with the
/// markers wrapped around `content` on their own lines.
///
/// Locates the first occurrence of `start` and the first occurrence of
/// `end` after it. Applying the same replacement twice is a no-op.
pub fn replace_between_markers(
    document: &str,
    content: &str,
    start: &str,
    end: &str,
) -> Result<String, RenderError> {
    let start_at = document
        .find(start)
        .ok_or_else(|| RenderError::StartMarkerMissing(start.to_string()))?;
    let after_start = start_at + start.len();
    let end_at = document[after_start..]
        .find(end)
        .map(|offset| after_start + offset + end.len())
        .ok_or_else(|| RenderError::EndMarkerMissing(end.to_string()))?;

    Ok(format!(
        "{}{start}\n{content}\n{end}{}",
        &document[..start_at],
        &document[end_at..]
    ))
}

/// Replace the first digit run following `&message=` with the star count.
pub fn update_star_token(document: &str, stars: u32) -> String {
    if !STAR_TOKEN.is_match(document) {
        warn!("No `&message=` token found, star badge left unchanged");
        return document.to_string();
    }
    STAR_TOKEN
        .replace(document, format!("&message={stars}"))
        .into_owned()
}

fn badge_counter(stars: u32) -> String {
    format!("\t\t\t\t<span class=\"star-count\">{stars}</span>")
}

fn read_document(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|source| AppError::DocumentUpdate {
        path: path.display().to_string(),
        source,
    })
}

fn write_document(path: &Path, contents: &str) -> AppResult<()> {
    fs::write(path, contents).map_err(|source| AppError::DocumentUpdate {
        path: path.display().to_string(),
        source,
    })
}

/// Rewrite the readme's report region and star badge token in place.
///
/// A missing marker pair leaves that region untouched (warned, not fatal);
/// read and write failures propagate.
pub fn update_readme(path: &Path, report: &str, stars: u32) -> AppResult<()> {
    let document = read_document(path)?;

    let document = match replace_between_markers(
        &document,
        report,
        COMPLETED_SECTION_START,
        COMPLETED_SECTION_END,
    ) {
        Ok(updated) => updated,
        Err(err) => {
            warn!(
                "Leaving report section of `{}` unchanged: {err}",
                path.display()
            );
            document
        }
    };
    let document = update_star_token(&document, stars);

    write_document(path, &document)
}

/// Rewrite the embedded star counter in each badge image.
pub fn update_badges(paths: &[String], stars: u32) -> AppResult<()> {
    let counter = badge_counter(stars);
    for path in paths {
        let path = Path::new(path);
        let document = read_document(path)?;
        match replace_between_markers(&document, &counter, STAR_COUNT_START, STAR_COUNT_END) {
            Ok(updated) => write_document(path, &updated)?,
            Err(err) => warn!("Leaving badge `{}` unchanged: {err}", path.display()),
        }
    }
    Ok(())
}
