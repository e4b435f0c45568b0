use std::fs;
use std::path::Path;

use aoc_status::core::buckets::Buckets;
use aoc_status::core::report::{render_report, update_badges, update_readme};
use aoc_status::types::{DayStatus, YearStatus};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

const README_TEMPLATE: &str = "\
# Advent of Code

![stars](https://img.shields.io/static/v1?label=stars&message=0&color=yellow)

<!-- start completed section -->
stale report
<!-- end completed section -->

footer
";

const BADGE_TEMPLATE: &str = "\
<svg>
	<foreignObject>
		<div>
			<!-- start star count -->
				<span class=\"star-count\">0</span>
			<!-- end star count -->
		</div>
	</foreignObject>
</svg>
";

fn sample_buckets() -> Buckets {
    let mut days = YearStatus::new();
    days.insert(
        1,
        DayStatus {
            part_one: true,
            part_two: false,
        },
    );
    Buckets {
        in_progress: vec![(2015, days)],
        completed: vec![],
        not_started: vec![],
    }
}

#[test]
fn rewrites_report_region_and_star_badge() {
    let dir = tempdir().unwrap();
    let readme = dir.path().join("readme.md");
    fs::write(&readme, README_TEMPLATE).unwrap();

    let text = render_report(&sample_buckets());
    update_readme(&readme, &text, 1).unwrap();

    let updated = fs::read_to_string(&readme).unwrap();
    assert!(updated.contains("&message=1&color=yellow"));
    assert!(updated.contains("<!-- start completed section -->\n## In Progress ✅"));
    assert!(updated.contains("| 01 | ⭐️ | ❌ |"));
    assert!(!updated.contains("stale report"));
    assert!(updated.contains("footer"));
}

#[test]
fn readme_update_is_idempotent() {
    let dir = tempdir().unwrap();
    let readme = dir.path().join("readme.md");
    fs::write(&readme, README_TEMPLATE).unwrap();

    let text = render_report(&sample_buckets());
    update_readme(&readme, &text, 1).unwrap();
    let first = fs::read_to_string(&readme).unwrap();

    update_readme(&readme, &text, 1).unwrap();
    let second = fs::read_to_string(&readme).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_markers_keep_text_but_still_update_stars() {
    let dir = tempdir().unwrap();
    let readme = dir.path().join("readme.md");
    fs::write(&readme, "# No markers\nbadge &message=0 here\n").unwrap();

    update_readme(&readme, "report body", 7).unwrap();

    let updated = fs::read_to_string(&readme).unwrap();
    assert_eq!(updated, "# No markers\nbadge &message=7 here\n");
}

#[test]
fn missing_readme_is_fatal() {
    let missing = Path::new("definitely/not/a/readme.md");
    assert!(update_readme(missing, "report body", 1).is_err());
}

#[test]
fn badge_files_get_the_counter_spliced() {
    let dir = tempdir().unwrap();
    let dark = dir.path().join("image_dark.svg");
    let light = dir.path().join("image_light.svg");
    fs::write(&dark, BADGE_TEMPLATE).unwrap();
    fs::write(&light, BADGE_TEMPLATE).unwrap();

    let paths = vec![
        dark.to_string_lossy().to_string(),
        light.to_string_lossy().to_string(),
    ];
    update_badges(&paths, 38).unwrap();

    for path in &paths {
        let updated = fs::read_to_string(path).unwrap();
        assert!(updated.contains(
            "<!-- start star count -->\n\t\t\t\t<span class=\"star-count\">38</span>\n<!-- end star count -->"
        ));
        assert!(!updated.contains("star-count\">0<"));
    }
}

#[test]
fn badge_without_markers_is_left_alone() {
    let dir = tempdir().unwrap();
    let badge = dir.path().join("image_dark.svg");
    fs::write(&badge, "<svg>no markers</svg>").unwrap();

    let paths = vec![badge.to_string_lossy().to_string()];
    update_badges(&paths, 5).unwrap();

    assert_eq!(fs::read_to_string(&badge).unwrap(), "<svg>no markers</svg>");
}
