use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Offset of Vietnam time (UTC+7, no daylight saving).
const VIETNAM_OFFSET_SECONDS: i32 = 7 * 3600;

/// Splits the stored comma separated tag column into a list.
///
/// Empty entries are skipped and whitespace around each tag is trimmed.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins tags for storage, dropping blanks, commas and duplicates.
///
/// Duplicates are matched case-insensitively and the first spelling is kept.
pub fn join_tags(tags: &[String]) -> String {
    let mut unique: Vec<String> = Vec::new();

    for tag in tags {
        let tag = tag.replace(',', " ").trim().to_string();
        let seen = unique
            .iter()
            .any(|existing| existing.to_lowercase() == tag.to_lowercase());
        if !tag.is_empty() && !seen {
            unique.push(tag);
        }
    }

    unique.join(",")
}

/// Calendar day in Vietnam time for the given instant.
///
/// Streaks and daily tasks roll over at local midnight rather than UTC midnight.
pub fn local_date(now: DateTime<Utc>) -> NaiveDate {
    match FixedOffset::east_opt(VIETNAM_OFFSET_SECONDS) {
        Some(offset) => now.with_timezone(&offset).date_naive(),
        None => now.date_naive(),
    }
}

/// Total pages for a paginated listing.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}
