//! Derived Views
//!
//! Pure transforms over fetched collections: everything here is synchronous,
//! deterministic, and free of browser APIs so it can be unit tested.

use crate::models::Announcement;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Sort announcements newest-first. Equal timestamps order by ascending id so
/// the result is deterministic regardless of input order.
pub fn latest_first(items: &[Announcement]) -> Vec<Announcement> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    sorted
}

/// The `n` most recent announcements, newest-first
pub fn top_n(items: &[Announcement], n: usize) -> Vec<Announcement> {
    let mut sorted = latest_first(items);
    sorted.truncate(n);
    sorted
}

/// Share of `count` in `total` as a whole percentage, rounded half-up.
/// An empty total is 0, never a division error.
pub fn percentage_of_total(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((100 * count + total / 2) / total) as u32
}

/// Partition a collection into per-category counts. Categories with no
/// records are simply absent, never zero-filled.
pub fn count_by<T, F>(items: &[T], key: F) -> BTreeMap<String, u64>
where
    F: Fn(&T) -> &str,
{
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key(item).to_string()).or_insert(0) += 1;
    }
    counts
}

/// Next slideshow index, wrapping from the last slide back to the first
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

/// Previous slideshow index, wrapping from the first slide to the last
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

/// One page of a client-side paginated table (1-based page number)
pub fn page_slice<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    if per_page == 0 {
        return Vec::new();
    }
    let start = page.saturating_sub(1) * per_page;
    items.iter().skip(start).take(per_page).cloned().collect()
}

/// Number of pages needed to show `len` rows
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 || len == 0 {
        return 1;
    }
    len.div_ceil(per_page)
}

/// "Mar 10, 2025 08:30 AM", or "N/A" when the timestamp is missing
pub fn format_date_time(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%b %-d, %Y %I:%M %p").to_string(),
        None => "N/A".to_string(),
    }
}

/// "Mar 10, 2025", or "N/A" when the timestamp is missing
pub fn format_day(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Philippine peso with comma grouping, e.g. "₱1,234.56"
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}₱{grouped}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Inverse of [`format_currency`], to verify formatting is lossless
    fn parse_currency(text: &str) -> Option<f64> {
        let cleaned: String = text
            .chars()
            .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
            .collect();
        cleaned.parse().ok()
    }

    fn make_announcement(id: &str, day: u32) -> Announcement {
        let created = Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap();
        Announcement {
            id: id.to_string(),
            title: format!("Announcement {}", id),
            description: String::new(),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_top_n_orders_newest_first_and_truncates() {
        let items = vec![
            make_announcement("a", 3),
            make_announcement("b", 9),
            make_announcement("c", 1),
            make_announcement("d", 7),
            make_announcement("e", 5),
            make_announcement("f", 2),
        ];
        let top = top_n(&items, 5);
        assert_eq!(top.len(), 5);
        let ids: Vec<&str> = top.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "e", "a", "f"]);
        for pair in top.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_top_n_is_idempotent_prefix() {
        let items = vec![
            make_announcement("a", 3),
            make_announcement("b", 9),
            make_announcement("c", 1),
        ];
        let five = top_n(&items, 5);
        assert_eq!(top_n(&five, 5), five);
        assert_eq!(top_n(&five, 2), five[..2].to_vec());
    }

    #[test]
    fn test_top_n_breaks_timestamp_ties_by_id() {
        let items = vec![
            make_announcement("z", 4),
            make_announcement("a", 4),
            make_announcement("m", 4),
        ];
        let top = top_n(&items, 3);
        let ids: Vec<&str> = top.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "m", "z"]);
    }

    #[test]
    fn test_percentage_of_zero_total_is_zero() {
        assert_eq!(percentage_of_total(0, 0), 0);
        assert_eq!(percentage_of_total(5, 0), 0);
    }

    #[test]
    fn test_percentages_over_partition_sum_to_about_100() {
        let counts = [3u64, 3, 3];
        let total: u64 = counts.iter().sum();
        let sum: u32 = counts.iter().map(|c| percentage_of_total(*c, total)).sum();
        assert!((99..=101).contains(&sum), "sum was {}", sum);

        let counts = [7u64, 2, 1];
        let sum: u32 = counts.iter().map(|c| percentage_of_total(*c, 10)).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn test_count_by_omits_absent_categories() {
        let statuses = ["pending", "pending", "approved"];
        let counts = count_by(&statuses, |s| s);
        assert_eq!(counts.get("pending"), Some(&2));
        assert_eq!(counts.get("approved"), Some(&1));
        assert!(!counts.contains_key("rejected"));
    }

    #[test]
    fn test_slide_index_wraps_both_directions() {
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(next_index(0, 5), 1);
        assert_eq!(prev_index(0, 5), 4);
        assert_eq!(prev_index(3, 5), 2);
        assert_eq!(next_index(0, 0), 0);
    }

    #[test]
    fn test_page_slice_and_count() {
        let rows: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&rows, 1, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(page_slice(&rows, 3, 10), (21..=25).collect::<Vec<_>>());
        assert!(page_slice(&rows, 4, 10).is_empty());
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(0, 10), 1);
    }

    #[test]
    fn test_date_formatting() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 10, 8, 30, 0).unwrap();
        assert_eq!(format_date_time(Some(&dt)), "Mar 10, 2025 08:30 AM");
        assert_eq!(format_day(Some(&dt)), "Mar 10, 2025");
        assert_eq!(format_date_time(None), "N/A");
    }

    #[test]
    fn test_currency_round_trips() {
        for amount in [0.0, 5.5, 1234.56, 1_000_000.0, 987654.32] {
            let text = format_currency(amount);
            assert_eq!(parse_currency(&text), Some(amount), "text was {}", text);
        }
        assert_eq!(format_currency(1234.56), "₱1,234.56");
        assert_eq!(format_currency(0.0), "₱0.00");
    }
}
