use crate::domain::Post;
use chrono::{DateTime, Datelike, Utc};

/// Most-recent-first, matching the adapter's prepend order even when posts
/// arrive shuffled. Stable, so same-instant posts keep their relative order.
pub fn feed_in_display_order(posts: &[Post]) -> Vec<&Post> {
    let mut ordered: Vec<_> = posts.iter().collect();
    ordered.sort_by_key(|p| std::cmp::Reverse(p.created_date));
    ordered
}

/// Day-of-month and short month for the indicator column next to a card,
/// e.g. ("05", "OCT").
pub fn date_indicator(date: &DateTime<Utc>) -> (String, String) {
    let day = format!("{:02}", date.day());
    let month = date.format("%b").to_string().to_uppercase();
    (day, month)
}
