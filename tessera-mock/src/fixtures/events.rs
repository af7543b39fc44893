use chrono::{Days, NaiveDate};
use tessera_core::ActivityEvent;

fn event(kind: &str, date: NaiveDate, time: &str) -> ActivityEvent {
    ActivityEvent {
        created_at: Some(format!("{}T{time}Z", date.format("%Y-%m-%d"))),
        kind: Some(kind.to_string()),
    }
}

/// Recent public events around `anchor`, newest first.
///
/// Covers the days the primary fixture lags on, one day it already has, and a
/// record without a timestamp.
pub fn recent(anchor: NaiveDate) -> Vec<ActivityEvent> {
    let back = |n: u64| anchor.checked_sub_days(Days::new(n)).unwrap_or(anchor);
    vec![
        event("PushEvent", anchor, "22:05:00"),
        event("PullRequestEvent", anchor, "13:40:12"),
        event("PushEvent", anchor, "09:15:30"),
        event("IssueCommentEvent", back(1), "18:02:44"),
        event("PushEvent", back(1), "07:59:01"),
        event("CreateEvent", back(2), "11:11:11"),
        event("WatchEvent", back(10), "16:20:00"),
        ActivityEvent {
            created_at: None,
            kind: Some("PublicEvent".to_string()),
        },
    ]
}
