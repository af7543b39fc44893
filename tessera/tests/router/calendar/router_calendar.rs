use tessera::{ContributionCalendar, NaiveDate, Tessera, Weeks};

use crate::helpers::{MockConnector, OCTOCAT, d, entry, events_on, fixed_clock};

fn weeks(n: u16) -> Weeks {
    Weeks::new(n).unwrap()
}

fn day(cal: &ContributionCalendar, date: NaiveDate) -> (u32, u8) {
    let day = cal.get(date).expect("date within grid");
    (day.count, day.level.get())
}

#[tokio::test]
async fn empty_sources_yield_a_single_zero_week() {
    let c = MockConnector::builder()
        .name("c")
        .contributions(vec![])
        .events(vec![])
        .build();
    let tessera = Tessera::builder()
        .with_connector(c)
        .clock(fixed_clock())
        .build()
        .unwrap();

    let report = tessera.calendar(OCTOCAT, weeks(1)).await.unwrap();
    let cal = &report.calendar;

    assert_eq!(cal.weeks.len(), 1);
    assert_eq!(cal.weeks[0].days().len(), 7);
    assert_eq!(cal.start, d(2024, 6, 9));
    assert_eq!(cal.end, d(2024, 6, 15));
    assert!(cal.days().all(|day| day.count == 0 && day.level.get() == 0));
    assert_eq!(cal.total, 0);
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn secondary_patches_only_lagging_days() {
    let c = MockConnector::builder()
        .name("c")
        .contributions(vec![entry("2024-06-10", 2, 1)])
        .events(
            events_on("2024-06-10", 2)
                .into_iter()
                .chain(events_on("2024-06-11", 1))
                .collect(),
        )
        .build();
    let tessera = Tessera::builder()
        .with_connector(c)
        .clock(fixed_clock())
        .build()
        .unwrap();

    let report = tessera.calendar(OCTOCAT, weeks(1)).await.unwrap();
    assert_eq!(day(&report.calendar, d(2024, 6, 10)), (2, 1));
    assert_eq!(day(&report.calendar, d(2024, 6, 11)), (1, 1));
    assert_eq!(report.calendar.total, 3);
}

#[tokio::test]
async fn higher_event_count_overrides_primary_and_requantizes() {
    let c = MockConnector::builder()
        .name("c")
        .contributions(vec![entry("2024-06-12", 1, 1)])
        .events(events_on("2024-06-12", 6))
        .build();
    let tessera = Tessera::builder()
        .with_connector(c)
        .clock(fixed_clock())
        .build()
        .unwrap();

    let report = tessera.calendar(OCTOCAT, weeks(2)).await.unwrap();
    assert_eq!(day(&report.calendar, d(2024, 6, 12)), (6, 3));
}

#[tokio::test]
async fn grid_is_anchored_on_the_injected_clock() {
    let c = MockConnector::builder()
        .name("c")
        .contributions(vec![entry("2023-01-01", 50, 4), entry("2024-06-01", 1, 1)])
        .build();
    let tessera = Tessera::builder()
        .with_connector(c)
        .clock(fixed_clock())
        .build()
        .unwrap();

    let report = tessera.calendar(OCTOCAT, weeks(52)).await.unwrap();
    let cal = &report.calendar;

    assert_eq!(cal.end, d(2024, 6, 15));
    assert_eq!(cal.day_count(), 52 * 7);
    assert_eq!(cal.weeks.len(), 52);
    // 2023-01-01 falls outside a 52-week window ending mid-June 2024.
    assert_eq!(cal.total, 1);
    assert_eq!(report.period_total, 51);
}

#[tokio::test]
async fn unreadable_dates_are_counted_not_fatal() {
    let c = MockConnector::builder()
        .name("c")
        .contributions(vec![entry("yesterday", 3, 2), entry("2024-06-11", 2, 1)])
        .events(vec![tessera::ActivityEvent::default()])
        .build();
    let tessera = Tessera::builder()
        .with_connector(c)
        .clock(fixed_clock())
        .build()
        .unwrap();

    let report = tessera.calendar(OCTOCAT, weeks(1)).await.unwrap();
    assert_eq!(report.skipped, 2);
    assert_eq!(report.calendar.total, 2);
}
