use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use runtracker_core::{FixedClock, SubmitRequest, TrackerConfig, TrackerError, WorkoutTracker};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
    day(d).and_hms_opt(h, m, 0).unwrap()
}

fn tracker_on(d: u32) -> WorkoutTracker<FixedClock> {
    WorkoutTracker::with_clock(FixedClock::new(at(d, 7, 0)), TrackerConfig::default()).unwrap()
}

#[test]
fn worked_example_five_km_in_thirty_minutes() {
    let mut t = tracker_on(1);
    let e = t.submit(5.0, 30.0, 70.0, Some(5.0)).unwrap();

    assert!((e.pace_min_per_km() - 6.0).abs() < 1e-12);
    assert!((e.speed_km_per_hr() - 10.0).abs() < 1e-12);
    assert!((e.calories_burned() - 362.6).abs() < 1e-9);
    assert_eq!(e.target_km_for_day(), 5.0);
    assert_eq!(e.cumulative_distance_km_for_day(), 5.0);
    assert_eq!(e.timestamp(), NaiveTime::from_hms_opt(7, 0, 0).unwrap());

    let p = t.progress_for_date(day(1));
    assert!(p.achieved);
    assert_eq!(p.remaining, 0.0);
    assert_eq!(p.percent, 100.0);
}

#[test]
fn cumulative_distance_adds_up_within_a_day() {
    let mut t = tracker_on(1);
    let first = t.submit(2.5, 15.0, 70.0, None).unwrap();
    t.clock_mut().set(at(1, 18, 30));
    let second = t.submit(4.0, 26.0, 70.0, None).unwrap();

    assert_eq!(first.cumulative_distance_km_for_day(), 2.5);
    assert_eq!(second.cumulative_distance_km_for_day(), 6.5);

    let entries = t.entries_for_date(day(1));
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], first);
    assert_eq!(entries[1], second);

    let sum: f64 = entries.iter().map(|e| e.distance_km()).sum();
    assert_eq!(t.record_for_date(day(1)).unwrap().cumulative_km, sum);
}

#[test]
fn cumulative_resets_on_a_new_day() {
    let mut t = tracker_on(1);
    t.submit(3.0, 20.0, 70.0, None).unwrap();
    t.clock_mut().set(at(2, 7, 0));
    let e = t.submit(1.0, 6.0, 70.0, None).unwrap();
    assert_eq!(e.cumulative_distance_km_for_day(), 1.0);
}

#[test]
fn target_carries_forward_to_next_day() {
    let mut t = tracker_on(1);
    t.submit(3.0, 20.0, 70.0, Some(5.0)).unwrap();

    t.clock_mut().set(at(2, 7, 0));
    let e = t.submit(2.0, 12.0, 70.0, None).unwrap();
    assert_eq!(e.target_km_for_day(), 5.0);
    assert_eq!(t.record_for_date(day(2)).unwrap().target_km, Some(5.0));
    assert_eq!(t.progress_for_date(day(2)).target, 5.0);
}

#[test]
fn target_carries_across_gaps_of_days() {
    let mut t = tracker_on(1);
    t.submit(3.0, 20.0, 70.0, Some(8.0)).unwrap();
    t.clock_mut().set(at(10, 7, 0));
    let e = t.submit(3.0, 20.0, 70.0, None).unwrap();
    assert_eq!(e.target_km_for_day(), 8.0);
    // Dager uten økter får ingen post
    assert!(t.record_for_date(day(5)).is_none());
}

#[test]
fn day_target_is_reused_within_the_day() {
    let mut t = tracker_on(1);
    t.submit(1.0, 6.0, 70.0, Some(10.0)).unwrap();
    let e = t.submit(1.0, 6.0, 70.0, None).unwrap();
    assert_eq!(e.target_km_for_day(), 10.0);
}

#[test]
fn explicit_target_overwrites_same_day_target() {
    let mut t = tracker_on(1);
    t.submit(1.0, 6.0, 70.0, Some(10.0)).unwrap();
    let e = t.submit(1.0, 6.0, 70.0, Some(4.0)).unwrap();
    assert_eq!(e.target_km_for_day(), 4.0);
    assert_eq!(t.record_for_date(day(1)).unwrap().target_km, Some(4.0));
    assert_eq!(t.last_known_target(), Some(4.0));
    // Tidligere snapshot er uendret
    assert_eq!(t.entries_for_date(day(1))[0].target_km_for_day(), 10.0);
}

#[test]
fn no_target_ever_means_zero() {
    let mut t = tracker_on(1);
    let e = t.submit(5.0, 30.0, 70.0, None).unwrap();
    assert_eq!(e.target_km_for_day(), 0.0);
    assert_eq!(t.last_known_target(), None);
    assert_eq!(t.record_for_date(day(1)).unwrap().target_km, None);
}

#[test]
fn invalid_submission_leaves_state_untouched() {
    let mut t = tracker_on(1);
    t.submit(5.0, 30.0, 70.0, Some(5.0)).unwrap();
    let before_entries = t.entries_for_date(day(1)).to_vec();
    let before_record = t.record_for_date(day(1)).cloned();

    for (d, m, w, target) in [
        (0.0, 30.0, 70.0, None),
        (5.0, 30.0, -1.0, None),
        (5.0, 0.0, 70.0, None),
        (5.0, 30.0, 70.0, Some(0.0)),
        (5.0, 30.0, 70.0, Some(-3.0)),
        (f64::NAN, 30.0, 70.0, None),
    ] {
        let err = t.submit(d, m, w, target).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidInput { .. }), "{err:?}");
    }

    assert_eq!(t.entries_for_date(day(1)), before_entries.as_slice());
    assert_eq!(t.record_for_date(day(1)).cloned(), before_record);
    assert_eq!(t.last_known_target(), Some(5.0));
    assert_eq!(t.telemetry().rejected_total(), 6);
    assert_eq!(t.telemetry().submissions_total(), 1);
}

#[test]
fn rejected_target_on_fresh_day_creates_no_record() {
    let mut t = tracker_on(3);
    assert!(t.submit(5.0, 30.0, 70.0, Some(-1.0)).is_err());
    assert!(t.record_for_date(day(3)).is_none());
    assert!(t.dates().is_empty());
}

#[test]
fn entries_for_unknown_date_is_empty() {
    let t = tracker_on(1);
    assert!(t.entries_for_date(day(20)).is_empty());
}

#[test]
fn dates_are_newest_first() {
    let mut t = tracker_on(1);
    for d in [3, 1, 7, 2] {
        t.submit_at(day(d), NaiveTime::from_hms_opt(6, 0, 0).unwrap(), 1.0, 6.0, 70.0, None)
            .unwrap();
    }
    assert_eq!(t.dates(), vec![day(7), day(3), day(2), day(1)]);
}

#[test]
fn telemetry_counts_distance() {
    let mut t = tracker_on(1);
    t.submit(2.0, 12.0, 70.0, None).unwrap();
    t.submit(3.5, 21.0, 70.0, None).unwrap();
    assert_eq!(t.telemetry().submissions_total(), 2);
    assert!((t.telemetry().distance_km_total() - 5.5).abs() < 1e-12);
    let text = t.telemetry().gather_text().expect("gather_text");
    assert!(text.contains("runtracker_submissions_total 2"));
}

#[test]
fn rejected_request_is_counted_and_not_stored() {
    let mut t = tracker_on(4);
    let req = SubmitRequest { distance_km: 5.0, duration_min: 30.0, weight_kg: 70.0, target_km: Some(0.0) };
    let err = t.submit_request(&req).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { field: "target_km", .. }));
    assert!(t.entries_for_date(day(4)).is_empty());
    assert!(t.record_for_date(day(4)).is_none());
    assert_eq!(t.telemetry().rejected_total(), 1);
}

#[test]
fn day_summary_prints_fractional_distances() {
    let mut t = tracker_on(5);
    t.submit(5.5, 33.0, 70.0, Some(10.0)).unwrap();
    let lines = t.day_summary(day(5));
    assert_eq!(lines[0], "Daily target: 10.0 km | Total distance: 5.5 km");
    assert!(lines[1].starts_with("07:00 | 5.5km | 33.0m | Pace 6.00 | "), "{}", lines[1]);
}
