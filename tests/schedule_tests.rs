use rworkday::core::schedule::Schedule;
use rworkday::errors::AppError;
use rworkday::models::activity::Activity;

#[test]
fn test_default_workday_totals() {
    let schedule = Schedule::default_workday();

    assert_eq!(schedule.len(), 8);
    assert_eq!(schedule.total_seconds(), 28800);
    assert_eq!(schedule.total_hours(), 8.0);
}

#[test]
fn test_activity_durations_sum_to_total() {
    let schedule = Schedule::default_workday();

    let summed: u64 = schedule
        .activities()
        .iter()
        .map(|a| a.duration_seconds())
        .sum();
    assert_eq!(summed, schedule.total_seconds());
}

#[test]
fn test_duration_rounds_to_whole_seconds() {
    assert_eq!(Activity::new("half hour", 0.5).duration_seconds(), 1800);
    assert_eq!(Activity::new("two hours", 2.0).duration_seconds(), 7200);
    // 0.001 h = 3.6 s, rounded to the nearest whole second
    assert_eq!(Activity::new("micro", 0.001).duration_seconds(), 4);
}

#[test]
fn test_empty_schedule_rejected() {
    let err = Schedule::from_activities(vec![]).unwrap_err();
    assert!(matches!(err, AppError::InvalidSchedule(_)));
}

#[test]
fn test_zero_duration_activity_rejected() {
    let err = Schedule::from_activities(vec![Activity::new("nothing", 0.0)]).unwrap_err();
    assert!(matches!(err, AppError::InvalidSchedule(_)));
}

#[test]
fn test_custom_schedule_totals() {
    let schedule = Schedule::from_activities(vec![
        Activity::new("A", 1.0),
        Activity::new("B", 1.0),
    ])
    .unwrap();

    assert_eq!(schedule.total_seconds(), 7200);
    assert_eq!(schedule.total_hours(), 2.0);
}
