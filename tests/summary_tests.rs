use eldcore::Core;
use eldcore::core::calculator::duration::StatusTotals;
use eldcore::core::ingest::group_by_date;
use eldcore::models::duty_status::DutyStatus;

mod common;
use common::{day, interval, interval_on};

#[test]
fn test_day_summary_totals_and_grid_agree() {
    let logs = vec![
        interval(DutyStatus::OffDuty, "00:00", "06:00"),
        interval(DutyStatus::OnDutyNotDriving, "06:00", "07:00"),
        interval(DutyStatus::Driving, "07:00", "12:00"),
        interval(DutyStatus::OffDuty, "12:00", "12:30"),
        interval(DutyStatus::Driving, "12:30", "15:30"),
        interval(DutyStatus::SleeperBerth, "15:30", "00:00"),
    ];

    let summary = Core::build_day_summary(day(), &logs, 20.0);

    assert_eq!(summary.date, day());
    assert_eq!(summary.totals.minutes(DutyStatus::Driving), 480);
    assert_eq!(summary.totals.hours_display(DutyStatus::Driving), "8.0");
    assert_eq!(summary.totals.minutes(DutyStatus::OnDutyNotDriving), 60);
    assert_eq!(summary.totals.minutes(DutyStatus::OffDuty), 390);
    assert_eq!(summary.totals.minutes(DutyStatus::SleeperBerth), 510);

    assert_eq!(summary.total_on_duty_hours, 9.0);
    assert_eq!(summary.total_on_duty_display(), "9.0");
    assert_eq!(summary.remaining_cycle_hours, 41.0);
    assert_eq!(summary.remaining_cycle_display(), "41.0");

    assert!(summary.grid.is_active(DutyStatus::Driving, 7));
    assert!(summary.grid.is_active(DutyStatus::Driving, 12));
    assert!(!summary.grid.is_active(DutyStatus::Driving, 15));
    assert!(summary.grid.is_active(DutyStatus::SleeperBerth, 23));
    assert!(!summary.grid.is_active(DutyStatus::SleeperBerth, 0));
}

#[test]
fn test_remaining_cycle_floors_at_zero() {
    let logs = vec![
        interval(DutyStatus::Driving, "00:00", "11:00"),
        interval(DutyStatus::OnDutyNotDriving, "11:00", "15:00"),
    ];

    let summary = Core::build_day_summary(day(), &logs, 60.0);

    assert_eq!(summary.total_on_duty_hours, 15.0);
    assert_eq!(summary.remaining_cycle_hours, 0.0);
    assert_eq!(summary.remaining_cycle_display(), "0.0");
}

#[test]
fn test_half_hour_total_displays_one_decimal() {
    let logs = vec![interval(DutyStatus::Driving, "08:00", "15:30")];
    let totals = StatusTotals::compute(&logs);

    assert_eq!(totals.minutes(DutyStatus::Driving), 450);
    assert_eq!(totals.hours(DutyStatus::Driving), 7.5);
    assert_eq!(totals.hours_display(DutyStatus::Driving), "7.5");
}

#[test]
fn test_short_intervals_accumulate_before_rounding() {
    // Ten 7-minute stops: 70 minutes. Per-interval rounding would show
    // 1.0; accumulating in minutes first gives 1.2.
    let logs: Vec<_> = (0..10)
        .map(|i| {
            let start = format!("{:02}:00", 8 + i);
            let end = format!("{:02}:07", 8 + i);
            interval(DutyStatus::OnDutyNotDriving, &start, &end)
        })
        .collect();

    let totals = StatusTotals::compute(&logs);
    assert_eq!(totals.minutes(DutyStatus::OnDutyNotDriving), 70);
    assert_eq!(totals.hours_display(DutyStatus::OnDutyNotDriving), "1.2");
}

#[test]
fn test_empty_day_summary_is_all_zero() {
    let summary = Core::build_day_summary(day(), &[], 0.0);

    for status in DutyStatus::ALL {
        assert_eq!(summary.totals.minutes(status), 0);
        assert_eq!(summary.totals.hours_display(status), "0.0");
    }
    assert_eq!(summary.total_on_duty_hours, 0.0);
    assert_eq!(summary.remaining_cycle_hours, 70.0);
}

#[test]
fn test_group_by_date_orders_days_and_keeps_input_order() {
    let d1 = common::day();
    let d2 = d1.succ_opt().expect("next day");

    let logs = vec![
        interval_on(d2, DutyStatus::Driving, "08:00", "10:00"),
        interval_on(d1, DutyStatus::OffDuty, "00:00", "08:00"),
        interval_on(d2, DutyStatus::OffDuty, "10:00", "12:00"),
    ];

    let days = group_by_date(logs);
    let dates: Vec<_> = days.keys().copied().collect();
    assert_eq!(dates, vec![d1, d2]);

    let second = &days[&d2];
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].status, DutyStatus::Driving);
    assert_eq!(second[1].status, DutyStatus::OffDuty);
}

#[test]
fn test_on_duty_statuses_drive_the_cycle_math() {
    // Rest statuses never count against the 70-hour budget.
    let logs = vec![
        interval(DutyStatus::OffDuty, "00:00", "10:00"),
        interval(DutyStatus::SleeperBerth, "10:00", "20:00"),
    ];

    let summary = Core::build_day_summary(day(), &logs, 30.0);
    assert_eq!(summary.total_on_duty_hours, 0.0);
    assert_eq!(summary.remaining_cycle_hours, 40.0);

    assert!(DutyStatus::Driving.is_on_duty());
    assert!(DutyStatus::OnDutyNotDriving.is_on_duty());
    assert!(DutyStatus::OffDuty.is_rest());
    assert!(DutyStatus::SleeperBerth.is_rest());
}
