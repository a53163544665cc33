use chrono::NaiveDate;
use rollcall_core::{AttendanceStatus, AttendanceStore, StudentId};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
}

#[test]
fn day_sheet_lists_roster_in_order_with_marks() {
    let mut store = AttendanceStore::seeded(day(10));
    store.set_attendance(&StudentId::from("3"), day(20), AttendanceStatus::Late);

    let sheet = store.day_sheet(day(20));
    let ids: Vec<&str> = sheet.iter().map(|row| row.student.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    assert_eq!(sheet[2].status, Some(AttendanceStatus::Late));
    assert!(sheet
        .iter()
        .filter(|row| row.student.id.as_str() != "3")
        .all(|row| row.status.is_none()));
}

#[test]
fn save_day_counts_marked_and_unmarked_students() {
    let mut store = AttendanceStore::seeded(day(10));
    store.set_attendance(&StudentId::from("1"), day(20), AttendanceStatus::Present);
    store.set_attendance(&StudentId::from("2"), day(20), AttendanceStatus::Absent);
    // Marks for unknown ids do not count toward the roster grid.
    store.set_attendance(&StudentId::from("ghost"), day(20), AttendanceStatus::Present);

    let report = store.save_day(day(20));
    assert_eq!(report.date, day(20));
    assert_eq!(report.marked, 2);
    assert_eq!(report.unmarked, 3);
}

#[test]
fn dashboard_reflects_roster_and_day_marks() {
    let mut store = AttendanceStore::seeded(day(10));
    let stats = store.dashboard(day(20));
    assert_eq!(stats.total_students, 5);
    assert_eq!(stats.active_courses, 3);
    assert_eq!(stats.attendance_rate, None);

    store.set_attendance(&StudentId::from("1"), day(20), AttendanceStatus::Present);
    store.set_attendance(&StudentId::from("2"), day(20), AttendanceStatus::Absent);
    store.set_attendance(&StudentId::from("3"), day(20), AttendanceStatus::Late);
    store.set_attendance(&StudentId::from("4"), day(20), AttendanceStatus::Absent);
    assert_eq!(store.dashboard(day(20)).attendance_rate, Some(50));

    store.set_attendance(&StudentId::from("4"), day(20), AttendanceStatus::Present);
    assert_eq!(store.dashboard(day(20)).attendance_rate, Some(75));
}

#[test]
fn seeded_session_has_one_record_per_seed_day() {
    let store = AttendanceStore::seeded(day(10));
    let all = store.list_attendance(&Default::default());
    assert_eq!(all.len(), 7);
    assert_eq!(all.first().map(|entry| entry.record.date), Some(day(4)));
    assert_eq!(all.last().map(|entry| entry.record.date), Some(day(10)));
    assert_eq!(
        store.get_attendance(&StudentId::from("5"), day(10)),
        Some(AttendanceStatus::Absent)
    );
}
