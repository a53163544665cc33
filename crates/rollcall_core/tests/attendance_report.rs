use chrono::NaiveDate;
use rollcall_core::fixtures::{seed_attendance, seed_students};
use rollcall_core::{
    enrich, filter, summarize, AttendanceFilter, AttendanceRecord, AttendanceStatus,
    AttendanceStore, Course, StudentId, NOT_APPLICABLE_COURSE, UNKNOWN_STUDENT_NAME,
};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
}

fn filter_grid() -> Vec<AttendanceFilter> {
    let mut grid = Vec::new();
    for name in [None, Some("a"), Some("ALICE"), Some("zzz")] {
        for course in [None, Some(Course::Karate), Some(Course::JiuJitsu)] {
            for status in [None, Some(AttendanceStatus::Present), Some(AttendanceStatus::Late)] {
                grid.push(AttendanceFilter {
                    name: name.map(str::to_string),
                    course,
                    status,
                });
            }
        }
    }
    grid
}

#[test]
fn enrich_joins_known_and_marks_unknown_students() {
    let mut records = seed_attendance(anchor());
    records.push(AttendanceRecord::new(
        StudentId::from("99"),
        anchor(),
        AttendanceStatus::Late,
    ));
    let students = seed_students();

    let enriched = enrich(&records, &students);
    assert_eq!(enriched.len(), records.len());
    for (entry, record) in enriched.iter().zip(&records) {
        assert_eq!(&entry.record, record);
    }

    assert_eq!(enriched[0].student_name, "Alice Silva");
    assert_eq!(enriched[0].course, Some(Course::Karate));

    let unknown = enriched.last().unwrap();
    assert_eq!(unknown.student_name, UNKNOWN_STUDENT_NAME);
    assert_eq!(unknown.course, None);
    assert_eq!(unknown.course_label(), NOT_APPLICABLE_COURSE);
    assert!(!unknown.is_known_student());
}

#[test]
fn enrich_is_deterministic_and_total_on_empty_roster() {
    let records = seed_attendance(anchor());
    let first = enrich(&records, &[]);
    let second = enrich(&records, &[]);
    assert_eq!(first, second);
    assert_eq!(first.len(), records.len());
    assert!(first
        .iter()
        .all(|entry| entry.student_name == UNKNOWN_STUDENT_NAME));
}

#[test]
fn filter_matches_name_case_insensitively_and_keeps_order() {
    let enriched = enrich(&seed_attendance(anchor()), &seed_students());
    let alice = filter(&enriched, &AttendanceFilter::all().with_name("aLiCe"));
    assert_eq!(alice.len(), 2);
    assert!(alice[0].record.date < alice[1].record.date);
    assert!(alice
        .iter()
        .all(|entry| entry.record.student_id == StudentId::from("1")));
}

#[test]
fn filter_combines_predicates_with_and() {
    let enriched = enrich(&seed_attendance(anchor()), &seed_students());
    let capoeira_absent = filter(
        &enriched,
        &AttendanceFilter::all()
            .with_course(Course::Capoeira)
            .with_status(AttendanceStatus::Absent),
    );
    let names: Vec<&str> = capoeira_absent
        .iter()
        .map(|entry| entry.student_name.as_str())
        .collect();
    assert_eq!(names, vec!["Bruno Costa", "Elena Moraes"]);

    let none = filter(
        &enriched,
        &AttendanceFilter::all()
            .with_course(Course::JiuJitsu)
            .with_status(AttendanceStatus::Present),
    );
    assert!(none.is_empty());
}

#[test]
fn unknown_student_never_matches_a_specific_course() {
    let records = vec![AttendanceRecord::new(
        StudentId::from("99"),
        anchor(),
        AttendanceStatus::Present,
    )];
    let enriched = enrich(&records, &seed_students());
    for course in Course::ALL {
        assert!(filter(&enriched, &AttendanceFilter::all().with_course(course)).is_empty());
    }
    assert_eq!(filter(&enriched, &AttendanceFilter::all()).len(), 1);
}

#[test]
fn adding_predicates_never_grows_the_result() {
    let enriched = enrich(&seed_attendance(anchor()), &seed_students());
    for narrow in filter_grid() {
        let narrow_len = filter(&enriched, &narrow).len();
        let widenings = [
            AttendanceFilter {
                name: None,
                ..narrow.clone()
            },
            AttendanceFilter {
                course: None,
                ..narrow.clone()
            },
            AttendanceFilter {
                status: None,
                ..narrow.clone()
            },
        ];
        for wide in widenings {
            assert!(filter(&enriched, &wide).len() >= narrow_len, "{narrow:?}");
        }
    }
}

#[test]
fn summary_keeps_fixed_order_and_explicit_zeros() {
    let summary = summarize(&[]);
    let statuses: Vec<AttendanceStatus> = summary.buckets().iter().map(|b| b.status).collect();
    assert_eq!(
        statuses,
        vec![
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late
        ]
    );
    assert!(summary.buckets().iter().all(|bucket| bucket.count == 0));
    assert_eq!(summary.total(), 0);
    assert!(summary.is_empty());
}

#[test]
fn summary_counts_sum_to_input_length_for_every_filter() {
    let enriched = enrich(&seed_attendance(anchor()), &seed_students());
    for predicates in filter_grid() {
        let filtered = filter(&enriched, &predicates);
        assert_eq!(summarize(&filtered).total(), filtered.len());
    }

    let all = summarize(&enriched);
    assert_eq!(all.count(AttendanceStatus::Present), 4);
    assert_eq!(all.count(AttendanceStatus::Absent), 2);
    assert_eq!(all.count(AttendanceStatus::Late), 1);
}

#[test]
fn store_report_matches_pure_pipeline() {
    let store = AttendanceStore::seeded(anchor());
    let predicates = AttendanceFilter::all().with_status(AttendanceStatus::Present);

    let listed = store.list_attendance(&predicates);
    assert_eq!(listed.len(), 4);
    assert_eq!(store.summarize_attendance(&predicates).total(), 4);
    assert_eq!(
        store
            .summarize_attendance(&predicates)
            .count(AttendanceStatus::Absent),
        0
    );
}

#[test]
fn summary_serializes_as_ordered_bucket_list() {
    let enriched = enrich(&seed_attendance(anchor()), &seed_students());
    let json = serde_json::to_value(summarize(&enriched)).unwrap();
    assert_eq!(json["buckets"][0]["status"], "present");
    assert_eq!(json["buckets"][0]["count"], 4);
    assert_eq!(json["buckets"][1]["status"], "absent");
    assert_eq!(json["buckets"][2]["status"], "late");
}
