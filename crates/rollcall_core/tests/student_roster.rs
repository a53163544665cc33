use chrono::NaiveDate;
use rollcall_core::{
    AttendanceStore, Course, NewStudent, ServiceError, Student, StudentId, StudentValidationError,
};

fn registration_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
}

#[test]
fn register_assigns_id_and_date_and_appends_to_roster() {
    let mut store = AttendanceStore::seeded(registration_day());
    let created = store
        .register_student_on(
            NewStudent::new("  Felipe Rocha ", "11987654321", Course::JiuJitsu),
            registration_day(),
        )
        .unwrap();

    assert!(!created.id.as_str().is_empty());
    assert_eq!(created.name, "Felipe Rocha");
    assert_eq!(created.registration_date, registration_day());

    let roster = store.list_students();
    assert_eq!(roster.len(), 6);
    assert_eq!(roster.last(), Some(&created));
    assert_eq!(store.find_student(&created.id), Some(created));
}

#[test]
fn register_uses_today_by_default() {
    let mut store = AttendanceStore::in_memory();
    let before = chrono::Local::now().date_naive();
    let created = store
        .register_student(NewStudent::new("Gabi", "gabi@example.com", Course::Karate))
        .unwrap();
    let after = chrono::Local::now().date_naive();
    assert!(created.registration_date >= before && created.registration_date <= after);
}

#[test]
fn generated_ids_are_unique() {
    let mut store = AttendanceStore::in_memory();
    let first = store
        .register_student_on(
            NewStudent::new("Ana", "ana@example.com", Course::Karate),
            registration_day(),
        )
        .unwrap();
    let second = store
        .register_student_on(
            NewStudent::new("Ana", "ana@example.com", Course::Karate),
            registration_day(),
        )
        .unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn register_rejects_short_name_and_bad_contact() {
    let mut store = AttendanceStore::in_memory();

    let err = store
        .register_student_on(
            NewStudent::new(" J ", "j@example.com", Course::Karate),
            registration_day(),
        )
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::Validation(StudentValidationError::NameTooShort { min: 2 })
    );

    let err = store
        .register_student_on(
            NewStudent::new("Joana", "12345", Course::Karate),
            registration_day(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(StudentValidationError::InvalidContact(_))
    ));
    assert!(store.list_students().is_empty());
}

#[test]
fn search_matches_name_or_course_label() {
    let store = AttendanceStore::seeded(registration_day());

    let by_name: Vec<String> = store
        .search_students("COSTA")
        .into_iter()
        .map(|student| student.name)
        .collect();
    assert_eq!(by_name, vec!["Bruno Costa".to_string()]);

    let by_course: Vec<StudentId> = store
        .search_students("karate")
        .into_iter()
        .map(|student| student.id)
        .collect();
    assert_eq!(by_course, vec![StudentId::from("1"), StudentId::from("4")]);

    assert_eq!(store.search_students("   ").len(), 5);
    assert!(store.search_students("judo").is_empty());
}

#[test]
fn student_serialization_uses_expected_wire_fields() {
    let student = Student {
        id: StudentId::from("1"),
        name: "Alice Silva".to_string(),
        contact: "alice@example.com".to_string(),
        course: Course::JiuJitsu,
        registration_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
    };

    let json = serde_json::to_value(&student).unwrap();
    assert_eq!(json["id"], "1");
    assert_eq!(json["course"], "jiu_jitsu");
    assert_eq!(json["registration_date"], "2023-01-15");

    let decoded: Student = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, student);
}

#[test]
fn course_parse_accepts_key_or_label() {
    assert_eq!(Course::parse("capoeira"), Some(Course::Capoeira));
    assert_eq!(
        Course::parse("jiu jitsu - tue, thu (19:00-21:00)"),
        Some(Course::JiuJitsu)
    );
    assert_eq!(Course::parse("Judo"), None);
}
