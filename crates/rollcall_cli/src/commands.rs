//! Line command parsing and execution for one CLI session.
//!
//! # Invariants
//! - Every text argument goes through the core input parsers; no panics on
//!   malformed input.
//! - A failed command leaves the session state unchanged.

use chrono::NaiveDate;
use rollcall_core::service::input::{
    parse_course_filter, parse_course_input, parse_date_input, parse_status_filter,
    parse_status_input,
};
use rollcall_core::{
    format_session_date, AttendanceFilter, AttendanceStore, NewStudent, ServiceError, Student,
    StudentId,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const HELP: &str = "\
commands:
  students [term]                          list or search the roster
  register <course> <contact> <name...>    register a student
  mark <student_id> <YYYY-MM-DD> <status>  set present|absent|late
  status <student_id> <YYYY-MM-DD>         show one mark
  sheet <YYYY-MM-DD>                       marking grid for a day
  save <YYYY-MM-DD>                        save the grid for a day
  report [name=..] [course=..] [status=..] filtered records
  summary [name=..] [course=..] [status=..] status counts
                                           (name= runs to the next filter)
  dashboard [YYYY-MM-DD]                   headline numbers
  help | quit";

/// CLI command failure.
#[derive(Debug)]
pub enum CommandError {
    Usage(String),
    Service(ServiceError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage(message) => write!(f, "{message}"),
            Self::Service(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            Self::Usage(_) => None,
        }
    }
}

impl From<ServiceError> for CommandError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

/// What the session loop should do after one line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

/// Executes one input line against the session.
///
/// `today` is used when a command takes an optional date.
pub fn execute(
    store: &mut AttendanceStore,
    line: &str,
    today: NaiveDate,
) -> Result<Outcome, CommandError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Outcome::Print(String::new()));
    };
    let args: Vec<&str> = words.collect();

    let output = match command.to_ascii_lowercase().as_str() {
        "help" => HELP.to_string(),
        "quit" | "exit" => return Ok(Outcome::Quit),
        "students" => render_students(&store.search_students(&args.join(" "))),
        "register" => {
            let [course, contact, name @ ..] = args.as_slice() else {
                return Err(usage("register <course> <contact> <name...>"));
            };
            if name.is_empty() {
                return Err(usage("register <course> <contact> <name...>"));
            }
            let fields = NewStudent::new(name.join(" "), *contact, parse_course_input(course)?);
            let student = store.register_student(fields)?;
            format!("registered {} ({})", student.name, student.id)
        }
        "mark" => {
            let [student_id, date, status] = args.as_slice() else {
                return Err(usage("mark <student_id> <YYYY-MM-DD> <status>"));
            };
            let date = parse_date_input(date)?;
            let status = parse_status_input(status)?;
            let records =
                store.set_attendance_checked(&StudentId::from(*student_id), date, status)?;
            format!(
                "{student_id} {} -> {} ({} record(s) for student)",
                format_session_date(date),
                status,
                records.len()
            )
        }
        "status" => {
            let [student_id, date] = args.as_slice() else {
                return Err(usage("status <student_id> <YYYY-MM-DD>"));
            };
            let date = parse_date_input(date)?;
            match store.get_attendance(&StudentId::from(*student_id), date) {
                Some(status) => status.to_string(),
                None => "not marked".to_string(),
            }
        }
        "sheet" => {
            let [date] = args.as_slice() else {
                return Err(usage("sheet <YYYY-MM-DD>"));
            };
            let rows = store.day_sheet(parse_date_input(date)?);
            if rows.is_empty() {
                return Ok(Outcome::Print("no students".to_string()));
            }
            rows.iter()
                .map(|row| {
                    format!(
                        "{:<6} {:<20} {:<8} {}",
                        row.student.id.as_str(),
                        row.student.name,
                        row.status.map_or("-", |status| status.label()),
                        row.student.course
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        "save" => {
            let [date] = args.as_slice() else {
                return Err(usage("save <YYYY-MM-DD>"));
            };
            let report = store.save_day(parse_date_input(date)?);
            format!(
                "saved {}: {} marked, {} unmarked",
                format_session_date(report.date),
                report.marked,
                report.unmarked
            )
        }
        "report" => {
            let predicates = parse_filter_args(&args)?;
            let entries = store.list_attendance(&predicates);
            if entries.is_empty() {
                return Ok(Outcome::Print(
                    "no records match the current filters".to_string(),
                ));
            }
            entries
                .iter()
                .map(|entry| {
                    format!(
                        "{} {:<20} {:<8} {}",
                        format_session_date(entry.record.date),
                        entry.student_name,
                        entry.status(),
                        entry.course_label()
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        "summary" => {
            let predicates = parse_filter_args(&args)?;
            let summary = store.summarize_attendance(&predicates);
            summary
                .buckets()
                .iter()
                .map(|bucket| format!("{}: {}", bucket.status, bucket.count))
                .collect::<Vec<_>>()
                .join("\n")
        }
        "dashboard" => {
            let date = match args.as_slice() {
                [] => today,
                [date] => parse_date_input(date)?,
                _ => return Err(usage("dashboard [YYYY-MM-DD]")),
            };
            let stats = store.dashboard(date);
            let rate = stats
                .attendance_rate
                .map_or("n/a".to_string(), |rate| format!("{rate}%"));
            format!(
                "students: {}\nactive courses: {}\nattendance {}: {}",
                stats.total_students,
                stats.active_courses,
                format_session_date(stats.date),
                rate
            )
        }
        other => return Err(usage(&format!("unknown command `{other}`; try `help`"))),
    };
    Ok(Outcome::Print(output))
}

fn usage(message: &str) -> CommandError {
    CommandError::Usage(format!("usage: {message}"))
}

/// Parses `key=value` filter words.
///
/// `name=` keeps consuming words until the next `course=` or `status=`, so
/// names with spaces need no quoting. Word gaps collapse to one space.
fn parse_filter_args(args: &[&str]) -> Result<AttendanceFilter, CommandError> {
    let mut predicates = AttendanceFilter::all();
    let mut name_words: Option<Vec<&str>> = None;
    let mut in_name = false;
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            match name_words.as_mut() {
                Some(words) if in_name => words.push(arg),
                _ => return Err(usage("filters are name=.. course=.. status=..")),
            }
            continue;
        };
        in_name = key == "name";
        match key {
            "name" => name_words = Some(vec![value]),
            "course" => predicates.course = parse_course_filter(value)?,
            "status" => predicates.status = parse_status_filter(value)?,
            other => return Err(usage(&format!("unknown filter `{other}`"))),
        }
    }
    predicates.name = name_words.map(|words| {
        words
            .into_iter()
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    });
    Ok(predicates)
}

fn render_students(students: &[Student]) -> String {
    if students.is_empty() {
        return "no students".to_string();
    }
    students
        .iter()
        .map(|student| {
            format!(
                "{:<6} {:<20} {:<24} {} {}",
                student.id.as_str(),
                student.name,
                student.contact,
                format_session_date(student.registration_date),
                student.course
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
