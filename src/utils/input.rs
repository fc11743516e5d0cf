use std::fs;
use std::path::Path;
use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use crate::models::Subject;
use crate::utils::config::Config;

pub const MAX_MARKS: f64 = 100.0;
pub const MAX_CREDIT_HOURS: f64 = 4.0;
pub const MAX_SUBJECTS: usize = 50;

// Accepts `3:90`, `3x90`, `3/90`, `3,90` or `3@90`, decimals allowed on both sides.
const SUBJECT_PATTERN: &str = r"^\s*([0-9]+(?:\.[0-9]+)?)\s*[:x/,@]\s*([0-9]+(?:\.[0-9]+)?)\s*$";

pub const USAGE: &str = "Usage: cgpa [--json] [FILE | CREDIT:MARKS ...]";
pub const JSON_FLAG: &str = "--json";

// Reads a JSON array of `{ "creditHours": .., "marks": .. }` objects.
pub fn load_subjects(path: &Path) -> Result<Vec<Subject>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read subjects from {}", path.display()))?;
    let subjects: Vec<Subject> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse subjects in {}", path.display()))?;
    info!("Loaded {} subjects from {}", subjects.len(), path.display());
    Ok(subjects)
}

// Parses every argument as a CREDIT:MARKS pair, failing on the first malformed one.
pub fn parse_subject_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<Subject>> {
    let re = Regex::new(SUBJECT_PATTERN).context("Failed to compile subject pattern")?;
    args.iter()
        .map(|arg| parse_subject_with(&re, arg.as_ref()))
        .collect()
}

// Removes every `--json` from the arguments, returning whether any was present.
pub fn take_json_flag(args: &mut Vec<String>) -> bool {
    let before = args.len();
    args.retain(|a| a != JSON_FLAG);
    args.len() != before
}

// A single existing file is read as JSON, anything else is a list of CREDIT:MARKS pairs.
// Without arguments, falls back to the configured subjects file.
pub fn read_subjects(args: &[String], config: &Config) -> Result<Vec<Subject>> {
    match args {
        [] => match &config.subjects_file {
            Some(path) => load_subjects(path),
            None => Err(anyhow!("No subjects provided\n{}", USAGE)),
        },
        [single] if Path::new(single).is_file() => load_subjects(Path::new(single)),
        pairs => parse_subject_args(pairs).context(USAGE),
    }
}

// Splits one argument into credit hours and marks using the compiled pattern.
fn parse_subject_with(re: &Regex, arg: &str) -> Result<Subject> {
    let captures = re
        .captures(arg)
        .ok_or_else(|| anyhow!("Invalid subject '{}', expected CREDIT:MARKS (e.g. 3:85)", arg))?;
    let credit_hours: f64 = captures[1]
        .parse()
        .with_context(|| format!("Invalid credit hours in '{}'", arg))?;
    let marks: f64 = captures[2]
        .parse()
        .with_context(|| format!("Invalid marks in '{}'", arg))?;
    debug!("Parsed subject '{}' as {} credit hours, {} marks", arg, credit_hours, marks);
    Ok(Subject::new(credit_hours, marks))
}

// NaN becomes 0, everything else is pinned to [0, max].
fn clamp_value(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

// Marks are a percentage.
pub fn clamp_marks(marks: f64) -> f64 {
    clamp_value(marks, MAX_MARKS)
}

// No subject carries more than four credit hours.
pub fn clamp_credit_hours(credit_hours: f64) -> f64 {
    clamp_value(credit_hours, MAX_CREDIT_HOURS)
}

// Brings subjects within the bounds the calculator accepts: at most MAX_SUBJECTS
// entries, marks in [0, 100], credit hours in [0, 4]. Every adjustment is logged.
pub fn sanitize_subjects(mut subjects: Vec<Subject>) -> Vec<Subject> {
    if subjects.len() > MAX_SUBJECTS {
        warn!(
            "{} subjects provided, only the first {} are kept",
            subjects.len(),
            MAX_SUBJECTS
        );
        subjects.truncate(MAX_SUBJECTS);
    }

    for (index, subject) in subjects.iter_mut().enumerate() {
        let marks = clamp_marks(subject.marks);
        if marks != subject.marks {
            warn!("Subject {} marks {} clamped to {}", index + 1, subject.marks, marks);
            subject.marks = marks;
        }
        let credit_hours = clamp_credit_hours(subject.credit_hours);
        if credit_hours != subject.credit_hours {
            warn!(
                "Subject {} credit hours {} clamped to {}",
                index + 1,
                subject.credit_hours,
                credit_hours
            );
            subject.credit_hours = credit_hours;
        }
    }

    subjects
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse_subject_arg(arg: &str) -> Result<Subject> {
        parse_subject_args(&[arg]).map(|subjects| subjects[0])
    }

    fn subjects_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        file
    }

    #[test]
    fn parses_all_separators() {
        for arg in ["3:90", "3x90", "3/90", "3,90", "3@90", " 3 : 90 "] {
            assert_eq!(parse_subject_arg(arg).unwrap(), Subject::new(3.0, 90.0), "{}", arg);
        }
    }

    #[test]
    fn parses_decimals() {
        assert_eq!(parse_subject_arg("1.5:72.25").unwrap(), Subject::new(1.5, 72.25));
    }

    #[test]
    fn rejects_malformed_subjects() {
        for arg in ["", "3", "3:", ":90", "three:90", "3:90:1", "-1:90"] {
            assert!(parse_subject_arg(arg).is_err(), "{}", arg);
        }
    }

    #[test]
    fn non_ascii_digits_are_malformed() {
        let err = parse_subject_arg("٣:٩٠").unwrap_err();
        assert!(err.to_string().contains("expected CREDIT:MARKS"));
    }

    #[test]
    fn one_bad_argument_fails_the_batch() {
        let err = parse_subject_args(&["3:90", "oops"]).unwrap_err();
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn clamps_like_the_form() {
        assert_eq!(clamp_marks(120.0), 100.0);
        assert_eq!(clamp_marks(-3.0), 0.0);
        assert_eq!(clamp_marks(f64::NAN), 0.0);
        assert_eq!(clamp_marks(67.5), 67.5);
        assert_eq!(clamp_credit_hours(6.0), 4.0);
        assert_eq!(clamp_credit_hours(-1.0), 0.0);
        assert_eq!(clamp_credit_hours(3.0), 3.0);
    }

    #[test]
    fn sanitize_caps_subject_count() {
        let subjects = vec![Subject::new(3.0, 70.0); MAX_SUBJECTS + 7];
        assert_eq!(sanitize_subjects(subjects).len(), MAX_SUBJECTS);
    }

    #[test]
    fn sanitize_clamps_each_subject() {
        let cleaned = sanitize_subjects(vec![Subject::new(9.0, 150.0), Subject::new(2.0, 64.0)]);
        assert_eq!(cleaned, vec![Subject::new(4.0, 100.0), Subject::new(2.0, 64.0)]);
    }

    #[test]
    fn loads_camel_case_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"creditHours": 3, "marks": 90}}, {{"creditHours": 0, "marks": 50.5}}]"#).unwrap();

        let subjects = load_subjects(file.path()).unwrap();
        assert_eq!(subjects, vec![Subject::new(3.0, 90.0), Subject::new(0.0, 50.5)]);
    }

    #[test]
    fn load_reports_the_path_on_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_subjects(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse subjects"));
    }

    #[test]
    fn single_file_argument_is_read_as_json() {
        let file = subjects_file(r#"[{"creditHours": 2, "marks": 81}]"#);
        let args = vec![file.path().display().to_string()];

        let subjects = read_subjects(&args, &Config::default()).unwrap();
        assert_eq!(subjects, vec![Subject::new(2.0, 81.0)]);
    }

    #[test]
    fn other_arguments_are_pairs() {
        let args = vec!["3:90".to_string(), "1x55".to_string()];

        let subjects = read_subjects(&args, &Config::default()).unwrap();
        assert_eq!(subjects, vec![Subject::new(3.0, 90.0), Subject::new(1.0, 55.0)]);
    }

    #[test]
    fn no_arguments_uses_configured_file() {
        let file = subjects_file(r#"[{"creditHours": 4, "marks": 66}]"#);
        let config = Config {
            subjects_file: Some(file.path().to_path_buf()),
            ..Config::default()
        };

        let subjects = read_subjects(&[], &config).unwrap();
        assert_eq!(subjects, vec![Subject::new(4.0, 66.0)]);
    }

    #[test]
    fn no_arguments_and_no_file_is_an_error() {
        let err = read_subjects(&[], &Config::default()).unwrap_err();
        assert!(err.to_string().contains("No subjects provided"));
    }

    #[test]
    fn missing_single_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = vec![dir.path().join("absent.json").display().to_string()];

        assert!(read_subjects(&args, &Config::default()).is_err());
    }

    #[test]
    fn json_flag_is_removed_everywhere() {
        let mut args: Vec<String> = ["--json", "3:90", "--json"].iter().map(|a| a.to_string()).collect();

        assert!(take_json_flag(&mut args));
        assert_eq!(args, vec!["3:90".to_string()]);
        assert!(!take_json_flag(&mut args));
    }
}
