use crate::models::{CgpaResult, GradeDetail, GradeLookup, LetterGrade, Subject};

// Lower bound (inclusive), grade point and letter, highest band first.
pub const GRADE_TABLE: [(f64, f64, LetterGrade); 8] = [
    (85.0, 4.00, LetterGrade::APlus),
    (80.0, 3.70, LetterGrade::A),
    (75.0, 3.30, LetterGrade::BPlus),
    (70.0, 3.00, LetterGrade::B),
    (65.0, 2.70, LetterGrade::CPlus),
    (60.0, 2.30, LetterGrade::C),
    (55.0, 2.00, LetterGrade::DPlus),
    (50.0, 1.00, LetterGrade::D),
];

pub const FAILING_GRADE: GradeLookup = GradeLookup {
    grade_point: 0.00,
    letter_grade: LetterGrade::F,
};

// Maps a percentage to its grade point and letter. First matching row wins,
// anything below 50 (including NaN) is a fail. Bounds are the caller's concern.
pub fn grade_for(marks: f64) -> GradeLookup {
    GRADE_TABLE
        .iter()
        .find(|(min, _, _)| marks >= *min)
        .map(|&(_, grade_point, letter_grade)| GradeLookup { grade_point, letter_grade })
        .unwrap_or(FAILING_GRADE)
}

// Letter only, for callers that don't need the grade point.
pub fn letter_grade(marks: f64) -> LetterGrade {
    grade_for(marks).letter_grade
}

// Computes the credit-hour-weighted average of grade points.
// Subjects without credit hours are skipped entirely, details keep input order.
pub fn calculate_cgpa(subjects: &[Subject]) -> CgpaResult {
    let mut total_quality_points = 0.0;
    let mut total_credit_hours = 0.0;
    let mut grade_details = Vec::new();

    for subject in subjects.iter().filter(|s| s.credit_hours > 0.0) {
        let GradeLookup { grade_point, letter_grade } = grade_for(subject.marks);

        total_quality_points += grade_point * subject.credit_hours;
        total_credit_hours += subject.credit_hours;

        grade_details.push(GradeDetail {
            credit_hours: subject.credit_hours,
            marks: subject.marks,
            letter_grade,
            grade_point,
        });
    }

    let cgpa = if total_credit_hours > 0.0 {
        total_quality_points / total_credit_hours
    } else {
        0.0
    };

    CgpaResult {
        cgpa,
        total_credit_hours,
        grade_details,
    }
}
