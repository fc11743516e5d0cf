pub mod models;
pub mod utils;

pub use models::{CgpaResult, GradeBand, GradeDetail, GradeLookup, LetterGrade, Subject};
pub use utils::grading::{calculate_cgpa, grade_for, letter_grade};
