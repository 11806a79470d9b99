//! Revenue and hour totals. Amounts accumulate unrounded.

use crate::core::Tutor;

pub fn tutor_revenue(tutor: &Tutor) -> f64 {
    tutor.students.iter().map(|s| s.billed()).sum()
}

pub fn team_revenue(tutors: &[Tutor]) -> f64 {
    tutors.iter().map(tutor_revenue).sum()
}

pub fn tutor_hours(tutor: &Tutor) -> u64 {
    tutor.students.iter().map(|s| s.hours()).sum()
}

pub fn team_hours(tutors: &[Tutor]) -> u64 {
    tutors.iter().map(tutor_hours).sum()
}

/// Every enrolled student is one card on file, whether or not they paid this cycle.
pub fn client_count(tutors: &[Tutor]) -> usize {
    tutors.iter().map(Tutor::student_count).sum()
}
