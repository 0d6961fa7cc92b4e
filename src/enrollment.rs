//! Simulated enrollment.
//!
//! Nothing is recorded: enrolling only looks the program up and echoes it
//! back. A missing id is an ordinary outcome, not an error.

use crate::catalog::Catalog;
use crate::types::Program;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnrollmentOutcome<'a> {
    Enrolled(&'a Program),
    NotFound(i64),
}

pub fn enroll(catalog: &Catalog, program_id: i64) -> EnrollmentOutcome<'_> {
    match catalog.find(program_id) {
        Some(program) => {
            tracing::info!(program_id, "simulated enrollment");
            EnrollmentOutcome::Enrolled(program)
        }
        None => {
            tracing::debug!(program_id, "enrollment for unknown program");
            EnrollmentOutcome::NotFound(program_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[{"id": 3, "type": "nanodegree", "title": "تحليل البيانات", "summary": "s",
                 "price": "100", "additional_price": "20",
                 "organization": {"id": "o", "name": "مسك", "logo": "l.png"}}]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_enroll_existing_returns_same_program() {
        let catalog = catalog();
        match enroll(&catalog, 3) {
            EnrollmentOutcome::Enrolled(program) => {
                assert!(std::ptr::eq(program, &catalog.programs()[0]));
                assert_eq!(program, &catalog.programs()[0]);
            }
            other => panic!("expected enrollment, got {other:?}"),
        }
    }

    #[test]
    fn test_enroll_missing_is_not_found() {
        let catalog = catalog();
        assert_eq!(enroll(&catalog, 99), EnrollmentOutcome::NotFound(99));
    }
}
