use crate::config::policy::PayoutPolicy;
use crate::core::revenue;
use crate::core::{PayoutWarning, Tutor};
use crate::domain::model::TutorPayout;
use crate::utils::error::{PayoutError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub payouts: Vec<TutorPayout>,
    pub dividend_pool: f64,
    pub management_matches: usize,
    pub warnings: Vec<PayoutWarning>,
}

/// Round half away from zero to the nearest cent.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Each tutor's share of `distributable`, proportional to hours and rounded to cents.
pub fn gross_payouts(tutors: &[Tutor], distributable: f64) -> Result<Vec<f64>> {
    let team_hours = revenue::team_hours(tutors);
    if team_hours == 0 {
        return Err(PayoutError::NoHoursWorked);
    }

    Ok(tutors
        .iter()
        .map(|tutor| {
            let share = revenue::tutor_hours(tutor) as f64 / team_hours as f64;
            round_cents(distributable * share)
        })
        .collect())
}

/// Management fee collected from every tutor outside the management team.
pub fn management_dividend(tutors: &[Tutor], gross: &[f64], policy: &PayoutPolicy) -> f64 {
    tutors
        .iter()
        .zip(gross)
        .filter(|(tutor, _)| !policy.is_management(&tutor.name))
        .map(|(_, gross)| gross * policy.management_fee_percent / 100.0)
        .sum()
}

pub fn allocate(tutors: &[Tutor], distributable: f64, policy: &PayoutPolicy) -> Result<Allocation> {
    let gross = gross_payouts(tutors, distributable)?;
    let dividend_pool = management_dividend(tutors, &gross, policy);
    let individual_dividend = dividend_pool / policy.management_team_size() as f64;

    let mut management_matches = 0;
    let payouts: Vec<TutorPayout> = tutors
        .iter()
        .zip(&gross)
        .map(|(tutor, &gross)| {
            let management = policy.is_management(&tutor.name);
            let net = if management {
                management_matches += 1;
                gross + individual_dividend
            } else {
                gross * (100.0 - policy.management_fee_percent) / 100.0
            };
            TutorPayout {
                name: tutor.name.clone(),
                hours: revenue::tutor_hours(tutor),
                gross,
                net,
                management,
            }
        })
        .collect();

    let mut warnings = Vec::new();
    if management_matches != policy.management_team_size() {
        tracing::warn!(
            "Management team size incorrect: expected {}, matched {}",
            policy.management_team_size(),
            management_matches
        );
        warnings.push(PayoutWarning::ManagementRosterMismatch {
            expected: policy.management_team_size(),
            found: management_matches,
        });
    }

    Ok(Allocation {
        payouts,
        dividend_pool,
        management_matches,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Student;

    fn tutor(name: &str, payments: u32, biweekly: bool) -> Tutor {
        Tutor::new(
            name,
            vec![Student::new(format!("{}'s student", name), 59.0, payments, biweekly).unwrap()],
        )
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(143.6172), 143.62);
        assert_eq!(round_cents(10.125), 10.13);
        assert_eq!(round_cents(10.0), 10.0);
    }

    #[test]
    fn test_gross_split_by_hours() {
        let tutors = vec![tutor("Jarett", 3, false), tutor("Paul", 1, false)];
        let gross = gross_payouts(&tutors, 100.0).unwrap();
        assert_eq!(gross, vec![75.0, 25.0]);
    }

    #[test]
    fn test_biweekly_counts_double_hours() {
        let tutors = vec![tutor("Jarett", 1, false), tutor("Paul", 1, true)];
        let gross = gross_payouts(&tutors, 90.0).unwrap();
        assert_eq!(gross, vec![30.0, 60.0]);
    }

    #[test]
    fn test_no_hours_is_an_error() {
        let tutors = vec![tutor("Jarett", 0, false)];
        assert!(matches!(
            gross_payouts(&tutors, 100.0),
            Err(PayoutError::NoHoursWorked)
        ));
        assert!(matches!(
            gross_payouts(&[], 100.0),
            Err(PayoutError::NoHoursWorked)
        ));
    }

    #[test]
    fn test_dividend_goes_to_management() {
        let policy = PayoutPolicy::default();
        let tutors = vec![tutor("jarett", 1, false), tutor("Paul", 1, false)];
        let allocation = allocate(&tutors, 200.0, &policy).unwrap();

        assert_eq!(allocation.management_matches, 1);
        assert!(allocation.warnings.is_empty());
        assert!((allocation.dividend_pool - 10.0).abs() < 1e-9);

        let jarett = &allocation.payouts[0];
        assert!(jarett.management);
        assert!((jarett.net - 110.0).abs() < 1e-9);

        let paul = &allocation.payouts[1];
        assert!(!paul.management);
        assert!((paul.net - 90.0).abs() < 1e-9);

        let total: f64 = allocation.payouts.iter().map(|p| p.net).sum();
        assert!((total - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_manager_is_reported() {
        let policy = PayoutPolicy::default();
        let tutors = vec![tutor("Alice", 4, false)];
        let allocation = allocate(&tutors, 143.62, &policy).unwrap();

        assert_eq!(allocation.management_matches, 0);
        assert_eq!(
            allocation.warnings,
            vec![PayoutWarning::ManagementRosterMismatch {
                expected: 1,
                found: 0
            }]
        );
        assert!((allocation.payouts[0].net - 129.258).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_manager_is_reported() {
        let policy = PayoutPolicy::default();
        let tutors = vec![tutor("Jarett", 1, false), tutor("JARETT", 1, false)];
        let allocation = allocate(&tutors, 100.0, &policy).unwrap();
        assert_eq!(allocation.management_matches, 2);
        assert_eq!(allocation.warnings.len(), 1);
    }
}
