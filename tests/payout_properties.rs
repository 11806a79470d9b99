use proptest::prelude::*;
use tutor_payout::core::{fees, payout, revenue};
use tutor_payout::{PayoutEngine, PayoutPolicy, PricingPlan, Student, Tutor};

fn student_strategy() -> impl Strategy<Value = Student> {
    (0usize..PricingPlan::COUNT, 0u32..=8, any::<bool>()).prop_map(|(plan, payments, biweekly)| {
        let plan = PricingPlan::ALL[plan];
        let cost = PayoutPolicy::default().pricing.weekly_cost(plan, biweekly);
        Student::new(format!("{}-student", plan), cost, payments, biweekly).unwrap()
    })
}

fn roster_strategy() -> impl Strategy<Value = Vec<Tutor>> {
    prop::collection::vec(prop::collection::vec(student_strategy(), 0..=5), 1..=6).prop_map(
        |rosters| {
            rosters
                .into_iter()
                .enumerate()
                .map(|(i, students)| {
                    // The first tutor is always the manager
                    let name = if i == 0 {
                        "Jarett".to_string()
                    } else {
                        format!("Tutor{}", i)
                    };
                    Tutor::new(name, students)
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn totals_ignore_tutor_and_student_order(tutors in roster_strategy(), seed in any::<u64>()) {
        let mut shuffled = tutors.clone();
        shuffled.reverse();
        for tutor in shuffled.iter_mut() {
            let len = tutor.students.len();
            if len > 0 {
                tutor.students.rotate_left((seed as usize) % len);
            }
        }

        prop_assert!((revenue::team_revenue(&tutors) - revenue::team_revenue(&shuffled)).abs() < 1e-6);
        prop_assert_eq!(revenue::team_hours(&tutors), revenue::team_hours(&shuffled));
        prop_assert_eq!(revenue::client_count(&tutors), revenue::client_count(&shuffled));
    }

    #[test]
    fn gross_payouts_sum_to_distributable(tutors in roster_strategy()) {
        prop_assume!(revenue::team_hours(&tutors) > 0);
        let policy = PayoutPolicy::default();
        let breakdown = fees::compute(&tutors, &policy);
        let gross = payout::gross_payouts(&tutors, breakdown.distributable).unwrap();

        let total: f64 = gross.iter().sum();
        let bound = tutors.len() as f64 * 0.005 + 1e-6;
        prop_assert!((total - breakdown.distributable).abs() <= bound);
    }

    #[test]
    fn payouts_and_donations_reconcile(tutors in roster_strategy()) {
        prop_assume!(revenue::team_hours(&tutors) > 0);
        let engine = PayoutEngine::new(PayoutPolicy::default());

        let report = engine.compute(&tutors).unwrap();
        prop_assert!(report.warnings.is_empty());
        let paid = report.total_net() + report.summary.total_donations;
        prop_assert!((paid - report.summary.after_fees).abs() <= 0.05);
    }
}
