use crate::utils::error::{PayoutError, Result};

/// True when the non-zero net payouts plus `total_donations` land within
/// `tolerance` of `expected`.
pub fn approximate_sum(net_payouts: &[f64], total_donations: f64, expected: f64, tolerance: f64) -> bool {
    let actual = paid_out(net_payouts, total_donations);
    (actual - expected).abs() <= tolerance
}

pub fn paid_out(net_payouts: &[f64], total_donations: f64) -> f64 {
    net_payouts.iter().filter(|&&net| net != 0.0).sum::<f64>() + total_donations
}

/// Payouts and donations must account for all revenue left after transaction fees.
pub fn reconcile(net_payouts: &[f64], total_donations: f64, expected: f64, tolerance: f64) -> Result<()> {
    if approximate_sum(net_payouts, total_donations, expected, tolerance) {
        return Ok(());
    }

    let actual = paid_out(net_payouts, total_donations);
    tracing::error!(
        "Payouts do not reconcile: paid out {:.4}, expected {:.4}",
        actual,
        expected
    );
    Err(PayoutError::Reconciliation {
        expected,
        actual,
        tolerance,
    })
}
