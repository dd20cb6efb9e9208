//! Effective annual return over a projection

/// Annualized balance growth over `years`, in percent
///
/// Returns 0 when the starting balance or the period is not positive, and
/// -100 when the balance has been wiped out.
pub fn effective_return_pct(start_balance: f64, end_balance: f64, years: u32) -> f64 {
    if start_balance <= 0.0 || years == 0 {
        return 0.0;
    }
    if end_balance <= 0.0 {
        return -100.0;
    }
    ((end_balance / start_balance).powf(1.0 / years as f64) - 1.0) * 100.0
}
