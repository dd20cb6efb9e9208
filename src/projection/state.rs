//! Projection state tracking for an average participant account

/// State of the account at a point in time during projection
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    /// Current projection year (0 = initial snapshot)
    pub year: u32,

    /// Running account balance
    pub balance: f64,

    /// Employee contribution rate in effect this year (whole percent)
    pub employee_rate_pct: f64,

    /// Contributions accumulated in the current year
    pub ytd_contributions: f64,

    /// Investment growth accumulated in the current year
    pub ytd_growth: f64,
}

impl ProjectionState {
    pub fn new(starting_balance: f64, employee_rate_pct: f64) -> Self {
        Self {
            year: 0,
            balance: starting_balance,
            employee_rate_pct,
            ytd_contributions: 0.0,
            ytd_growth: 0.0,
        }
    }

    /// Advance to the next projection year and reset year-to-date totals
    pub fn advance_year(&mut self) {
        self.year += 1;
        self.ytd_contributions = 0.0;
        self.ytd_growth = 0.0;
    }

    /// One-point annual auto-escalation, never past the ceiling
    pub fn escalate(&mut self, ceiling_pct: f64) {
        if self.employee_rate_pct < ceiling_pct {
            self.employee_rate_pct = (self.employee_rate_pct + 1.0).min(ceiling_pct);
        }
    }

    /// Deposit a month's contributions
    pub fn contribute(&mut self, amount: f64) {
        self.balance += amount;
        self.ytd_contributions += amount;
    }

    /// Credit one month of investment return
    pub fn credit_return(&mut self, monthly_rate: f64) {
        let growth = self.balance * monthly_rate;
        self.balance += growth;
        self.ytd_growth += growth;
    }
}
