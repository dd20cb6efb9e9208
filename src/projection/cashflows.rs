//! Year-by-year output structures for projections

use serde::{Deserialize, Serialize};

/// One projection year for the average participant account
///
/// `ending_balance = starting_balance + contributions + investment_growth - fees`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub year: u32,
    pub starting_balance: f64,
    pub contributions: f64,
    pub investment_growth: f64,
    pub fees: f64,
    pub ending_balance: f64,
}

impl YearRecord {
    /// Year-0 snapshot: no flows, balance carried as-is
    pub fn snapshot(balance: f64) -> Self {
        Self {
            year: 0,
            starting_balance: balance,
            contributions: 0.0,
            investment_growth: 0.0,
            fees: 0.0,
            ending_balance: balance,
        }
    }
}

/// Sampled point for the balance chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub year: u32,
    pub balance: f64,
    pub starting_balance: f64,
    pub contributions: f64,
    pub growth: f64,
    pub fees: f64,
}

impl From<&YearRecord> for ChartPoint {
    fn from(record: &YearRecord) -> Self {
        Self {
            year: record.year,
            balance: record.ending_balance,
            starting_balance: record.starting_balance,
            contributions: record.contributions,
            growth: record.investment_growth,
            fees: record.fees,
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// One record per year, year 0 through the horizon
    pub annual: Vec<YearRecord>,

    /// Every fifth year plus the final year
    pub chart: Vec<ChartPoint>,

    /// Annualized growth of the balance over the horizon, in percent
    pub effective_return_pct: f64,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self {
            annual: Vec::new(),
            chart: Vec::new(),
            effective_return_pct: 0.0,
        }
    }

    /// Add a year record
    pub fn add_year(&mut self, record: YearRecord) {
        self.annual.push(record);
    }

    pub fn starting_balance(&self) -> f64 {
        self.annual.first().map(|r| r.starting_balance).unwrap_or(0.0)
    }

    pub fn final_balance(&self) -> f64 {
        self.annual.last().map(|r| r.ending_balance).unwrap_or(0.0)
    }

    /// Ending balance for a given year, if projected
    pub fn balance_at(&self, year: u32) -> Option<f64> {
        self.annual
            .iter()
            .find(|r| r.year == year)
            .map(|r| r.ending_balance)
    }

    /// Number of projected years after the initial snapshot
    pub fn horizon_years(&self) -> u32 {
        self.annual.last().map(|r| r.year).unwrap_or(0)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_contributions: f64 = self.annual.iter().map(|r| r.contributions).sum();
        let total_growth: f64 = self.annual.iter().map(|r| r.investment_growth).sum();
        let total_fees: f64 = self.annual.iter().map(|r| r.fees).sum();

        ProjectionSummary {
            years: self.horizon_years(),
            starting_balance: self.starting_balance(),
            total_contributions,
            total_growth,
            total_fees,
            final_balance: self.final_balance(),
            effective_return_pct: self.effective_return_pct,
        }
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub years: u32,
    pub starting_balance: f64,
    pub total_contributions: f64,
    pub total_growth: f64,
    pub total_fees: f64,
    pub final_balance: f64,
    pub effective_return_pct: f64,
}
