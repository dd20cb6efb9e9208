//! Age-band participation and contribution patterns

use serde::{Deserialize, Serialize};

use crate::heuristics::AGE_BANDS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeBandInsight {
    pub age_band: String,
    pub participation_pct: f64,
    pub avg_contribution_pct: f64,
    /// The workforce average age falls in this band
    pub is_workforce_band: bool,
}

/// Reference pattern per age band, lifted for the band holding the
/// workforce's average age
pub fn demographic_insights(avg_age_years: u32) -> Vec<AgeBandInsight> {
    AGE_BANDS
        .iter()
        .map(|&(label, lower, upper, in_band, otherwise, contribution)| {
            let is_workforce_band = avg_age_years >= lower && avg_age_years < upper;
            AgeBandInsight {
                age_band: label.to_string(),
                participation_pct: if is_workforce_band { in_band } else { otherwise },
                avg_contribution_pct: contribution,
                is_workforce_band,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workforce_band_lifted() {
        let insights = demographic_insights(42);
        assert_eq!(insights.len(), 5);

        let forties = &insights[2];
        assert_eq!(forties.age_band, "40-49");
        assert!(forties.is_workforce_band);
        assert_eq!(forties.participation_pct, 85.0);

        assert_eq!(insights[0].participation_pct, 35.0);
        assert_eq!(insights[4].participation_pct, 88.0);
        assert_eq!(insights.iter().filter(|i| i.is_workforce_band).count(), 1);
    }

    #[test]
    fn test_band_edges() {
        assert!(demographic_insights(29)[0].is_workforce_band);
        assert!(demographic_insights(30)[1].is_workforce_band);
        assert_eq!(demographic_insights(75)[4].participation_pct, 95.0);
    }
}
