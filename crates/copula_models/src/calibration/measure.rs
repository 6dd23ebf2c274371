//! Rank dependence measures.

use std::fmt;

/// Scalar dependence measure of a bivariate copula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DependenceMeasure {
    /// Kendall's tau, the concordance probability difference.
    KendallTau,
    /// Spearman's rho, the correlation of the ranks.
    SpearmanRho,
}

impl fmt::Display for DependenceMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependenceMeasure::KendallTau => f.write_str("Kendall's tau"),
            DependenceMeasure::SpearmanRho => f.write_str("Spearman's rho"),
        }
    }
}
