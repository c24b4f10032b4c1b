//! Real-world construction time comparison.
//!
//! A static fact derived from the catalog, independent of the live
//! animation: however far the race has progressed, the panel always states
//! the 10× relationship.

use crate::catalog::BuildingSpec;

/// Formatted real-world durations for one building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealWorldComparison {
    /// How long construction actually took.
    pub traditional: String,
    /// The same duration at a tenth of the time.
    pub flashblocks: String,
}

/// Build the comparison panel text for `spec`.
pub fn compare(spec: &BuildingSpec) -> RealWorldComparison {
    let months = spec.real_construction_months;
    RealWorldComparison {
        traditional: format_months(months),
        flashblocks: format_months(months / 10.0),
    }
}

/// Format a (possibly fractional) month count as "N years and M months",
/// omitting zero clauses and pluralizing per quantity.
pub fn format_months(months: f64) -> String {
    let mut years = (months / 12.0).floor() as u64;
    let mut rem = (months % 12.0).round() as u64;
    // round() can carry the remainder up to a full year (e.g. 23.8 months).
    if rem == 12 {
        years += 1;
        rem = 0;
    }

    match (years, rem) {
        (0, m) => format!("{m} month{}", plural(m)),
        (y, 0) => format!("{y} year{}", plural(y)),
        (y, m) => format!("{y} year{} and {m} month{}", plural(y), plural(m)),
    }
}

fn plural(n: u64) -> &'static str {
    if n == 1 { "" } else { "s" }
}
