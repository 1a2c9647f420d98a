//! Financial record model
//!
//! One `FinancialRecord` per account/unit/scenario/year, carrying twelve
//! nullable monthly amounts. Quarterly and annual rollups are derived from
//! the months exactly once, at construction, and are never stored
//! independently of them.

use serde::Serialize;

use super::money::Money;

/// Calendar month, in the order of the source columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in column order
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Zero-based index into the months array
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column header label; exact-match contract with the data source
    pub const fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// The quarter this month belongs to
    pub const fn quarter(self) -> Quarter {
        match self {
            Month::Jan | Month::Feb | Month::Mar => Quarter::Q1,
            Month::Apr | Month::May | Month::Jun => Quarter::Q2,
            Month::Jul | Month::Aug | Month::Sep => Quarter::Q3,
            Month::Oct | Month::Nov | Month::Dec => Quarter::Q4,
        }
    }
}

/// Fiscal quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// All quarters in Q1..Q4 order
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// Zero-based index into the quarters array
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }

    /// The three constituent months of this quarter
    pub const fn months(self) -> [Month; 3] {
        match self {
            Quarter::Q1 => [Month::Jan, Month::Feb, Month::Mar],
            Quarter::Q2 => [Month::Apr, Month::May, Month::Jun],
            Quarter::Q3 => [Month::Jul, Month::Aug, Month::Sep],
            Quarter::Q4 => [Month::Oct, Month::Nov, Month::Dec],
        }
    }
}

/// One financial line item: an account/year/scenario/unit row with monthly
/// values and the rollups derived from them
#[derive(Debug, Clone, Serialize)]
pub struct FinancialRecord {
    /// Category label, e.g. "Sales" or "Cost of Goods Sold"
    pub account: String,
    /// Fiscal year
    pub year: i32,
    /// Data variant tag (actual, budget, ...); carried through, never filtered on
    pub scenario: String,
    /// Organizational segment the record belongs to
    pub business_unit: String,
    /// Currency code
    pub currency: String,
    /// Monthly amounts; `None` marks a missing value (summed as zero)
    months: [Option<Money>; 12],
    /// Derived quarterly sums, Q1..Q4
    quarters: [Money; 4],
    /// Derived annual total (sum of the four quarters)
    annual_total: Money,
}

impl FinancialRecord {
    /// Build a record, computing the quarterly and annual rollups from the
    /// monthly values. Null months contribute zero to the sums.
    pub fn new(
        account: impl Into<String>,
        year: i32,
        scenario: impl Into<String>,
        business_unit: impl Into<String>,
        currency: impl Into<String>,
        months: [Option<Money>; 12],
    ) -> Self {
        let mut quarters = [Money::zero(); 4];
        for month in Month::ALL {
            if let Some(value) = months[month.index()] {
                quarters[month.quarter().index()] += value;
            }
        }
        let annual_total = quarters.iter().copied().sum();

        Self {
            account: account.into(),
            year,
            scenario: scenario.into(),
            business_unit: business_unit.into(),
            currency: currency.into(),
            months,
            quarters,
            annual_total,
        }
    }

    /// Value for a single month, `None` when the source cell was blank
    pub fn month(&self, month: Month) -> Option<Money> {
        self.months[month.index()]
    }

    /// Derived sum for a quarter
    pub fn quarter(&self, quarter: Quarter) -> Money {
        self.quarters[quarter.index()]
    }

    /// Derived quarterly sums in Q1..Q4 order
    pub fn quarters(&self) -> [Money; 4] {
        self.quarters
    }

    /// Derived annual total
    pub fn annual_total(&self) -> Money {
        self.annual_total
    }
}
