//! WAM and GPA aggregation
//!
//! Both averages are recomputed from scratch on every call. Units contribute
//! through the [`WamInput`] and [`GpaInput`] traits so committed records and
//! hypothetical what-if entries can be mixed in one total.

use super::grade::GradeLetter;
use super::models::unit_code::credit_weight_for_year;

/// Display value of the WAM when no weighted credit exists
pub const EMPTY_WAM: &str = "00.000";

/// Display value of the GPA when no credit exists
pub const EMPTY_GPA: &str = "0.000";

/// Anything that contributes a mark to the WAM
pub trait WamInput {
    /// Final mark (0-100)
    fn mark(&self) -> u8;
    /// Year level digit
    fn year_level(&self) -> u8;
    /// Credit points
    fn credit_points(&self) -> u8;

    /// Credit weight times credit points
    fn wam_weight(&self) -> f64 {
        credit_weight_for_year(self.year_level()) * f64::from(self.credit_points())
    }
}

/// Anything that contributes a grade to the GPA
pub trait GpaInput {
    /// Grade awarded
    fn grade(&self) -> GradeLetter;
    /// Credit points
    fn credit_points(&self) -> u8;
}

/// Running WAM sums
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WamTotals {
    /// Σ(mark × weight)
    pub weighted_marks: f64,
    /// Σ(weight)
    pub weighted_credits: f64,
}

impl WamTotals {
    /// Sum the contributions of `units`
    pub fn from_units<'a, T, I>(units: I) -> Self
    where
        T: WamInput + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut totals = Self::default();
        totals.extend(units);
        totals
    }

    /// Add the contributions of `units`
    pub fn extend<'a, T, I>(&mut self, units: I)
    where
        T: WamInput + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for unit in units {
            let weight = unit.wam_weight();
            self.weighted_marks += f64::from(unit.mark()) * weight;
            self.weighted_credits += weight;
        }
    }

    /// Weighted average, `None` when nothing is weighted
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        (self.weighted_credits > 0.0).then(|| self.weighted_marks / self.weighted_credits)
    }

    /// Fixed-width display value, e.g. `06.250`
    #[must_use]
    pub fn display(&self) -> String {
        self.average()
            .map_or_else(|| EMPTY_WAM.to_string(), |wam| format!("{wam:06.3}"))
    }
}

/// Running GPA sums
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GpaTotals {
    /// Σ(grade point × credit points)
    pub grade_points: f64,
    /// Σ(credit points)
    pub credits: u32,
}

impl GpaTotals {
    /// Sum the contributions of `units`
    pub fn from_units<'a, T, I>(units: I) -> Self
    where
        T: GpaInput + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut totals = Self::default();
        totals.extend(units);
        totals
    }

    /// Add the contributions of `units`
    pub fn extend<'a, T, I>(&mut self, units: I)
    where
        T: GpaInput + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for unit in units {
            let credits = unit.credit_points();
            self.grade_points += unit.grade().grade_point() * f64::from(credits);
            self.credits += u32::from(credits);
        }
    }

    /// Credit-weighted average, `None` when there is no credit
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        (self.credits > 0).then(|| self.grade_points / f64::from(self.credits))
    }

    /// Fixed-width display value, e.g. `2.667`
    #[must_use]
    pub fn display(&self) -> String {
        self.average()
            .map_or_else(|| EMPTY_GPA.to_string(), |gpa| format!("{gpa:05.3}"))
    }
}

/// Weighted average mark of `units`, formatted to three decimals
pub fn wam<'a, T, I>(units: I) -> String
where
    T: WamInput + 'a,
    I: IntoIterator<Item = &'a T>,
{
    WamTotals::from_units(units).display()
}

/// Grade point average of `units`, formatted to three decimals
pub fn gpa<'a, T, I>(units: I) -> String
where
    T: GpaInput + 'a,
    I: IntoIterator<Item = &'a T>,
{
    GpaTotals::from_units(units).display()
}
