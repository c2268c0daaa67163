//! Core employee record type for payroll.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Decimal exponents outside `[MIN_PLAIN_EXPONENT, MAX_PLAIN_EXPONENT)` print
/// in scientific form.
const MIN_PLAIN_EXPONENT: i32 = -4;
const MAX_PLAIN_EXPONENT: i32 = 16;

/// A single payroll record.
///
/// The registration number is the record's key within a [`crate::Roster`];
/// it is caller-supplied and may be any integer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Registration number ("matrícula").
    pub registration: i64,
    /// Current salary.
    pub salary: f64,
}

impl Employee {
    /// Create a new record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveSalary`] unless `salary` is strictly positive.
    pub fn new(registration: i64, salary: f64) -> Result<Self> {
        if !is_positive(salary) {
            return Err(Error::NonPositiveSalary { salary });
        }
        Ok(Self {
            registration,
            salary,
        })
    }

    /// Raise the salary by `percent` percent and return the new salary.
    ///
    /// Repeated raises compound. Negative percentages lower the salary and
    /// nothing keeps it positive afterwards.
    pub fn raise_salary(&mut self, percent: f64) -> f64 {
        self.salary *= 1.0 + percent / 100.0;
        self.salary
    }
}

/// Whether a salary value is acceptable for a new record.
#[must_use]
pub fn is_positive(salary: f64) -> bool {
    salary > 0.0
}

/// Format a salary the way the record table shows it.
///
/// Uses the shortest digits that round-trip. Integral values keep one decimal
/// place (`2000.0`). Very large or very small magnitudes switch to scientific
/// form with a signed two-digit exponent (`1.5e+20`, `1e-05`).
#[must_use]
pub fn format_salary(salary: f64) -> String {
    if salary.is_nan() {
        return "nan".to_string();
    }
    if salary.is_infinite() {
        return if salary > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{salary:e}");
    let Some((mantissa, exponent)) = scientific
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
    else {
        return format!("{salary}");
    };

    if (MIN_PLAIN_EXPONENT..MAX_PLAIN_EXPONENT).contains(&exponent) {
        if salary.fract() == 0.0 {
            format!("{salary:.1}")
        } else {
            format!("{salary}")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
