//! Fixed-width text table for employee records.

use std::fmt;

use crate::employee::{format_salary, Employee};

const REGISTRATION_HEADER: &str = "Matrícula";
const SALARY_HEADER: &str = "Salário";

/// A bordered two-column table over a slice of records.
///
/// Column widths are computed once from the headers and every row, so the
/// same record renders differently alone than as part of a longer list.
#[derive(Debug)]
pub struct EmployeeTable {
    rows: Vec<(String, String)>,
    registration_width: usize,
    salary_width: usize,
}

impl EmployeeTable {
    /// Prepare a table for the given records.
    #[must_use]
    pub fn new(employees: &[Employee]) -> Self {
        let rows: Vec<(String, String)> = employees
            .iter()
            .map(|e| (e.registration.to_string(), format_salary(e.salary)))
            .collect();

        let registration_width = rows
            .iter()
            .map(|(registration, _)| registration.chars().count())
            .fold(REGISTRATION_HEADER.chars().count(), usize::max);
        let salary_width = rows
            .iter()
            .map(|(_, salary)| salary.chars().count())
            .fold(SALARY_HEADER.chars().count(), usize::max);

        Self {
            rows,
            registration_width,
            salary_width,
        }
    }

    /// Width of the registration column, excluding padding.
    #[must_use]
    pub fn registration_width(&self) -> usize {
        self.registration_width
    }

    /// Width of the salary column, excluding padding.
    #[must_use]
    pub fn salary_width(&self) -> usize {
        self.salary_width
    }

    fn write_separator(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "+{}+{}+",
            "-".repeat(self.registration_width + 2),
            "-".repeat(self.salary_width + 2)
        )
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, left: &str, right: &str) -> fmt::Result {
        writeln!(
            f,
            "| {left:<rw$} | {right:<sw$} |",
            rw = self.registration_width,
            sw = self.salary_width
        )
    }
}

impl fmt::Display for EmployeeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_separator(f)?;
        self.write_row(f, REGISTRATION_HEADER, SALARY_HEADER)?;
        self.write_separator(f)?;
        for (registration, salary) in &self.rows {
            self.write_row(f, registration, salary)?;
            self.write_separator(f)?;
        }
        Ok(())
    }
}
