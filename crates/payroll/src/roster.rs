//! In-memory roster of employee records.
//!
//! The roster keeps records in insertion order, which is also the display
//! order. Lookups are linear scans by registration number.

use serde::Serialize;
use tracing::debug;

use crate::config::RosterConfig;
use crate::employee::Employee;
use crate::error::{Error, Result};

/// Ordered collection of employees keyed by registration number.
///
/// Registration numbers are unique; [`Roster::insert`] enforces this.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster holding a single placeholder record.
    #[must_use]
    pub fn seeded(seed: Employee) -> Self {
        Self {
            employees: vec![seed],
        }
    }

    /// Build the startup roster described by configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveSalary`] if the seed salary is not positive.
    pub fn from_config(config: &RosterConfig) -> Result<Self> {
        if !config.seed_enabled {
            return Ok(Self::new());
        }
        let seed = Employee::new(config.seed_registration, config.seed_salary)?;
        Ok(Self::seeded(seed))
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Check whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Employee] {
        &self.employees
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Find a record by registration number.
    #[must_use]
    pub fn get(&self, registration: i64) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| e.registration == registration)
    }

    fn get_mut(&mut self, registration: i64) -> Option<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|e| e.registration == registration)
    }

    /// Check whether a registration number is taken.
    #[must_use]
    pub fn contains(&self, registration: i64) -> bool {
        self.get(registration).is_some()
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRegistration`] if the registration number is
    /// already present. The roster is left unchanged.
    pub fn insert(&mut self, employee: Employee) -> Result<()> {
        if self.contains(employee.registration) {
            debug!(
                "Rejecting duplicate registration {}",
                employee.registration
            );
            return Err(Error::DuplicateRegistration {
                registration: employee.registration,
            });
        }
        self.employees.push(employee);
        debug!(
            "Inserted registration {} ({} records)",
            employee.registration,
            self.employees.len()
        );
        Ok(())
    }

    /// Raise a record's salary by `percent` percent, returning the new salary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistrationNotFound`] if no record matches.
    pub fn raise_salary(&mut self, registration: i64, percent: f64) -> Result<f64> {
        let employee = self
            .get_mut(registration)
            .ok_or_else(|| Error::not_found(registration))?;
        let salary = employee.raise_salary(percent);
        debug!("Raised registration {registration} by {percent}% to {salary}");
        Ok(salary)
    }

    /// The highest-paid record.
    ///
    /// Ties go to the record that comes first in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRoster`] if there are no records.
    pub fn highest_paid(&self) -> Result<&Employee> {
        let mut iter = self.employees.iter();
        let first = iter.next().ok_or(Error::EmptyRoster)?;
        Ok(iter.fold(first, |best, e| {
            if e.salary > best.salary {
                e
            } else {
                best
            }
        }))
    }

    /// Remove the record with this registration number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistrationNotFound`] if no record matches.
    pub fn remove(&mut self, registration: i64) -> Result<Employee> {
        let index = self
            .employees
            .iter()
            .position(|e| e.registration == registration)
            .ok_or_else(|| Error::not_found(registration))?;
        let removed = self.employees.remove(index);
        debug!(
            "Removed registration {registration} ({} records left)",
            self.employees.len()
        );
        Ok(removed)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
