//! Interactive menu session.
//!
//! A [`Session`] owns the roster and the console and drives the
//! read-dispatch-acknowledge loop until the user exits or input ends.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::console::Console;
use crate::employee::{is_positive, Employee};
use crate::error::{Error, Result};
use crate::roster::Roster;
use crate::table::EmployeeTable;

const MENU_TEXT: &str = "FOLHA DE PAGAMENTO

1 - Inserir funcionário
2 - Pesquisar por matricula
3 - Aumentar salario
4 - Maior salário
5 - Demitir
6 - Listar
0 - Sair
Escolha sua opção: ";

const REGISTRATION_PROMPT: &str = "Matrícula: ";

/// A menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: add an employee.
    Insert,
    /// `2`: look up one employee.
    Search,
    /// `3`: raise an employee's salary.
    Raise,
    /// `4`: show the highest-paid employee.
    HighestSalary,
    /// `5`: remove an employee.
    Remove,
    /// `6`: list every employee.
    List,
    /// `0`: leave the program.
    Exit,
    /// Anything else, as typed (trimmed).
    Invalid(String),
}

impl MenuChoice {
    /// Interpret a raw menu answer. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::Insert,
            "2" => Self::Search,
            "3" => Self::Raise,
            "4" => Self::HighestSalary,
            "5" => Self::Remove,
            "6" => Self::List,
            "0" => Self::Exit,
            other => Self::Invalid(other.to_string()),
        }
    }
}

/// The interactive payroll session.
#[derive(Debug)]
pub struct Session<R, W> {
    roster: Roster,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over a starting roster.
    pub fn new(roster: Roster, console: Console<R, W>) -> Self {
        Self { roster, console }
    }

    /// The current roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consume the session, returning the roster and console.
    pub fn into_parts(self) -> (Roster, Console<R, W>) {
        (self.roster, self.console)
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only for console I/O failures; business errors are
    /// reported on screen and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        info!("Session started with {} records", self.roster.len());
        self.console.clear()?;

        loop {
            let choice = match self.console.read_line(MENU_TEXT) {
                Ok(answer) => MenuChoice::parse(&answer),
                Err(Error::InputClosed) => break,
                Err(e) => return Err(e),
            };
            debug!("Menu choice {choice:?}");

            if choice == MenuChoice::Exit {
                break;
            }

            match self.dispatch(&choice) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => self.console.error(&e.to_string())?,
                Err(Error::InputClosed) => break,
                Err(e) => return Err(e),
            }

            match self.console.pause() {
                Ok(()) => {}
                Err(Error::InputClosed) => break,
                Err(e) => return Err(e),
            }
            self.console.clear()?;
        }

        self.console.clear()?;
        self.console.line("Programa finalizado.")?;
        debug!("Session finished with {} records", self.roster.len());
        Ok(())
    }

    /// Perform one menu action.
    ///
    /// # Errors
    ///
    /// Returns business errors for the caller to report, or console errors.
    pub fn dispatch(&mut self, choice: &MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Insert => self.insert(),
            MenuChoice::Search => self.search(),
            MenuChoice::Raise => self.raise(),
            MenuChoice::HighestSalary => self.highest_salary(),
            MenuChoice::Remove => self.remove(),
            MenuChoice::List => self.list(),
            MenuChoice::Exit => Ok(()),
            MenuChoice::Invalid(input) => self
                .console
                .error(&format!("\n{input} é uma opção inválida.")),
        }
    }

    fn insert(&mut self) -> Result<()> {
        self.console.header("Inserir funcionário")?;
        let employee = self.build_employee()?;
        self.roster.insert(employee)?;
        self.console.success("Funcionário adicionado com sucesso.")
    }

    /// Ask for a registration number and a positive salary.
    fn build_employee(&mut self) -> Result<Employee> {
        let registration: i64 = self.console.prompt_parsed("Número da matrícula: ")?;
        let mut salary: f64 = self.console.prompt_parsed("Salário: ")?;
        while !is_positive(salary) {
            self.console.error("Salário deve ser maior que 0.")?;
            salary = self.console.prompt_parsed("Salário: ")?;
        }
        Employee::new(registration, salary)
    }

    fn search(&mut self) -> Result<()> {
        self.console.header("Pesquisar por matrícula")?;
        let registration: i64 = self.console.prompt_parsed(REGISTRATION_PROMPT)?;
        let employee = *self
            .roster
            .get(registration)
            .ok_or_else(|| Error::not_found(registration))?;
        self.print_table(&[employee])
    }

    fn raise(&mut self) -> Result<()> {
        self.console.header("Aumentar salário")?;
        let registration: i64 = self.console.prompt_parsed(REGISTRATION_PROMPT)?;
        let percent: f64 = self.console.prompt_parsed("Aumento: ")?;
        self.roster.raise_salary(registration, percent)?;
        self.console.success(&format!(
            "Funcionário com matrícula {registration} teve o aumento de {percent:.1}%."
        ))
    }

    fn highest_salary(&mut self) -> Result<()> {
        self.console.header("Maior salário")?;
        let employee = *self.roster.highest_paid()?;
        self.print_table(&[employee])
    }

    fn remove(&mut self) -> Result<()> {
        self.console.header("Demitir funcionário")?;
        let registration: i64 = self.console.prompt_parsed(REGISTRATION_PROMPT)?;
        self.roster.remove(registration)?;
        self.console.success(&format!(
            "Funcionário com matrícula {registration} demitido com sucesso."
        ))
    }

    fn list(&mut self) -> Result<()> {
        self.console.header("Listar funcionários")?;
        if self.roster.is_empty() {
            return Err(Error::EmptyRoster);
        }
        let table = EmployeeTable::new(self.roster.as_slice());
        self.console.write_block(&table.to_string())
    }

    fn print_table(&mut self, employees: &[Employee]) -> Result<()> {
        let table = EmployeeTable::new(employees);
        self.console.write_block(&table.to_string())
    }
}
