//! `payroll` - An interactive terminal payroll record manager
//!
//! This library provides the in-memory employee roster, its table renderer,
//! and the console session that drives it through a text menu.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod employee;
pub mod error;
pub mod logging;
pub mod roster;
pub mod session;
pub mod table;

pub use config::Config;
pub use console::{Console, ConsoleOptions, Prompted, Tone};
pub use employee::Employee;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use roster::Roster;
pub use session::{MenuChoice, Session};
pub use table::EmployeeTable;
