// Adapters layer: concrete implementations of the domain ports for the console.

pub mod console;
pub mod report;

pub use console::ConsoleIntake;
pub use report::{JsonReportWriter, TextReportWriter};
