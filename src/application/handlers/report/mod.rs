//! Report command handlers.

mod generate_report;

pub use generate_report::{
    GenerateReportCommand, GenerateReportError, GenerateReportHandler, GenerateReportResult,
};
