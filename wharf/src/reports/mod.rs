mod coverage;
mod generate;
mod output;

pub use coverage::CoverageReport;
pub use generate::GenerateReport;
pub use output::{Output, Report, TerminalOutput};
