mod probe;
mod process;

pub use probe::{HELP_FLAG, LineLengthPolicy, MAX_LINE_LENGTH_FLAG, ProbeOutcome, probe};
pub use process::{ProcessRunner, ToolOutput, ToolRunner};

#[cfg(test)]
pub(crate) mod test_fixtures;
