// Application layer: wires the core calculation to user-facing input and output.

pub mod engine;
pub mod prompt;
pub mod report;
