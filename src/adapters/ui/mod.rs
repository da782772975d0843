//! Console UI. Drives the use cases (InputPort) and renders their results (InsightsListener).

pub mod console;
pub mod printer;

pub use console::ConsoleInputPort;
pub use printer::ConsoleListener;
