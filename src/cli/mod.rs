mod args;

pub use args::{CliArgs, parse_cli};
