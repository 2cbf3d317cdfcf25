pub mod script_parser;

pub use script_parser::{Intent, ScriptError, Step, parse_script};
