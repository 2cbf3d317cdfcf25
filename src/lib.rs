pub mod cli;
pub mod io;
pub mod labels;
pub mod model;
pub mod ops;
pub mod parse;
pub mod tui;
pub mod util;
