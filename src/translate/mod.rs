pub mod interface;
pub mod output_parser;
pub mod prompt;
pub mod translator;

pub use interface::*;
pub use output_parser::*;
pub use prompt::*;
pub use translator::*;
