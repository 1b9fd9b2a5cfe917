pub mod error;
pub mod parser;

pub use parser::{AvdeccFrame, parse_avdecc_frame};
