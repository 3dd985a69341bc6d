pub mod osc;

pub use osc::{parse_message, OscController, OscError};
