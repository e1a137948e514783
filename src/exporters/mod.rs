pub mod json;

pub use json::{export_clubs_json, parse_clubs_json};
