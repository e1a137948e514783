pub mod club;
pub mod identifier;
