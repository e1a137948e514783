pub mod header;
pub mod text;
