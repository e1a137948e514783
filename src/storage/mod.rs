pub mod dataset;
pub mod images;
