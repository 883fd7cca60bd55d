/// Date text parsers.
pub mod data_parsers;
