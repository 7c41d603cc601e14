pub mod json_writer;
pub mod plot;
pub mod summary;
pub mod tsv_writer;
