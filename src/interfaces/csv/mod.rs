pub mod field_writer;
pub mod line_item_reader;
