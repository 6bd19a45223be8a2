// Export module
// Delimited-text export of record lists

pub mod csv_table;
pub mod file_writer;

pub use csv_table::{
    enquiry_columns, to_csv, to_csv_with_style, Cell, Column, CsvStyle, EXPORT_DATE_FORMAT,
};
pub use file_writer::{write_enquiries_csv, ENQUIRY_EXPORT_FILENAME};
