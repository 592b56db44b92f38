//! Parsing utilities that turn host declarations into the descriptor model: records, their
//! eligible fields, and the recursive classification of each field's type.

pub mod data_struct;
pub mod field_annotation;
pub mod field_descriptor;
pub mod name_value;
pub mod parsing_error;
pub mod record_descriptor;
pub mod source_file;
pub mod type_descriptor;
pub mod validation;
