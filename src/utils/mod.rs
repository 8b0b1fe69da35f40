pub mod color;
pub mod curl_parser;
pub mod file_size;
pub mod timestamp;
