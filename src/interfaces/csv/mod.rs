pub mod account_writer;
pub mod record_reader;
