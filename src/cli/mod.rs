pub mod args;
pub mod config_io;
pub mod read;
