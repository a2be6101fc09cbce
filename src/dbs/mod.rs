pub mod buffer;
pub mod error;
pub mod history;
pub mod message;
pub mod offset_table;
pub mod strings;
#[cfg(test)]
pub mod testutil;
pub mod utils;
