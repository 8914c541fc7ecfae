pub mod bindings;
pub mod check;
mod command_result;
pub mod helper;
pub mod init;
pub mod upload;

pub use command_result::*;
