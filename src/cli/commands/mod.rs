pub mod context;
pub mod init;
pub mod patch;
pub mod restore;

mod command_result;

pub use command_result::*;
