//! File transfer infrastructure module

mod command;

pub use command::CommandTransfer;
