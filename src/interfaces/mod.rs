//! Interface adapters for the interactive console driver.

pub mod console;
