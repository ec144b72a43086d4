// Interface adapters: wire protocol and runtime helpers.

pub mod protocol;
pub mod utils;
