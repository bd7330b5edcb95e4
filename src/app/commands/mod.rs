pub mod bootstrap;
pub mod resolve;
