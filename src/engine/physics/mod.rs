pub mod contact;
pub mod simulator;

pub use contact::*;
pub use simulator::*;
