mod fish;
mod script;
mod seat;
mod uci;

pub use fish::*;
pub use script::*;
pub use seat::*;
pub use uci::*;
