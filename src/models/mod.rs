pub mod health;
pub mod hello;

pub use health::*;
pub use hello::*;
