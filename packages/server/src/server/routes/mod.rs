// HTTP routes
pub mod health;
pub mod hello;
pub mod shows;
pub mod test_db;

pub use health::*;
pub use hello::*;
pub use shows::*;
pub use test_db::*;
