//! Built-in scenes

pub mod building;
pub mod house;

pub use building::building;
pub use house::house;
