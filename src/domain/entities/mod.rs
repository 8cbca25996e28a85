pub mod interview;
pub mod rating;

pub use interview::*;
pub use rating::*;
