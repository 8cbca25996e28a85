pub mod assignment_service;
pub mod rating_service;

pub use assignment_service::*;
pub use rating_service::*;
