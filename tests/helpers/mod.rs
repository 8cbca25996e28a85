#![allow(dead_code, unused_imports)]
pub mod fakes;
pub mod requests;
pub mod test_db;

pub use fakes::*;
pub use requests::*;
pub use test_db::*;
