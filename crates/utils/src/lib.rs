//! Utils library - Các hàm tiện ích dùng chung
//!
//! Config loading và timestamp helpers cho log records.

pub mod config;
pub mod helpers;

pub use config::*;
pub use helpers::*;
