//! Core library - bốn design pattern kinh điển
//!
//! Mỗi module là một demo độc lập, không phụ thuộc lẫn nhau:
//!
//! - [`command`]: đóng gói request thành object, có null command cho tên lạ
//! - [`observer`]: KPI subject đẩy state tới các observer
//! - [`singleton`]: bốn cách giữ một logical instance cho logger
//! - [`strategy`]: tính phí ship qua các strategy thay thế được

pub mod command;
pub mod error;
pub mod observer;
pub mod singleton;
pub mod strategy;

pub use error::{CoreError, Result};
