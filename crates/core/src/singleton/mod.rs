//! Singleton pattern - một logical instance cho mỗi type
//!
//! Bốn biến thể cùng bọc một [`LogFile`]:
//!
//! | Type | Cơ chế | Tạo lại |
//! |---|---|---|
//! | [`ClassicLogger`] | `static` lazy sau accessor `instance()` | `new()` tạo instance riêng |
//! | [`RegistryLogger`] | registry theo `TypeId` ([`Singleton`]) | giữ instance đầu tiên |
//! | [`ProvidedLogger`] | [`SingletonProvider`] tường minh | closure chạy một lần |
//! | [`MonoStateLogger`] | mọi handle dùng chung một backing state | nhiều handle, cùng storage |
//!
//! Tất cả chỉ dành cho dùng tuần tự trên một thread.

mod classic;
mod log_file;
mod mono_state;
mod provider;
mod registry;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use classic::{ClassicLogger, ClassicSingleton};
pub use log_file::LogFile;
pub use mono_state::MonoStateLogger;
pub use provider::{ProvidedLogger, SingletonProvider};
pub use registry::{RegistryLogger, Singleton};

/// Lock một instance global. Mutex bị poison vẫn trả về state bên trong.
pub fn lock<T>(instance: &Mutex<T>) -> MutexGuard<'_, T> {
    instance.lock().unwrap_or_else(PoisonError::into_inner)
}
