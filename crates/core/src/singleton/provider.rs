//! Singleton provider: map tường minh từ type sang instance được tạo lazy
//!
//! Provider là một object bình thường, được truyền cho code cần nó, nên
//! mỗi test có thể dùng provider riêng.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::LogFile;
use crate::error::Result;

/// Giữ tối đa một instance cho mỗi type
#[derive(Default)]
pub struct SingletonProvider {
    instances: RefCell<HashMap<TypeId, Rc<dyn Any>>>,
}

impl SingletonProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instance của `T` nếu đã được tạo
    pub fn get<T: Any>(&self) -> Option<Rc<T>> {
        let instance = self.instances.borrow().get(&TypeId::of::<T>()).cloned()?;
        instance.downcast::<T>().ok()
    }

    /// Trả về instance của `T`, gọi `create` nếu chưa có.
    ///
    /// `create` chạy ngoài mọi borrow nội bộ nên có thể dùng lại provider.
    pub fn get_or_create<T: Any>(&self, create: impl FnOnce() -> T) -> Rc<T> {
        if let Some(existing) = self.get::<T>() {
            return existing;
        }

        let instance = Rc::new(create());
        self.instances
            .borrow_mut()
            .insert(TypeId::of::<T>(), instance.clone());
        log::debug!("Provider created {}", std::any::type_name::<T>());
        instance
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.instances.borrow().contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.instances.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.borrow().is_empty()
    }
}

/// Logger lấy qua [`SingletonProvider`].
///
/// Lần đầu `from_provider` tạo logger và mở file; các lần sau trả về
/// instance đã có mà không đụng tới path. Sau `close_log`, mở lại bằng
/// `open_log`.
#[derive(Debug, Default)]
pub struct ProvidedLogger {
    log: RefCell<LogFile>,
}

impl ProvidedLogger {
    pub fn from_provider(
        provider: &SingletonProvider,
        path: impl AsRef<Path>,
    ) -> Result<Rc<Self>> {
        if let Some(existing) = provider.get::<Self>() {
            log::debug!("ProvidedLogger exists, ignoring {}", path.as_ref().display());
            return Ok(existing);
        }

        let logger = Self::default();
        logger.open_log(path)?;
        Ok(provider.get_or_create(|| logger))
    }

    pub fn open_log(&self, path: impl AsRef<Path>) -> Result<()> {
        self.log.borrow_mut().open(path)
    }

    pub fn write_log(&self, record: &str) -> Result<()> {
        self.log.borrow_mut().write_record(record)
    }

    pub fn close_log(&self) -> Result<()> {
        self.log.borrow_mut().close()
    }

    pub fn is_open(&self) -> bool {
        self.log.borrow().is_open()
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.log.borrow().path().map(Path::to_path_buf)
    }
}
