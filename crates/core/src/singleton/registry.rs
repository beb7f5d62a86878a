//! Singleton qua registry dùng chung: mỗi type đăng ký một instance duy nhất

use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use once_cell::sync::Lazy;

use super::{lock, LogFile};
use crate::error::Result;

type Instances = HashMap<TypeId, &'static (dyn Any + Send + Sync)>;

static INSTANCES: Lazy<Mutex<Instances>> = Lazy::new(|| Mutex::new(HashMap::new()));

fn downcast<T: Any>(entry: &'static (dyn Any + Send + Sync)) -> &'static Mutex<T> {
    entry
        .downcast_ref::<Mutex<T>>()
        .expect("registry entries are keyed by their own TypeId")
}

/// Type implement trait này có một instance duy nhất trong process,
/// lấy qua [`Singleton::instance_or_init`].
///
/// Instance được tạo ở lần gọi đầu tiên và sống tới hết process.
pub trait Singleton: Any + Send + Sized {
    /// Trả về instance đã đăng ký; `init` chỉ được gọi nếu chưa có.
    ///
    /// `init` chạy ngoài lock của registry nên có thể lấy singleton khác.
    /// Nếu hai lần init chạy chồng nhau cho cùng type, entry đăng ký trước thắng.
    fn instance_or_init(init: impl FnOnce() -> Self) -> &'static Mutex<Self> {
        let key = TypeId::of::<Self>();
        if let Some(&entry) = lock(&*INSTANCES).get(&key) {
            return downcast(entry);
        }

        let created = Box::new(Mutex::new(init()));

        let entry = match lock(&*INSTANCES).entry(key) {
            Entry::Occupied(occupied) => *occupied.get(),
            Entry::Vacant(vacant) => {
                log::debug!("Registering singleton {}", std::any::type_name::<Self>());
                let leaked: &'static (dyn Any + Send + Sync) = Box::leak(created);
                *vacant.insert(leaked)
            }
        };
        downcast(entry)
    }

    /// Instance đã tồn tại hay chưa
    fn is_registered() -> bool {
        lock(&*INSTANCES).contains_key(&TypeId::of::<Self>())
    }
}

/// Logger lấy instance từ registry.
///
/// Giống một constructor: `RegistryLogger::open(path)` luôn trả về cùng một
/// instance. Path chỉ được dùng khi instance chưa có file mở; sau
/// `close_log` lần `open` kế tiếp sẽ mở lại với path mới.
#[derive(Debug, Default)]
pub struct RegistryLogger {
    log: LogFile,
}

impl Singleton for RegistryLogger {}

impl RegistryLogger {
    pub fn open(path: impl AsRef<Path>) -> Result<&'static Mutex<Self>> {
        let instance = Self::instance_or_init(Self::default);
        {
            let mut logger = lock(instance);
            if logger.log.is_open() {
                log::debug!(
                    "RegistryLogger already open, ignoring {}",
                    path.as_ref().display()
                );
            } else {
                logger.log.open(path)?;
            }
        }
        Ok(instance)
    }

    pub fn write_log(&mut self, record: &str) -> Result<()> {
        self.log.write_record(record)
    }

    pub fn close_log(&mut self) -> Result<()> {
        self.log.close()
    }

    pub fn is_open(&self) -> bool {
        self.log.is_open()
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.log.path().map(Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Counter {
        hits: u32,
    }

    impl Singleton for Counter {}

    #[test]
    fn test_init_runs_once() {
        let first = Counter::instance_or_init(|| Counter { hits: 1 });
        let second = Counter::instance_or_init(|| Counter { hits: 100 });

        assert!(std::ptr::eq(first, second));
        assert!(Counter::is_registered());

        lock(first).hits += 1;
        assert_eq!(lock(second).hits, 2);
    }

    #[derive(Debug, Default)]
    struct Outer;

    #[derive(Debug, Default)]
    struct Inner;

    impl Singleton for Outer {}
    impl Singleton for Inner {}

    #[test]
    fn test_nested_init_does_not_deadlock() {
        let outer = Outer::instance_or_init(|| {
            Inner::instance_or_init(Inner::default);
            Outer
        });

        assert!(Outer::is_registered());
        assert!(Inner::is_registered());
        assert!(std::ptr::eq(outer, Outer::instance_or_init(Outer::default)));
    }

    #[test]
    fn test_registry_logger_ignores_new_path_while_open() {
        let dir = tempfile::tempdir().unwrap();
        let first_path = dir.path().join("my_second.log");
        let ignored_path = dir.path().join("ignored.log");

        let logger = RegistryLogger::open(&first_path).unwrap();
        lock(logger)
            .write_log("Logging with classic Singleton pattern")
            .unwrap();

        assert!(lock(logger).is_open());

        let logger2 = RegistryLogger::open(&ignored_path).unwrap();
        assert!(std::ptr::eq(logger, logger2));
        lock(logger2).write_log("Another log record").unwrap();
        assert_eq!(lock(logger).path(), Some(first_path.clone()));

        lock(logger).close_log().unwrap();
        assert!(!lock(logger).is_open());
        assert!(!ignored_path.exists());

        let content = std::fs::read_to_string(&first_path).unwrap();
        assert_eq!(content.lines().count(), 2);

        // Sau khi close, open lại với path mới
        let reopened_path = dir.path().join("reopened.log");
        let logger3 = RegistryLogger::open(&reopened_path).unwrap();
        assert!(std::ptr::eq(logger, logger3));
        assert_eq!(lock(logger3).path(), Some(reopened_path));
        lock(logger3).close_log().unwrap();
    }
}
