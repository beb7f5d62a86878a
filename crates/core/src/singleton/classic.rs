//! Singleton cổ điển: accessor tĩnh trả về instance được khởi tạo lazy

use std::path::Path;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use super::LogFile;
use crate::error::Result;

/// Singleton tối giản với một field có thể thay đổi
#[derive(Debug, Default)]
pub struct ClassicSingleton {
    pub ans: Option<i64>,
}

impl ClassicSingleton {
    pub fn instance() -> &'static Mutex<ClassicSingleton> {
        static INSTANCE: Lazy<Mutex<ClassicSingleton>> =
            Lazy::new(|| Mutex::new(ClassicSingleton::default()));
        &INSTANCE
    }
}

/// Logger truy cập qua `ClassicLogger::instance()`.
///
/// `ClassicLogger::new()` vẫn public và tạo một instance độc lập,
/// không đi qua accessor.
#[derive(Debug, Default)]
pub struct ClassicLogger {
    log: LogFile,
}

impl ClassicLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instance() -> &'static Mutex<ClassicLogger> {
        static INSTANCE: Lazy<Mutex<ClassicLogger>> = Lazy::new(|| {
            log::debug!("Creating ClassicLogger instance");
            Mutex::new(ClassicLogger::new())
        });
        &INSTANCE
    }

    pub fn open_log(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.log.open(path)
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
}
