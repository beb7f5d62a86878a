//! Mono-state: nhiều handle, một state

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::LogFile;
use crate::error::Result;

thread_local! {
    static SHARED_LOG: Rc<RefCell<LogFile>> = Rc::new(RefCell::new(LogFile::new()));
}

/// Mỗi lần `new` tạo một handle mới, nhưng mọi handle trên cùng thread
/// trỏ tới cùng một [`LogFile`].
///
/// Path chỉ được dùng khi state chung chưa có file mở.
#[derive(Debug, Clone)]
pub struct MonoStateLogger {
    state: Rc<RefCell<LogFile>>,
}

impl MonoStateLogger {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let state = SHARED_LOG.with(Rc::clone);
        if !state.borrow().is_open() {
            state.borrow_mut().open(path)?;
        }
        Ok(Self { state })
    }

    /// Hai handle dùng chung backing state hay không
    pub fn shares_state_with(&self, other: &MonoStateLogger) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    pub fn write_log(&self, record: &str) -> Result<()> {
        self.state.borrow_mut().write_record(record)
    }

    pub fn close_log(&self) -> Result<()> {
        self.state.borrow_mut().close()
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.state.borrow().path().map(Path::to_path_buf)
    }
}
