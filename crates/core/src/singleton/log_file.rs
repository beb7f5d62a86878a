use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// File log dùng chung cho mọi logger variant.
///
/// `open` truncate file; các record sau đó được append cho tới khi `close`.
/// Mỗi record là một dòng `<timestamp> <message>`.
#[derive(Debug, Default)]
pub struct LogFile {
    file: Option<File>,
    path: Option<PathBuf>,
}

impl LogFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Path của file đang mở
    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().and(self.path.as_deref())
    }

    /// Mở (và truncate) file log. Nếu đang mở file khác thì file cũ được đóng.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;

        if let Some(previous) = self.path.replace(path.to_path_buf()) {
            if self.file.is_some() {
                log::debug!("Replacing open log {}", previous.display());
            }
        }
        self.file = Some(file);
        log::debug!("Opened log {}", path.display());
        Ok(())
    }

    pub fn write_record(&mut self, message: &str) -> Result<()> {
        let file = self.file.as_mut().ok_or(CoreError::LogNotOpen)?;
        writeln!(file, "{}", patterns_utils::format_record(message))?;
        Ok(())
    }

    /// Đóng file. Gọi `close` khi chưa mở trả về [`CoreError::LogNotOpen`].
    pub fn close(&mut self) -> Result<()> {
        let mut file = self.file.take().ok_or(CoreError::LogNotOpen)?;
        file.flush()?;
        if let Some(path) = self.path.take() {
            log::debug!("Closed log {}", path.display());
        }
        Ok(())
    }
}
