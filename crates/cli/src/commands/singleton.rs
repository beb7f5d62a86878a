//! Singleton demo: bốn logger variant, mỗi variant ghi một file

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::Args;
use patterns_core::singleton::{
    lock, ClassicLogger, ClassicSingleton, MonoStateLogger, ProvidedLogger, RegistryLogger,
    SingletonProvider,
};
use patterns_utils::AppConfig;

/// Path truyền vào lần "khởi tạo" thứ hai; không bao giờ được dùng
const IGNORED: &str = "**ignored**";

const FIRST_RECORD: &str = "Logging with classic Singleton pattern";
const SECOND_RECORD: &str = "Another log record";

#[derive(Args, Debug)]
pub struct SingletonArgs {
    /// Directory for the generated log files (default: PATTERNS_OUTPUT_DIR or ".")
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

pub fn handle(args: SingletonArgs, config: &AppConfig) -> Result<()> {
    let config = match args.dir {
        Some(dir) => config.clone().with_output_dir(dir),
        None => config.clone(),
    };

    let mut stdout = io::stdout().lock();
    run(&config, &mut stdout)
}

fn run(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Cannot create output directory {}", config.output_dir.display())
    })?;

    classic_singleton(out)?;

    let path = config.log_path("my.log");
    classic_logger(&path)?;
    echo(&path, out)?;

    let path = config.log_path("my_second.log");
    registry_logger(&path)?;
    echo(&path, out)?;

    let path = config.log_path("my_third.log");
    provided_logger(&path)?;
    echo(&path, out)?;

    let path = config.log_path("my_fourth.log");
    mono_state_logger(&path)?;
    echo(&path, out)?;

    Ok(())
}

fn classic_singleton(out: &mut dyn Write) -> Result<()> {
    let s1 = ClassicSingleton::instance();
    let s2 = ClassicSingleton::instance();
    ensure!(std::ptr::eq(s1, s2), "ClassicSingleton::instance returned two instances");

    lock(s1).ans = Some(42);
    ensure!(lock(s2).ans == Some(42), "mutation through s1 not visible through s2");

    writeln!(out, "Passed")?;
    Ok(())
}

fn classic_logger(path: &Path) -> Result<()> {
    let mut logger = lock(ClassicLogger::instance());
    logger.open_log(path)?;
    logger.write_log(FIRST_RECORD)?;
    logger.close_log()?;
    Ok(())
}

fn registry_logger(path: &Path) -> Result<()> {
    let logger = RegistryLogger::open(path)?;
    lock(logger).write_log(FIRST_RECORD)?;

    let logger2 = RegistryLogger::open(IGNORED)?;
    lock(logger2).write_log(SECOND_RECORD)?;

    lock(logger).close_log()?;
    Ok(())
}

fn provided_logger(path: &Path) -> Result<()> {
    let provider = SingletonProvider::new();

    let logger = ProvidedLogger::from_provider(&provider, path)?;
    logger.write_log(FIRST_RECORD)?;

    let logger2 = ProvidedLogger::from_provider(&provider, IGNORED)?;
    logger2.write_log(SECOND_RECORD)?;

    logger.close_log()?;
    Ok(())
}

fn mono_state_logger(path: &Path) -> Result<()> {
    let logger = MonoStateLogger::new(path)?;
    logger.write_log(FIRST_RECORD)?;

    let logger2 = MonoStateLogger::new(IGNORED)?;
    logger2.write_log(SECOND_RECORD)?;

    logger.close_log()?;
    Ok(())
}

fn echo(path: &Path, out: &mut dyn Write) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    out.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_four_logs() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::default().with_output_dir(dir.path().join("logs"));

        let mut out = Vec::new();
        run(&config, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Passed\n"));
        assert_eq!(output.matches(SECOND_RECORD).count(), 3);

        let expected = [
            ("my.log", 1),
            ("my_second.log", 2),
            ("my_third.log", 2),
            ("my_fourth.log", 2),
        ];
        for (name, lines) in expected {
            let content = fs::read_to_string(config.log_path(name)).unwrap();
            assert_eq!(content.lines().count(), lines, "{}", name);
        }
        assert!(!Path::new(IGNORED).exists());
    }
}
