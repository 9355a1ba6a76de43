//! 文件日志初始化
//!
//! 终端处于原始模式时无法输出日志，所有日志写入
//! `<config_dir>/course-portal-tui/course-portal-tui.log`。

use std::fs::{self, File};
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

use crate::backend::{config_dir, AppConfig};

/// 日志文件名
const LOG_FILE: &str = "course-portal-tui.log";

/// 初始化日志；日志文件无法创建时静默跳过
pub fn init_logging(config: &AppConfig) {
    let level = parse_level(&config.log_level);
    let dir = config_dir();
    if let Some(file) = create_log_file(&dir) {
        let _ = WriteLogger::init(level, build_config(), file);
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str("course_portal")
        .build()
}

fn create_log_file(dir: &Path) -> Option<File> {
    if let Err(err) = fs::create_dir_all(dir) {
        eprintln!("Warning: Could not create {}: {err}", dir.display());
        return None;
    }
    let log_path = dir.join(LOG_FILE);
    match File::create(&log_path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {}: {err}", log_path.display());
            None
        }
    }
}

/// 解析日志级别，无法识别时使用 `info`
pub fn parse_level(value: &str) -> LevelFilter {
    value.parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
        assert_eq!(parse_level(""), LevelFilter::Info);
    }
}
