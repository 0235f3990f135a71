use chrono::Local;
use std::fmt::Arguments;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

static MIN_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

pub struct Logger;

impl Logger {
    /// Sets the lowest level that still gets printed.
    pub fn set_level(level: Level) {
        MIN_LEVEL.store(level as u8, Ordering::Relaxed);
    }

    pub fn enabled(level: Level) -> bool {
        level as u8 >= MIN_LEVEL.load(Ordering::Relaxed)
    }

    pub fn info(args: Arguments) {
        if Logger::enabled(Level::Info) {
            println!("{}", Logger::format(Level::Info, args));
        }
    }

    pub fn debug(args: Arguments) {
        if Logger::enabled(Level::Debug) {
            println!("{}", Logger::format(Level::Debug, args));
        }
    }

    pub fn warn(args: Arguments) {
        if Logger::enabled(Level::Warn) {
            eprintln!("{}", Logger::format(Level::Warn, args));
        }
    }

    pub fn error(args: Arguments) {
        if Logger::enabled(Level::Error) {
            eprintln!("{}", Logger::format(Level::Error, args));
        }
    }

    fn format(level: Level, args: Arguments) -> String {
        let tag = match level {
            Level::Debug => "DEBUG",
            Level::Info => "INFO ",
            Level::Warn => "WARN ",
            Level::Error => "ERROR",
        };
        let local = Local::now().format("%d/%m/%Y %H:%M:%S");
        format!("[{tag}] [{local}] {args}")
    }
}

#[macro_export]
macro_rules! logger {
    (INFO, $($arg:tt)*) => {
        $crate::utils::logger::Logger::info(format_args!($($arg)*))
    };
    (DEBUG, $($arg:tt)*) => {
        $crate::utils::logger::Logger::debug(format_args!($($arg)*))
    };
    (WARN, $($arg:tt)*) => {
        $crate::utils::logger::Logger::warn(format_args!($($arg)*))
    };
    (ERROR, $($arg:tt)*) => {
        $crate::utils::logger::Logger::error(format_args!($($arg)*))
    };
}
