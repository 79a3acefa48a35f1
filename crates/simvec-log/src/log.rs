use std::{
    io::Write,
    sync::{OnceLock, Mutex, MutexGuard, PoisonError},
};

use core::str::FromStr;

use termcolor::{StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

use crate::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CustomFmt(u32);

#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Level {
    Always = -1,
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

pub enum LevelFmt {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Other(CustomFmt, Level),
}

impl LevelFmt {

    #[inline(always)]
    pub fn level(&self) -> Level {
        match self {
            Self::Error => Level::Error,
            Self::Warn => Level::Warn,
            Self::Info => Level::Info,
            Self::Debug => Level::Debug,
            Self::Trace => Level::Trace,
            Self::Other(_, level) => *level,
        }
    }
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

struct Logger {
    stderr: StandardStream,
    error_fmt: LogFmt,
    warn_fmt: LogFmt,
    info_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    custom_fmt: Vec<LogFmt>,
    filter: LogFilter,
}

impl Logger {

    fn new(filter: LogFilter) -> Self {
        Self {
            stderr: StandardStream::stderr(ColorChoice::Auto),
            error_fmt: LogFmt::leveled("[error]", Color::Red),
            warn_fmt: LogFmt::leveled("[warn]", Color::Yellow),
            info_fmt: LogFmt::leveled("[info]", Color::Green),
            debug_fmt: LogFmt::leveled("[debug]", Color::Blue),
            trace_fmt: LogFmt::leveled("[trace]", Color::Cyan),
            custom_fmt: Vec::new(),
            filter,
        }
    }

    fn log(&mut self, target: &str, level: LevelFmt, msg: core::fmt::Arguments) -> Result<bool> {
        if !self.filter.enabled(target, level.level()) {
            return Ok(false)
        }
        let fmt = match level {
            LevelFmt::Error => &self.error_fmt,
            LevelFmt::Warn => &self.warn_fmt,
            LevelFmt::Info => &self.info_fmt,
            LevelFmt::Debug => &self.debug_fmt,
            LevelFmt::Trace => &self.trace_fmt,
            LevelFmt::Other(CustomFmt(index), _) => {
                self.custom_fmt
                    .get(index as usize)
                    .ok_or(LogError::InvalidFormat { index: index as usize })?
            },
        };
        let mut out = self.stderr.lock();
        fmt.write_record(&mut out, target, msg)?;
        out.flush()?;
        Ok(true)
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

#[inline(always)]
fn logger() -> Result<MutexGuard<'static, Logger>> {
    LOGGER
        .get()
        .ok_or(LogError::Uninitialized)
        .map(|logger| logger.lock().unwrap_or_else(PoisonError::into_inner))
}

/// Initializes the global logger with a filter read from `RUST_LOG`.
///
/// Later calls are no-ops.
pub fn init() {
    init_with_filter(LogFilter::from_env())
}

pub fn init_with_filter(filter: LogFilter) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(filter)));
}

#[inline(always)]
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

#[inline(always)]
pub fn error_fmt(mut f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    let mut logger = logger()?;
    let mut builder = LogFmtBuilder::new(&mut logger.error_fmt);
    f(&mut builder);
    Ok(())
}

#[inline(always)]
pub fn warn_fmt(mut f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    let mut logger = logger()?;
    let mut builder = LogFmtBuilder::new(&mut logger.warn_fmt);
    f(&mut builder);
    Ok(())
}

#[inline(always)]
pub fn info_fmt(mut f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    let mut logger = logger()?;
    let mut builder = LogFmtBuilder::new(&mut logger.info_fmt);
    f(&mut builder);
    Ok(())
}

#[inline(always)]
pub fn debug_fmt(mut f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    let mut logger = logger()?;
    let mut builder = LogFmtBuilder::new(&mut logger.debug_fmt);
    f(&mut builder);
    Ok(())
}

#[inline(always)]
pub fn trace_fmt(mut f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    let mut logger = logger()?;
    let mut builder = LogFmtBuilder::new(&mut logger.trace_fmt);
    f(&mut builder);
    Ok(())
}

pub fn custom_fmt(fmt: LogFmt) -> Result<CustomFmt> {
    let mut logger = logger()?;
    let index = logger.custom_fmt.len() as u32;
    logger.custom_fmt.push(fmt);
    Ok(CustomFmt(index))
}

/// Returns whether a record at `level` for `target` would be written.
///
/// Always `false` before [`init`].
pub fn enabled(target: &str, level: Level) -> bool {
    logger()
        .map(|logger| logger.filter.enabled(target, level))
        .unwrap_or(false)
}

#[inline(always)]
pub fn log(target: &str, level: LevelFmt, args: core::fmt::Arguments) -> Result<bool> {
    logger()?.log(target, level, args)
}

#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Error, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Warn, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Info, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Debug, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Trace, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_case_insensitive() {
        assert_eq!(Level::from_str("TRACE"), Ok(Level::Trace));
        assert_eq!(Level::from_str("Warn"), Ok(Level::Warn));
        assert_eq!(Level::from_str("always"), Err(()));
    }

    #[test]
    fn levels_order_by_verbosity() {
        assert!(Level::Always < Level::Error);
        assert!(Level::Error < Level::Warn);
        assert!(Level::Debug < Level::Trace);
    }

    #[test]
    fn level_fmt_reports_level() {
        assert_eq!(LevelFmt::Info.level(), Level::Info);
        assert_eq!(LevelFmt::Other(CustomFmt(0), Level::Always).level(), Level::Always);
    }

    #[test]
    fn logger_filters_before_formatting() {
        let mut logger = Logger::new(LogFilter::parse("warn"));
        assert!(!logger.log("t", LevelFmt::Info, format_args!("quiet")).unwrap());
        assert!(matches!(
            logger.log("t", LevelFmt::Other(CustomFmt(7), Level::Error), format_args!("x")),
            Err(LogError::InvalidFormat { index: 7 }),
        ));
    }

    #[test]
    fn global_logger_round_trip() {
        init_with_filter(LogFilter::new(Level::Warn));
        assert!(is_initialized());
        let fmt = custom_fmt(LogFmt::leveled("[note]", Color::Magenta)).unwrap();
        assert!(log("t", LevelFmt::Other(fmt, Level::Always), format_args!("hello")).unwrap());
        assert!(!trace!("not {}", "written"));
        assert!(!enabled("t", Level::Trace));
        assert!(enabled("t", Level::Warn));
    }
}
