use core::str::FromStr;

use ahash::AHashMap;

use compact_str::CompactString;

use crate::Level;

/// Per-target verbosity, usually read from `RUST_LOG`.
///
/// The filter string is a comma separated list of `level` or
/// `target=level` entries, e.g. `warn,simvec_mem=trace`. A bare level sets
/// the base level. Targets are module paths and match by the longest
/// `::` separated prefix. Unknown levels are ignored.
#[derive(Clone, Debug)]
pub struct LogFilter {
    target_levels: AHashMap<CompactString, Level>,
    base_level: Level,
}

impl Default for LogFilter {

    fn default() -> Self {
        Self::new(Level::Error)
    }
}

impl LogFilter {

    pub fn new(base_level: Level) -> Self {
        Self {
            target_levels: AHashMap::default(),
            base_level,
        }
    }

    pub fn from_env() -> Self {
        match std::env::var("RUST_LOG") {
            Ok(env) => Self::parse(&env),
            Err(_) => Self::default(),
        }
    }

    pub fn parse(filters: &str) -> Self {
        let mut filter = Self::default();
        for arg in filters.split(',') {
            let (target, level) = match arg.find('=') {
                Some(j) => (Some(arg[0..j].trim()), arg[j + 1..].trim()),
                None => (None, arg.trim()),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            match target {
                Some(target) if !target.is_empty() => {
                    let entry = filter.target_levels
                        .entry(CompactString::new(target))
                        .or_insert(level);
                    *entry = (*entry).min(level);
                },
                _ => filter.base_level = level,
            }
        }
        filter
    }

    #[inline(always)]
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    pub fn with_target(mut self, target: &str, level: Level) -> Self {
        self.target_levels.insert(CompactString::new(target), level);
        self
    }

    pub fn target_level(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[0..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }

    #[inline(always)]
    pub fn enabled(&self, target: &str, level: Level) -> bool {
        level <= self.target_level(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_keeps_error_base() {
        let filter = LogFilter::parse("");
        assert_eq!(filter.base_level(), Level::Error);
        assert!(filter.enabled("anything", Level::Error));
        assert!(!filter.enabled("anything", Level::Warn));
    }

    #[test]
    fn bare_level_sets_base() {
        let filter = LogFilter::parse("DEBUG");
        assert_eq!(filter.base_level(), Level::Debug);
        assert!(filter.enabled("x", Level::Debug));
        assert!(!filter.enabled("x", Level::Trace));
    }

    #[test]
    fn target_matches_longest_prefix() {
        let filter = LogFilter::parse("warn, simvec_mem = trace, simvec_mem::buffer=info");
        assert_eq!(filter.target_level("simvec_mem::vec_types::dynamic_array"), Level::Trace);
        assert_eq!(filter.target_level("simvec_mem::buffer"), Level::Info);
        assert_eq!(filter.target_level("simvec_mem::buffer::inner"), Level::Info);
        assert_eq!(filter.target_level("other"), Level::Warn);
    }

    #[test]
    fn duplicate_target_keeps_quieter_level() {
        let filter = LogFilter::parse("a=trace,a=warn");
        assert_eq!(filter.target_level("a"), Level::Warn);
    }

    #[test]
    fn unknown_levels_are_skipped() {
        let filter = LogFilter::parse("loud,a=verbose,info");
        assert_eq!(filter.base_level(), Level::Info);
        assert_eq!(filter.target_level("a"), Level::Info);
    }

    #[test]
    fn always_passes_every_filter() {
        let filter = LogFilter::new(Level::Error);
        assert!(filter.enabled("a::b", Level::Always));
    }

    #[test]
    fn with_target_overrides() {
        let filter = LogFilter::default().with_target("a", Level::Trace);
        assert!(filter.enabled("a::b", Level::Trace));
        assert!(!filter.enabled("b", Level::Info));
    }
}
