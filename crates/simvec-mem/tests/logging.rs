#![cfg(feature = "log")]

use simvec_log::{Level, LevelFmt, LogFilter};
use simvec_mem::GlobalArray;

const ARRAY_TARGET: &str = "simvec_mem::vec_types::dynamic_array";

#[test]
fn growth_records_follow_crate_filter() {
    simvec_log::init_with_filter(LogFilter::parse("error,simvec_mem=trace"));
    assert!(simvec_log::is_initialized());

    assert!(simvec_log::enabled(ARRAY_TARGET, Level::Trace));
    assert!(simvec_log::enabled(ARRAY_TARGET, Level::Debug));
    assert!(simvec_log::enabled(ARRAY_TARGET, Level::Warn));
    assert!(!simvec_log::enabled("other_crate", Level::Debug));

    let mut arr = GlobalArray::new();
    for i in 0..9 {
        arr.push_back(i).unwrap();
    }
    arr.reserve(64).unwrap();
    assert_eq!(arr.capacity(), 64);

    let written = simvec_log::log(
        ARRAY_TARGET,
        LevelFmt::Trace,
        format_args!("relocating {} elements", arr.len()),
    );
    assert!(written.unwrap());
    let skipped = simvec_log::log("other_crate", LevelFmt::Trace, format_args!("quiet"));
    assert!(!skipped.unwrap());
}
