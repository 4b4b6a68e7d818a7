use log::LevelFilter;
use minibattle::{init_logging, level_from};

#[test]
fn test_level_parsing() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
    assert_eq!(level_from(Some("loud")), LevelFilter::Info);
}

#[test]
fn test_init_twice_is_harmless() {
    init_logging();
    init_logging();
    log::info!("logger installed");
}
