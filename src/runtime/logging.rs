use log::LevelFilter;

/// Install the colored stderr logger.
///
/// The logger itself accepts everything; the effective level is applied
/// later with `log::set_max_level` once settings are known.
pub fn init() {
    let mut clog = colog::default_builder();
    clog.filter(None, LevelFilter::Trace);
    clog.init();
    log::set_max_level(LevelFilter::Info);
}
