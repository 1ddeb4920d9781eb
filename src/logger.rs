/// Initializes logging. Warnings are always shown so that a failed
/// post-generation hook is visible; `verbose` adds the debug trail.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();
}
