use env_logger::Builder;
use log::LevelFilter;

/// Honors `RUST_LOG`; `--debug` forces the debug level on top of it.
pub fn init(debug: bool) {
    let mut builder = Builder::from_default_env();
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}
