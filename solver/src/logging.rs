use log::LevelFilter;

pub struct Logger;

impl Logger {
    /// `RUST_LOG`, when set, overrides the level passed on the command line.
    pub fn init(level: LevelFilter) {
        let mut builder: env_logger::Builder = colog::default_builder();
        builder.filter_level(level).parse_default_env();

        if let Err(e) = builder.try_init() {
            eprintln!("logger already initialized: {e}");
        }
    }
}
