use std::io;
use anyhow::Result;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

pub fn init(root: &'static str, level: u64) -> Result<()> {
    let build = |app: LevelFilter, lib: LevelFilter| -> Result<EnvFilter> {
        let mut filter = EnvFilter::from_default_env();

        let app = format!("{}={}", root, app).parse()?;
        let lib = lib.into();

        filter = filter.add_directive(app);
        filter = filter.add_directive(lib);

        Ok(filter)
    };

    let filter = match level {
        0 => build(LevelFilter::INFO,  LevelFilter::WARN)?,
        1 => build(LevelFilter::DEBUG, LevelFilter::INFO)?,
        2 => build(LevelFilter::TRACE, LevelFilter::INFO)?,
        3 => build(LevelFilter::TRACE, LevelFilter::DEBUG)?,
        _ => build(LevelFilter::TRACE, LevelFilter::TRACE)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    Ok(())
}
