use anyhow::Result;
use env_logger::{Target, WriteStyle};
use playdeck::{Settings, app_core::Playdeck};
use std::path::PathBuf;

fn main() -> Result<()> {
    unsafe { std::env::set_var("RUST_BACKTRACE", "1") };

    let settings = Settings::load(std::env::args().nth(1).map(PathBuf::from))?;
    init_logger(&settings)?;

    Playdeck::new(&settings)?.run()?;
    Ok(())
}

// The alternate screen shares the tty with stderr, so log lines go to a file
fn init_logger(settings: &Settings) -> Result<()> {
    let Some(file) = settings.open_log_file()? else {
        return Ok(());
    };

    // RUST_LOG overrides the configured level
    pretty_env_logger::formatted_builder()
        .filter_module("playdeck", settings.log_filter())
        .parse_env("RUST_LOG")
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
