//! Demo binary: opens the tether viewer.
//!
//! Usage: `tether [OPTIONS.toml]` or `tether --schema`.

use std::{io::Write, path::Path};

use tether::{Options, TetherError, Viewer};

fn write_schema() -> Result<(), TetherError> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| TetherError::OptionsParse(e.to_string()))?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{schema}")?;
    Ok(())
}

fn run() -> Result<(), TetherError> {
    let options = match std::env::args().nth(1) {
        Some(arg) if arg == "--schema" => return write_schema(),
        Some(path) => {
            log::info!("loading options from {path}");
            Options::load(Path::new(&path))?
        }
        None => Options::default(),
    };

    Viewer::builder().with_options(options).build().run()
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
