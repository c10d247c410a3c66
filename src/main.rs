use std::path::PathBuf;

use micmaster::{init_logging, load_or_default, BUILD_DATE, VERSION};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!(version = VERSION, built = BUILD_DATE, "Starting MicMaster");

    // An explicit path may be given as the only argument.
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_or_default(config_path.as_deref());

    run(config)
}

#[cfg(feature = "gtk")]
fn run(config: micmaster::Config) -> anyhow::Result<()> {
    micmaster_ui::gtk_app::run(config)
}

#[cfg(not(feature = "gtk"))]
fn run(_config: micmaster::Config) -> anyhow::Result<()> {
    anyhow::bail!("this build has no user interface; rebuild with `--features gtk`")
}
