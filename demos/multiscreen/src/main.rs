use std::io;

use multiscreen::{AppConfig, MultiScreenApp};
use multiscreen_platform::run_headless_app;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = MultiScreenApp::new(AppConfig::default())?;
    let stdin = io::stdin();
    run_headless_app(app.launch(), stdin.lock(), io::stdout().lock())
}
