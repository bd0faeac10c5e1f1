use std::path::Path;

use moorline::{
    batch::{BatchConfig, Updater},
    engine::YamlEngine,
};

/// Updates every `.dat` model file in the current directory with the
/// fixed parameters in [`BatchConfig::default`]. The first failure aborts
/// the run; files saved before it keep their new contents.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("start");

    let updater = Updater::new(YamlEngine::new(), BatchConfig::default());
    updater.run(Path::new("."))?;

    println!("end");
    Ok(())
}
