use crate::commands::{CmdMessage, CmdResult};
use crate::config::FocoConfig;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Creates the store directory and writes a default config if none exists.
pub fn run(root: &Path) -> Result<CmdResult> {
    fs::create_dir_all(root)?;
    let config = FocoConfig::load(root)?;
    config.save(root)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized foco store at {}",
        root.display()
    )));
    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_store_and_config() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("store");
        run(&root).unwrap();
        assert!(root.join("config.json").exists());
    }

    #[test]
    fn keeps_existing_config() {
        let dir = tempdir().unwrap();
        let mut config = FocoConfig::default();
        config.set("default-sort", "words").unwrap();
        config.save(dir.path()).unwrap();

        let result = run(dir.path()).unwrap();
        assert_eq!(result.config.unwrap(), config);
    }
}
