use crate::output::print_json;
use anyhow::Context;
use bakery_core::{config::Config, io, paths};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    io::ensure_dir(&paths::orders_dir(root)).context("failed to create order directory")?;

    let created = if paths::config_path(root).exists() {
        false
    } else {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "bakery".to_string());
        Config::new(name).save(root).context("failed to write config")?;
        true
    };

    if json {
        print_json(&serde_json::json!({
            "root": root.display().to_string(),
            "created": created,
        }))?;
    } else if created {
        println!("Initialized bakery order store in {}", root.display());
        println!("Next: bakery seed");
    } else {
        println!("Already initialized: {}", root.display());
    }
    Ok(())
}
