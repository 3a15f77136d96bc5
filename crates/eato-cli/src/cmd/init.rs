use crate::output::print_json;
use anyhow::Context;
use eato_core::{io, paths, Site};
use std::path::Path;

const IMAGE_DIR: &str = "images/systems";

const CONTENT_FILES: [&str; 4] = [
    paths::CONFIG_FILE,
    paths::CATALOG_FILE,
    paths::SCHEDULE_FILE,
    paths::CAROUSELS_FILE,
];

/// Write the built-in content. With `force`, existing content files are replaced.
pub fn run(root: &Path, force: bool, json: bool) -> anyhow::Result<()> {
    let site = Site::builtin().context("built-in content is invalid")?;
    let created = if force {
        site.save(root)
            .map(|()| CONTENT_FILES.iter().map(|f| f.to_string()).collect())
    } else {
        site.scaffold(root)
    }
    .with_context(|| format!("failed to write content under {}", root.display()))?;

    let images = root.join(&site.config().assets.public_dir).join(IMAGE_DIR);
    io::ensure_dir(&images).with_context(|| format!("failed to create {}", images.display()))?;

    if json {
        return print_json(&serde_json::json!({
            "root": root,
            "created": created,
            "images": images,
        }));
    }

    println!("Initializing EatoSystems roadmap in: {}", root.display());
    for file in CONTENT_FILES {
        if created.iter().any(|c| c == file) {
            println!("  created: {file}");
        } else {
            println!("  exists:  {file}");
        }
    }
    println!("  images:  {}", images.display());
    Ok(())
}
