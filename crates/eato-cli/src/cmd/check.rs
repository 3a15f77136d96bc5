use crate::output::print_json;
use eato_core::config::WarnLevel;
use eato_core::{EatoError, Site};
use std::path::Path;

/// Load and cross-check the project's content. Integrity problems and
/// error-level warnings fail the command; plain warnings only print.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let site = match Site::load(root) {
        Ok(site) => site,
        Err(EatoError::Integrity(issues)) => {
            if json {
                let list: Vec<_> = issues
                    .iter()
                    .map(|i| serde_json::json!({ "slug": i.slug(), "message": i.to_string() }))
                    .collect();
                print_json(&serde_json::json!({ "ok": false, "issues": list }))?;
            } else {
                for issue in &issues {
                    println!("[integrity] {issue}");
                }
            }
            anyhow::bail!("{} integrity issue(s) found", issues.len());
        }
        Err(e) => return Err(e.into()),
    };

    let warnings = site.validate();
    let has_errors = warnings.iter().any(|w| w.level == WarnLevel::Error);

    if json {
        print_json(&serde_json::json!({
            "ok": !has_errors,
            "systems": site.catalog().len(),
            "scheduled": site.schedule().len(),
            "carousels": site.carousels().len(),
            "warnings": warnings,
        }))?;
    } else if warnings.is_empty() {
        println!(
            "Content is valid: {} systems, {} scheduled, {} carousels. No warnings.",
            site.catalog().len(),
            site.schedule().len(),
            site.carousels().len()
        );
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    if has_errors {
        anyhow::bail!("content validation found errors");
    }
    Ok(())
}
