use crate::output::{print_json, print_table, truncate};
use clap::Subcommand;
use eato_core::keyword;
use std::path::Path;

#[derive(Subcommand)]
pub enum CatalogSubcommand {
    /// List every system in the catalog
    List,
    /// Show one system with its resolved style and image keyword
    Info { slug: String },
}

pub fn run(root: &Path, subcmd: CatalogSubcommand, json: bool) -> anyhow::Result<()> {
    let site = super::load_site(root)?;
    match subcmd {
        CatalogSubcommand::List => {
            let records = site.catalog().records();
            if json {
                return print_json(&records);
            }
            let rows = records
                .iter()
                .map(|r| {
                    vec![
                        r.slug.clone(),
                        r.name.clone(),
                        r.layer.clone(),
                        r.version.clone(),
                        truncate(&r.description, 60),
                    ]
                })
                .collect();
            print_table(&["SLUG", "NAME", "LAYER", "VERSION", "DESCRIPTION"], rows);
        }
        CatalogSubcommand::Info { slug } => {
            let r = site.catalog().get(&slug)?;
            let style = r.resolved_layer().style();
            let keyword = keyword::resolve(&r.slug);
            let position = site.schedule().position(&r.slug);
            if json {
                return print_json(&serde_json::json!({
                    "record": r,
                    "style": style,
                    "image_keyword": keyword,
                    "scheduled_position": position,
                }));
            }
            println!("{} ({})", r.name, r.slug);
            println!("  layer:       {} ({})", r.layer, r.resolved_layer());
            println!("  version:     {}", r.version);
            println!("  description: {}", r.description);
            println!("  accent:      {}", style.text_accent);
            println!("  keyword:     {keyword}");
            match position {
                Some(p) => println!("  roadmap:     #{}", p + 1),
                None => println!("  roadmap:     not scheduled"),
            }
        }
    }
    Ok(())
}
