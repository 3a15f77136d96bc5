use crate::output::{print_json, print_table, truncate};
use eato_core::selection::SelectionState;
use eato_core::timeline;
use std::path::Path;

pub fn run(root: &Path, expand: Option<&str>, json: bool) -> anyhow::Result<()> {
    let site = super::load_site(root)?;
    let cards = site.timeline()?;

    let mut selection = SelectionState::default();
    if let Some(slug) = expand {
        site.catalog().get(slug)?;
        selection.toggle(slug);
    }

    if json {
        return print_json(&serde_json::json!({
            "summary": timeline::summary(&cards),
            "selected_slug": selection.selected_slug(),
            "cards": cards,
        }));
    }

    let rows = cards
        .iter()
        .map(|c| {
            let marker = if selection.is_expanded(&c.slug) { "*" } else { "" };
            vec![
                marker.to_string(),
                (c.position + 1).to_string(),
                c.launch_date.clone(),
                c.name.clone(),
                c.layer.clone(),
                c.version.clone(),
                truncate(&c.description, 50),
            ]
        })
        .collect();
    print_table(
        &["", "#", "LAUNCH", "SYSTEM", "LAYER", "VERSION", "DESCRIPTION"],
        rows,
    );

    if let Some(card) = cards.iter().find(|c| selection.is_expanded(&c.slug)) {
        println!();
        println!("{} {} [{}]", card.name, card.version, card.layer);
        println!("  {}", card.system_description);
        println!("  launch:  {} ({})", card.launch_date, card.status);
        println!("  image:   {}", card.image_path);
        println!("  details: {}", card.links.details);
        println!("  roadmap: {}", card.links.roadmap);
        println!("  lab:     {}", card.links.lab);
    }

    let summary = timeline::summary(&cards);
    println!();
    println!(
        "{} systems, {} to {}",
        summary.systems,
        summary.first_launch.as_deref().unwrap_or("-"),
        summary.final_launch.as_deref().unwrap_or("-")
    );
    Ok(())
}
