use crate::output::{print_json, print_table};
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum CarouselSubcommand {
    /// List carousels with their step count and period
    List,
    /// Step a carousel's selection state through `--ticks` timer firings
    Simulate {
        slug: String,
        #[arg(long, default_value = "1")]
        ticks: usize,
    },
}

pub fn run(root: &Path, subcmd: CarouselSubcommand, json: bool) -> anyhow::Result<()> {
    let site = super::load_site(root)?;
    match subcmd {
        CarouselSubcommand::List => {
            let carousels = site.carousels();
            if json {
                return print_json(&carousels);
            }
            let rows = carousels
                .iter()
                .map(|c| {
                    vec![
                        c.slug.clone(),
                        c.len().to_string(),
                        format!("{}ms", c.period_ms),
                    ]
                })
                .collect();
            print_table(&["SLUG", "STEPS", "PERIOD"], rows);
        }
        CarouselSubcommand::Simulate { slug, ticks } => {
            let carousel = site.carousel(&slug)?;
            let mut state = carousel.selection();
            let mut frames = Vec::with_capacity(ticks);
            for tick in 1..=ticks {
                let index = state.tick();
                frames.push(serde_json::json!({
                    "tick": tick,
                    "elapsed_ms": tick as u64 * carousel.period_ms,
                    "active_index": index,
                    "title": carousel.steps[index].title,
                    "progress_percent": state.progress_percent(),
                }));
            }
            if json {
                return print_json(&serde_json::json!({
                    "carousel": carousel.slug,
                    "ticks": ticks,
                    "active_index": state.active_index(),
                    "frames": frames,
                }));
            }
            let rows = frames
                .iter()
                .map(|f| {
                    vec![
                        f["tick"].to_string(),
                        format!("{}ms", f["elapsed_ms"]),
                        f["active_index"].to_string(),
                        f["title"].as_str().unwrap_or_default().to_string(),
                        format!("{:.0}%", f["progress_percent"].as_f64().unwrap_or(0.0)),
                    ]
                })
                .collect();
            print_table(&["TICK", "ELAPSED", "INDEX", "STEP", "PROGRESS"], rows);
            println!();
            println!(
                "after {ticks} ticks: {} of {} active",
                state.active_index() + 1,
                carousel.len()
            );
        }
    }
    Ok(())
}
