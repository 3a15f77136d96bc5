use crate::output::print_json;
use clap::Subcommand;
use eato_core::keyword;
use eato_core::types::Layer;

#[derive(Subcommand)]
pub enum LayerSubcommand {
    /// Show the style bundle for a layer tag (unknown tags fall back to SOIL)
    Style { layer: String },
    /// Show the image keyword for a system slug (unknown slugs fall back to soil)
    Keyword { slug: String },
}

pub fn run(subcmd: LayerSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        LayerSubcommand::Style { layer } => {
            let resolved = Layer::resolve(&layer);
            let known = Layer::is_known(&layer);
            let style = resolved.style();
            if json {
                return print_json(&serde_json::json!({
                    "layer": layer,
                    "known": known,
                    "resolved": resolved,
                    "style": style,
                }));
            }
            if !known {
                println!("unknown layer '{layer}'; using {resolved}");
            }
            println!("{resolved}");
            println!("  bg_light:          {}", style.bg_light);
            println!("  text_accent:       {}", style.text_accent);
            println!("  gradient_text:     {}", style.gradient_text);
            println!("  bg_gradient_image: {}", style.bg_gradient_image);
        }
        LayerSubcommand::Keyword { slug } => {
            let mapped = keyword::is_mapped(&slug);
            let kw = keyword::resolve(&slug);
            if json {
                return print_json(&serde_json::json!({
                    "slug": slug,
                    "mapped": mapped,
                    "keyword": kw,
                }));
            }
            if mapped {
                println!("{kw}");
            } else {
                println!("{kw} (default; '{slug}' is not mapped)");
            }
        }
    }
    Ok(())
}
