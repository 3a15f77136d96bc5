//! Layer → style bundle resolution.
//!
//! Class names are Tailwind utility classes consumed verbatim by the page markup.

use crate::types::Layer;
use serde::Serialize;

/// Style attributes a card uses for its layer badge, heading and image backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayerStyle {
    pub bg_light: &'static str,
    pub text_accent: &'static str,
    pub gradient_text: &'static str,
    pub bg_gradient_image: &'static str,
}

impl Layer {
    pub fn style(self) -> LayerStyle {
        match self {
            Layer::Soil => LayerStyle {
                bg_light: "bg-green-50",
                text_accent: "text-green-600",
                gradient_text: "from-green-600 to-emerald-500",
                bg_gradient_image: "bg-gradient-to-r from-green-500/10 to-emerald-500/10",
            },
            Layer::Seed => LayerStyle {
                bg_light: "bg-yellow-50",
                text_accent: "text-yellow-600",
                gradient_text: "from-yellow-600 to-amber-500",
                bg_gradient_image: "bg-gradient-to-r from-yellow-500/10 to-amber-500/10",
            },
            Layer::Pollination => LayerStyle {
                bg_light: "bg-pink-50",
                text_accent: "text-pink-600",
                gradient_text: "from-pink-600 to-rose-500",
                bg_gradient_image: "bg-gradient-to-r from-pink-500/10 to-rose-500/10",
            },
            Layer::Root => LayerStyle {
                bg_light: "bg-purple-50",
                text_accent: "text-purple-600",
                gradient_text: "from-purple-600 to-indigo-500",
                bg_gradient_image: "bg-gradient-to-r from-purple-500/10 to-indigo-500/10",
            },
            Layer::Sprout => LayerStyle {
                bg_light: "bg-blue-50",
                text_accent: "text-blue-600",
                gradient_text: "from-blue-600 to-sky-500",
                bg_gradient_image: "bg-gradient-to-r from-blue-500/10 to-sky-500/10",
            },
            Layer::Flow => LayerStyle {
                bg_light: "bg-teal-50",
                text_accent: "text-teal-600",
                gradient_text: "from-teal-600 to-cyan-500",
                bg_gradient_image: "bg-gradient-to-r from-teal-500/10 to-cyan-500/10",
            },
            Layer::Mycelium => LayerStyle {
                bg_light: "bg-violet-50",
                text_accent: "text-violet-600",
                gradient_text: "from-violet-600 to-purple-500",
                bg_gradient_image: "bg-gradient-to-r from-violet-500/10 to-purple-500/10",
            },
            Layer::Crop => LayerStyle {
                bg_light: "bg-amber-50",
                text_accent: "text-amber-600",
                gradient_text: "from-amber-600 to-orange-500",
                bg_gradient_image: "bg-gradient-to-r from-amber-500/10 to-orange-500/10",
            },
            Layer::Harvest => LayerStyle {
                bg_light: "bg-orange-50",
                text_accent: "text-orange-600",
                gradient_text: "from-orange-600 to-amber-500",
                bg_gradient_image: "bg-gradient-to-r from-orange-500/10 to-amber-500/10",
            },
            Layer::Regeneration => LayerStyle {
                bg_light: "bg-emerald-50",
                text_accent: "text-emerald-600",
                gradient_text: "from-emerald-600 to-green-500",
                bg_gradient_image: "bg-gradient-to-r from-emerald-500/10 to-green-500/10",
            },
            Layer::Canopy => LayerStyle {
                bg_light: "bg-red-50",
                text_accent: "text-red-600",
                gradient_text: "from-red-600 to-rose-500",
                bg_gradient_image: "bg-gradient-to-r from-red-500/10 to-rose-500/10",
            },
            Layer::Sanctuary => LayerStyle {
                bg_light: "bg-indigo-50",
                text_accent: "text-indigo-600",
                gradient_text: "from-indigo-600 to-blue-500",
                bg_gradient_image: "bg-gradient-to-r from-indigo-500/10 to-blue-500/10",
            },
        }
    }
}

/// Style for a layer tag. Unknown tags get the default (SOIL) bundle.
pub fn resolve(layer: &str) -> LayerStyle {
    Layer::resolve(layer).style()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
