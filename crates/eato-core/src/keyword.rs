//! System slug → image keyword resolution.
//!
//! This table is maintained separately from the catalog's layer field; the two
//! agree for the shipped content but nothing forces them to.

use crate::types::Layer;

const SLUG_LAYERS: &[(&str, Layer)] = &[
    ("eatoglobal", Layer::Soil),
    ("eatoagent", Layer::Seed),
    ("eatoindex", Layer::Pollination),
    ("eatoverse", Layer::Root),
    ("eatobotics", Layer::Sprout),
    ("eatotransit", Layer::Flow),
    ("eatoai", Layer::Mycelium),
    ("eatofund", Layer::Crop),
    ("eatosystem", Layer::Harvest),
    ("eatogov", Layer::Regeneration),
    ("eatosecure", Layer::Canopy),
    ("eatofoundation", Layer::Sanctuary),
];

/// Keyword returned for slugs missing from the table.
pub const DEFAULT_KEYWORD: &str = "soil";

/// Image keyword for `slug`, or `None` when the slug has no mapping.
pub fn lookup(slug: &str) -> Option<&'static str> {
    SLUG_LAYERS
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, layer)| layer.keyword())
}

/// Image keyword for `slug`. Total: unmapped slugs get [`DEFAULT_KEYWORD`].
pub fn resolve(slug: &str) -> &'static str {
    lookup(slug).unwrap_or(DEFAULT_KEYWORD)
}

pub fn is_mapped(slug: &str) -> bool {
    lookup(slug).is_some()
}

/// `{image_base}/{slug}-{keyword}.png`, with the slug lowercased.
pub fn image_path(image_base: &str, slug: &str) -> String {
    format!(
        "{}/{}-{}.png",
        image_base.trim_end_matches('/'),
        slug.to_lowercase(),
        resolve(slug)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_slugs() {
        assert_eq!(resolve("eatoglobal"), "soil");
        assert_eq!(resolve("eatoai"), "mycelium");
        assert_eq!(resolve("eatofoundation"), "sanctuary");
    }

    #[test]
    fn every_layer_used_once() {
        let mut keywords: Vec<_> = SLUG_LAYERS.iter().map(|(_, l)| l.keyword()).collect();
        keywords.sort_unstable();
        keywords.dedup();
        assert_eq!(keywords.len(), Layer::all().len());
    }

    #[test]
    fn unknown_slugs_get_default_keyword() {
        for slug in ["eatoundefined", "", "EATOGLOBAL", "eato-global"] {
            assert_eq!(resolve(slug), DEFAULT_KEYWORD, "slug {slug:?}");
            assert!(!is_mapped(slug));
        }
    }

    #[test]
    fn image_path_shape() {
        assert_eq!(
            image_path("/images/systems", "eatoglobal"),
            "/images/systems/eatoglobal-soil.png"
        );
        assert_eq!(
            image_path("/images/systems/", "eatotransit"),
            "/images/systems/eatotransit-flow.png"
        );
        // unknown slug still yields a complete path
        assert_eq!(
            image_path("/img", "eatonew"),
            "/img/eatonew-soil.png"
        );
    }
}
