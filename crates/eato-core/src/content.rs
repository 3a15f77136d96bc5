//! Shipped EatoSystems content, written to `.eato/` by `eato init`.

use crate::carousel::{Carousel, CarouselStep};
use crate::catalog::{Catalog, CatalogRecord};
use crate::config::Config;
use crate::schedule::{Schedule, ScheduleEntry};
use crate::types::Layer;

pub const SITE_NAME: &str = "EatoSystems";

pub fn config() -> Config {
    let mut cfg = Config::new(SITE_NAME);
    cfg.site.description = Some(
        "A 1-year journey launching 12 interconnected systems to transform the global food ecosystem."
            .to_string(),
    );
    cfg
}

pub fn catalog() -> Catalog {
    let r = CatalogRecord::new;
    Catalog::new(vec![
        r(
            "eatoglobal",
            "EatoGlobal",
            Layer::Soil,
            "v1.0",
            "The foundational movement layer connecting people, places and food systems worldwide.",
        ),
        r(
            "eatoagent",
            "EatoAgent",
            Layer::Seed,
            "v2.0",
            "AI agents that support decisions across every part of the food system.",
        ),
        r(
            "eatoindex",
            "EatoIndex",
            Layer::Pollination,
            "v3.0",
            "A financial index that aligns capital with regenerative outcomes.",
        ),
        r(
            "eatoverse",
            "EatoVerse",
            Layer::Root,
            "v4.0",
            "A digital twin for prototyping and stress-testing food systems.",
        ),
        r(
            "eatobotics",
            "EatoBotics",
            Layer::Sprout,
            "v5.0",
            "Regenerative robotics focused on soil health and low-impact farming.",
        ),
        r(
            "eatotransit",
            "EatoTransit",
            Layer::Flow,
            "v6.0",
            "Clean-energy logistics with end-to-end traceability.",
        ),
        r(
            "eatoai",
            "EatoAI",
            Layer::Mycelium,
            "v7.0",
            "A decentralized intelligence layer coordinating food networks.",
        ),
        r(
            "eatofund",
            "EatoFund",
            Layer::Crop,
            "v8.0",
            "A regenerative capital engine for agricultural innovation.",
        ),
        r(
            "eatosystem",
            "EatoSystem",
            Layer::Harvest,
            "v9.0",
            "The full-stack, national-scale implementation of the ecosystem.",
        ),
        r(
            "eatogov",
            "EatoGov",
            Layer::Regeneration,
            "v10.0",
            "Governance and licensing framework for participating systems.",
        ),
        r(
            "eatosecure",
            "EatoSecure",
            Layer::Canopy,
            "v11.0",
            "A global food security program.",
        ),
        r(
            "eatofoundation",
            "EatoFoundation",
            Layer::Sanctuary,
            "v12.0",
            "Long-term stewardship of the whole ecosystem.",
        ),
    ])
}

pub fn schedule() -> Schedule {
    let e = ScheduleEntry::upcoming;
    Schedule::new(vec![
        e(
            "eatoglobal",
            "September 2025",
            "The foundational layer launching our global movement",
        ),
        e(
            "eatoagent",
            "October 2025",
            "AI agents to support food system decisions",
        ),
        e(
            "eatoindex",
            "November 2025",
            "Financial index aligning capital with regeneration",
        ),
        e(
            "eatoverse",
            "December 2025",
            "Digital twin for prototyping food systems",
        ),
        e(
            "eatobotics",
            "January 2026",
            "Regenerative robotics for soil health",
        ),
        e(
            "eatotransit",
            "February 2026",
            "Clean energy logistics and traceability",
        ),
        e(
            "eatoai",
            "March 2026",
            "Decentralized intelligence coordination",
        ),
        e("eatofund", "April 2026", "Regenerative capital engine"),
        e(
            "eatosystem",
            "May 2026",
            "Full-stack national implementation",
        ),
        e("eatogov", "June 2026", "Governance and licensing framework"),
        e("eatosecure", "July 2026", "Global food security program"),
        e(
            "eatofoundation",
            "September 2026",
            "Long-term stewardship and governance",
        ),
    ])
}

fn step(title: &str, description: &str) -> CarouselStep {
    CarouselStep {
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub fn carousels() -> Vec<Carousel> {
    vec![
        Carousel {
            slug: "framework-steps".to_string(),
            period_ms: 4000,
            steps: vec![
                step(
                    "Define Core Objectives",
                    "Establish ethical principles, technical requirements, and success metrics for decentralized intelligence layer.",
                ),
                step(
                    "Open Data & Research Integration",
                    "Integrate diverse datasets and research findings while ensuring privacy, security, and ethical use of information.",
                ),
                step(
                    "Design & Build in Public",
                    "Develop federated learning systems, transparent algorithms, and coordination mechanisms with community input.",
                ),
                step(
                    "Pilot & Feedback Loop",
                    "Deploy early versions in controlled environments, gather feedback, and iterate based on real-world performance.",
                ),
                step(
                    "Scale & Global Deployment",
                    "Expand the system to connect diverse food networks worldwide while maintaining local autonomy and control.",
                ),
            ],
        },
        Carousel {
            slug: "fund-features".to_string(),
            period_ms: 5000,
            steps: vec![
                step(
                    "Impact Investing",
                    "Strategic investment in agricultural innovations that generate positive social and environmental impact alongside financial returns.",
                ),
                step(
                    "Growth Capital",
                    "Scaling innovative agricultural technologies and sustainable farming practices through strategic funding and partnership.",
                ),
                step(
                    "Portfolio Diversification",
                    "Balanced investment across the entire agricultural value chain, from farm-level innovations to global distribution systems.",
                ),
                step(
                    "Community Investment",
                    "Direct investment in farming communities and local food systems to build resilient, sustainable agricultural economies.",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword;

    #[test]
    fn every_scheduled_system_is_catalogued() {
        let catalog = catalog();
        for entry in schedule().entries() {
            assert!(catalog.contains(&entry.slug), "missing {}", entry.slug);
        }
    }

    #[test]
    fn twelve_systems_twelve_layers() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 12);
        let mut layers: Vec<_> = catalog.records().iter().map(|r| r.layer.clone()).collect();
        layers.sort();
        layers.dedup();
        assert_eq!(layers.len(), 12);
    }

    #[test]
    fn keyword_table_agrees_with_catalog_layers() {
        for r in catalog().records() {
            assert_eq!(keyword::resolve(&r.slug), r.resolved_layer().keyword());
        }
    }

    #[test]
    fn carousel_lengths_and_periods() {
        let all = carousels();
        assert_eq!(all[0].len(), 5);
        assert_eq!(all[0].period_ms, 4000);
        assert_eq!(all[1].len(), 4);
        assert_eq!(all[1].period_ms, 5000);
    }
}
