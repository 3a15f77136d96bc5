use crate::catalog::Catalog;
use crate::config::AssetConfig;
use crate::error::{EatoError, IntegrityIssue, Result};
use crate::keyword;
use crate::schedule::Schedule;
use crate::style::{self, LayerStyle};
use crate::types::{LaunchStatus, Side};
use serde::Serialize;

// ---------------------------------------------------------------------------
// TimelineCard
// ---------------------------------------------------------------------------

/// Navigation targets derived from a card's slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLinks {
    pub details: String,
    pub roadmap: String,
    pub lab: String,
}

impl CardLinks {
    pub fn for_slug(slug: &str) -> Self {
        Self {
            details: format!("/{slug}"),
            roadmap: format!("/roadmap/{slug}"),
            lab: format!("/{slug}-lab"),
        }
    }
}

/// Render-ready join of a schedule entry, its catalog record and its style.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineCard {
    pub position: usize,
    pub side: Side,
    pub slug: String,
    pub name: String,
    pub layer: String,
    pub version: String,
    pub system_description: String,
    pub launch_date: String,
    pub quarter: String,
    pub status: LaunchStatus,
    pub description: String,
    pub style: LayerStyle,
    pub image_keyword: &'static str,
    pub image_path: String,
    pub placeholder_path: String,
    pub links: CardLinks,
}

// ---------------------------------------------------------------------------
// Join
// ---------------------------------------------------------------------------

/// Every schedule entry whose slug has no catalog record, in schedule order.
pub fn missing_records(schedule: &Schedule, catalog: &Catalog) -> Vec<IntegrityIssue> {
    schedule
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, e)| !catalog.contains(&e.slug))
        .map(|(position, e)| IntegrityIssue::MissingCatalogRecord {
            slug: e.slug.clone(),
            position,
        })
        .collect()
}

/// Join `schedule` with `catalog` using the default asset layout.
pub fn build(schedule: &Schedule, catalog: &Catalog) -> Result<Vec<TimelineCard>> {
    build_with(schedule, catalog, &AssetConfig::default())
}

/// Join `schedule` with `catalog`. Output order is schedule order.
///
/// Fails with [`EatoError::Integrity`] listing every entry that references a
/// slug absent from the catalog; no partial timeline is produced.
pub fn build_with(
    schedule: &Schedule,
    catalog: &Catalog,
    assets: &AssetConfig,
) -> Result<Vec<TimelineCard>> {
    let missing = missing_records(schedule, catalog);
    if !missing.is_empty() {
        return Err(EatoError::Integrity(missing));
    }

    schedule
        .entries()
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let record = catalog.get(&entry.slug)?;
            Ok(TimelineCard {
                position,
                side: Side::for_position(position),
                slug: entry.slug.clone(),
                name: record.name.clone(),
                layer: record.layer.clone(),
                version: record.version.clone(),
                system_description: record.description.clone(),
                launch_date: entry.launch_date.clone(),
                quarter: entry.quarter.clone(),
                status: entry.status.clone(),
                description: entry.description.clone(),
                style: style::resolve(&record.layer),
                image_keyword: keyword::resolve(&entry.slug),
                image_path: keyword::image_path(&assets.image_base, &entry.slug),
                placeholder_path: placeholder_path(assets, &record.name),
                links: CardLinks::for_slug(&entry.slug),
            })
        })
        .collect()
}

/// Fallback image URL labelled with the system's display name.
pub fn placeholder_path(assets: &AssetConfig, label: &str) -> String {
    format!(
        "/placeholder.svg?height={}&width={}&text={}",
        assets.placeholder_height,
        assets.placeholder_width,
        urlencoding::encode(label)
    )
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapSummary {
    pub systems: usize,
    pub first_launch: Option<String>,
    pub final_launch: Option<String>,
}

/// Headline numbers for the roadmap stats band.
pub fn summary(cards: &[TimelineCard]) -> RoadmapSummary {
    RoadmapSummary {
        systems: cards.len(),
        first_launch: cards.first().map(|c| c.launch_date.clone()),
        final_launch: cards.last().map(|c| c.launch_date.clone()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogRecord;
    use crate::schedule::ScheduleEntry;
    use crate::types::Layer;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogRecord::new("eatoglobal", "EatoGlobal", Layer::Soil, "v1.0", "Foundations"),
            CatalogRecord::new("eatoagent", "EatoAgent", Layer::Seed, "v2.0", "Agents"),
            CatalogRecord::new("eatoindex", "EatoIndex", Layer::Pollination, "v3.0", "Index"),
        ])
    }

    #[test]
    fn single_entry_scenario() {
        let catalog = Catalog::new(vec![CatalogRecord::new(
            "eatoglobal",
            "EatoGlobal",
            Layer::Soil,
            "v1.0",
            "",
        )]);
        let schedule = Schedule::new(vec![ScheduleEntry::upcoming(
            "eatoglobal",
            "September 2025",
            "...",
        )]);

        let cards = build(&schedule, &catalog).unwrap();
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.name, "EatoGlobal");
        assert_eq!(card.style.text_accent, "text-green-600");
        assert_eq!(card.image_keyword, "soil");
        assert_eq!(card.quarter, "September 2025");
        assert_eq!(card.status, LaunchStatus::Upcoming);
    }

    #[test]
    fn output_order_is_schedule_order() {
        let schedule = Schedule::new(vec![
            ScheduleEntry::upcoming("eatoindex", "November 2025", ""),
            ScheduleEntry::upcoming("eatoglobal", "September 2025", ""),
            ScheduleEntry::upcoming("eatoagent", "October 2025", ""),
        ]);
        let cards = build(&schedule, &catalog()).unwrap();
        let slugs: Vec<_> = cards.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["eatoindex", "eatoglobal", "eatoagent"]);
        for (i, c) in cards.iter().enumerate() {
            assert_eq!(c.position, i);
        }
    }

    #[test]
    fn card_fields_match_catalog() {
        let catalog = catalog();
        let schedule = Schedule::new(vec![
            ScheduleEntry::upcoming("eatoglobal", "September 2025", "Roadmap blurb"),
            ScheduleEntry::upcoming("eatoagent", "October 2025", ""),
        ]);
        let cards = build(&schedule, &catalog).unwrap();
        for (k, card) in cards.iter().enumerate() {
            let record = catalog.get(&schedule.entries()[k].slug).unwrap();
            assert_eq!(card.name, record.name);
            assert_eq!(card.layer, record.layer);
            assert_eq!(card.version, record.version);
            assert_eq!(card.system_description, record.description);
        }
        // the roadmap description is the schedule's, not the catalog's
        assert_eq!(cards[0].description, "Roadmap blurb");
    }

    #[test]
    fn missing_record_is_an_integrity_error() {
        let schedule = Schedule::new(vec![
            ScheduleEntry::upcoming("eatoglobal", "September 2025", ""),
            ScheduleEntry::upcoming("eatoundefined", "October 2025", ""),
            ScheduleEntry::upcoming("eatoghost", "November 2025", ""),
        ]);
        let err = build(&schedule, &catalog()).unwrap_err();
        match err {
            EatoError::Integrity(issues) => {
                assert_eq!(
                    issues,
                    vec![
                        IntegrityIssue::MissingCatalogRecord {
                            slug: "eatoundefined".into(),
                            position: 1
                        },
                        IntegrityIssue::MissingCatalogRecord {
                            slug: "eatoghost".into(),
                            position: 2
                        },
                    ]
                );
            }
            other => panic!("expected integrity error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_layer_and_unmapped_slug_fall_back() {
        let catalog = Catalog::new(vec![CatalogRecord {
            slug: "eatonew".into(),
            name: "Eato New".into(),
            layer: "BEDROCK".into(),
            version: "v13.0".into(),
            description: String::new(),
        }]);
        let schedule = Schedule::new(vec![ScheduleEntry::upcoming("eatonew", "2027", "")]);
        let cards = build(&schedule, &catalog).unwrap();
        assert_eq!(cards[0].style, Layer::Soil.style());
        assert_eq!(cards[0].image_keyword, "soil");
        assert_eq!(cards[0].image_path, "/images/systems/eatonew-soil.png");
        assert_eq!(
            cards[0].placeholder_path,
            "/placeholder.svg?height=192&width=400&text=Eato%20New"
        );
    }

    #[test]
    fn sides_and_links() {
        let schedule = Schedule::new(vec![
            ScheduleEntry::upcoming("eatoglobal", "September 2025", ""),
            ScheduleEntry::upcoming("eatoagent", "October 2025", ""),
        ]);
        let cards = build(&schedule, &catalog()).unwrap();
        assert_eq!(cards[0].side, Side::Left);
        assert_eq!(cards[1].side, Side::Right);
        assert_eq!(cards[1].links, CardLinks::for_slug("eatoagent"));
        assert_eq!(cards[1].links.details, "/eatoagent");
        assert_eq!(cards[1].links.roadmap, "/roadmap/eatoagent");
        assert_eq!(cards[1].links.lab, "/eatoagent-lab");
    }

    #[test]
    fn custom_assets_flow_into_paths() {
        let assets = AssetConfig {
            image_base: "/static/img".into(),
            placeholder_width: 640,
            placeholder_height: 320,
            ..AssetConfig::default()
        };
        let schedule = Schedule::new(vec![ScheduleEntry::upcoming("eatoagent", "October 2025", "")]);
        let cards = build_with(&schedule, &catalog(), &assets).unwrap();
        assert_eq!(cards[0].image_path, "/static/img/eatoagent-seed.png");
        assert!(cards[0].placeholder_path.starts_with("/placeholder.svg?height=320&width=640"));
    }

    #[test]
    fn summary_uses_first_and_last_cards() {
        let schedule = Schedule::new(vec![
            ScheduleEntry::upcoming("eatoglobal", "September 2025", ""),
            ScheduleEntry::upcoming("eatoagent", "October 2025", ""),
            ScheduleEntry::upcoming("eatoindex", "November 2025", ""),
        ]);
        let cards = build(&schedule, &catalog()).unwrap();
        let s = summary(&cards);
        assert_eq!(s.systems, 3);
        assert_eq!(s.first_launch.as_deref(), Some("September 2025"));
        assert_eq!(s.final_launch.as_deref(), Some("November 2025"));

        let empty = summary(&[]);
        assert_eq!(empty.systems, 0);
        assert!(empty.first_launch.is_none());
    }
}
