//! Tag/subtag taxonomy of the research database
//!
//! The site organizes publications under broad research categories (tags,
//! e.g. `stressor`) each split into narrower categories (subtags, e.g.
//! `chemicals`). The crawler walks tags and subtags in declared order.

use serde::{Deserialize, Serialize};

/// One tag and its subtags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub tag: String,
    pub subtags: Vec<String>,
}

/// Ordered mapping from tag to subtags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy(Vec<TagEntry>);

impl Taxonomy {
    pub fn new(entries: Vec<TagEntry>) -> Self {
        Self(entries)
    }

    /// Convenience constructor from string slices
    ///
    /// ```
    /// use tethys::config::Taxonomy;
    ///
    /// let taxonomy = Taxonomy::from_pairs(&[("stressor", &["chemicals", "noise"])]);
    /// assert_eq!(taxonomy.subtag_count(), 2);
    /// ```
    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(tag, subtags)| TagEntry {
                    tag: tag.to_string(),
                    subtags: subtags.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        )
    }

    /// The Tethys taxonomy as of the current site layout
    pub fn tethys() -> Self {
        Self::from_pairs(&[
            (
                "stressor",
                &[
                    "chemicals",
                    "dynamic-device",
                    "emf",
                    "energy-removal",
                    "lighting",
                    "noise",
                    "static-device",
                ],
            ),
            (
                "receptor",
                &[
                    "bats",
                    "benthic-invertebrates",
                    "birds",
                    "ground-nesting-birds",
                    "passerines",
                    "raptors",
                    "seabirds",
                    "shorebirds",
                    "waterfowl",
                    "ecosystem",
                    "fish",
                    "marine-mammals",
                    "sea-turtles",
                    "terrestrial-mammals",
                    "farfield-environment",
                    "nearfield-habitat",
                    "socio-economics",
                    "aesthetics",
                    "climate-change",
                    "fishing",
                    "legal-and-policy",
                    "navigation",
                    "recreation",
                    "stakeholder-engagement",
                ],
            ),
            (
                "technology-type",
                &[
                    "marine-energy-general",
                    "riverine",
                    "ocean-current",
                    "otec",
                    "salinity-gradient",
                    "tidal",
                    "wave",
                    "wind-energy-general",
                    "land-based-wind",
                    "offshore-wind",
                ],
            ),
            (
                "interactions",
                &[
                    "attraction",
                    "avoidance",
                    "changes-sediment-transport",
                    "changes-water-quality",
                    "collisionevasion",
                    "entrapment",
                ],
            ),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagEntry> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tag_count(&self) -> usize {
        self.0.len()
    }

    pub fn subtag_count(&self) -> usize {
        self.0.iter().map(|e| e.subtags.len()).sum()
    }

    /// Subtags of `tag`, if present
    pub fn subtags(&self, tag: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|e| e.tag == tag)
            .map(|e| e.subtags.as_slice())
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::tethys()
    }
}
