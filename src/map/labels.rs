//! Country-name reconciliation and label planning
//!
//! The boundary dataset and the label tables spell country names
//! differently. [`Reconciler`] maps a dataset name to its canonical label
//! name and decides where and how large its label is drawn.
//!
//! Labels are planned in ordered passes over a shared set of claimed
//! canonical names, so no country is labeled twice:
//!
//! 1. [`LabelPass::Major`] draws the fixed list of major countries.
//! 2. [`LabelPass::Flagged`] labels each flagged country not already claimed.

use std::collections::{BTreeSet, HashSet};

use super::boundary::BoundaryFeature;
use crate::reference::{self, LabelOverride, MajorLabel};

/// Where and how a label is drawn (map coordinates are degrees)
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Points
    pub font_size: f64,
}

impl From<&LabelOverride> for LabelPlacement {
    fn from(o: &LabelOverride) -> Self {
        Self {
            text: o.label.to_string(),
            x: o.x,
            y: o.y,
            font_size: o.font_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPass {
    Major,
    Flagged,
}

impl LabelPass {
    /// Passes in drawing order
    pub const ORDER: [LabelPass; 2] = [LabelPass::Major, LabelPass::Flagged];
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub canonical: String,
    pub placement: LabelPlacement,
    pub pass: LabelPass,
}

/// Font size tier for a shape of the given area (square metres)
pub fn font_size_for_area(area_m2: f64) -> f64 {
    if area_m2 > 2e12 {
        13.0
    } else if area_m2 > 5e11 {
        10.0
    } else if area_m2 > 1e11 {
        8.0
    } else if area_m2 > 5e10 {
        7.0
    } else {
        5.0
    }
}

/// Maps boundary-dataset names onto canonical labels
///
/// Backed by the static tables in [`crate::reference`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler;

impl Reconciler {
    pub fn new() -> Self {
        Self
    }

    /// Canonical name for a dataset name; unknown names map to themselves
    pub fn canonical_name(&self, native: &str) -> String {
        let upper = native.trim().to_uppercase();
        match reference::alias_for(&upper) {
            Some(canonical) => canonical.to_string(),
            None => upper,
        }
    }

    /// Label placement for a feature
    ///
    /// A hand-tuned override wins outright. Otherwise the label sits on the
    /// shape's interior point, sized by area. Returns None only when the
    /// shape is empty and has no interior point.
    pub fn canonicalize(&self, feature: &BoundaryFeature) -> Option<LabelPlacement> {
        let canonical = self.canonical_name(&feature.name);
        self.placement_for(&canonical, feature)
    }

    fn placement_for(&self, canonical: &str, feature: &BoundaryFeature) -> Option<LabelPlacement> {
        if let Some(o) = reference::override_for(canonical) {
            return Some(o.into());
        }

        let point = feature.representative_point()?;
        let text = reference::abbreviation_for(canonical).unwrap_or(canonical).to_string();

        Some(LabelPlacement {
            text,
            x: point.x(),
            y: point.y(),
            font_size: font_size_for_area(feature.area_m2()),
        })
    }

    /// Text drawn for a major label: the override's short form if there is one
    fn major_placement(&self, major: &MajorLabel) -> LabelPlacement {
        let text = reference::override_for(major.name).map(|o| o.label).unwrap_or(major.name);
        LabelPlacement {
            text: text.to_string(),
            x: major.x,
            y: major.y,
            font_size: major.font_size,
        }
    }

    /// Plan every label for the map, in drawing order
    pub fn plan_labels(&self, features: &[BoundaryFeature], flagged_alpha3: &BTreeSet<String>) -> Vec<PlacedLabel> {
        let mut claimed: HashSet<String> = HashSet::new();
        let mut placed = Vec::new();

        for pass in LabelPass::ORDER {
            match pass {
                LabelPass::Major => {
                    for major in reference::major_labels() {
                        if !claimed.insert(major.name.to_string()) {
                            continue;
                        }
                        placed.push(PlacedLabel {
                            canonical: major.name.to_string(),
                            placement: self.major_placement(major),
                            pass,
                        });
                    }
                }
                LabelPass::Flagged => {
                    for feature in features.iter().filter(|f| flagged_alpha3.contains(&f.alpha3)) {
                        let canonical = self.canonical_name(&feature.name);
                        if claimed.contains(&canonical) {
                            continue;
                        }
                        let Some(placement) = self.placement_for(&canonical, feature) else {
                            log::debug!("No label position for {}", feature.name);
                            continue;
                        };
                        claimed.insert(canonical.clone());
                        placed.push(PlacedLabel {
                            canonical,
                            placement,
                            pass,
                        });
                    }
                }
            }
        }

        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::boundary::tests::square;

    fn flagged(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_canonical_names() {
        let r = Reconciler::new();
        assert_eq!(r.canonical_name("United States of America"), "UNITED STATES");
        assert_eq!(r.canonical_name("CONGO, DEMOCRATIC REPUBLIC OF THE"), "DR CONGO");
        assert_eq!(r.canonical_name("Dem. Rep. Congo"), "DR CONGO");
        // Identity fallback
        assert_eq!(r.canonical_name("Peru"), "PERU");
    }

    #[test]
    fn test_canonicalize_united_states_label() {
        let r = Reconciler::new();
        let us = square("UNITED STATES OF AMERICA", "USA", -120.0, 30.0, 20.0);
        let placement = r.canonicalize(&us).unwrap();
        assert_eq!(placement.text, "UNITED STATES");
        assert_eq!(placement.font_size, 13.0);
    }

    #[test]
    fn test_override_used_verbatim() {
        let r = Reconciler::new();
        let nl = square("Netherlands", "NLD", 3.0, 50.0, 3.0);
        let placement = r.canonicalize(&nl).unwrap();
        assert_eq!(
            placement,
            LabelPlacement {
                text: "NETH.".to_string(),
                x: 2.0,
                y: 54.0,
                font_size: 5.0
            }
        );
    }

    #[test]
    fn test_default_placement_uses_abbreviation_and_interior() {
        let r = Reconciler::new();
        let sa = square("Saudi Arabia", "SAU", 40.0, 15.0, 1.0);
        let placement = r.canonicalize(&sa).unwrap();
        assert_eq!(placement.text, "S. ARABIA");
        assert!(placement.x > 40.0 && placement.x < 41.0);
        assert!(placement.y > 15.0 && placement.y < 16.0);
        assert_eq!(placement.font_size, 5.0);
    }

    #[test]
    fn test_font_size_tiers() {
        assert_eq!(font_size_for_area(3e12), 13.0);
        assert_eq!(font_size_for_area(2e12), 10.0);
        assert_eq!(font_size_for_area(6e11), 10.0);
        assert_eq!(font_size_for_area(2e11), 8.0);
        assert_eq!(font_size_for_area(6e10), 7.0);
        assert_eq!(font_size_for_area(1e10), 5.0);
        assert_eq!(font_size_for_area(0.0), 5.0);
    }

    #[test]
    fn test_major_labels_use_override_text() {
        let r = Reconciler::new();
        let plan = r.plan_labels(&[], &BTreeSet::new());
        let germany = plan.iter().find(|l| l.canonical == "GERMANY").unwrap();
        assert_eq!(germany.pass, LabelPass::Major);
        assert_eq!(germany.placement.text, "GER.");
        // Major coordinates, not the override's
        assert_eq!(germany.placement.x, 15.0);
        assert_eq!(germany.placement.font_size, 8.0);

        let canada = plan.iter().find(|l| l.canonical == "CANADA").unwrap();
        assert_eq!(canada.placement.text, "CANADA");
        assert_eq!(plan.len(), reference::major_labels().len());
    }

    #[test]
    fn test_flagged_pass_skips_claimed_names() {
        let r = Reconciler::new();
        let features = vec![
            square("United States of America", "USA", -120.0, 30.0, 20.0),
            square("Peru", "PER", -78.0, -12.0, 5.0),
            square("Chile", "CHL", -72.0, -40.0, 3.0),
        ];
        let plan = r.plan_labels(&features, &flagged(&["USA", "PER"]));

        let us_labels = plan.iter().filter(|l| l.canonical == "UNITED STATES").count();
        assert_eq!(us_labels, 1);

        let flagged_pass: Vec<_> = plan.iter().filter(|l| l.pass == LabelPass::Flagged).collect();
        assert_eq!(flagged_pass.len(), 1);
        assert_eq!(flagged_pass[0].canonical, "PERU");
        assert_eq!(flagged_pass[0].placement.text, "PERU");

        // Unflagged countries are not labeled
        assert!(plan.iter().all(|l| l.canonical != "CHILE"));
    }

    #[test]
    fn test_flagged_duplicates_labeled_once() {
        let r = Reconciler::new();
        let features = vec![
            square("Holy See", "VAT", 12.4, 41.9, 0.1),
            square("Vatican City", "VAT", 12.4, 41.9, 0.1),
        ];
        let plan = r.plan_labels(&features, &flagged(&["VAT"]));
        let vatican = plan.iter().filter(|l| l.canonical == "VATICAN CITY").count();
        assert_eq!(vatican, 1);
    }

    #[test]
    fn test_major_labels_come_first() {
        let r = Reconciler::new();
        let features = vec![square("Peru", "PER", -78.0, -12.0, 5.0)];
        let plan = r.plan_labels(&features, &flagged(&["PER"]));
        let first_flagged = plan.iter().position(|l| l.pass == LabelPass::Flagged).unwrap();
        assert!(plan[..first_flagged].iter().all(|l| l.pass == LabelPass::Major));
        assert_eq!(first_flagged, reference::major_labels().len());
    }
}
