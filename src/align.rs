//! Aligns an origin ranking and a target ranking by country name
//!
//! The output lists every country once: origin countries in their ranked
//! order, then countries that only appear in the target ranking. A country
//! missing from one side gets 0 for that side.

use std::collections::HashMap;

use crate::radar::RankedEntry;

/// Parallel country/value sequences ready for a grouped bar chart
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignedSeries {
    pub countries: Vec<String>,
    pub source_values: Vec<f64>,
    pub target_values: Vec<f64>,
}

impl AlignedSeries {
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Largest value on either side, 0 for an empty series
    pub fn max_value(&self) -> f64 {
        self.source_values
            .iter()
            .chain(self.target_values.iter())
            .copied()
            .fold(0.0, f64::max)
    }
}

/// Insertion-ordered name -> value lookup
///
/// The first entry for a name wins; later duplicates are ignored.
struct ValueLookup<'a> {
    order: Vec<&'a str>,
    values: HashMap<&'a str, f64>,
}

impl<'a> ValueLookup<'a> {
    fn build(entries: &'a [RankedEntry]) -> Self {
        let mut order = Vec::with_capacity(entries.len());
        let mut values = HashMap::with_capacity(entries.len());

        for entry in entries {
            let (Some(name), Some(value)) = (entry.country_name.as_deref(), entry.value) else {
                continue;
            };
            if values.contains_key(name) {
                log::debug!("Ignoring duplicate ranking entry for {}", name);
                continue;
            }
            values.insert(name, value);
            order.push(name);
        }

        Self { order, values }
    }

    fn get(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

/// Merge two rankings into index-aligned series
pub fn align(source: &[RankedEntry], target: &[RankedEntry]) -> AlignedSeries {
    let source_lookup = ValueLookup::build(source);
    let target_lookup = ValueLookup::build(target);

    let countries: Vec<&str> = source_lookup
        .order
        .iter()
        .copied()
        .chain(
            target_lookup
                .order
                .iter()
                .copied()
                .filter(|name| !source_lookup.contains(name)),
        )
        .collect();

    AlignedSeries {
        source_values: countries.iter().map(|c| source_lookup.get(c)).collect(),
        target_values: countries.iter().map(|c| target_lookup.get(c)).collect(),
        countries: countries.into_iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: f64) -> RankedEntry {
        RankedEntry {
            country_code: None,
            country_name: Some(name.to_string()),
            value: Some(value),
            value_text: None,
            rank: None,
        }
    }

    #[test]
    fn test_example_alignment() {
        let s = vec![entry("A", 10.0), entry("B", 5.0)];
        let t = vec![entry("B", 3.0), entry("C", 7.0)];
        let aligned = align(&s, &t);
        assert_eq!(aligned.countries, vec!["A", "B", "C"]);
        assert_eq!(aligned.source_values, vec![10.0, 5.0, 0.0]);
        assert_eq!(aligned.target_values, vec![0.0, 3.0, 7.0]);
    }

    #[test]
    fn test_empty_inputs() {
        let aligned = align(&[], &[]);
        assert!(aligned.countries.is_empty());
        assert!(aligned.source_values.is_empty());
        assert!(aligned.target_values.is_empty());
        assert_eq!(aligned.max_value(), 0.0);
    }

    #[test]
    fn test_one_sided_inputs() {
        let s = vec![entry("A", 1.0), entry("B", 2.0)];
        let only_source = align(&s, &[]);
        assert_eq!(only_source.target_values, vec![0.0, 0.0]);

        let only_target = align(&[], &s);
        assert_eq!(only_target.countries, vec!["A", "B"]);
        assert_eq!(only_target.source_values, vec![0.0, 0.0]);
        assert_eq!(only_target.target_values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_target_only_names_come_last() {
        let s = vec![entry("US", 9.0), entry("CN", 8.0), entry("RU", 7.0)];
        let t = vec![entry("DE", 6.0), entry("CN", 5.0), entry("FR", 4.0)];
        let aligned = align(&s, &t);
        assert_eq!(aligned.countries, vec!["US", "CN", "RU", "DE", "FR"]);
        assert_eq!(aligned.source_values, vec![9.0, 8.0, 7.0, 0.0, 0.0]);
        assert_eq!(aligned.target_values, vec![0.0, 5.0, 0.0, 6.0, 4.0]);
    }

    #[test]
    fn test_missing_name_or_value_dropped_zero_kept() {
        let s = vec![
            RankedEntry { country_name: None, value: Some(4.0), ..Default::default() },
            RankedEntry { country_name: Some("X".into()), value: None, ..Default::default() },
            entry("Z", 0.0),
        ];
        let aligned = align(&s, &[]);
        assert_eq!(aligned.countries, vec!["Z"]);
        assert_eq!(aligned.source_values, vec![0.0]);
    }

    #[test]
    fn test_duplicates_keep_first() {
        let s = vec![entry("A", 10.0), entry("B", 5.0), entry("A", 1.0)];
        let t = vec![entry("C", 2.0), entry("C", 3.0)];
        let aligned = align(&s, &t);
        assert_eq!(aligned.countries, vec!["A", "B", "C"]);
        assert_eq!(aligned.source_values, vec![10.0, 5.0, 0.0]);
        assert_eq!(aligned.target_values, vec![0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_lengths_match_and_no_repeats() {
        let s: Vec<_> = (0..20).map(|i| entry(&format!("c{}", i % 7), i as f64)).collect();
        let t: Vec<_> = (0..15).map(|i| entry(&format!("c{}", i % 11), i as f64)).collect();
        let aligned = align(&s, &t);
        assert_eq!(aligned.countries.len(), aligned.source_values.len());
        assert_eq!(aligned.countries.len(), aligned.target_values.len());

        let mut unique = aligned.countries.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), aligned.len());
    }

    #[test]
    fn test_idempotent() {
        let s = vec![entry("A", 1.5), entry("B", 2.5)];
        let t = vec![entry("B", 0.5), entry("D", 4.0)];
        assert_eq!(align(&s, &t), align(&s, &t));
    }
}
