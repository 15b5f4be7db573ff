// Flagged country set
// Every alpha-2 code that appears in any of the rankings, minus the
// suppressed codes (see reference::SUPPRESSED_CODES).

use std::collections::BTreeSet;

use crate::radar::RankedEntry;
use crate::reference;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlaggedCountrySet {
    codes: BTreeSet<String>,
}

impl FlaggedCountrySet {
    /// Collect codes from any number of ranking lists
    pub fn from_rankings<'a, I>(lists: I) -> Self
    where
        I: IntoIterator<Item = &'a [RankedEntry]>,
    {
        let mut codes = BTreeSet::new();
        for entry in lists.into_iter().flatten() {
            let Some(code) = entry.country_code.as_deref() else {
                continue;
            };
            let code = code.trim().to_uppercase();
            if code.is_empty() {
                continue;
            }
            if reference::is_suppressed(&code) {
                log::debug!("Not flagging suppressed country {}", code);
                continue;
            }
            codes.insert(code);
        }
        Self { codes }
    }

    /// Alpha-2 codes in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Translate to the alpha-3 codes used by the boundary dataset
    ///
    /// Codes without an ISO alpha-3 counterpart are logged and dropped.
    pub fn to_alpha3(&self) -> BTreeSet<String> {
        self.codes
            .iter()
            .filter_map(|code| match reference::alpha3_for(code) {
                Some(alpha3) => Some(alpha3.to_string()),
                None => {
                    log::warn!("No alpha-3 code for flagged country {}", code);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coded(code: &str) -> RankedEntry {
        RankedEntry {
            country_code: Some(code.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_union_across_lists() {
        let a = vec![coded("US"), coded("CN")];
        let b = vec![coded("cn"), coded("DE")];
        let set = FlaggedCountrySet::from_rankings([a.as_slice(), b.as_slice()]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["CN", "DE", "US"]);
    }

    #[test]
    fn test_gb_and_ie_never_flagged() {
        let a = vec![coded("GB"), coded("US"), coded("IE")];
        let b = vec![coded("gb")];
        let set = FlaggedCountrySet::from_rankings([a.as_slice(), b.as_slice()]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["US"]);

        let alpha3 = set.to_alpha3();
        assert!(!alpha3.contains("GBR"));
        assert!(!alpha3.contains("IRL"));
        assert!(alpha3.contains("USA"));
    }

    #[test]
    fn test_missing_and_unknown_codes() {
        let a = vec![RankedEntry::default(), coded(" "), coded("ZZ"), coded("FR")];
        let set = FlaggedCountrySet::from_rankings([a.as_slice()]);
        assert_eq!(set.len(), 2);
        let alpha3 = set.to_alpha3();
        assert_eq!(alpha3.into_iter().collect::<Vec<_>>(), vec!["FRA".to_string()]);
    }

    #[test]
    fn test_empty() {
        let set = FlaggedCountrySet::from_rankings(std::iter::empty::<&[RankedEntry]>());
        assert!(set.is_empty());
        assert!(set.to_alpha3().is_empty());
    }
}
