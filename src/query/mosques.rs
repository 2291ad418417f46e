// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use regex::RegexBuilder;

use crate::model::{Mosque, RevealState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosqueSearchMode {
    Substring,
    Regex,
}

/// Searches mosque name and location labels.
///
/// Input order is preserved. The only fallible mode is `Regex`, which surfaces the compile
/// error to the caller.
pub fn mosque_search<'a>(
    mosques: &'a [Mosque],
    needle: &str,
    mode: MosqueSearchMode,
    case_insensitive: bool,
) -> Result<Vec<&'a Mosque>, regex::Error> {
    match mode {
        MosqueSearchMode::Substring => {
            if case_insensitive {
                let needle_lower = needle.to_lowercase();
                Ok(mosques
                    .iter()
                    .filter(|mosque| {
                        mosque.name().to_lowercase().contains(&needle_lower)
                            || mosque.location().to_lowercase().contains(&needle_lower)
                    })
                    .collect())
            } else {
                Ok(mosques
                    .iter()
                    .filter(|mosque| {
                        mosque.name().contains(needle) || mosque.location().contains(needle)
                    })
                    .collect())
            }
        }
        MosqueSearchMode::Regex => {
            let regex = RegexBuilder::new(needle)
                .case_insensitive(case_insensitive)
                .build()?;
            Ok(mosques
                .iter()
                .filter(|mosque| regex.is_match(mosque.name()) || regex.is_match(mosque.location()))
                .collect())
        }
    }
}

/// First visible mosque; its congregation label captions the next-prayer card.
///
/// Fails only on an empty visible window, which the seeded `RevealState` never produces.
pub fn next_congregation(state: &RevealState) -> Result<&Mosque, EmptyVisibleList> {
    state.first_visible().ok_or(EmptyVisibleList)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyVisibleList;

impl fmt::Display for EmptyVisibleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no mosques are visible")
    }
}

impl std::error::Error for EmptyVisibleList {}

#[cfg(test)]
mod tests {
    use super::{mosque_search, next_congregation, EmptyVisibleList, MosqueSearchMode};
    use crate::model::{catalog, RevealState};

    #[test]
    fn substring_search_matches_name_and_location() {
        let mosques = catalog::nearby_mosques();

        let by_name = mosque_search(&mosques, "Huda", MosqueSearchMode::Substring, false)
            .expect("search");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name(), "Masjid Al-Huda");

        let by_location = mosque_search(&mosques, "Whitechapel", MosqueSearchMode::Substring, false)
            .expect("search");
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].name(), "East London Mosque");
    }

    #[test]
    fn substring_search_supports_case_insensitive_mode() {
        let mosques = catalog::nearby_mosques();

        let miss = mosque_search(&mosques, "huda", MosqueSearchMode::Substring, false)
            .expect("search");
        assert!(miss.is_empty());

        let hit = mosque_search(&mosques, "huda", MosqueSearchMode::Substring, true)
            .expect("search");
        assert_eq!(hit.len(), 1);
    }

    #[test]
    fn regex_search_matches_alternations() {
        let mosques = catalog::nearby_mosques();
        let hits = mosque_search(&mosques, "Noor|Taqwa", MosqueSearchMode::Regex, false)
            .expect("search");
        let names = hits.iter().map(|m| m.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Masjid Al-Noor", "Masjid Al-Taqwa"]);
    }

    #[test]
    fn regex_search_returns_error_for_invalid_pattern() {
        let mosques = catalog::nearby_mosques();
        let err = mosque_search(&mosques, "(unclosed", MosqueSearchMode::Regex, false)
            .expect_err("expected regex compile error");
        assert!(err.to_string().to_lowercase().contains("regex"));
    }

    #[test]
    fn search_preserves_catalog_order() {
        let mosques = catalog::nearby_mosques();
        let hits = mosque_search(&mosques, "Masjid", MosqueSearchMode::Substring, false)
            .expect("search");
        let names = hits.iter().map(|m| m.name()).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "Masjid Al-Noor",
                "Masjid Al-Huda",
                "Masjid Al-Tawhid",
                "Masjid Al-Iman",
                "Masjid Al-Falah",
                "Masjid Al-Taqwa"
            ]
        );
    }

    #[test]
    fn next_congregation_reads_the_first_visible_entry() {
        let state = RevealState::new();
        let mosque = next_congregation(&state).expect("next congregation");
        assert_eq!(mosque.name(), "Masjid Al-Noor");
        assert_eq!(mosque.congregation_label(), "1:00 PM");
    }

    #[test]
    fn next_congregation_fails_on_an_empty_window() {
        let state = RevealState::with_catalog(Vec::new());
        assert_eq!(next_congregation(&state), Err(EmptyVisibleList));
    }
}
