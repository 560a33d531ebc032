//! Normalization helpers for raw OMDb string fields.
//!
//! The API reports missing values as the literal string `"N/A"` and keeps
//! every field stringly typed. These helpers are pure and independent of
//! the client; callers apply them to decoded results as needed.

use crate::types::OmdbSeasonEpisode;

/// Placeholder the API uses for missing values.
const NOT_AVAILABLE: &str = "N/A";

/// Whether a field value is the API's missing-value placeholder.
fn is_not_available(value: &str) -> bool {
    value.eq_ignore_ascii_case(NOT_AVAILABLE)
}

/// Parses a rating string (e.g. `"8.6"`) into a float.
///
/// Empty, `"N/A"`, and unparsable values yield `0.0`, never an error.
#[must_use]
pub fn parse_rating(raw: &str) -> f32 {
    let raw = raw.trim();
    if raw.is_empty() || is_not_available(raw) {
        return 0.0;
    }
    raw.parse().unwrap_or(0.0)
}

/// Splits a comma-separated field into trimmed items.
///
/// Empty and `"N/A"` items are dropped; an all-empty input yields an
/// empty vector rather than a vector of empty strings.
#[must_use]
pub fn split_and_trim(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty() && !is_not_available(part))
        .map(String::from)
        .collect()
}

/// Extracts the first run of ASCII digits, capped at four, from a
/// free-form year field.
///
/// Handles ranges like `"2014-2016"` by returning `"2014"`; scanning
/// stops at the first non-digit once digits have started accumulating.
/// Returns an empty string when the field contains no digits.
#[must_use]
pub fn first_year(raw: &str) -> String {
    let mut digits = String::new();
    for ch in raw.trim().chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            if digits.len() == 4 {
                break;
            }
        } else if !digits.is_empty() {
            break;
        }
    }
    digits
}

/// Returns the year of the first episode whose release date yields one.
///
/// Returns an empty string when no entry qualifies.
#[must_use]
pub fn first_year_from_episodes(episodes: &[OmdbSeasonEpisode]) -> String {
    episodes
        .iter()
        .map(|episode| first_year(&episode.released))
        .find(|year| !year.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;

    fn make_episode(released: &str) -> OmdbSeasonEpisode {
        OmdbSeasonEpisode {
            released: String::from(released),
            ..OmdbSeasonEpisode::default()
        }
    }

    #[test]
    fn test_parse_rating_plain_value() {
        // Arrange & Act & Assert
        assert_eq!(parse_rating("8.6"), 8.6);
    }

    #[test]
    fn test_parse_rating_trims_whitespace() {
        // Arrange & Act & Assert
        assert_eq!(parse_rating(" 7.5 "), 7.5);
    }

    #[test]
    fn test_parse_rating_not_available() {
        // Arrange & Act & Assert
        assert_eq!(parse_rating("N/A"), 0.0);
        assert_eq!(parse_rating("n/a"), 0.0);
    }

    #[test]
    fn test_parse_rating_empty() {
        // Arrange & Act & Assert
        assert_eq!(parse_rating(""), 0.0);
    }

    #[test]
    fn test_parse_rating_unparsable() {
        // Arrange & Act & Assert
        assert_eq!(parse_rating("eight"), 0.0);
    }

    #[test]
    fn test_split_and_trim_drops_not_available_items() {
        // Arrange & Act
        let items = split_and_trim("Action, Drama, N/A");

        // Assert
        assert_eq!(items, vec![String::from("Action"), String::from("Drama")]);
    }

    #[test]
    fn test_split_and_trim_all_not_available() {
        // Arrange & Act & Assert
        assert!(split_and_trim("N/A").is_empty());
    }

    #[test]
    fn test_split_and_trim_empty_input() {
        // Arrange & Act & Assert
        assert!(split_and_trim("").is_empty());
    }

    #[test]
    fn test_split_and_trim_only_separators() {
        // Arrange & Act & Assert
        assert!(split_and_trim(" , ,").is_empty());
    }

    #[test]
    fn test_first_year_from_range() {
        // Arrange & Act & Assert
        assert_eq!(first_year("2014-2016"), "2014");
    }

    #[test]
    fn test_first_year_from_iso_date() {
        // Arrange & Act & Assert
        assert_eq!(first_year("2011-04-17"), "2011");
    }

    #[test]
    fn test_first_year_en_dash_range() {
        // Arrange: the API uses an en dash in series year ranges
        assert_eq!(first_year("2011–2019"), "2011");
    }

    #[test]
    fn test_first_year_stops_at_first_non_digit() {
        // Arrange: short leading run wins even if a longer one follows
        assert_eq!(first_year("19-2014"), "19");
    }

    #[test]
    fn test_first_year_empty_and_digitless() {
        // Arrange & Act & Assert
        assert_eq!(first_year(""), "");
        assert_eq!(first_year("N/A"), "");
    }

    #[test]
    fn test_first_year_from_episodes_skips_dateless_entries() {
        // Arrange
        let episodes = vec![
            make_episode("N/A"),
            make_episode(""),
            make_episode("2011-04-17"),
        ];

        // Act & Assert
        assert_eq!(first_year_from_episodes(&episodes), "2011");
    }

    #[test]
    fn test_first_year_from_episodes_none_qualify() {
        // Arrange
        let episodes = vec![make_episode("N/A"), make_episode("")];

        // Act & Assert
        assert_eq!(first_year_from_episodes(&episodes), "");
    }

    #[test]
    fn test_first_year_from_episodes_empty_slice() {
        // Arrange & Act & Assert
        assert_eq!(first_year_from_episodes(&[]), "");
    }
}
