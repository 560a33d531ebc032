//! OMDb API response types.
//!
//! Wire field names are carried exactly: the API is PascalCase for most
//! fields but lowercases the leading word of `imdbRating`, `imdbVotes`,
//! `imdbID`, `seriesID`, `totalSeasons`, and `totalResults`. Absent
//! optional fields decode to empty strings or empty lists.

use serde::Deserialize;

/// A rating from a single review source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OmdbRating {
    /// Review source name (e.g. "Internet Movie Database").
    #[serde(rename = "Source")]
    pub source: String,
    /// Rating value exactly as the source reports it (e.g. "8.6/10").
    #[serde(rename = "Value")]
    pub value: String,
}

/// A single movie record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OmdbMovie {
    /// Movie title.
    pub title: String,
    /// Release year.
    pub year: String,
    /// Content rating (e.g. "PG-13").
    pub rated: String,
    /// Release date.
    pub released: String,
    /// Runtime (e.g. "148 min").
    pub runtime: String,
    /// Comma-separated genre list.
    pub genre: String,
    /// Comma-separated director list.
    pub director: String,
    /// Comma-separated writer list.
    pub writer: String,
    /// Comma-separated actor list.
    pub actors: String,
    /// Plot text.
    pub plot: String,
    /// Comma-separated language list.
    pub language: String,
    /// Comma-separated country list.
    pub country: String,
    /// Awards summary.
    pub awards: String,
    /// Poster image URL.
    pub poster: String,
    /// Ratings from review sources.
    pub ratings: Vec<OmdbRating>,
    /// Metacritic score.
    pub metascore: String,
    /// IMDb rating.
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    /// IMDb vote count.
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    /// IMDb identifier.
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// DVD release date.
    #[serde(rename = "DVD")]
    pub dvd: String,
    /// Box office takings.
    pub box_office: String,
    /// Production company.
    pub production: String,
    /// Official website.
    pub website: String,
}

/// A series overview record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OmdbSeries {
    /// Series title.
    pub title: String,
    /// Years on air (e.g. "2011–2019").
    pub year: String,
    /// Content rating.
    pub rated: String,
    /// First air date.
    pub released: String,
    /// Typical episode runtime.
    pub runtime: String,
    /// Comma-separated genre list.
    pub genre: String,
    /// Comma-separated director list.
    pub director: String,
    /// Comma-separated writer list.
    pub writer: String,
    /// Comma-separated actor list.
    pub actors: String,
    /// Plot text.
    pub plot: String,
    /// Comma-separated language list.
    pub language: String,
    /// Comma-separated country list.
    pub country: String,
    /// Awards summary.
    pub awards: String,
    /// Poster image URL.
    pub poster: String,
    /// Ratings from review sources.
    pub ratings: Vec<OmdbRating>,
    /// Metacritic score.
    pub metascore: String,
    /// IMDb rating.
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    /// IMDb vote count.
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    /// IMDb identifier.
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// Number of seasons.
    #[serde(rename = "totalSeasons")]
    pub total_seasons: String,
}

/// A single episode record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OmdbEpisode {
    /// Episode title.
    pub title: String,
    /// Air year.
    pub year: String,
    /// Content rating.
    pub rated: String,
    /// Air date.
    pub released: String,
    /// Season number.
    pub season: String,
    /// Episode number within the season.
    pub episode: String,
    /// Runtime.
    pub runtime: String,
    /// Comma-separated genre list.
    pub genre: String,
    /// Comma-separated director list.
    pub director: String,
    /// Comma-separated writer list.
    pub writer: String,
    /// Comma-separated actor list.
    pub actors: String,
    /// Plot text.
    pub plot: String,
    /// Comma-separated language list.
    pub language: String,
    /// Comma-separated country list.
    pub country: String,
    /// Awards summary.
    pub awards: String,
    /// Poster image URL.
    pub poster: String,
    /// Ratings from review sources.
    pub ratings: Vec<OmdbRating>,
    /// Metacritic score.
    pub metascore: String,
    /// IMDb rating.
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    /// IMDb vote count.
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    /// IMDb identifier.
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// IMDb identifier of the parent series.
    #[serde(rename = "seriesID")]
    pub series_id: String,
}

/// Summary entry for one episode within a season listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OmdbSeasonEpisode {
    /// Episode title.
    pub title: String,
    /// Air date (e.g. "2011-04-17").
    pub released: String,
    /// Episode number within the season.
    pub episode: String,
    /// IMDb identifier.
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// IMDb rating.
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
}

/// A season listing: the episodes of one season of a series.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OmdbSeason {
    /// Series title.
    pub title: String,
    /// Season number.
    pub season: String,
    /// Number of seasons in the series.
    #[serde(rename = "totalSeasons")]
    pub total_seasons: String,
    /// Episode summaries, in broadcast order.
    pub episodes: Vec<OmdbSeasonEpisode>,
}

/// A single hit in a free-text search page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OmdbSearchHit {
    /// Title.
    pub title: String,
    /// Release year or year range.
    pub year: String,
    /// IMDb identifier.
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// Type tag ("movie", "series", ...).
    #[serde(rename = "Type")]
    pub media_type: String,
    /// Poster image URL.
    pub poster: String,
}

/// One page of free-text search results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct OmdbSearchPage {
    /// Search hits for this page.
    #[serde(rename = "Search")]
    pub results: Vec<OmdbSearchHit>,
    /// Total result count across all pages, as reported by the API.
    #[serde(rename = "totalResults")]
    pub total_results: String,
}

/// Result of a title lookup, discriminated by response shape.
///
/// Exactly one variant is produced per successful call; callers match
/// exhaustively to reach the shape-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleLookup {
    /// A single movie.
    Movie(OmdbMovie),
    /// A series overview.
    Series(OmdbSeries),
    /// A single episode.
    Episode(OmdbEpisode),
    /// A season listing with episode summaries.
    Season(OmdbSeason),
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_movie_missing_optional_fields_default_to_empty() {
        // Arrange: minimal body, most fields absent
        let json = r#"{"Title":"Inception","Year":"2010","Response":"True"}"#;

        // Act
        let movie: OmdbMovie = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year, "2010");
        assert_eq!(movie.director, "");
        assert_eq!(movie.box_office, "");
        assert!(movie.ratings.is_empty());
    }

    #[test]
    fn test_movie_decodes_inconsistent_wire_casing() {
        // Arrange
        let json = r#"{
            "Title": "Inception",
            "imdbRating": "8.8",
            "imdbVotes": "2,345,678",
            "imdbID": "tt1375666",
            "DVD": "07 Dec 2010",
            "BoxOffice": "$292,587,330"
        }"#;

        // Act
        let movie: OmdbMovie = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(movie.imdb_rating, "8.8");
        assert_eq!(movie.imdb_votes, "2,345,678");
        assert_eq!(movie.imdb_id, "tt1375666");
        assert_eq!(movie.dvd, "07 Dec 2010");
        assert_eq!(movie.box_office, "$292,587,330");
    }

    #[test]
    fn test_rating_values_are_preserved_verbatim() {
        // Arrange
        let json = r#"{
            "Title": "Inception",
            "Ratings": [
                {"Source": "Internet Movie Database", "Value": "8.8/10"},
                {"Source": "Rotten Tomatoes", "Value": "87%"}
            ]
        }"#;

        // Act
        let movie: OmdbMovie = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(movie.ratings.len(), 2);
        assert_eq!(movie.ratings[0].source, "Internet Movie Database");
        assert_eq!(movie.ratings[0].value, "8.8/10");
        assert_eq!(movie.ratings[1].value, "87%");
    }

    #[test]
    fn test_season_listing_decodes_episode_entries() {
        // Arrange
        let json = r#"{
            "Title": "Game of Thrones",
            "Season": "1",
            "totalSeasons": "8",
            "Episodes": [
                {"Title": "Winter Is Coming", "Released": "2011-04-17",
                 "Episode": "1", "imdbID": "tt1480055", "imdbRating": "8.9"}
            ],
            "Response": "True"
        }"#;

        // Act
        let season: OmdbSeason = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(season.season, "1");
        assert_eq!(season.total_seasons, "8");
        assert_eq!(season.episodes.len(), 1);
        assert_eq!(season.episodes[0].title, "Winter Is Coming");
        assert_eq!(season.episodes[0].imdb_id, "tt1480055");
    }

    #[test]
    fn test_search_page_decodes_hits() {
        // Arrange
        let json = r#"{
            "Search": [
                {"Title": "Batman Begins", "Year": "2005",
                 "imdbID": "tt0372784", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "538",
            "Response": "True"
        }"#;

        // Act
        let page: OmdbSearchPage = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(page.total_results, "538");
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].media_type, "movie");
    }
}
