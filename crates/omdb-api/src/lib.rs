//! Typed client library for the OMDb movie/TV metadata API.
//!
//! Builds query parameters from caller search criteria, issues one GET
//! request per call, and decodes the JSON response into one of four
//! result shapes (movie, series, episode, season listing). The shape is
//! selected by triangulating between what the request asked for and what
//! the response envelope contains, since the API does not always echo a
//! reliable type tag.

mod api;
mod client;
mod envelope;
mod error;
mod params;
mod types;
mod util;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalOmdbApi, OmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{OmdbClient, OmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::OmdbError;
pub use params::{MediaType, PlotLength, SearchParams, TitleLookupParams};
pub use types::{
    OmdbEpisode, OmdbMovie, OmdbRating, OmdbSearchHit, OmdbSearchPage, OmdbSeason,
    OmdbSeasonEpisode, OmdbSeries, TitleLookup,
};
pub use util::{first_year, first_year_from_episodes, parse_rating, split_and_trim};
