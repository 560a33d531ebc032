//! `OmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::OmdbError;
use crate::params::{SearchParams, TitleLookupParams};
use crate::types::{OmdbSearchPage, TitleLookup};

/// OMDb API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(OmdbApi: Send)]
pub trait LocalOmdbApi {
    /// Looks up a single title by name or IMDb identifier, returning the
    /// result shape the response calls for.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the HTTP request
    /// fails, the service signals a failure, or the response cannot be
    /// decoded.
    async fn search_by_title(&self, params: &TitleLookupParams) -> Result<TitleLookup, OmdbError>;

    /// Searches titles by free text, one result page per call.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the service signals a
    /// failure, or the response cannot be decoded.
    async fn search(&self, params: &SearchParams) -> Result<OmdbSearchPage, OmdbError>;
}
