//! Response envelope inspection and result-shape classification.
//!
//! The API reuses one endpoint for movies, series, episodes, and season
//! listings, and does not always echo a reliable type tag. Classification
//! therefore triangulates between what was asked for and what the
//! envelope contains before any shape-specific decoding happens.

use serde::Deserialize;

use crate::error::OmdbError;
use crate::params::TitleLookupParams;

/// Type tag the API uses for movie records.
const TYPE_MOVIE: &str = "movie";

/// Type tag the API uses for series records.
const TYPE_SERIES: &str = "series";

/// Type tag the API uses for episode records.
const TYPE_EPISODE: &str = "episode";

/// Minimal view of the top-level response object, decoded only to drive
/// classification. Never handed to callers.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ResponseEnvelope {
    /// Success flag; the API sends `"True"` or `"False"`.
    #[serde(rename = "Response")]
    pub response: String,
    /// Error message, present when the success flag is false.
    #[serde(rename = "Error")]
    pub error: Option<String>,
    /// Type tag; absent for season listings.
    #[serde(rename = "Type")]
    pub media_type: Option<String>,
    /// Episode number field, present on episode records.
    #[serde(rename = "Episode")]
    pub episode: Option<String>,
    /// Parent series identifier, present on episode records.
    #[serde(rename = "seriesID")]
    pub series_id: Option<String>,
    /// Season count field, present on series records.
    #[serde(rename = "totalSeasons")]
    pub total_seasons: Option<String>,
}

impl ResponseEnvelope {
    /// Whether the service reported success. A missing flag counts as
    /// failure; treating absence as success would mask truncated bodies.
    pub(crate) fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }

    /// The service's error message, empty when none was given.
    pub(crate) fn error_message(&self) -> String {
        self.error.clone().unwrap_or_default()
    }
}

/// Result shape selected by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResponseShape {
    /// Single movie record.
    Movie,
    /// Series overview record.
    Series,
    /// Single episode record.
    Episode,
    /// Season listing with episode summaries.
    Season,
}

/// Selects the result shape for a title-lookup response.
///
/// The rules are an ordered decision table; the first match wins:
///
/// 1. Success flag false.
/// 2. The request asked for a season but no episode; season listings
///    carry no type tag, so the request side decides.
/// 3. The envelope carries an episode number and a series identifier, or
///    the request asked for both a season and an episode.
/// 4. The type tag says series, or a season count is present.
/// 5. Fallback: movie.
///
/// # Errors
///
/// Returns [`OmdbError::Api`] when the success flag is false, carrying
/// the service's message verbatim, and
/// [`OmdbError::UnrecognizedResponse`] when the fallback meets a type
/// tag that names no known shape.
pub(crate) fn classify(
    params: &TitleLookupParams,
    envelope: &ResponseEnvelope,
) -> Result<ResponseShape, OmdbError> {
    if !envelope.is_success() {
        return Err(OmdbError::Api(envelope.error_message()));
    }

    if params.season.is_some() && params.episode.is_none() {
        return Ok(ResponseShape::Season);
    }

    if (envelope.episode.is_some() && envelope.series_id.is_some())
        || (params.season.is_some() && params.episode.is_some())
    {
        return Ok(ResponseShape::Episode);
    }

    if envelope.media_type.as_deref() == Some(TYPE_SERIES) || envelope.total_seasons.is_some() {
        return Ok(ResponseShape::Series);
    }

    // An episode tag without episode fields decodes safely as the movie
    // shape (a strict field subset), so only unknown tags are terminal.
    match envelope.media_type.as_deref() {
        None | Some("" | TYPE_MOVIE | TYPE_EPISODE) => Ok(ResponseShape::Movie),
        Some(other) => Err(OmdbError::UnrecognizedResponse(String::from(other))),
    }
}
