//! OMDb API request parameter types.

use crate::error::OmdbError;

/// Explicit result-type hint (`type` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// Feature film.
    Movie,
    /// TV series.
    Series,
    /// Single episode of a series.
    Episode,
}

impl MediaType {
    /// Wire value for the `type` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
            Self::Episode => "episode",
        }
    }
}

/// Plot verbosity (`plot` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotLength {
    /// Abbreviated plot (API default).
    Short,
    /// Full plot text.
    Full,
}

impl PlotLength {
    /// Wire value for the `plot` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Full => "full",
        }
    }
}

/// Request parameters for a single-title lookup.
///
/// Built via [`TitleLookupParams::title`] or [`TitleLookupParams::imdb_id`];
/// the remaining fields narrow the lookup. A `season` alone requests a
/// season listing; an `episode` is only valid together with a `season`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleLookupParams {
    /// Title to look up (`t` parameter).
    pub title: Option<String>,
    /// IMDb identifier to look up (`i` parameter).
    pub imdb_id: Option<String>,
    /// Release year filter (`y` parameter).
    pub year: Option<u32>,
    /// Season number (`Season` parameter).
    pub season: Option<u32>,
    /// Episode number within the season (`Episode` parameter).
    pub episode: Option<u32>,
    /// Plot verbosity (`plot` parameter).
    pub plot: Option<PlotLength>,
    /// Result page (`page` parameter).
    pub page: Option<u32>,
    /// Explicit result-type hint (`type` parameter).
    pub media_type: Option<MediaType>,
}

impl TitleLookupParams {
    /// Creates params that look up a title by name.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Creates params that look up a title by IMDb identifier.
    pub fn imdb_id(imdb_id: impl Into<String>) -> Self {
        Self {
            imdb_id: Some(imdb_id.into()),
            ..Self::default()
        }
    }

    /// Sets the release year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the season number.
    #[must_use]
    pub const fn season(mut self, season: u32) -> Self {
        self.season = Some(season);
        self
    }

    /// Sets the episode number (only valid together with a season).
    #[must_use]
    pub const fn episode(mut self, episode: u32) -> Self {
        self.episode = Some(episode);
        self
    }

    /// Sets the plot verbosity.
    #[must_use]
    pub const fn plot(mut self, plot: PlotLength) -> Self {
        self.plot = Some(plot);
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the explicit result-type hint.
    #[must_use]
    pub const fn media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    /// Builds the query parameter list, without the credential.
    ///
    /// Omitted fields are absent from the list, never sent as empty
    /// strings.
    ///
    /// # Errors
    ///
    /// Returns [`OmdbError::InvalidQuery`] if `episode` is set but
    /// `season` is not.
    pub(crate) fn build_query(&self) -> Result<Vec<(&'static str, String)>, OmdbError> {
        if self.episode.is_some() && self.season.is_none() {
            return Err(OmdbError::InvalidQuery(String::from(
                "episode requires a season",
            )));
        }

        let mut query: Vec<(&'static str, String)> = Vec::new();

        if let Some(ref title) = self.title
            && !title.is_empty()
        {
            query.push(("t", title.clone()));
        }

        if let Some(ref imdb_id) = self.imdb_id
            && !imdb_id.is_empty()
        {
            query.push(("i", imdb_id.clone()));
        }

        if let Some(year) = self.year {
            query.push(("y", year.to_string()));
        }

        if let Some(media_type) = self.media_type {
            query.push(("type", String::from(media_type.as_str())));
        }

        if let Some(plot) = self.plot {
            query.push(("plot", String::from(plot.as_str())));
        }

        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }

        if let Some(season) = self.season {
            query.push(("Season", season.to_string()));
        }

        if let Some(episode) = self.episode {
            query.push(("Episode", episode.to_string()));
        }

        Ok(query)
    }
}

/// Request parameters for a free-text title search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Search text (`s` parameter, required).
    pub query: String,
    /// Release year filter (`y` parameter).
    pub year: Option<u32>,
    /// Result page (`page` parameter).
    pub page: Option<u32>,
    /// Explicit result-type hint (`type` parameter).
    pub media_type: Option<MediaType>,
}

impl SearchParams {
    /// Creates new search params with the given query text.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            year: None,
            page: None,
            media_type: None,
        }
    }

    /// Sets the release year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the explicit result-type hint.
    #[must_use]
    pub const fn media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    /// Builds the query parameter list, without the credential.
    pub(crate) fn build_query(&self) -> Vec<(&'static str, String)> {
        let mut query: Vec<(&'static str, String)> = vec![("s", self.query.clone())];

        if let Some(year) = self.year {
            query.push(("y", year.to_string()));
        }

        if let Some(media_type) = self.media_type {
            query.push(("type", String::from(media_type.as_str())));
        }

        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }

        query
    }
}
