use url::Url;

use crate::{FailureKind, FetchError};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Remote result set to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// `/discover/movie` sorted by popularity.
    Popular,
    /// `/search/movie` for a title term.
    Search(String),
}

impl Listing {
    /// Builds the request URL below `base_url`, keeping any path the base already has.
    pub fn url(&self, base_url: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                FetchError::new(FailureKind::InvalidUrl, "base url cannot carry a path")
            })?;
            segments.pop_if_empty();
            match self {
                Listing::Popular => segments.extend(["discover", "movie"]),
                Listing::Search(_) => segments.extend(["search", "movie"]),
            };
        }
        match self {
            Listing::Popular => {
                url.query_pairs_mut()
                    .append_pair("sort_by", "popularity.desc");
            }
            Listing::Search(term) => {
                url.query_pairs_mut().append_pair("query", term);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::{Listing, DEFAULT_BASE_URL};
    use crate::FailureKind;

    #[test]
    fn popular_listing_sorts_by_popularity() {
        let url = Listing::Popular.url(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/discover/movie?sort_by=popularity.desc"
        );
    }

    #[test]
    fn search_term_is_encoded() {
        let url = Listing::Search("Amélie & friends".to_string())
            .url("https://api.themoviedb.org/3/")
            .unwrap();
        assert_eq!(url.path(), "/3/search/movie");
        let pairs: Vec<_> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![("query".to_string(), "Amélie & friends".to_string())]
        );
        assert!(!url.as_str().contains(' '));
        assert!(url.as_str().contains("%26"));
    }

    #[test]
    fn invalid_base_is_reported() {
        let err = Listing::Popular.url("not a url").unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
