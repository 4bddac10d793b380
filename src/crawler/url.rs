//! URL construction for listing and detail pages
//!
//! Listing pages live at `{base}/{tag}/{subtag}`. The first page carries no
//! query string; the second uses `?page=1`, so displayed page N maps to the
//! parameter N - 1, which is exactly the zero-based page index.

use url::Url;

use crate::utils::error::FetchError;

/// Build the listing page URL for a tag, subtag and zero-based page index
///
/// # Examples
///
/// ```
/// use tethys::crawler::url::page_url;
///
/// assert_eq!(
///     page_url("https://tethys.pnnl.gov", "stressor", "emf", 0),
///     "https://tethys.pnnl.gov/stressor/emf"
/// );
/// assert_eq!(
///     page_url("https://tethys.pnnl.gov", "stressor", "emf", 2),
///     "https://tethys.pnnl.gov/stressor/emf?page=2"
/// );
/// ```
pub fn page_url(base_url: &str, tag: &str, subtag: &str, page_index: u32) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{base}/{tag}/{subtag}{}", page_suffix(page_index))
}

/// Query suffix for a page index: empty for the first page
pub fn page_suffix(page_index: u32) -> String {
    if page_index > 0 {
        format!("?page={page_index}")
    } else {
        String::new()
    }
}

/// Resolve an href found on `page` into an absolute URL
///
/// Absolute hrefs are returned unchanged (modulo normalization); relative ones
/// are joined onto the page URL.
pub fn resolve(page: &str, href: &str) -> Result<String, FetchError> {
    let base = Url::parse(page).map_err(|e| FetchError::InvalidUrl(format!("{page}: {e}")))?;
    base.join(href.trim())
        .map(String::from)
        .map_err(|e| FetchError::InvalidUrl(format!("{href}: {e}")))
}

/// Resolve an href found on `page` against the site rooted at `base_url`
///
/// Root-relative hrefs are appended to `base_url`, so a site served under a
/// path prefix keeps it. Any other href goes through [`resolve`].
pub fn site_url(base_url: &str, page: &str, href: &str) -> Result<String, FetchError> {
    let href = href.trim();
    if href.starts_with('/') && !href.starts_with("//") {
        let joined = format!("{}{href}", base_url.trim_end_matches('/'));
        return Url::parse(&joined)
            .map(String::from)
            .map_err(|e| FetchError::InvalidUrl(format!("{joined}: {e}")));
    }
    resolve(page, href)
}
