//! Argument grammar of the /infografis command.
//!
//! `/infografis <keyword> [halaman] [jumlah]` — the keyword may span several
//! words; only the trailing tokens can be numeric. The error messages are
//! user-facing and sent to the chat verbatim.

use crate::config::{DEFAULT_COUNT, DEFAULT_PAGE, MAX_COUNT};
use crate::search::SearchQuery;
use thiserror::Error;

/// User input errors, worded for the chat
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    /// No arguments at all
    #[error("Silakan masukkan keyword untuk mencari infografis.")]
    MissingKeyword,
    /// Trailing page/count pair did not parse as numbers
    #[error("Pastikan halaman dan jumlah infografis yang dimasukkan berupa angka.")]
    PageAndCountNotNumeric,
    /// Second token of a two-token input did not parse as a page number
    #[error("Pastikan halaman yang dimasukkan berupa angka.")]
    PageNotNumeric,
}

/// Parse the free-form argument text into a validated [`SearchQuery`].
///
/// Grammar, by token count:
/// - 0 tokens: error;
/// - 1 token: keyword only, page 1, count 5;
/// - 2 tokens: keyword + page, count 5;
/// - 3+ tokens: the last two are page and count, everything before them is
///   the keyword.
///
/// Count is capped at [`MAX_COUNT`]. Page is passed through as given,
/// including non-positive values; the upstream API decides what they mean.
///
/// # Errors
///
/// Returns an [`ArgError`] when the keyword is missing or a trailing token
/// that must be numeric is not.
pub fn parse_search_args(text: &str) -> Result<SearchQuery, ArgError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Err(ArgError::MissingKeyword),
        [keyword] => Ok(SearchQuery {
            keyword: (*keyword).to_string(),
            page: DEFAULT_PAGE,
            count: DEFAULT_COUNT,
        }),
        [keyword, page] => {
            let page: i64 = page.parse().map_err(|_| ArgError::PageNotNumeric)?;
            Ok(SearchQuery {
                keyword: (*keyword).to_string(),
                page,
                count: DEFAULT_COUNT,
            })
        }
        [keyword @ .., page, count] => {
            let page: i64 = page.parse().map_err(|_| ArgError::PageAndCountNotNumeric)?;
            let count: i64 = count.parse().map_err(|_| ArgError::PageAndCountNotNumeric)?;
            Ok(SearchQuery {
                keyword: keyword.join(" "),
                page,
                count: usize::try_from(count.clamp(0, MAX_COUNT)).unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_an_error() {
        assert_eq!(parse_search_args(""), Err(ArgError::MissingKeyword));
        assert_eq!(parse_search_args("   "), Err(ArgError::MissingKeyword));
    }

    #[test]
    fn test_keyword_only_gets_defaults() {
        let query = parse_search_args("transportasi").expect("valid input");
        assert_eq!(query.keyword, "transportasi");
        assert_eq!(query.page, 1);
        assert_eq!(query.count, 5);
    }

    #[test]
    fn test_keyword_and_page() {
        let query = parse_search_args("foo 2").expect("valid input");
        assert_eq!(query.keyword, "foo");
        assert_eq!(query.page, 2);
        assert_eq!(query.count, 5);
    }

    #[test]
    fn test_keyword_page_and_count() {
        let query = parse_search_args("angka harapan hidup 3 7").expect("valid input");
        assert_eq!(query.keyword, "angka harapan hidup");
        assert_eq!(query.page, 3);
        assert_eq!(query.count, 7);
    }

    #[test]
    fn test_count_is_capped() {
        let query = parse_search_args("foo 1 50").expect("valid input");
        assert_eq!(query.count, 10);
    }

    #[test]
    fn test_non_numeric_page_is_an_error() {
        assert_eq!(parse_search_args("foo bar"), Err(ArgError::PageNotNumeric));
    }

    #[test]
    fn test_non_numeric_trailing_pair_is_an_error() {
        assert_eq!(
            parse_search_args("foo bar 3"),
            Err(ArgError::PageAndCountNotNumeric)
        );
        assert_eq!(
            parse_search_args("foo 3 bar"),
            Err(ArgError::PageAndCountNotNumeric)
        );
    }

    #[test]
    fn test_non_positive_page_passes_through() {
        let query = parse_search_args("foo 0 3").expect("valid input");
        assert_eq!(query.page, 0);
        let query = parse_search_args("foo -2").expect("valid input");
        assert_eq!(query.page, -2);
    }
}
