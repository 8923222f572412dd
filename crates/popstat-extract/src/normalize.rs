//! Field cleaning for raw cell text.

use std::sync::LazyLock;

use popstat_core::MAX_POPULATION;
use regex::Regex;

use crate::error::RowError;

/// One trailing footnote marker such as `[a]` or ` [12]`.
static FOOTNOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[[^\]]+\]$").expect("invalid footnote pattern"));

/// Trim and drop a single trailing bracket group.
///
/// Brackets elsewhere in the name are kept: `"Foo [x] Bar"` is unchanged and
/// `"Foo[a][b]"` becomes `"Foo[a]"`.
pub fn clean_name(raw: &str) -> String {
    FOOTNOTE.replace(raw.trim(), "").into_owned()
}

/// Parse a population cell.
///
/// Commas are the only separator removed. Empty text and `N/A` in any case
/// mean unknown; anything else that isn't a plain run of digits is an error,
/// as is a value above [`MAX_POPULATION`].
pub fn parse_population(raw: &str) -> Result<Option<u64>, RowError> {
    let raw = raw.trim();
    let digits: String = raw.chars().filter(|&c| c != ',').collect();

    if digits.is_empty() || digits.eq_ignore_ascii_case("N/A") {
        return Ok(None);
    }

    // u64's parser also takes a leading '+'
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RowError::InvalidPopulation {
            raw: raw.to_string(),
        });
    }

    match digits.parse::<u64>() {
        Ok(n) if n <= MAX_POPULATION => Ok(Some(n)),
        _ => Err(RowError::PopulationOutOfRange {
            raw: raw.to_string(),
        }),
    }
}
