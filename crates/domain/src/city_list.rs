//! Parsing of line-delimited city lists

use crate::value_objects::CityName;

/// Parse a city list: one name per line, whitespace trimmed, blank lines skipped
///
/// Order is preserved and duplicates are kept.
///
/// # Examples
///
/// ```
/// use domain::parse_city_list;
///
/// let cities = parse_city_list("Paris\n\n  Tokyo \r\nParis\n");
/// let names: Vec<&str> = cities.iter().map(|c| c.as_str()).collect();
/// assert_eq!(names, ["Paris", "Tokyo", "Paris"]);
/// ```
#[must_use]
pub fn parse_city_list(contents: &str) -> Vec<CityName> {
    contents
        .lines()
        .filter_map(|line| CityName::new(line).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(contents: &str) -> Vec<String> {
        parse_city_list(contents)
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_city_list("").is_empty());
        assert!(parse_city_list("\n   \n\t\n").is_empty());
    }

    #[test]
    fn trims_and_skips_blank_lines() {
        assert_eq!(names("  Berlin\n\n\tMadrid  \n"), ["Berlin", "Madrid"]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        assert_eq!(names("Paris\r\nTokyo\r\n"), ["Paris", "Tokyo"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        assert_eq!(names("Rome\nOslo\nRome"), ["Rome", "Oslo", "Rome"]);
    }

    #[test]
    fn last_line_without_newline() {
        assert_eq!(names("Lima"), ["Lima"]);
    }
}
