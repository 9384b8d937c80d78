//! Parsing of the per-country border list field.
//!
//! The dataset stores neighbours as a comma separated list inside a single
//! comma separated record, so the field is usually wrapped in double quotes:
//! `"Spain, Andorra, Belgium"`. Depending on how the record was split the
//! wrapping quotes may or may not still be present.

const QUOTE: char = '"';

/// Split a raw border field into neighbour names, preserving their order.
///
/// Enclosing quotes are removed, the content is split on commas, and each
/// token loses embedded quote characters plus leading/trailing whitespace.
/// Internal spaces survive, so `"United States"` stays intact. Empty tokens
/// are dropped, which makes an empty field an empty list.
pub fn parse_border_list(raw: &str) -> Vec<String> {
    strip_enclosing_quotes(raw.trim())
        .split(',')
        .map(|token| {
            token
                .chars()
                .filter(|c| *c != QUOTE)
                .collect::<String>()
                .trim()
                .to_string()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

fn strip_enclosing_quotes(field: &str) -> &str {
    let Some(inner) = field.strip_prefix(QUOTE) else {
        return field;
    };
    // A dangling opening quote still marks the start of the quoted list.
    inner.strip_suffix(QUOTE).unwrap_or(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_quoted_list() {
        assert_eq!(
            parse_border_list("\"Spain,Andorra,Belgium\""),
            vec!["Spain", "Andorra", "Belgium"]
        );
    }

    #[test]
    fn single_unquoted_name() {
        assert_eq!(parse_border_list("Canada"), vec!["Canada"]);
    }

    #[test]
    fn preserves_internal_spaces() {
        assert_eq!(
            parse_border_list("\"Canada, United States ,  Mexico\""),
            vec!["Canada", "United States", "Mexico"]
        );
    }

    #[test]
    fn strips_embedded_quotes() {
        assert_eq!(
            parse_border_list("\"\"Congo\", Gabon\""),
            vec!["Congo", "Gabon"]
        );
    }

    #[test]
    fn empty_field_has_no_neighbours() {
        assert!(parse_border_list("").is_empty());
        assert!(parse_border_list("   ").is_empty());
        assert!(parse_border_list("\"\"").is_empty());
    }

    #[test]
    fn dangling_quote_is_tolerated() {
        assert_eq!(parse_border_list("\"Chile,Peru"), vec!["Chile", "Peru"]);
    }

    #[test]
    fn keeps_non_space_punctuation() {
        assert_eq!(
            parse_border_list("Côte d'Ivoire, Guinea-Bissau"),
            vec!["Côte d'Ivoire", "Guinea-Bissau"]
        );
    }
}
