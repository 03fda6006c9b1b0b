use percent_encoding::percent_decode_str;

/// Decoded query string parameters, in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a raw query string (without the leading `?`).
    ///
    /// `+` decodes to a space and percent-escapes are decoded as UTF-8,
    /// replacing invalid sequences instead of rejecting the request.
    pub fn parse(raw: &str) -> Self {
        let pairs = raw
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (key, value) = part.split_once('=').unwrap_or((part, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        Self { pairs }
    }

    /// First value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`QueryParams::get`], but an empty value counts as absent.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::QueryParams;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_pairs_in_order() {
        let q = QueryParams::parse("count=3&category=backend");

        assert_eq!(q.get("count"), Some("3"));
        assert_eq!(q.get("category"), Some("backend"));
        assert_eq!(q.get("q"), None);
    }

    #[test]
    fn decodes_percent_escapes_and_plus() {
        let q = QueryParams::parse("q=works+on%20my%20machine&x=%22quoted%22");

        assert_eq!(q.get("q"), Some("works on my machine"));
        assert_eq!(q.get("x"), Some("\"quoted\""));
    }

    #[test]
    fn first_occurrence_wins() {
        let q = QueryParams::parse("category=devil&category=classic");

        assert_eq!(q.get("category"), Some("devil"));
    }

    #[test]
    fn bare_keys_have_empty_values() {
        let q = QueryParams::parse("q&count=");

        assert_eq!(q.get("q"), Some(""));
        assert_eq!(q.non_empty("q"), None);
        assert_eq!(q.non_empty("count"), None);
    }

    #[test]
    fn empty_query_has_no_pairs() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("&&").is_empty());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let q = QueryParams::parse("q=%FF");

        assert_eq!(q.get("q"), Some("\u{FFFD}"));
    }
}
