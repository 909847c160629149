/// Sanitizes author-supplied catalog text (question stems, option text,
/// course and recommendation descriptions) before it is stored.
///
/// Whitelist-based: formatting tags such as <b> or <code> survive, <script>
/// and event-handler attributes are stripped.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}

/// Same as [`clean_html`] for optional fields.
pub fn clean_optional(input: Option<&str>) -> Option<String> {
    input.map(clean_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_removed() {
        let cleaned = clean_html("Which join <script>alert(1)</script>is outer?");
        assert_eq!(cleaned, "Which join is outer?");
    }

    #[test]
    fn test_formatting_survives() {
        assert_eq!(clean_html("<b>2NF</b>"), "<b>2NF</b>");
    }

    #[test]
    fn test_optional() {
        assert_eq!(clean_optional(None), None);
        assert_eq!(clean_optional(Some("plain")), Some("plain".to_string()));
    }
}
