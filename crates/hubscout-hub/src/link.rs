//! `Link` response header parsing (RFC 8288).
//!
//! The hub paginates search results with a cursor URL in
//! `Link: <https://huggingface.co/api/models?cursor=...>; rel="next"`.

/// Extract the `rel="next"` target from a `Link` header value.
pub fn parse_next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|entry| {
        let entry = entry.trim();
        let rest = entry.strip_prefix('<')?;
        let (url, params) = rest.split_once('>')?;
        let is_next = params.split(';').any(|param| {
            let Some((key, value)) = param.trim().split_once('=') else {
                return false;
            };
            key.trim().eq_ignore_ascii_case("rel")
                && value
                    .trim()
                    .trim_matches('"')
                    .split_whitespace()
                    .any(|rel| rel.eq_ignore_ascii_case("next"))
        });
        is_next.then(|| url.trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_link() {
        let header = r#"<https://huggingface.co/api/models?cursor=abc&limit=100>; rel="next""#;
        assert_eq!(
            parse_next_link(header).as_deref(),
            Some("https://huggingface.co/api/models?cursor=abc&limit=100")
        );
    }

    #[test]
    fn test_next_among_several() {
        let header = r#"<https://a.test/p1>; rel="prev", <https://a.test/p3>; rel="next""#;
        assert_eq!(parse_next_link(header).as_deref(), Some("https://a.test/p3"));
    }

    #[test]
    fn test_unquoted_and_multi_rel() {
        assert_eq!(
            parse_next_link("<https://a.test/n>; rel=next").as_deref(),
            Some("https://a.test/n")
        );
        assert_eq!(
            parse_next_link(r#"<https://a.test/n>; title="x"; rel="last next""#).as_deref(),
            Some("https://a.test/n")
        );
    }

    #[test]
    fn test_no_next() {
        assert_eq!(parse_next_link(r#"<https://a.test/p1>; rel="prev""#), None);
        assert_eq!(parse_next_link(""), None);
        assert_eq!(parse_next_link("garbage"), None);
    }
}
