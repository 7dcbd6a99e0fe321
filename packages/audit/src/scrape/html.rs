//! Regex-based HTML inspection helpers.
//!
//! Good enough for server-rendered help-center pages; a full HTML
//! parser is not needed for the handful of elements inspected here.

use url::Url;

use crate::scrape::text::clean_text;

/// Boilerplate paragraph fragments filtered out of article bodies.
const BOILERPLATE: &[&str] = &["contact us", "powered by helpscout"];

/// Extract all resolvable link targets from anchor tags.
///
/// Skips in-page anchors, javascript:, mailto:, and tel: targets, and
/// resolves relative URLs against `base_url`.
pub fn extract_links(base_url: &Url, html: &str) -> Vec<String> {
    let href_pattern = regex::Regex::new(r#"href\s*=\s*["']([^"']+)["']"#).unwrap();

    let mut links = Vec::new();
    for cap in href_pattern.captures_iter(html) {
        if let Some(href) = cap.get(1) {
            let href = href.as_str();

            if href.starts_with('#')
                || href.starts_with("javascript:")
                || href.starts_with("mailto:")
                || href.starts_with("tel:")
            {
                continue;
            }

            if let Ok(resolved) = base_url.join(href) {
                links.push(resolved.to_string());
            }
        }
    }

    links
}

/// Extract the first `<h1>` text, if any.
pub fn extract_heading(html: &str) -> Option<String> {
    let h1_pattern = regex::Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").ok()?;
    h1_pattern
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| clean_text(&decode_entities(&strip_tags(m.as_str()))))
        .filter(|t| !t.is_empty())
}

/// Extract paragraph texts, with boilerplate filtered out.
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let p_pattern = regex::Regex::new(r"(?is)<p[^>]*>(.*?)</p>").unwrap();

    let mut paragraphs = Vec::new();
    for cap in p_pattern.captures_iter(html) {
        if let Some(body) = cap.get(1) {
            let text = clean_text(&decode_entities(&strip_tags(body.as_str())));
            if text.is_empty() {
                continue;
            }

            let lower = text.to_lowercase();
            if BOILERPLATE.iter().any(|b| lower.contains(b)) {
                continue;
            }

            paragraphs.push(text);
        }
    }

    paragraphs
}

/// Whether the markup contains any image tag.
pub fn has_images(html: &str) -> bool {
    let img_pattern = regex::Regex::new(r"(?i)<img[\s>]").unwrap();
    img_pattern.is_match(html)
}

/// Remove all remaining tags.
fn strip_tags(html: &str) -> String {
    let tag_pattern = regex::Regex::new(r"<[^>]+>").unwrap();
    tag_pattern.replace_all(html, " ").to_string()
}

/// Decode the common HTML entities.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links() {
        let base_url = Url::parse("https://help.example.com/page").unwrap();

        let html = r##"
            <a href="/collection/1-getting-started">Getting Started</a>
            <a href="https://help.example.com/article/2-api">API</a>
            <a href="#section">Anchor</a>
            <a href="javascript:void(0)">JS</a>
            <a href="mailto:support@example.com">Mail</a>
        "##;

        let links = extract_links(&base_url, html);

        assert!(links.contains(&"https://help.example.com/collection/1-getting-started".to_string()));
        assert!(links.contains(&"https://help.example.com/article/2-api".to_string()));
        assert!(!links.iter().any(|l| l.contains('#')));
        assert!(!links.iter().any(|l| l.contains("javascript")));
        assert!(!links.iter().any(|l| l.contains("mailto")));
    }

    #[test]
    fn test_extract_heading() {
        let html = "<html><body><h1 class=\"title\">Managing <b>Roles</b></h1><h1>Second</h1></body></html>";
        assert_eq!(extract_heading(html), Some("Managing Roles".to_string()));

        assert_eq!(extract_heading("<body>no heading</body>"), None);
    }

    #[test]
    fn test_extract_paragraphs_filters_boilerplate() {
        let html = r#"
            <p>Roles control what members can do.</p>
            <p>Still need help? Contact Us here.</p>
            <p>Powered by HelpScout</p>
            <p>   </p>
            <p>Managers can invite collaborators.</p>
        "#;

        let paragraphs = extract_paragraphs(html);
        assert_eq!(
            paragraphs,
            vec![
                "Roles control what members can do.".to_string(),
                "Managers can invite collaborators.".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_paragraphs_decodes_entities() {
        let html = "<p>Roles &amp; Permissions &gt; Overview</p>";
        assert_eq!(extract_paragraphs(html), vec!["Roles & Permissions > Overview"]);
    }

    #[test]
    fn test_has_images() {
        assert!(has_images("<p>x</p><img src=\"a.png\">"));
        assert!(has_images("<IMG SRC='b.png'/>"));
        assert!(!has_images("<p>imgage-free text</p>"));
    }
}
