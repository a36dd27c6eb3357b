//! HTML rendering for the results page.

use searcher_core::ResultRecord;

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Links are only rendered as anchors for http(s) targets.
fn safe_href(link: &str) -> Option<String> {
    let lower = link.trim_start().to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://")).then(|| escape_html(link))
}

fn render_item(record: &ResultRecord) -> String {
    let title = escape_html(&record.title);
    let heading = match safe_href(&record.link) {
        Some(href) => format!(r#"<a href="{href}" target="_blank" rel="noopener noreferrer">{title}</a>"#),
        None => title,
    };

    format!(
        "<li class=\"result\">\n<h3>{}</h3>\n<p class=\"link\">{}</p>\n<p class=\"snippet\">{}</p>\n</li>\n",
        heading,
        escape_html(&record.link),
        escape_html(&record.snippet)
    )
}

/// Render the results page for `query`, listing every record in order.
pub fn results_page(query: &str, results: &[ResultRecord]) -> String {
    let query = escape_html(query);

    let body = if results.is_empty() {
        "<p class=\"empty\">No results found.</p>\n".to_string()
    } else {
        let items: String = results.iter().map(render_item).collect();
        format!("<ol class=\"results\">\n{items}</ol>\n<p><a href=\"/download\">Download results as JSON</a></p>\n")
    };

    let mut page = String::with_capacity(body.len() + 512);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>Results for {query}</title>\n</head>\n<body>\n"));
    page.push_str("<form action=\"/search\" method=\"get\">\n");
    page.push_str(&format!("<input type=\"text\" name=\"query\" value=\"{query}\" required>\n"));
    page.push_str("<button type=\"submit\">Search</button>\n</form>\n");
    page.push_str(&format!("<h2>Results for {query}</h2>\n"));
    page.push_str(&body);
    page.push_str("</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_results_rendered_in_order() {
        let results = vec![
            ResultRecord::new("First", "https://one.example", "one"),
            ResultRecord::new("Second", "https://two.example", "two"),
        ];
        let page = results_page("rust", &results);

        assert!(page.find("First").unwrap() < page.find("Second").unwrap());
        assert!(page.contains(r#"href="https://one.example""#));
        assert!(page.contains("/download"));
    }

    #[test]
    fn test_empty_results_page() {
        let page = results_page("nothing", &[]);
        assert!(page.contains("No results found."));
        assert!(!page.contains("<li"));
    }

    #[test]
    fn test_untrusted_content_is_escaped() {
        let results = vec![ResultRecord::new("<script>x</script>", "javascript:alert(1)", "a & b")];
        let page = results_page("<q>", &results);

        assert!(!page.contains("<script>"));
        assert!(!page.contains(r#"href="javascript:"#));
        assert!(page.contains("a &amp; b"));
        assert!(page.contains("&lt;q&gt;"));
    }
}
