use pulldown_cmark::{html, Options, Parser};

/// Fixed resume stylesheet. Typography for headings, paragraphs, lists and rules.
pub const RESUME_STYLESHEET: &str = r#"
body {
    font-family: 'Helvetica Neue', Arial, sans-serif;
    font-size: 11pt;
    line-height: 1.5;
    color: #333;
    max-width: 800px;
    margin: 0 auto;
    padding: 40px;
}
h1 {
    font-size: 24pt;
    color: #2c3e50;
    margin-bottom: 5px;
    border-bottom: 2px solid #3498db;
    padding-bottom: 10px;
}
h2 {
    font-size: 14pt;
    color: #2c3e50;
    margin-top: 20px;
    margin-bottom: 10px;
    border-bottom: 1px solid #bdc3c7;
    padding-bottom: 5px;
}
h3 {
    font-size: 12pt;
    color: #34495e;
    margin-bottom: 3px;
}
p {
    margin: 5px 0;
}
ul {
    margin: 5px 0;
    padding-left: 20px;
}
li {
    margin: 3px 0;
}
hr {
    border: none;
    border-top: 1px solid #ecf0f1;
    margin: 15px 0;
}
strong {
    color: #2c3e50;
}
"#;

/// CommonMark → HTML with tables enabled. Fenced code blocks are core CommonMark.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Wraps an HTML body in a complete document carrying `RESUME_STYLESHEET`.
pub fn styled_html(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>{RESUME_STYLESHEET}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_markdown_converts() {
        let html = markdown_to_html("# Ada Lovelace\n\n**Engineer**\n\n---\n\n## Skills\n\nMath, Logic\n");
        assert!(html.contains("<h1>Ada Lovelace</h1>"));
        assert!(html.contains("<strong>Engineer</strong>"));
        assert!(html.contains("<hr />"));
        assert!(html.contains("<h2>Skills</h2>"));
    }

    #[test]
    fn test_bullets_and_links() {
        let html = markdown_to_html("### [Note G](https://example.com)\n\n- Did X\n- Did Y\n");
        assert!(html.contains("<a href=\"https://example.com\">Note G</a>"));
        assert!(html.contains("<li>Did X</li>"));
    }

    #[test]
    fn test_tables_and_fenced_code() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |\n\n```rust\nfn main() {}\n```\n";
        let html = markdown_to_html(md);
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<code class=\"language-rust\">"));
    }

    #[test]
    fn test_styled_html_embeds_stylesheet() {
        let doc = styled_html("<h1>Ada</h1>\n");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("border-bottom: 2px solid #3498db;"));
        assert!(doc.contains("<body>\n<h1>Ada</h1>\n</body>"));
    }
}
