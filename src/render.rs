//! HTML index page rendering.
//!
//! The page is self-contained: styles and the search script are inlined and
//! nothing is fetched from the network.

use std::fmt::Write;

use crate::entry::Entry;

const URI_SAFE: &[u8] = b"/-_.!~*'()";

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Percent-encodes a relative file link. Only unreserved characters and the
/// `/` separator are kept, so `?`, `#` and `:` stay part of the file name.
pub fn encode_uri(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if b.is_ascii_alphanumeric() || URI_SAFE.contains(&b) {
            out.push(b as char);
        } else {
            let _ = write!(out, "%{:02X}", b);
        }
    }
    out
}

pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Renders the whole index document for `entries`, in the given order.
pub fn render_page(target_label: &str, entries: &[Entry], generated_at: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>HTML pages</title>
  <style>{css}</style>
</head>
<body>
  <div class="wrap">
    <header>
      <div>
        <h1>HTML pages</h1>
        <p class="lead">Every HTML file in this folder ({target}), listed automatically.</p>
      </div>
      <div class="search">
        <input id="q" type="search" placeholder="Search by title or file name">
      </div>
    </header>

    <main>
      <div id="grid" class="grid">{cards}
      </div>
{empty}    </main>

    <footer>
      Generated automatically at {generated_at}
    </footer>
  </div>

  <script>{js}</script>
</body>
</html>
"#,
        css = INLINE_CSS,
        js = INLINE_JS,
        target = escape_html(target_label),
        cards = render_cards(entries),
        empty = render_empty(entries),
        generated_at = escape_html(generated_at),
    )
}

fn render_cards(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|e| {
            let title = escape_html(&e.title);
            format!(
                r#"
        <a class="card" href="./{href}" title="{title}">
          <div class="title">{title}</div>
          <div class="meta">{file}</div>
        </a>"#,
                href = encode_uri(&e.file),
                title = title,
                file = escape_html(&e.file),
            )
        })
        .collect()
}

fn render_empty(entries: &[Entry]) -> &'static str {
    if entries.is_empty() {
        "      <div class=\"empty\">No other HTML pages in this folder.</div>\n"
    } else {
        ""
    }
}

const INLINE_CSS: &str = r#"
    :root{--bg:#0f1724;--card:#0b1220;--accent:#06b6d4;--muted:#9ca3af}
    html,body{height:100%}
    body{
      margin:0;font-family:Inter, ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial;
      background:linear-gradient(180deg,#071024 0%, #071a2a 100%);color:#e6eef6;
      display:flex;align-items:flex-start;justify-content:center;padding:48px 20px;
    }
    .wrap{max-width:1000px;width:100%}
    header{display:flex;align-items:center;gap:16px;margin-bottom:20px}
    h1{margin:0;font-size:20px}
    p.lead{margin:0;color:var(--muted)}
    .grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:14px;margin-top:18px}
    a.card{
      display:block;padding:14px;border-radius:12px;background:linear-gradient(180deg, rgba(255,255,255,0.02), rgba(0,0,0,0.06));
      text-decoration:none;color:inherit;box-shadow:0 6px 18px rgba(2,6,23,0.6);transition:transform .14s, box-shadow .14s;
      border:1px solid rgba(255,255,255,0.03);
    }
    a.card:hover{transform:translateY(-6px);box-shadow:0 20px 40px rgba(2,6,23,0.6)}
    .title{font-weight:600;margin-bottom:6px}
    .meta{font-size:13px;color:var(--muted)}
    .search{margin-left:auto}
    input[type="search"]{
      appearance:none;padding:8px 12px;border-radius:10px;border:1px solid rgba(255,255,255,0.04);
      background:rgba(255,255,255,0.02);color:inherit;outline:none;width:220px
    }
    footer{margin-top:28px;color:var(--muted);font-size:13px}
    .empty{padding:28px;border-radius:12px;background:rgba(255,255,255,0.02);text-align:center;color:var(--muted)}
  "#;

const INLINE_JS: &str = r#"
    const items = Array.from(document.querySelectorAll('.card'));
    const q = document.getElementById('q');
    function normalize(s){ return s.trim().toLowerCase(); }
    q.addEventListener('input', () => {
      const v = normalize(q.value);
      items.forEach(card => {
        const t = normalize(card.querySelector('.title').textContent + ' ' + card.querySelector('.meta').textContent);
        card.style.display = t.includes(v) ? 'block' : 'none';
      });
    });
  "#;

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(file: &str, title: &str) -> Entry {
        Entry::new(file.to_string(), title.to_string())
    }

    #[test]
    fn escapes_each_special_character_once() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
        assert_eq!(escape_html("plain 문서"), "plain 문서");
    }

    #[test]
    fn encodes_reserved_characters_except_slash() {
        assert_eq!(encode_uri("my page.html"), "my%20page.html");
        assert_eq!(encode_uri("../guide.html"), "../guide.html");
        assert_eq!(encode_uri("a?b=c&d#e.html"), "a%3Fb%3Dc%26d%23e.html");
        assert_eq!(encode_uri("notes:v1;x,y@z+$.html"), "notes%3Av1%3Bx%2Cy%40z%2B%24.html");
        assert_eq!(encode_uri("it's (draft)!~*.html"), "it's%20(draft)!~*.html");
        assert_eq!(encode_uri("100%.html"), "100%25.html");
        assert_eq!(encode_uri("é.html"), "%C3%A9.html");
        assert_eq!(encode_uri("[x]\"<>.html"), "%5Bx%5D%22%3C%3E.html");
    }

    #[test]
    fn renders_one_card_per_entry_in_order() {
        let page = render_page(
            "docs",
            &[entry("A.html", "Alpha"), entry("b.HTML", "b")],
            "now",
        );
        let alpha = page.find(r#"href="./A.html""#).unwrap();
        let beta = page.find(r#"href="./b.HTML""#).unwrap();
        assert!(alpha < beta);
        assert_eq!(page.matches(r#"<a class="card""#).count(), 2);
        assert!(page.contains(r#"<div class="title">Alpha</div>"#));
        assert!(page.contains(r#"<div class="meta">b.HTML</div>"#));
        assert!(!page.contains(r#"class="empty""#));
    }

    #[test]
    fn empty_listing_renders_placeholder() {
        let page = render_page("docs", &[], "now");
        assert!(page.contains(r#"<div class="empty">"#));
        assert!(!page.contains(r#"<a class="card""#));
    }

    #[test]
    fn interpolated_values_are_escaped() {
        let page = render_page("<dir>", &[entry("x y.html", "<b>&</b>")], "now");
        assert!(page.contains(r#"href="./x%20y.html""#));
        assert!(page.contains(r#"title="&lt;b&gt;&amp;&lt;/b&gt;""#));
        assert!(page.contains("(&lt;dir&gt;)"));
        assert!(!page.contains("<b>&</b>"));
    }

    #[test]
    fn output_only_depends_on_inputs() {
        let entries = [entry("a.html", "A")];
        assert_eq!(
            render_page("docs", &entries, "2024-01-01 00:00:00"),
            render_page("docs", &entries, "2024-01-01 00:00:00")
        );
    }

    #[test]
    fn hash_in_file_name_stays_in_the_link_path() {
        let page = render_page("docs", &[entry("a#b.html", "A")], "now");
        assert!(page.contains(r#"href="./a%23b.html""#));
        assert!(page.contains(r#"<div class="meta">a#b.html</div>"#));
    }

    #[test]
    fn page_is_self_contained() {
        let page = render_page("docs", &[entry("a.html", "A")], "now");
        assert!(page.contains(r#"<input id="q" type="search""#));
        assert!(page.contains("addEventListener('input'"));
        assert!(!page.contains("http://"));
        assert!(!page.contains("https://"));
    }
}
