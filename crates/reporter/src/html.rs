use crate::document::ReportDocument;
use analytics::{Report, Section};

/// Renders the report body: one `<section>` per report section, with a
/// results table and the narrative lines as a list.
pub fn render_fragment(report: &Report, decimals: usize) -> String {
    let mut html = String::new();
    html.push_str(&format!("<h2 class=\"analysis\">{}</h2>\n", escape_html(&report.title)));
    for section in &report.sections {
        html.push_str(&render_section(section, decimals));
    }
    html
}

fn render_section(section: &Section, decimals: usize) -> String {
    let rows = section
        .results
        .iter()
        .map(|m| {
            format!(
                "    <tr><th>{}</th><td>{}</td></tr>",
                escape_html(&m.label),
                escape_html(&m.formatted(decimals))
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let table = if rows.is_empty() {
        String::new()
    } else {
        format!("  <table>\n{rows}\n  </table>\n")
    };

    let notes = if section.notes.is_empty() {
        String::new()
    } else {
        let items = section
            .notes
            .iter()
            .map(|n| format!("    <li>{}</li>", escape_html(n)))
            .collect::<Vec<_>>()
            .join("\n");
        format!("  <ul class=\"notes\">\n{items}\n  </ul>\n")
    };

    format!(
        "<section>\n  <h3>{}</h3>\n{table}{notes}</section>\n",
        escape_html(&section.title)
    )
}

/// Renders a complete, standalone HTML document.
pub fn render_document(doc: &ReportDocument) -> String {
    let screenshot = match &doc.screenshot {
        Some(path) => format!(
            "<figure class=\"screenshot\">\n  <img src=\"{src}\" alt=\"Model screenshot\" />\n  <figcaption>{src}</figcaption>\n</figure>\n",
            src = escape_html(&path.display().to_string())
        ),
        None => String::new(),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="report-id" content="{id}" />
<title>{title}</title>
<style>
  body{{font:14px/1.5 system-ui, sans-serif; color:#1f2937; margin:24px; max-width:960px}}
  h1,h2,h3{{color:#111827}}
  .muted{{color:#6b7280}}
  table{{border-collapse:collapse; min-width:360px; margin:8px 0}}
  th,td{{padding:6px 12px; border-bottom:1px solid #e5e7eb}}
  th{{text-align:left; font-weight:500}}
  td{{text-align:right; font-variant-numeric:tabular-nums}}
  .notes{{color:#374151}}
  .screenshot img{{max-width:100%; border:1px solid #e5e7eb}}
</style>
</head>
<body>
<h1>{title}</h1>
<p class="muted">Generated {generated} &middot; Report {id}</p>
{screenshot}{body}</body>
</html>
"#,
        id = doc.id,
        title = escape_html(&doc.title),
        generated = doc.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        screenshot = screenshot,
        body = render_fragment(&doc.report, doc.decimals),
    )
}

/// Escapes the characters that have special meaning in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
