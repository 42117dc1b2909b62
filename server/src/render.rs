use shared::Prediction;
use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Minimal escaping for text interpolated into the pages. Labels come
/// from the class-index file and notices from the query string, so
/// neither is trusted markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `/static/<fname>` with the file's mtime as a cache-busting query
/// string, so stylesheet edits show up without a hard refresh.
pub fn static_href(static_dir: &Path, fname: &str) -> String {
    let version = fs::metadata(static_dir.join(fname))
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|mtime| mtime.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("/static/{fname}?v={version}")
}

fn page(title: &str, css_href: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="{css_href}">
</head>
<body>
{body}
</body>
</html>
"#
    )
}

/// The upload form, with an optional flash-style notice above it.
pub fn form_page(notice: Option<&str>, css_href: &str) -> String {
    let notice_html = match notice {
        Some(text) => format!("<p class=\"notice\">{}</p>\n", escape(text)),
        None => String::new(),
    };
    let body = format!(
        r#"{notice_html}<h1>Image classification</h1>
<p>Upload a PNG or JPEG (1 MiB max) to see the five most likely ImageNet classes.</p>
<form method="post" action="/predict" enctype="multipart/form-data">
  <input type="file" name="file" accept=".png,.jpg,.jpeg">
  <input type="submit" value="Predict">
</form>"#
    );
    page("Predict", css_href, &body)
}

/// The result view: the ranked top-5 table and a link back to the form.
pub fn result_page(predictions: &[Prediction], css_href: &str) -> String {
    let mut rows = String::new();
    for (rank, prediction) in predictions.iter().enumerate() {
        rows.push_str(&format!(
            "    <tr><td>{}</td><td>{}</td><td>{}%</td></tr>\n",
            rank + 1,
            escape(&prediction.label),
            prediction.score,
        ));
    }
    let body = format!(
        r#"<h1>Prediction result</h1>
<table class="results">
  <thead><tr><th>#</th><th>Class</th><th>Confidence</th></tr></thead>
  <tbody>
{rows}  </tbody>
</table>
<p><a href="/predict">Classify another image</a></p>"#
    );
    page("Result", css_href, &body)
}
