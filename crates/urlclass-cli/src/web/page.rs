//! HTML for the single-page form.

use urlclass_core::model::Prediction;

/// What to show under the form after a submission.
#[derive(Debug, Clone)]
pub enum Outcome {
    Predicted(Prediction),
    Failed(String),
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>URL Classification Web App</title>
<style>
body { font-family: sans-serif; max-width: 44rem; margin: 3rem auto; padding: 0 1rem; color: #222; }
label { display: block; margin-bottom: .4rem; }
input[type=text] { width: 100%; padding: .5rem; box-sizing: border-box; font-family: monospace; }
button { margin-top: .6rem; padding: .4rem 1.2rem; }
.result { margin-top: 1.5rem; font-size: 1.1rem; }
.error { margin-top: 1.5rem; color: #a40000; }
</style>
</head>
<body>
<h1>URL Classification Web App</h1>
<p>This web app predicts the type of a URL: whether it is benign, phishing, malware, or defacement.</p>
"#;

const TAIL: &str = "</body>\n</html>\n";

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the page with `url` prefilled and an optional outcome below it.
pub fn render(url: &str, outcome: Option<&Outcome>) -> String {
    let mut html = String::with_capacity(HEAD.len() + 512);
    html.push_str(HEAD);
    html.push_str(&format!(
        concat!(
            "<form method=\"post\" action=\"/\">\n",
            "<label for=\"url\">Enter URL to classify:</label>\n",
            "<input type=\"text\" id=\"url\" name=\"url\" value=\"{}\" autofocus>\n",
            "<button type=\"submit\">Classify</button>\n",
            "</form>\n"
        ),
        escape_html(url)
    ));

    match outcome {
        Some(Outcome::Predicted(p)) => html.push_str(&format!(
            "<p class=\"result\"><strong>Prediction</strong>: The URL is classified as {} \
             ({:.0}% of the ensemble vote)</p>\n",
            p.class,
            p.confidence * 100.0
        )),
        Some(Outcome::Failed(msg)) => html.push_str(&format!(
            "<p class=\"error\">An error occurred: {}</p>\n",
            escape_html(msg)
        )),
        None => {}
    }

    html.push_str(TAIL);
    html
}
