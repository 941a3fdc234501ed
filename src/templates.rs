//! HTML pages compiled into the binary

use axum::response::Html;

use crate::models::Prediction;

const INDEX: &str = include_str!("../templates/index.html");
const DEVELOPERS: &str = include_str!("../templates/developers.html");

const RESULT_SLOT: &str = "{{ result }}";

/// Home page, optionally with a prediction result block
pub fn index(prediction: Option<Prediction>) -> Html<String> {
    let block = match prediction {
        Some(p) => {
            let class = match p {
                Prediction::Fraud => "fraud",
                Prediction::NotFraud => "not-fraud",
            };
            format!(
                r#"<div class="result {}">Prediction: <span id="result">{}</span></div>"#,
                class,
                escape(p.label())
            )
        }
        None => String::new(),
    };

    Html(INDEX.replace(RESULT_SLOT, &block))
}

pub fn developers() -> Html<&'static str> {
    Html(DEVELOPERS)
}

fn escape(s: &str) -> String {
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
