//! HTML report over a survey snapshot.

use super::types::{Responder, Survey};

use std::collections::HashSet;

const REPORT_STYLE: &str = "td{border:1px solid lightgrey;padding:5px;}";

/// Renders every responder's answers as one table each.
///
/// Responders appear in name order. Within a table, answers follow the
/// survey's question order; answers to questions the survey no longer asks
/// come last.
pub fn render_html(survey: &Survey) -> String {
    let name = escape_html(&survey.name);
    let mut html = format!(
        "<html><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body>",
        name, REPORT_STYLE
    );
    html.push_str(&format!("<h1>{}</h1><br>", name));

    for responder in survey.responders.values() {
        html.push_str(&format!(
            "<table><tr><th colspan=\"2\">{}</th></tr>",
            escape_html(&responder.name)
        ));
        for (question, answer) in ordered_answers(survey, responder) {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                escape_html(question),
                escape_html(answer)
            ));
        }
        html.push_str("</table><br>");
    }

    html.push_str("</body></html>");
    html
}

/// Each answer exactly once, even when the question list repeats a question.
fn ordered_answers<'a>(survey: &'a Survey, responder: &'a Responder) -> Vec<(&'a str, &'a str)> {
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut pairs: Vec<(&str, &str)> = survey
        .questions
        .iter()
        .filter(|q| emitted.insert(q.as_str()))
        .filter_map(|q| {
            responder
                .answers
                .get(q)
                .map(|answer| (q.as_str(), answer.as_str()))
        })
        .collect();

    // Orphaned answers: the question text changed or was never part of the survey.
    pairs.extend(
        responder
            .answers
            .iter()
            .filter(|(q, _)| !emitted.contains(q.as_str()))
            .map(|(q, a)| (q.as_str(), a.as_str())),
    );

    pairs
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
