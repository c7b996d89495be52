//! HTML result cards.
//!
//! A card is chosen by category name and reads fields straight off a JSON object, so it also
//! renders payloads that did not come from the typed dataset. Every interpolated value is escaped.

use potter_domain::catalog::Category;
use serde_json::Value;
use std::str::FromStr;

const UNKNOWN: &str = "Unknown";
const SUMMARY_CHARS: usize = 50;

/// One `label: field` row of a card.
struct Property {
    label: &'static str,
    field: &'static str,
}

const fn prop(label: &'static str, field: &'static str) -> Property {
    Property { label, field }
}

const BOOK_PROPERTIES: &[Property] = &[
    prop("Number", "number"),
    prop("Original Title", "originalTitle"),
    prop("Pages", "pages"),
    prop("Release Date", "releaseDate"),
    prop("Description", "description"),
];

const CHARACTER_PROPERTIES: &[Property] = &[
    prop("Nickname", "nickname"),
    prop("Hogwarts House", "hogwartsHouse"),
    prop("Interpreted By", "interpretedBy"),
    prop("Birthdate", "birthdate"),
];

const HOUSE_PROPERTIES: &[Property] =
    &[prop("Founder", "founder"), prop("Animal", "animal"), prop("Colors", "colors")];

const SPELL_PROPERTIES: &[Property] = &[prop("Use", "use")];

/// Renders one item as a `result-card` fragment.
#[must_use]
pub fn render_card(category: &str, item: &Value) -> String {
    let (title, image, body) = match Category::from_str(category) {
        Ok(category @ (Category::Books | Category::Characters)) => {
            let (image_field, rows) = if category == Category::Books {
                ("cover", BOOK_PROPERTIES)
            } else {
                ("image", CHARACTER_PROPERTIES)
            };
            (
                first_text(item, &[category.name_field(), "name"])
                    .unwrap_or_else(|| UNKNOWN.to_owned()),
                text(item, image_field),
                properties(item, rows),
            )
        }
        Ok(category @ Category::Houses) => (
            format!(
                "{} {}",
                text(item, "emoji").unwrap_or_default(),
                text(item, category.name_field()).unwrap_or_else(|| UNKNOWN.to_owned())
            ),
            None,
            properties(item, HOUSE_PROPERTIES),
        ),
        Ok(category @ Category::Spells) => (
            text(item, category.name_field()).unwrap_or_else(|| UNKNOWN.to_owned()),
            None,
            properties(item, SPELL_PROPERTIES),
        ),
        Err(_) => (fallback_title(item), None, raw_json(item)),
    };

    let title = escape(&title);
    let image = image
        .map(|src| format!(r#"<img src="{}" alt="{title}" class="result-image">"#, escape(&src)))
        .unwrap_or_default();

    format!(
        r#"<div class="result-card"><div class="result-title">{title}</div>{image}<div class="result-content">{body}</div></div>"#
    )
}

/// Renders a single object or every object of an array, in order.
#[must_use]
pub fn render_cards(category: &str, items: &Value) -> String {
    match items {
        Value::Array(items) => items.iter().map(|item| render_card(category, item)).collect(),
        item => render_card(category, item),
    }
}

fn properties(item: &Value, properties: &[Property]) -> String {
    properties
        .iter()
        .filter_map(|Property { label, field }| {
            text(item, field).map(|value| {
                format!(
                    r#"<div class="result-property"><strong>{label}:</strong> <span>{}</span></div>"#,
                    escape(&value)
                )
            })
        })
        .collect()
}

fn fallback_title(item: &Value) -> String {
    text(item, "name").unwrap_or_else(|| item.to_string().chars().take(SUMMARY_CHARS).collect())
}

fn raw_json(item: &Value) -> String {
    let pretty = serde_json::to_string_pretty(item).unwrap_or_else(|_| item.to_string());
    format!("<pre>{}</pre>", escape(&pretty))
}

fn first_text(item: &Value, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| text(item, field))
}

/// Display text of a field; `None` when absent, `null` or an empty string.
fn text(item: &Value, field: &str) -> Option<String> {
    match item.get(field)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(values) => {
            let joined = values
                .iter()
                .map(|value| match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            (!joined.is_empty()).then_some(joined)
        }
        other => Some(other.to_string()),
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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
