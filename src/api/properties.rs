use serde_json::Value;

/// Value of one database-page property after extraction.
///
/// Extraction is total: shapes we do not understand come back as `Absent`
/// and the `into_*` coercions fall back to defaults, so a malformed plan
/// never fails the whole response.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<String>),
    Absent,
}

impl PropertyValue {
    pub fn into_text(self) -> String {
        match self {
            PropertyValue::Text(s) => s,
            _ => String::new(),
        }
    }

    pub fn into_number(self) -> f64 {
        match self {
            PropertyValue::Number(n) => n,
            _ => 0.0,
        }
    }

    pub fn into_bool(self) -> bool {
        match self {
            PropertyValue::Bool(b) => b,
            _ => false,
        }
    }

    pub fn into_list(self) -> Vec<String> {
        match self {
            PropertyValue::List(items) => items,
            _ => Vec::new(),
        }
    }
}

/// Extract one named property from a page's property map.
///
/// Supported property types: title and rich_text (first run's plain text),
/// number, checkbox and multi_select. Any other declared type, or a missing
/// property, yields `Absent`.
pub fn property_value(properties: &Value, name: &str) -> PropertyValue {
    let Some(prop) = properties.get(name) else {
        return PropertyValue::Absent;
    };

    match prop.get("type").and_then(Value::as_str) {
        Some(kind @ ("title" | "rich_text")) => {
            let text = prop
                .get(kind)
                .and_then(Value::as_array)
                .and_then(|runs| runs.first())
                .and_then(|run| run.get("plain_text"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            PropertyValue::Text(text)
        }
        Some("number") => PropertyValue::Number(
            prop.get("number").and_then(Value::as_f64).unwrap_or(0.0),
        ),
        Some("checkbox") => PropertyValue::Bool(
            prop.get("checkbox").and_then(Value::as_bool).unwrap_or(false),
        ),
        Some("multi_select") => {
            let names = prop
                .get("multi_select")
                .and_then(Value::as_array)
                .map(|options| {
                    options
                        .iter()
                        .filter_map(|o| o.get("name").and_then(Value::as_str))
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            PropertyValue::List(names)
        }
        _ => PropertyValue::Absent,
    }
}
