use chrono::SecondsFormat;
use model::core::{mapping::Mapping, value::Value};
use query_syntax::{FilterFactory, SearchMode};
use serde_json::{Map, Value as Json, json};

/// Builds MongoDB query documents. Dotted mappings are used as-is, since
/// Mongo addresses embedded fields with the same notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoFilterFactory;

impl MongoFilterFactory {
    fn field_op(field: &Mapping, op: &str, value: Json) -> Json {
        let mut condition = Map::new();
        condition.insert(op.to_string(), value);

        let mut document = Map::new();
        document.insert(field.to_string(), Json::Object(condition));
        Json::Object(document)
    }

    fn regex(field: &Mapping, pattern: String) -> Json {
        let mut document = Map::new();
        document.insert(
            field.to_string(),
            json!({ "$regex": pattern, "$options": "i" }),
        );
        Json::Object(document)
    }
}

impl FilterFactory for MongoFilterFactory {
    type Constraint = Json;

    fn and(&self, constraints: Vec<Json>) -> Json {
        json!({ "$and": constraints })
    }

    fn or(&self, constraints: Vec<Json>) -> Json {
        json!({ "$or": constraints })
    }

    fn not(&self, constraint: Json) -> Json {
        json!({ "$nor": [constraint] })
    }

    fn eq(&self, field: &Mapping, value: Value) -> Json {
        Self::field_op(field, "$eq", to_json(&value))
    }

    fn ne(&self, field: &Mapping, value: Value) -> Json {
        Self::field_op(field, "$ne", to_json(&value))
    }

    fn gt(&self, field: &Mapping, value: Value) -> Json {
        Self::field_op(field, "$gt", to_json(&value))
    }

    fn gte(&self, field: &Mapping, value: Value) -> Json {
        Self::field_op(field, "$gte", to_json(&value))
    }

    fn lt(&self, field: &Mapping, value: Value) -> Json {
        Self::field_op(field, "$lt", to_json(&value))
    }

    fn lte(&self, field: &Mapping, value: Value) -> Json {
        Self::field_op(field, "$lte", to_json(&value))
    }

    fn search_token(&self, field: &Mapping, mode: SearchMode, word: &str) -> Json {
        match mode {
            SearchMode::Equal => Self::field_op(field, "$eq", Json::from(word)),
            SearchMode::Prefix => Self::regex(field, format!("^{}", escape_regex(word))),
            SearchMode::Like => Self::regex(
                field,
                format!("^{}$", escape_regex(word).replace(r"\*", ".*")),
            ),
            SearchMode::Contains => Self::regex(field, escape_regex(word)),
        }
    }
}

/// Converts a value into its extended JSON form.
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Int(v) => Json::from(*v),
        Value::Float(v) => Json::from(*v),
        Value::Decimal(v) => json!({ "$numberDecimal": v.to_string() }),
        Value::String(v) | Value::Enum(v) => Json::from(v.as_str()),
        Value::Boolean(v) => Json::from(*v),
        Value::Date(v) => Json::from(v.format("%Y-%m-%d").to_string()),
        Value::Timestamp(v) => {
            json!({ "$date": v.to_rfc3339_opts(SecondsFormat::Millis, true) })
        }
        Value::Null => Json::Null,
    }
}

fn escape_regex(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for ch in word.chars() {
        if "\\^$.|?*+()[]{}/".contains(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
