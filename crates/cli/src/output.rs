use crate::error::CliError;
use planner::{FilterExpr, SqlFilter};
use serde_json::Value as Json;

const NO_CONSTRAINT: &str = "(no constraint)";

pub fn render_expr(expr: Option<&FilterExpr>, json: bool) -> Result<String, CliError> {
    if json {
        return serde_json::to_string_pretty(&expr).map_err(CliError::JsonSerialize);
    }
    Ok(expr.map_or_else(|| NO_CONSTRAINT.to_string(), ToString::to_string))
}

pub fn render_sql(filter: Option<&SqlFilter>, json: bool) -> Result<String, CliError> {
    if json {
        return serde_json::to_string_pretty(&filter).map_err(CliError::JsonSerialize);
    }
    let Some(filter) = filter else {
        return Ok(NO_CONSTRAINT.to_string());
    };

    let mut lines = vec![filter.sql.clone()];
    for (i, param) in filter.params.iter().enumerate() {
        lines.push(format!("-- {}: {}", i + 1, param));
    }
    Ok(lines.join("\n"))
}

/// Mongo output is always JSON; an empty document matches everything.
pub fn render_mongo(document: Option<&Json>) -> Result<String, CliError> {
    match document {
        Some(document) => serde_json::to_string_pretty(document).map_err(CliError::JsonSerialize),
        None => Ok("{}".to_string()),
    }
}

/// One entry per line, or a JSON array.
pub fn render_list<S: AsRef<str> + serde::Serialize>(
    items: &[S],
    json: bool,
) -> Result<String, CliError> {
    if json {
        return serde_json::to_string_pretty(items).map_err(CliError::JsonSerialize);
    }
    let lines: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    Ok(lines.join("\n"))
}
