use model::core::{mapping::Mapping, value::Value};
use query_syntax::{FilterFactory, Operator, SearchMode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-neutral constraint tree, mainly for inspecting compiled queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterExpr {
    And {
        children: Vec<FilterExpr>,
    },
    Or {
        children: Vec<FilterExpr>,
    },
    Not {
        child: Box<FilterExpr>,
    },
    Compare {
        field: Mapping,
        operator: Operator,
        value: Value,
    },
    Search {
        field: Mapping,
        mode: SearchMode,
        word: String,
    },
}

impl FilterExpr {
    fn compare(field: &Mapping, operator: Operator, value: Value) -> Self {
        FilterExpr::Compare {
            field: field.clone(),
            operator,
            value,
        }
    }

    /// Number of comparisons and search tokens in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            FilterExpr::And { children } | FilterExpr::Or { children } => {
                children.iter().map(FilterExpr::leaf_count).sum()
            }
            FilterExpr::Not { child } => child.leaf_count(),
            FilterExpr::Compare { .. } | FilterExpr::Search { .. } => 1,
        }
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpr::And { children } => write_group(f, "AND", children),
            FilterExpr::Or { children } => write_group(f, "OR", children),
            FilterExpr::Not { child } => write!(f, "NOT({child})"),
            FilterExpr::Compare {
                field,
                operator,
                value,
            } => write!(f, "{field} {operator} {value}"),
            FilterExpr::Search { field, mode, word } => {
                write!(f, "{field} {mode} '{}'", word.replace('\'', "\\'"))
            }
        }
    }
}

fn write_group(f: &mut fmt::Formatter<'_>, name: &str, children: &[FilterExpr]) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{child}")?;
    }
    write!(f, ")")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExprFilterFactory;

impl FilterFactory for ExprFilterFactory {
    type Constraint = FilterExpr;

    fn and(&self, children: Vec<FilterExpr>) -> FilterExpr {
        FilterExpr::And { children }
    }

    fn or(&self, children: Vec<FilterExpr>) -> FilterExpr {
        FilterExpr::Or { children }
    }

    fn not(&self, child: FilterExpr) -> FilterExpr {
        FilterExpr::Not {
            child: Box::new(child),
        }
    }

    fn eq(&self, field: &Mapping, value: Value) -> FilterExpr {
        FilterExpr::compare(field, Operator::Equal, value)
    }

    fn ne(&self, field: &Mapping, value: Value) -> FilterExpr {
        FilterExpr::compare(field, Operator::NotEqual, value)
    }

    fn gt(&self, field: &Mapping, value: Value) -> FilterExpr {
        FilterExpr::compare(field, Operator::GreaterThan, value)
    }

    fn gte(&self, field: &Mapping, value: Value) -> FilterExpr {
        FilterExpr::compare(field, Operator::GreaterOrEqual, value)
    }

    fn lt(&self, field: &Mapping, value: Value) -> FilterExpr {
        FilterExpr::compare(field, Operator::LessThan, value)
    }

    fn lte(&self, field: &Mapping, value: Value) -> FilterExpr {
        FilterExpr::compare(field, Operator::LessOrEqual, value)
    }

    fn search_token(&self, field: &Mapping, mode: SearchMode, word: &str) -> FilterExpr {
        FilterExpr::Search {
            field: field.clone(),
            mode,
            word: word.to_string(),
        }
    }
}
