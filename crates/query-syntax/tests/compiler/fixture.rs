use model::{
    core::{data_type::DataType, mapping::Mapping, value::Value},
    schema::{EntityDef, PropertyDef, Schema},
};
use query_syntax::{CompileError, FilterFactory, QueryCompiler, QueryField, SearchMode};
use std::cell::RefCell;

/// Renders constraints as text and remembers every call in order.
#[derive(Default)]
pub struct RecordingFactory {
    calls: RefCell<Vec<String>>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, constraint: String) -> String {
        self.calls.borrow_mut().push(constraint.clone());
        constraint
    }
}

impl FilterFactory for RecordingFactory {
    type Constraint = String;

    fn and(&self, constraints: Vec<String>) -> String {
        assert!(!constraints.is_empty(), "and() called with an empty list");
        self.record(format!("AND({})", constraints.join(", ")))
    }

    fn or(&self, constraints: Vec<String>) -> String {
        assert!(!constraints.is_empty(), "or() called with an empty list");
        self.record(format!("OR({})", constraints.join(", ")))
    }

    fn not(&self, constraint: String) -> String {
        self.record(format!("NOT({constraint})"))
    }

    fn eq(&self, field: &Mapping, value: Value) -> String {
        self.record(format!("{field} = {value}"))
    }

    fn ne(&self, field: &Mapping, value: Value) -> String {
        self.record(format!("{field} <> {value}"))
    }

    fn gt(&self, field: &Mapping, value: Value) -> String {
        self.record(format!("{field} > {value}"))
    }

    fn gte(&self, field: &Mapping, value: Value) -> String {
        self.record(format!("{field} >= {value}"))
    }

    fn lt(&self, field: &Mapping, value: Value) -> String {
        self.record(format!("{field} < {value}"))
    }

    fn lte(&self, field: &Mapping, value: Value) -> String {
        self.record(format!("{field} <= {value}"))
    }

    fn search_token(&self, field: &Mapping, mode: SearchMode, word: &str) -> String {
        self.record(format!("search({field}, {mode}, {word})"))
    }
}

pub fn schema() -> Schema {
    Schema::new(vec![
        EntityDef::new(
            "user",
            vec![
                PropertyDef::new("name", DataType::String),
                PropertyDef::new("age", DataType::Int),
                PropertyDef::new(
                    "status",
                    DataType::Enum(vec!["ACTIVE".to_string(), "LOCKED".to_string()]),
                ),
                PropertyDef::reference("company", DataType::Int, "company"),
            ],
        ),
        EntityDef::new(
            "company",
            vec![
                PropertyDef::new("name", DataType::String),
                PropertyDef::reference("city", DataType::Int, "city"),
            ],
        ),
        EntityDef::new("city", vec![PropertyDef::new("zip", DataType::String)]),
    ])
}

/// Compiles against `user` with `name` as the only default search field.
pub fn compile(query: &str) -> Result<Option<String>, CompileError> {
    compile_with_fields(query, &[QueryField::like("name")])
}

pub fn compile_with_fields(
    query: &str,
    fields: &[QueryField],
) -> Result<Option<String>, CompileError> {
    let schema = schema();
    let user = schema.entity("user").unwrap();
    let factory = RecordingFactory::new();

    QueryCompiler::new(&factory, &user, query, fields).compile()
}

/// The constraint a single unquoted word searched in `name` produces.
pub fn word(text: &str) -> String {
    format!("AND(OR(search(name, like, {text})))")
}
