use crate::fixture::{RecordingFactory, schema, word};
use model::{
    core::{mapping::Mapping, value::Value},
    schema::{EntityDescriptor, EntityRef},
};
use query_syntax::{
    CompileError, FieldTagHandler, FilterFactory, QueryCompiler, QueryField, TagHandler,
    TagRegistry,
};

/// Looks the value up as a status constant, ignoring anything unknown.
struct StatusTag;

impl<F: FilterFactory, D: EntityDescriptor> TagHandler<F, D> for StatusTag {
    fn generate(&self, factory: &F, _descriptor: &D, value: &str) -> Option<F::Constraint> {
        let status = value.to_uppercase();
        ["ACTIVE", "LOCKED"]
            .contains(&status.as_str())
            .then(|| factory.eq(&Mapping::named("status"), Value::Enum(status)))
    }
}

fn compile_tagged(query: &str) -> Result<Option<String>, CompileError> {
    let schema = schema();
    let user = schema.entity("user").unwrap();
    let fields = [QueryField::like("name")];
    let factory = RecordingFactory::new();

    let mut tags: TagRegistry<RecordingFactory, EntityRef<'_>> = TagRegistry::new();
    tags.register("company", FieldTagHandler::new("company"));
    tags.register("city", FieldTagHandler::new("company.city.zip"));
    tags.register("team", FieldTagHandler::new("team.id"));
    tags.register("status", StatusTag);

    QueryCompiler::new(&factory, &user, query, &fields)
        .with_tags(&tags)
        .compile()
}

#[test]
fn test_registered_tag() {
    assert_eq!(compile_tagged("||company:42||").unwrap().unwrap(), "company = 42");
    assert_eq!(
        compile_tagged("||city:8000||").unwrap().unwrap(),
        "company.city.zip = '8000'"
    );
    assert_eq!(
        compile_tagged("||status:locked||").unwrap().unwrap(),
        "status = 'LOCKED'"
    );
}

#[test]
fn test_tag_type_ignores_case() {
    assert_eq!(compile_tagged("||COMPANY:42||").unwrap().unwrap(), "company = 42");
}

#[test]
fn test_unknown_tag_contributes_nothing() {
    assert_eq!(compile_tagged("||unknown:v||").unwrap(), None);
    assert_eq!(
        compile_tagged("a ||unknown:v|| b").unwrap().unwrap(),
        format!("AND({}, {})", word("a"), word("b"))
    );
}

#[test]
fn test_malformed_tags_contribute_nothing() {
    assert_eq!(compile_tagged("||company||").unwrap(), None);
    assert_eq!(compile_tagged("||company:||").unwrap(), None);
    assert_eq!(compile_tagged("||:42||").unwrap(), None);
    assert_eq!(compile_tagged("||||").unwrap(), None);
}

#[test]
fn test_handler_may_decline() {
    assert_eq!(compile_tagged("||status:deleted||").unwrap(), None);
    // the handler's field does not exist on the schema
    assert_eq!(compile_tagged("||team:1||").unwrap(), None);
}

#[test]
fn test_unterminated_tag_runs_to_end_of_input() {
    assert_eq!(compile_tagged("||company:42").unwrap().unwrap(), "company = 42");
    assert_eq!(
        compile_tagged("||company:42 a").unwrap().unwrap(),
        "company = '42 a'"
    );
}

#[test]
fn test_tags_combine_with_other_expressions() {
    assert_eq!(
        compile_tagged("a ||company:1|| or !||status:active||")
            .unwrap()
            .unwrap(),
        format!("OR(AND({}, company = 1), NOT(status = 'ACTIVE'))", word("a"))
    );
}

#[test]
fn test_tags_without_registry_are_ignored() {
    let schema = schema();
    let user = schema.entity("user").unwrap();
    let fields = [QueryField::like("name")];
    let factory = RecordingFactory::new();

    let result = QueryCompiler::new(&factory, &user, "||company:42|| a", &fields)
        .compile()
        .unwrap();

    assert_eq!(result.unwrap(), word("a"));
}

#[test]
fn test_registry_lookup() {
    let mut tags: TagRegistry<RecordingFactory, EntityRef<'static>> = TagRegistry::default();
    assert!(tags.is_empty());

    tags.register("Owner", FieldTagHandler::new("owner.id"));
    tags.register("status", StatusTag);

    assert!(tags.has_tag("owner"));
    assert!(tags.has_tag("OWNER"));
    assert!(tags.lookup("status").is_some());
    assert!(tags.lookup("team").is_none());
    assert_eq!(tags.tag_types(), vec!["owner", "status"]);
    assert_eq!(tags.len(), 2);
}
