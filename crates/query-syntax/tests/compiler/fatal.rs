use crate::fixture::{RecordingFactory, compile, schema};
use query_syntax::{CompileError, QueryCompiler, QueryField};

fn unexpected(field: &str, position: usize) -> CompileError {
    CompileError::UnexpectedOperator {
        field: field.to_string(),
        found: "'!'".to_string(),
        position,
    }
}

#[test]
fn test_bang_after_field_is_rejected() {
    assert_eq!(compile("name!bob").unwrap_err(), unexpected("name", 4));
    assert_eq!(compile("name!").unwrap_err(), unexpected("name", 4));
    assert_eq!(compile("a name!").unwrap_err(), unexpected("name", 6));
}

#[test]
fn test_bang_after_dotted_field_is_rejected() {
    assert_eq!(
        compile("company.name!x").unwrap_err(),
        unexpected("company.name", 12)
    );
}

#[test]
fn test_nested_failure_aborts_everything() {
    let schema = schema();
    let user = schema.entity("user").unwrap();
    let fields = [QueryField::like("name")];
    let factory = RecordingFactory::new();

    let result = QueryCompiler::new(&factory, &user, "a or (b name!x) c", &fields).compile();

    assert!(matches!(
        result,
        Err(CompileError::UnexpectedOperator { ref field, .. }) if field == "name"
    ));
}

#[test]
fn test_error_message() {
    let err = compile("name!bob").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected a comparison operator after field 'name' at position 4, found '!'"
    );
}
