use crate::fixture::{RecordingFactory, compile, schema, word};
use query_syntax::{QueryCompiler, QueryField};

#[test]
fn test_empty_query() {
    assert_eq!(compile("").unwrap(), None);
    assert_eq!(compile("   ").unwrap(), None);
}

#[test]
fn test_single_word() {
    assert_eq!(compile("a").unwrap().unwrap(), word("a"));
}

#[test]
fn test_or() {
    assert_eq!(
        compile("a or b").unwrap().unwrap(),
        format!("OR({}, {})", word("a"), word("b"))
    );
    assert_eq!(
        compile("a OR b Or c").unwrap().unwrap(),
        format!("OR({}, {}, {})", word("a"), word("b"), word("c"))
    );
}

#[test]
fn test_implicit_and() {
    let expected = format!("AND({}, {})", word("a"), word("b"));

    assert_eq!(compile("a b").unwrap().unwrap(), expected);
    assert_eq!(compile("a and b").unwrap().unwrap(), expected);
    assert_eq!(compile("a AND b").unwrap().unwrap(), expected);
    assert_eq!(compile("a && b").unwrap().unwrap(), expected);
}

#[test]
fn test_keywords_need_a_word_boundary() {
    assert_eq!(compile("orange").unwrap().unwrap(), word("orange"));
    assert_eq!(
        compile("a orange").unwrap().unwrap(),
        format!("AND({}, {})", word("a"), word("orange"))
    );
    assert_eq!(
        compile("a android").unwrap().unwrap(),
        format!("AND({}, {})", word("a"), word("android"))
    );
    assert_eq!(
        compile("a or(b)").unwrap().unwrap(),
        format!("OR({}, {})", word("a"), word("b"))
    );
}

#[test]
fn test_and_binds_tighter_than_or() {
    assert_eq!(
        compile("a b or c").unwrap().unwrap(),
        format!("OR(AND({}, {}), {})", word("a"), word("b"), word("c"))
    );
}

#[test]
fn test_negation() {
    assert_eq!(
        compile("!name:bob").unwrap().unwrap(),
        "NOT(name = 'bob')"
    );
    assert_eq!(compile("!a").unwrap().unwrap(), format!("NOT({})", word("a")));
    assert_eq!(
        compile("!!a").unwrap().unwrap(),
        format!("NOT(NOT({}))", word("a"))
    );
}

#[test]
fn test_negation_of_nothing_contributes_nothing() {
    assert_eq!(compile("!").unwrap(), None);
    assert_eq!(compile("!()").unwrap(), None);
    assert_eq!(compile("a !()").unwrap().unwrap(), word("a"));
}

#[test]
fn test_grouping() {
    assert_eq!(
        compile("(a or b) c").unwrap().unwrap(),
        format!("AND(OR({}, {}), {})", word("a"), word("b"), word("c"))
    );
    assert_eq!(
        compile("!(a or b)").unwrap().unwrap(),
        format!("NOT(OR({}, {}))", word("a"), word("b"))
    );
}

#[test]
fn test_empty_group() {
    assert_eq!(compile("()").unwrap(), None);
    assert_eq!(compile("a () b").unwrap().unwrap(), format!("AND({}, {})", word("a"), word("b")));
}

#[test]
fn test_unterminated_bracket_closes_at_end_of_input() {
    assert_eq!(
        compile("(a or b").unwrap().unwrap(),
        format!("OR({}, {})", word("a"), word("b"))
    );
}

#[test]
fn test_stray_closing_bracket_ends_the_query() {
    assert_eq!(compile("a ) b").unwrap().unwrap(), word("a"));
}

#[test]
fn test_dangling_keywords_contribute_nothing() {
    assert_eq!(compile("a or").unwrap().unwrap(), word("a"));
    assert_eq!(compile("a and").unwrap().unwrap(), word("a"));
    assert_eq!(compile("a &&").unwrap().unwrap(), word("a"));
    assert_eq!(compile("(a or)").unwrap().unwrap(), word("a"));
    assert_eq!(compile("(a AND)").unwrap().unwrap(), word("a"));
    assert_eq!(
        compile("(a and) b").unwrap().unwrap(),
        format!("AND({}, {})", word("a"), word("b"))
    );
}

#[test]
fn test_keyword_directly_before_operand() {
    assert_eq!(
        compile("a or!b").unwrap().unwrap(),
        format!("OR({}, NOT({}))", word("a"), word("b"))
    );
    assert_eq!(
        compile(r#"a or"b c""#).unwrap().unwrap(),
        format!("OR({}, AND(OR(search(name, equal, b c))))", word("a"))
    );
    assert_eq!(
        compile("a and!b").unwrap().unwrap(),
        format!("AND({}, NOT({}))", word("a"), word("b"))
    );
    // still plain words when followed by word characters
    assert_eq!(compile("orbit").unwrap().unwrap(), word("orbit"));
}

#[test]
fn test_compilation_is_deterministic() {
    let schema = schema();
    let user = schema.entity("user").unwrap();
    let fields = [QueryField::like("name"), QueryField::prefix("company.name")];
    let query = r#"(acme or "big corp") !status:locked age>=18 ||x:y||"#;

    let first = RecordingFactory::new();
    let second = RecordingFactory::new();
    let a = QueryCompiler::new(&first, &user, query, &fields)
        .compile()
        .unwrap();
    let b = QueryCompiler::new(&second, &user, query, &fields)
        .compile()
        .unwrap();

    assert_eq!(a, b);
    assert_eq!(first.calls(), second.calls());
}

#[test]
fn test_factory_call_sequence() {
    let schema = schema();
    let user = schema.entity("user").unwrap();
    let fields = [QueryField::like("name")];
    let factory = RecordingFactory::new();

    QueryCompiler::new(&factory, &user, "name:bob or a", &fields)
        .compile()
        .unwrap();

    assert_eq!(
        factory.calls(),
        vec![
            "name = 'bob'".to_string(),
            "search(name, like, a)".to_string(),
            "OR(search(name, like, a))".to_string(),
            word("a"),
            format!("OR(name = 'bob', {})", word("a")),
        ]
    );
}
