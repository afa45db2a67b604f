use crate::fixture::{compile, word};

#[test]
fn test_field_comparison() {
    assert_eq!(compile("name:bob").unwrap().unwrap(), "name = 'bob'");
    assert_eq!(compile("name=bob").unwrap().unwrap(), "name = 'bob'");
}

#[test]
fn test_every_operator() {
    let cases = [
        ("age=18", "age = 18"),
        ("age:18", "age = 18"),
        ("age!=18", "age <> 18"),
        ("age<>18", "age <> 18"),
        ("age>18", "age > 18"),
        ("age>=18", "age >= 18"),
        ("age<18", "age < 18"),
        ("age<=18", "age <= 18"),
    ];

    for (query, expected) in cases {
        assert_eq!(compile(query).unwrap().unwrap(), expected, "query: {query}");
    }
}

#[test]
fn test_whitespace_around_operator() {
    assert_eq!(compile("name : bob").unwrap().unwrap(), "name = 'bob'");
    assert_eq!(compile("name: bob").unwrap().unwrap(), "name = 'bob'");
    assert_eq!(compile("age >= 18").unwrap().unwrap(), "age >= 18");
}

#[test]
fn test_null_sentinel() {
    assert_eq!(compile("name:-").unwrap().unwrap(), "name = null");
    assert_eq!(compile("age<>-").unwrap().unwrap(), "age <> null");
}

#[test]
fn test_quoted_sentinel_is_literal() {
    assert_eq!(compile(r#"name:"-""#).unwrap().unwrap(), "name = '-'");
    assert_eq!(compile("name:--").unwrap().unwrap(), "name = '--'");
}

#[test]
fn test_quoted_values() {
    assert_eq!(
        compile(r#"name:"Jane Doe""#).unwrap().unwrap(),
        "name = 'Jane Doe'"
    );
    assert_eq!(
        compile(r#"name:"say \"hi\"""#).unwrap().unwrap(),
        r#"name = 'say "hi"'"#
    );
}

#[test]
fn test_unterminated_quote_runs_to_end_of_input() {
    assert_eq!(
        compile(r#"name:"open ended"#).unwrap().unwrap(),
        "name = 'open ended'"
    );
}

#[test]
fn test_unquoted_value_stops_at_whitespace_and_bracket() {
    assert_eq!(
        compile("(name:bob) a").unwrap().unwrap(),
        format!("AND(name = 'bob', {})", word("a"))
    );
    assert_eq!(compile(r"name:a\)b").unwrap().unwrap(), "name = 'a)b'");
}

#[test]
fn test_values_use_property_type() {
    assert_eq!(compile("age:42").unwrap().unwrap(), "age = 42");
    assert_eq!(compile("status:locked").unwrap().unwrap(), "status = 'LOCKED'");
    // unparsable input is compared as text
    assert_eq!(compile("age:forty").unwrap().unwrap(), "age = 'forty'");
}

#[test]
fn test_dotted_fields() {
    assert_eq!(
        compile("company.name:acme").unwrap().unwrap(),
        "company.name = 'acme'"
    );
    assert_eq!(
        compile("company.city.zip:1000").unwrap().unwrap(),
        "company.city.zip = '1000'"
    );
    assert_eq!(compile("company:3").unwrap().unwrap(), "company = 3");
}

#[test]
fn test_unresolved_dotted_field_is_searched() {
    assert_eq!(
        compile("name.city:x").unwrap().unwrap(),
        word("name.city:x")
    );
    assert_eq!(
        compile("company.size>5").unwrap().unwrap(),
        word("company.size>5")
    );
}

#[test]
fn test_quoted_field_name() {
    assert_eq!(compile(r#""name":bob"#).unwrap().unwrap(), "name = 'bob'");
}
