#![cfg(test)]
use crate::testing::*;
use crate::*;

const USERS: &str = "CREATE TABLE IF NOT EXISTS users (id INT AUTO_INCREMENT, name VARCHAR(100), status ENUM('active','inactive') DEFAULT 'active', created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP);";

fn parse(sql: &str) -> TableMetadata {
    common_init();
    parse_statement(sql, ParseMode::Strict).expect("statement should parse")
}

/// Table name and column names as the `sqlparser` MySQL dialect sees them.
fn oracle(sql: &str) -> (String, Vec<String>) {
    use sqlparser::{ast::Statement, dialect::MySqlDialect, parser::Parser};
    let statements = Parser::parse_sql(&MySqlDialect {}, sql).expect("oracle parses");
    match &statements[0] {
        Statement::CreateTable(create) => (
            create.name.to_string().trim_matches('`').to_string(),
            create.columns.iter().map(|c| c.name.value.clone()).collect(),
        ),
        other => panic!("oracle produced {other:?}"),
    }
}

#[test]
fn users_scenario() {
    let table = parse(USERS);
    assert_eq!(table.table_name, "users");

    let mut id = FieldMetadata::builder("id");
    id.field_type(FieldType::Int).auto_increment();
    let mut name = FieldMetadata::builder("name");
    name.field_type(FieldType::Varchar).length("100");
    let mut status = FieldMetadata::builder("status");
    status
        .enum_values(vec!["active".into(), "inactive".into()])
        .default_value("active");
    let mut created_at = FieldMetadata::builder("created_at");
    created_at
        .field_type(FieldType::Timestamp)
        .default_value("CURRENT_TIMESTAMP");

    let expected: Vec<_> = [id, name, status, created_at]
        .into_iter()
        .map(|b| b.build().expect("builds"))
        .collect();
    assert_eq!(table.fields, expected);
}

#[test]
fn users_scenario_serializes_to_contract() {
    let json = serde_json::to_value(parse(USERS)).expect("serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "table_name": "users",
            "fields": [
                { "name": "id", "type": "INT", "auto_increment": true },
                { "name": "name", "type": "VARCHAR", "length": "100" },
                {
                    "name": "status",
                    "type": "enum",
                    "enum_value": ["active", "inactive"],
                    "default": "active",
                },
                { "name": "created_at", "type": "TIMESTAMP", "default": "CURRENT_TIMESTAMP" },
            ],
        })
    );
}

#[rstest]
#[case(USERS)]
#[case("CREATE TABLE t (a INT);")]
#[case("CREATE TABLE orders (id INTEGER, total REAL DEFAULT 0.0, paid BOOLEAN, note TEXT COMMENT 'free text');")]
#[case("create table if not exists `audit` (`id` int auto_increment, `kind` enum('a','b','c'), `at` timestamp default current_timestamp) engine=InnoDB;")]
#[case("CREATE TABLE flags (flag BOOLEAN DEFAULT TRUE, seen TIMESTAMP DEFAULT now(), n INT);")]
#[case("CREATE TABLE items (\n  id INT NOT NULL AUTO_INCREMENT COMMENT 'pk',\n  title VARCHAR(255) NOT NULL DEFAULT '',\n  price REAL DEFAULT 9.99\n);")]
fn agrees_with_sqlparser(#[case] sql: &str) {
    let table = parse(sql);
    let (name, columns) = oracle(sql);
    assert_eq!(table.table_name, name);
    assert_eq!(
        table.fields.iter().map(|f| f.name().to_string()).collect::<Vec<_>>(),
        columns
    );
}

#[test]
fn enum_order_is_preserved() {
    let table = parse("CREATE TABLE t (grade ENUM('b','a','c'));");
    assert_eq!(
        table.fields[0].enum_values(),
        Some(&["b".to_string(), "a".into(), "c".into()][..])
    );
    assert_eq!(table.fields[0].length(), None);
}

#[test]
fn missing_closing_paren() {
    common_init();
    assert_eq!(
        parse_statement("CREATE TABLE t (id INT", ParseMode::Strict),
        Err(ParseError::UnmatchedOpeningParen { position: 15 })
    );
}

#[test]
fn comment_attaches_to_its_own_field() {
    let table = parse("CREATE TABLE t (id INT COMMENT 'user id', name VARCHAR(20));");
    assert_eq!(table.fields[0].comment(), Some("user id"));
    assert_eq!(table.fields[1].comment(), None);
}

#[test]
fn trailing_field_without_comma() {
    let table = parse("CREATE TABLE t (a INT, b TEXT, c BOOLEAN);");
    assert_eq!(table.fields.len(), 3);
    assert_eq!(table.fields.iter().filter(|f| f.name() == "c").count(), 1);
}

#[test]
fn render_then_parse_is_equivalent() {
    let tokens = tokenize(USERS).expect("tokenizes");
    assert_eq!(parse(&render(&tokens)), parse(USERS));
}

#[test]
fn statements_parse_independently_across_threads() {
    let statements = [
        "CREATE TABLE a (x INT);",
        "CREATE TABLE b (y TEXT, z REAL);",
        USERS,
    ];
    let parsed: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = statements
            .iter()
            .map(|sql| scope.spawn(move || parse_statement(sql, ParseMode::Strict)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread finished"))
            .collect()
    });
    let field_counts: Vec<_> = parsed
        .iter()
        .map(|r| r.as_ref().map(|t| t.fields.len()))
        .collect();
    assert_eq!(field_counts, vec![Ok(1), Ok(2), Ok(4)]);
}
