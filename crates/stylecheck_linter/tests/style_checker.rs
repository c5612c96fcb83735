//! End-to-end checks of the style checker on whole Java files.

use stylecheck_config::{Config, NamingConfig, TypeStyle};
use stylecheck_java_parser::{JavaParser, ParseError};
use stylecheck_linter::{Category, CheckError, StyleChecker, StyleViolation};

fn check(source: &str) -> Result<(), CheckError> {
    let mut parser = JavaParser::new();
    StyleChecker::default().check_source(&mut parser, source)
}

fn violation(source: &str) -> StyleViolation {
    match check(source) {
        Err(CheckError::Style(violation)) => violation,
        other => panic!("expected a style violation, got {other:?}"),
    }
}

fn load_fixture(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

#[test]
fn test_conforming_file_passes() {
    let source = load_fixture("Conforming.java");
    assert!(check(&source).is_ok());
}

#[test]
fn test_empty_type_passes() {
    assert!(check("class Empty {}").is_ok());
    assert!(check("").is_ok());
    assert!(check("package com.example;\n\nimport java.util.List;\n").is_ok());
}

#[test]
fn test_parameter_reported_before_later_method() {
    let source = r#"
class Test {
    void doThing() {}
    void run(int Bad_Param) {}
}
"#;
    let violation = violation(source);
    assert_eq!(violation.category, Category::Parameter);
    assert_eq!(violation.name, "Bad_Param");
    assert_eq!(violation.expected, "camelCase");
}

#[test]
fn test_categories_checked_in_fixed_order() {
    let source = load_fixture("EveryCategoryWrong.java");
    let mut parser = JavaParser::new();
    let result = parser.parse(&source).unwrap();

    // Relax one category at a time to expose the next in line
    let mut naming = NamingConfig::default();
    let mut reported = vec![];
    for _ in 0..4 {
        let checker = StyleChecker::new(&naming).unwrap();
        let violation = checker.check_tree(&result).unwrap_err();
        reported.push((violation.category, violation.name.clone()));
        match violation.category {
            Category::Parameter => naming.parameter_format = ".*".to_string(),
            Category::Variable => naming.variable_format = ".*".to_string(),
            Category::Method => naming.method_format = ".*".to_string(),
            Category::Type => naming.type_format = Some(".*".to_string()),
        }
    }

    assert_eq!(
        reported,
        vec![
            (Category::Parameter, "First_Param".to_string()),
            (Category::Variable, "Field_Value".to_string()),
            (Category::Method, "firstMethod".to_string()),
            (Category::Type, "lower_type".to_string()),
        ]
    );
    assert!(StyleChecker::new(&naming).unwrap().check_tree(&result).is_ok());
}

#[test]
fn test_first_violation_in_declaration_order() {
    let source = r#"
class Test {
    void outer(int good) {
        Runnable r = () -> {
            class Local {
                void inner(int Inner_Bad) {}
            }
        };
    }
    void later(int Later_Bad) {}
}
"#;
    assert_eq!(violation(source).name, "Inner_Bad");
}

#[test]
fn test_variable_categories() {
    let field = violation("class Test { int User_Id; }");
    assert_eq!(field.category, Category::Variable);

    let local = violation("class Test { void run() { int _x = 0; } }");
    assert_eq!((local.category, local.name.as_str()), (Category::Variable, "_x"));
}

#[test]
fn test_type_violation() {
    let violation = violation("class lowerCase {}");
    assert_eq!(violation.category, Category::Type);
    assert_eq!(
        violation.to_string(),
        "Code style violated: type name must use PascalCase: lowerCase"
    );
}

#[test]
fn test_legacy_type_style_from_config() {
    let config = Config::from_toml_str("[naming]\ntype-style = \"legacy-snake-case\"\n").unwrap();
    assert_eq!(config.naming.type_style, TypeStyle::LegacySnakeCase);
    let checker = StyleChecker::new(&config.naming).unwrap();
    let mut parser = JavaParser::new();

    assert!(checker.check_source(&mut parser, "class legacy_name {}").is_ok());
    let Err(CheckError::Style(violation)) = checker.check_source(&mut parser, "class Modern {}")
    else {
        panic!("expected a style violation");
    };
    assert_eq!(violation.expected, "snake_case");
}

#[test]
fn test_syntax_error_is_parse_error() {
    // The identifiers would violate every rule, but parsing fails first
    let source = "class bad_Type { void doThing(int Bad_Param) { int x = ; } }";
    match check(source) {
        Err(CheckError::Parse(ParseError::Syntax { .. })) => {}
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_checking_twice_gives_same_result() {
    let source = load_fixture("EveryCategoryWrong.java");
    let mut parser = JavaParser::new();
    let result = parser.parse(&source).unwrap();
    let checker = StyleChecker::default();

    let first = checker.check_tree(&result);
    let second = checker.check_tree(&result);
    assert_eq!(first, second);
    assert!(first.is_err());
}

#[test]
fn test_checker_is_shareable_across_threads() {
    let checker = StyleChecker::default();
    let sources = ["class A { int okValue; }", "class B { int Bad_Value; }"];

    let results: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| {
                let checker = &checker;
                scope.spawn(move || {
                    let mut parser = JavaParser::new();
                    checker.check_source(&mut parser, source).is_ok()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![true, false]);
}
