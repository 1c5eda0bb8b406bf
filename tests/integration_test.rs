// Integration tests for the app front end

use appcheck::semantic::{SemanticError, Type, Variable};
use appcheck::{check_file, check_source, AnalysisError, Diagnostic, Fault};
use std::fs;
use std::path::Path;

fn diagnostic(source: &str) -> Diagnostic {
    match check_source(source) {
        Err(AnalysisError::Diagnostic(d)) => d,
        other => panic!("expected a diagnostic, got {:?}", other),
    }
}

fn fixture(name: &str) -> String {
    let path = Path::new("tests/programs").join(name);
    fs::read_to_string(path).expect("Failed to read fixture")
}

#[test]
fn test_minimal_program() {
    let program = check_source("app P var integer x init x := 1; write(x) return")
        .expect("Program rejected");

    assert_eq!(program.name, "P");
    assert_eq!(program.variables, vec![Variable::new("x", Type::Integer)]);
}

#[test]
fn test_undeclared_on_first_line() {
    let d = diagnostic("app P init write(y) return");
    assert_eq!(d.line, 1);
    assert_eq!(d.to_string(), "01: Undeclared identifier [y]");
}

#[test]
fn test_average_fixture() {
    let program = check_source(&fixture("average.app")).expect("Program rejected");

    assert_eq!(program.name, "Average");
    assert_eq!(
        program.variables,
        vec![
            Variable::new("n", Type::Integer),
            Variable::new("i", Type::Integer),
            Variable::new("sum", Type::Real),
        ]
    );
}

#[test]
fn test_branches_fixture() {
    let program = check_source(&fixture("branches.app")).expect("Program rejected");
    assert_eq!(program.variables.len(), 3);
}

#[test]
fn test_undeclared_fixture() {
    let d = diagnostic(&fixture("undeclared.app"));
    assert_eq!(d.line, 5);
    assert_eq!(
        d.fault,
        Fault::Semantic(SemanticError::Undeclared("y".to_string()))
    );
}

#[test]
fn test_narrowing_fixture() {
    let d = diagnostic(&fixture("narrowing.app"));
    assert_eq!(d.line, 7);
    assert_eq!(
        d.fault,
        Fault::Semantic(SemanticError::IncompatibleAssignment {
            name: "count".to_string(),
            target: Type::Integer,
            found: Type::Real,
        })
    );
}

#[test]
fn test_bad_number_fixture() {
    let d = diagnostic(&fixture("bad_number.app"));
    assert_eq!(d.line, 4);
    assert_eq!(d.to_string(), "04: Invalid lexeme [123.]");
}

#[test]
fn test_check_file_reads_fixture() {
    let program = check_file("tests/programs/average.app").expect("Program rejected");
    assert_eq!(program.name, "Average");
}

#[test]
fn test_check_file_missing() {
    let result = check_file("tests/programs/missing.app");
    assert!(matches!(result, Err(AnalysisError::Source(_))));
    assert!(result.unwrap_err().diagnostic().is_none());
}

#[test]
fn test_missing_return() {
    let d = diagnostic("app P\ninit\n  write({hi})\n");
    assert_eq!(d.fault, Fault::UnexpectedEof);
    assert_eq!(d.to_string(), "04: Unexpected end of file");
}

#[test]
fn test_syntax_error_line() {
    let d = diagnostic("app P\nvar integer x\ninit\n  if x > 1\n  write(x)\nend\nreturn");
    assert_eq!(d.line, 5);
    assert_eq!(d.fault, Fault::UnexpectedToken("write".to_string()));
}

#[test]
fn test_unterminated_text() {
    let d = diagnostic("app P init write({oops\n) return");
    assert_eq!(d.line, 1);
    assert_eq!(d.fault, Fault::InvalidToken("{oops".to_string()));
}

#[test]
fn test_comment_without_newline_after_return() {
    let program = check_source("app P var integer x init x := 1 return\n% no newline at end")
        .expect("Program rejected");
    assert_eq!(program.name, "P");
}

#[test]
fn test_deep_parentheses_are_a_diagnostic() {
    let depth = 200_000;
    let source = format!(
        "app P var integer x init x := {}1{} return",
        "(".repeat(depth),
        ")".repeat(depth)
    );
    let d = diagnostic(&source);
    assert_eq!(d.fault, Fault::NestingTooDeep);
    assert_eq!(d.to_string(), "01: Nesting too deep");
}

#[test]
fn test_comment_only_lines() {
    let program = check_source("% header\n% more\napp P\ninit\n  write(1) % trailing\nreturn\n")
        .expect("Program rejected");
    assert!(program.variables.is_empty());
}
