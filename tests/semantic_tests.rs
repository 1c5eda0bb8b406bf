use appcheck::semantic::{SemanticError, Type};
use appcheck::{check_source, AnalysisError, Fault};

fn semantic(source: &str) -> (usize, SemanticError) {
    match check_source(source) {
        Err(AnalysisError::Diagnostic(d)) => match d.fault {
            Fault::Semantic(e) => (d.line, e),
            other => panic!("expected a semantic fault, got {other:?}"),
        },
        other => panic!("expected a diagnostic, got {other:?}"),
    }
}

#[test]
fn test_integer_widens_to_real() {
    assert!(check_source("app P var real r init r := 1 + 2 * 3 return").is_ok());
}

#[test]
fn test_mixed_arithmetic_is_real() {
    let (_, e) = semantic("app P var integer i init i := i + 1.5 return");
    assert_eq!(
        e,
        SemanticError::IncompatibleAssignment {
            name: "i".to_string(),
            target: Type::Integer,
            found: Type::Real,
        }
    );
}

#[test]
fn test_condition_must_be_boolean() {
    let (line, e) = semantic("app P var integer i\ninit\nrepeat i := i - 1 until i\n\nreturn");
    assert_eq!(line, 3);
    assert_eq!(e, SemanticError::NonBooleanCondition(Type::Integer));
}

#[test]
fn test_boolean_comparisons() {
    let source = "app P var integer i; real r init \
                  if (i = 1) = (r > 2.0) then write(i) end return";
    assert!(check_source(source).is_ok());
}

#[test]
fn test_equality_requires_same_type() {
    let (_, e) = semantic("app P var integer i; real r init if i = r then write(i) end return");
    assert_eq!(
        e,
        SemanticError::EqualityOperands {
            left: Type::Integer,
            right: Type::Real,
        }
    );
}

#[test]
fn test_program_name_rules() {
    let (_, e) = semantic("app P var integer x init x := P return");
    assert_eq!(e, SemanticError::ProgramNameInExpression("P".to_string()));

    let (_, e) = semantic("app P init P := 1 return");
    assert_eq!(e, SemanticError::AssignToProgramName("P".to_string()));

    let (_, e) = semantic("app P init read(P) return");
    assert_eq!(e, SemanticError::ReadIntoProgramName("P".to_string()));

    let (_, e) = semantic("app P var real P init write(1) return");
    assert_eq!(e, SemanticError::Redeclared("P".to_string()));
}

#[test]
fn test_redeclaration_across_groups() {
    let (line, e) = semantic("app P\nvar integer a, b;\n    real c, a\ninit write(a) return");
    assert_eq!(line, 3);
    assert_eq!(e, SemanticError::Redeclared("a".to_string()));
}

#[test]
fn test_read_undeclared() {
    let (line, e) = semantic("app P\ninit\n  read(z)\nreturn");
    assert_eq!(line, 3);
    assert_eq!(e, SemanticError::Undeclared("z".to_string()));
}

#[test]
fn test_logical_operands() {
    let (_, e) = semantic("app P var integer i init if (i > 0) && i then write(i) end return");
    assert_eq!(
        e,
        SemanticError::LogicalOperands {
            left: Type::Boolean,
            right: Type::Integer,
        }
    );
}

#[test]
fn test_unary_operators() {
    let (_, e) = semantic("app P var integer i init write(!i) return");
    assert_eq!(e, SemanticError::UnaryNotOperand(Type::Integer));

    let (_, e) = semantic("app P var integer i init write(-(i > 0)) return");
    assert_eq!(e, SemanticError::UnaryMinusOperand(Type::Boolean));
}
