use moose_ast::expr::LiteralKind;
use moose_ast::items::DeclarationKind;
use moose_ast::SyntaxElement;
use moose_parsing::{parse_source, FrontendError, ParserConfig, SyntaxErrorKind};
use moose_tokens::diagnostic::Style;
use moose_tokens::position::{Position, Positioned};
use test_log::test;
use tracing::info;

mod common;

#[test]
fn test_parse_simple_file() -> eyre::Result<()> {
    let (path, source) = common::moose_file("simple.moose")?;
    let parsed = parse_source(&source, Some(path.as_str()), ParserConfig::default())?;
    info!("parsed {path}: {:#?}", parsed.root);
    assert!(!parsed.has_errors());
    assert_eq!(parsed.root.file.as_deref(), Some(path.as_str()));

    let elements = &parsed.root.elements;
    assert_eq!(elements.len(), 5);
    let SyntaxElement::Declaration(answer) = &elements[0] else {
        eyre::bail!("expected a declaration, got {:?}", elements[0]);
    };
    assert!(answer.exported);
    assert!(answer.is_constant());
    let Some(moose_ast::ReturningSyntaxElement::Literal(value)) = answer.value() else {
        eyre::bail!("expected a literal value");
    };
    assert_eq!((value.kind, value.value.as_str()), (LiteralKind::Int, "42"));

    let SyntaxElement::Declaration(greeting) = &elements[1] else {
        eyre::bail!("expected a declaration, got {:?}", elements[1]);
    };
    let Some(moose_ast::ReturningSyntaxElement::Literal(value)) = greeting.value() else {
        eyre::bail!("expected a literal value");
    };
    assert_eq!(value.value, "hello \"world\"");

    let SyntaxElement::Declaration(values) = &elements[2] else {
        eyre::bail!("expected a declaration, got {:?}", elements[2]);
    };
    assert_eq!(
        values.kind,
        DeclarationKind::Default {
            ty: "int[]".to_string(),
            value: None
        }
    );

    let SyntaxElement::Declaration(main) = &elements[4] else {
        eyre::bail!("expected a declaration, got {:?}", elements[4]);
    };
    assert!(main.exported);
    assert_eq!(main.position(), Position::new(9, 0));
    let body = main.function().map(|f| f.body.len());
    assert_eq!(body, Some(4));
    Ok(())
}

#[test]
fn test_recover_from_errors_in_file() -> eyre::Result<()> {
    let (path, source) = common::moose_file("with_errors.moose")?;
    let config = ParserConfig {
        recover_from_errors: true,
        verbose: true,
    };
    let parsed = parse_source(&source, Some(path.as_str()), config)?;

    let names = parsed
        .root
        .elements
        .iter()
        .map(|element| match element {
            SyntaxElement::Declaration(decl) => decl.name.as_str(),
            _ => "?",
        })
        .collect::<Vec<_>>();
    assert_eq!(names, ["first", "second", "third"]);

    let errors = parsed
        .errors
        .iter()
        .map(|e| (e.kind().clone(), e.position()))
        .collect::<Vec<_>>();
    assert_eq!(
        errors,
        [
            (
                SyntaxErrorKind::UnexpectedKeyword("const".to_string()),
                Position::new(1, 6)
            ),
            (
                SyntaxErrorKind::UnsupportedStatement("while".to_string()),
                Position::new(4, 4)
            ),
        ]
    );
    assert!(parsed.errors.iter().all(|e| e.file() == Some(path.as_str())));
    Ok(())
}

#[test]
fn test_first_error_is_fatal_without_recovery() -> eyre::Result<()> {
    let (path, source) = common::moose_file("with_errors.moose")?;
    let Err(FrontendError::Syntax(error)) =
        parse_source(&source, Some(path.as_str()), ParserConfig::default())
    else {
        eyre::bail!("expected a syntax error");
    };
    let expected = [
        "",
        "Unexpected keyword 'const' at line 1, column 6",
        "1 | int first = 1;",
        "2 | const const int broken = 2;",
        "  |       ^",
        "3 | int second = 0b11;",
    ]
    .join("\n");
    assert_eq!(error.render(Style::Plain), expected);
    Ok(())
}
