use moose_ast::expr::{Invoke, Literal, LiteralKind, Reference};
use moose_ast::items::{Declaration, DeclarationKind, FunctionArgument, FunctionBody};
use moose_ast::translation_unit::RootElement;
use moose_ast::SyntaxElement;
use moose_parsing::{parse, tokenize, Parsed, SyntaxError, SyntaxErrorKind};
use moose_tokens::position::{Position, Positioned};
use test_log::test;

fn parse_str(source: &str, recover: bool) -> Result<Parsed, SyntaxError> {
    let tokenized = tokenize(source, None).expect("should tokenize");
    parse(&tokenized.tokens, source, None, recover)
}

#[test]
fn test_constant_declaration() -> eyre::Result<()> {
    let parsed = parse_str("const int x = 5;", false)?;
    assert_eq!(
        parsed.root,
        RootElement::new(
            None,
            vec![Declaration {
                name: "x".to_string(),
                exported: false,
                position: Position::new(0, 0),
                kind: DeclarationKind::Constant {
                    ty: "int".to_string(),
                    value: Literal::new(LiteralKind::Int, "5", Position::new(0, 14)).into(),
                },
            }
            .into()]
        )
    );
    Ok(())
}

#[test]
fn test_function_declaration() -> eyre::Result<()> {
    let parsed = parse_str("func add(int a, int b) int { return a; }", false)?;
    let [SyntaxElement::Declaration(add)] = parsed.root.elements.as_slice() else {
        eyre::bail!("expected a single declaration");
    };
    assert_eq!(add.name, "add");
    assert!(add.is_constant());
    assert_eq!(add.type_name(), "function");
    assert_eq!(
        add.function(),
        Some(&FunctionBody {
            return_type: "int".to_string(),
            parameters: vec![
                FunctionArgument {
                    name: "a".to_string(),
                    ty: "int".to_string(),
                    position: Position::new(0, 9),
                },
                FunctionArgument {
                    name: "b".to_string(),
                    ty: "int".to_string(),
                    position: Position::new(0, 16),
                },
            ],
            body: vec![Invoke::internal(
                "return",
                [Reference::new("a", Position::new(0, 36)).into()],
                Position::new(0, 29)
            )
            .into()],
        })
    );
    Ok(())
}

#[test]
fn test_postincrement() -> eyre::Result<()> {
    let parsed = parse_str("x++;", false)?;
    assert_eq!(
        parsed.root.elements,
        vec![SyntaxElement::from(Invoke::internal(
            "postincrement",
            [Reference::new("x", Position::new(0, 0)).into()],
            Position::new(0, 0)
        ))]
    );
    Ok(())
}

#[test]
fn test_prefix_operators() -> eyre::Result<()> {
    let parsed = parse_str("++a;\n--b;\nc--;", false)?;
    let names = parsed
        .root
        .elements
        .iter()
        .map(|element| match element {
            SyntaxElement::Invoke(invoke) => invoke.name.as_str(),
            _ => "",
        })
        .collect::<Vec<_>>();
    assert_eq!(names, ["preincrement", "predecrement", "postdecrement"]);
    Ok(())
}

#[test]
fn test_duplicate_const() {
    let error = parse_str("const const int x = 1;", false).unwrap_err();
    assert_eq!(
        error.kind(),
        &SyntaxErrorKind::UnexpectedKeyword("const".to_string())
    );
    assert_eq!(error.position(), Position::new(0, 6));
}

#[test]
fn test_recovery_keeps_later_declaration() -> eyre::Result<()> {
    let parsed = parse_str("int = = ;\nint y;", true)?;
    assert_eq!(parsed.errors.len(), 1);
    let [SyntaxElement::Declaration(y)] = parsed.root.elements.as_slice() else {
        eyre::bail!("expected one declaration, got {:?}", parsed.root.elements);
    };
    assert_eq!(y.name, "y");
    Ok(())
}

#[test]
fn test_hex_and_binary_are_decimal_ints() -> eyre::Result<()> {
    let parsed = parse_str("int a = 0xff;\nint b = 0B1010;", false)?;
    let values = parsed
        .root
        .elements
        .iter()
        .filter_map(|element| match element {
            SyntaxElement::Declaration(decl) => decl.value(),
            _ => None,
        })
        .map(|value| match value {
            moose_ast::ReturningSyntaxElement::Literal(literal) => {
                (literal.kind, literal.value.clone())
            }
            other => panic!("expected a literal, got {other:?}"),
        })
        .collect::<Vec<_>>();
    assert_eq!(
        values,
        [
            (LiteralKind::Int, "255".to_string()),
            (LiteralKind::Int, "10".to_string())
        ]
    );
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn test_serialized_tree() -> eyre::Result<()> {
    let parsed = parse_str("export func f() int { return 1; }\nint[] x = y;", false)?;
    let json = serde_json::to_value(&parsed.root)?;
    let function = &json["elements"][0];
    assert_eq!(function["element"], "declaration");
    assert_eq!(function["name"], "f");
    assert_eq!(function["type"], "function");
    assert_eq!(function["constant"], true);
    assert_eq!(function["exported"], true);
    assert_eq!(function["value"]["returnType"], "int");
    let body = &function["value"]["elements"];
    assert_eq!(body[0]["name"], "return");
    assert_eq!(body[0]["arguments"][0]["type"], "int");

    let variable = &json["elements"][1];
    assert_eq!(variable["name"], "x");
    assert_eq!(variable["type"], "int[]");
    assert_eq!(variable["constant"], false);
    assert_eq!(variable["value"]["element"], "reference");
    Ok(())
}
