//! Variable, constant and function declarations

use crate::parser::error::{SyntaxErrorKind, SyntaxResult};
use crate::parser::keywords::Keyword;
use crate::parser::Parser;
use moose_ast::items::{Declaration, DeclarationKind, FunctionArgument, FunctionBody};
use moose_tokens::position::Position;
use tracing::trace;

impl<'t> Parser<'t> {
    /// Whether the tokens at the cursor look like a variable or constant declaration.
    ///
    /// True if the token two ahead is `=`, if the current token is a modifier, or if the
    /// tokens spell a type with optional `[]` suffixes and a name followed by `;` or `=`.
    pub(crate) fn is_declaration(&self) -> bool {
        if self.peek_is(2, "=") || self.peek_keyword(0).is_some_and(Keyword::is_modifier) {
            return true;
        }
        let name = 1 + self.array_suffixes(1);
        self.peek(name).is_some() && (self.peek_is(name + 1, ";") || self.peek_is(name + 1, "="))
    }

    /// Counts the tokens `n` places ahead that form `[]` suffixes
    fn array_suffixes(&self, n: usize) -> usize {
        let mut len = 0;
        loop {
            if self.peek_is(n + len, "[]") {
                len += 1;
            } else if self.peek_is(n + len, "[") && self.peek_is(n + len + 1, "]") {
                len += 2;
            } else {
                return len;
            }
        }
    }

    /// Parses a type name and its `[]` suffixes
    pub(crate) fn parse_type(&mut self) -> SyntaxResult<String> {
        let mut ty = self.identifier()?.value().to_string();
        loop {
            if self.consume_if("[]").is_none() {
                if !(self.peek_is(0, "[") && self.peek_is(1, "]")) {
                    return Ok(ty);
                }
                self.cursor += 2;
            }
            ty.push_str("[]");
        }
    }

    /// Parses `export` and `const` in any order, each at most once
    fn parse_modifiers(&mut self) -> SyntaxResult<(bool, bool)> {
        let mut exported = false;
        let mut constant = false;
        while let Some(keyword) = self.peek_keyword(0).filter(|keyword| keyword.is_modifier()) {
            let seen = match keyword {
                Keyword::Export => &mut exported,
                _ => &mut constant,
            };
            if *seen {
                return Err(self.error(SyntaxErrorKind::UnexpectedKeyword(keyword.to_string())));
            }
            *seen = true;
            self.cursor += 1;
        }
        Ok((exported, constant))
    }

    pub(crate) fn parse_declaration(&mut self) -> SyntaxResult<Declaration> {
        let position = self.position();
        let (exported, constant) = self.parse_modifiers()?;
        if self.peek_keyword(0) == Some(Keyword::Func) {
            if constant {
                return Err(self.error(SyntaxErrorKind::ConstantFunction));
            }
            return self.parse_function_body(exported, position);
        }

        let ty = self.parse_type()?;
        let name = self.identifier()?.value().to_string();
        let kind = if self.peek_is(0, ";") {
            if constant {
                return Err(self.error(SyntaxErrorKind::UninitializedConstant));
            }
            self.cursor += 1;
            DeclarationKind::Default { ty, value: None }
        } else {
            self.expect("=", "';' or '='")?;
            let value = self.parse_expression()?;
            self.finish_statement()?;
            if constant {
                DeclarationKind::Constant { ty, value }
            } else {
                DeclarationKind::Default {
                    ty,
                    value: Some(value),
                }
            }
        };
        trace!("declared {name:?}");
        Ok(Declaration {
            name,
            exported,
            position,
            kind,
        })
    }

    /// Parses `[export] func name(type name, ...) type { ... }`
    pub(crate) fn parse_function(&mut self) -> SyntaxResult<Declaration> {
        let position = self.position();
        let exported = self.consume_if(Keyword::Export.as_ref()).is_some();
        if self.peek_keyword(0) == Some(Keyword::Const) {
            return Err(self.error(SyntaxErrorKind::ConstantFunction));
        }
        self.parse_function_body(exported, position)
    }

    fn parse_function_body(
        &mut self,
        exported: bool,
        position: Position,
    ) -> SyntaxResult<Declaration> {
        self.expect(Keyword::Func.as_ref(), "'func'")?;
        let name = self.identifier()?.value().to_string();
        self.expect("(", "'('")?;
        let mut parameters = vec![];
        if self.consume_if(")").is_none() {
            loop {
                let position = self.position();
                let ty = self.parse_type()?;
                let name = self.identifier()?.value().to_string();
                parameters.push(FunctionArgument { name, ty, position });
                if self.consume_if(",").is_some() {
                    continue;
                }
                self.expect(")", "',' or ')'")?;
                break;
            }
        }
        let return_type = self.parse_type()?;
        self.expect("{", "'{'")?;

        let mut body = vec![];
        loop {
            match self.peek(0) {
                None => return Err(self.error(SyntaxErrorKind::Expected("'}'"))),
                Some(token) if token.is("}") => {
                    self.cursor += 1;
                    break;
                }
                Some(_) => body.extend(self.parse_element()?),
            }
        }
        trace!("declared function {name:?} with {} parameters", parameters.len());
        Ok(Declaration {
            name,
            exported,
            position,
            kind: DeclarationKind::Function(FunctionBody {
                return_type,
                parameters,
                body,
            }),
        })
    }
}
