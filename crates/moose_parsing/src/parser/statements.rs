use crate::parser::error::SyntaxResult;
use crate::parser::keywords::Keyword;
use crate::parser::Parser;
use moose_ast::expr::Invoke;
use moose_ast::statements::Assignment;
use moose_tokens::position::Positioned;

impl<'t> Parser<'t> {
    /// `name = expression;`
    pub(crate) fn parse_assignment(&mut self) -> SyntaxResult<Assignment> {
        let name = self.identifier()?;
        self.expect("=", "'='")?;
        let value = self.parse_expression()?;
        self.finish_statement()?;
        Ok(Assignment {
            name: name.value().to_string(),
            value,
            position: name.position(),
        })
    }

    /// `return expression;`, as an internal call of `return`
    pub(crate) fn parse_return(&mut self) -> SyntaxResult<Invoke> {
        let keyword = self.expect(Keyword::Return.as_ref(), "'return'")?;
        let value = self.parse_expression()?;
        self.finish_statement()?;
        Ok(Invoke::internal(
            Keyword::Return.as_ref(),
            [value],
            keyword.position(),
        ))
    }
}
