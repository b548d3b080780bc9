//! Statement parsing.

use morty_ir::{Block, Ident, Stmt, StmtKind, TokenKind};
use tracing::trace;

use crate::recovery::{synchronize, BLOCK_BOUNDARY, STMT_BOUNDARY};
use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    /// Parse statements until end of input, or until `}` when `in_block`.
    ///
    /// A statement that fails is recorded and skipped; the loop resumes at
    /// the next boundary so later statements are still parsed.
    pub(crate) fn parse_statement_list(&mut self, in_block: bool) -> Vec<Stmt> {
        let recovery = if in_block {
            BLOCK_BOUNDARY
        } else {
            STMT_BOUNDARY
        };
        let mut statements = Vec::new();

        while !self.cursor.is_at_end() && !(in_block && self.cursor.check(TokenKind::RBrace)) {
            let start = self.cursor.position();
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    trace!(error = %err, span = %err.span, "discarding statement");
                    self.errors.push(err);
                    synchronize(&mut self.cursor, recovery);
                }
            }
            // Guarantee progress
            if self.cursor.position() == start {
                self.cursor.advance();
            }
        }

        statements
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let(),
            TokenKind::Return => self.parse_return(),
            TokenKind::LBrace => {
                let block = self.parse_block()?;
                let span = block.span;
                Ok(Stmt::new(StmtKind::Block(block), span))
            }
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr> [;]`
    fn parse_let(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.advance().span;
        let name = self.cursor.expect(TokenKind::Ident)?;
        let name = Ident::new(name.literal.as_str(), name.span);
        self.cursor.expect(TokenKind::Assign)?;
        let value = self.parse_expression(Precedence::Lowest)?;
        self.cursor.eat(TokenKind::Semicolon);

        let span = start.merge(self.cursor.previous_span());
        Ok(Stmt::new(StmtKind::Let { name, value }, span))
    }

    /// `return [<expr>] [;]`
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.advance().span;
        let value = match self.cursor.current_kind() {
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof => None,
            _ => Some(self.parse_expression(Precedence::Lowest)?),
        };
        self.cursor.eat(TokenKind::Semicolon);

        let span = start.merge(self.cursor.previous_span());
        Ok(Stmt::new(StmtKind::Return(value), span))
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        let start = expr.span;
        self.cursor.eat(TokenKind::Semicolon);

        let span = start.merge(self.cursor.previous_span());
        Ok(Stmt::new(StmtKind::Expression(expr), span))
    }

    /// `{ <stmt>* }`
    ///
    /// The closing brace may be missing at end of input.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let open = self.cursor.expect(TokenKind::LBrace)?.span;
        let statements = self.parse_statement_list(true);
        self.cursor.eat(TokenKind::RBrace);

        Ok(Block {
            statements,
            span: open.merge(self.cursor.previous_span()),
        })
    }
}
