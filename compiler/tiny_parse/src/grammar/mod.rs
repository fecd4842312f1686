//! One recognizing method per nonterminal.
//!
//! ```text
//! program      = "program" ID ":" body "." .
//! body         = [ declarations ] statements .
//! declarations = declaration { declaration } .
//! declaration  = ( "bool" | "int" ) ID { "," ID } ";" .
//! statements   = { statement [ ";" ] } .
//! statement    = ID ":=" expression
//!              | "if" expression "then" body [ "else" body ] "end"
//!              | "while" expression "do" statements "end"
//!              | "print" expression
//!              | "." .
//! expression   = simpleExpression [ relationalOperator simpleExpression ] .
//! simpleExpression = term { ( "+" | "-" | "or" ) term } .
//! term         = factor { ( "*" | "/" | "mod" | "and" ) factor } .
//! factor       = [ unaryOperator ] ( "(" expression ")" | ID | NUM | "mod" factor ) .
//! ```
//!
//! The `;` after a statement may be left out only before a token that closes
//! the statement list: `.`, end-of-file, or a member of the list's Follow set.

use tiny_ir::TokenKind;
use tracing::debug;

use crate::recovery::{
    TokenSet, ADDITIVE_OPS, DECLARATION_START, FACTOR_START, MULTIPLICATIVE_OPS, OPERAND_START,
    RELATIONAL_OPS, STATEMENT_FORMS, STATEMENT_START, UNARY_OPS,
};
use crate::stack::ensure_sufficient_stack;
use crate::{Expected, Halted, Parser, Step, SyntaxError};

/// Follow of the top-level body.
const PROGRAM_BODY_FOLLOW: TokenSet = TokenSet::single(TokenKind::Dot);
/// Follow of the bodies of `if`.
const IF_BODY_FOLLOW: TokenSet = TokenSet::new().with(TokenKind::Else).with(TokenKind::End);
/// Follow of the statements of `while`.
const WHILE_BODY_FOLLOW: TokenSet = TokenSet::single(TokenKind::End);

const BODY_START: TokenSet = DECLARATION_START.union(STATEMENT_START);

/// Tokens that close a statement list whatever its Follow set.
const LIST_CLOSERS: TokenSet = TokenSet::new().with(TokenKind::Dot).with(TokenKind::Eof);

impl Parser<'_> {
    /// `program = "program" ID ":" body "." .`
    ///
    /// Tokens before the first `program` are skipped. Reaching end-of-file
    /// first is fatal in every recovery mode.
    pub(crate) fn program(&mut self) -> Step {
        while !self.cursor.check(TokenKind::Program) {
            if self.cursor.is_at_end() {
                self.errors.push(SyntaxError::new(
                    Expected::Token(TokenKind::Program),
                    "program",
                    self.cursor.current().clone(),
                    TokenSet::new(),
                ));
                return Err(Halted);
            }
            self.cursor.advance();
            self.skipped += 1;
        }
        if self.skipped > 0 {
            debug!(skipped = self.skipped, "ignored tokens before `program`");
        }

        let header_follow = BODY_START.with(TokenKind::Colon).with(TokenKind::Dot);
        self.expect(TokenKind::Program, "program", header_follow)?;
        self.expect(TokenKind::Ident, "program", header_follow)?;
        self.expect(TokenKind::Colon, "program", header_follow)?;
        self.body(PROGRAM_BODY_FOLLOW)?;
        self.expect(TokenKind::Dot, "program", TokenSet::single(TokenKind::Eof))
    }

    /// `body = [ declarations ] statements .`
    pub(crate) fn body(&mut self, follow: TokenSet) -> Step {
        if self.cursor.check_any(DECLARATION_START) {
            self.declarations(follow.union(STATEMENT_START))?;
        }
        self.statements(follow)
    }

    pub(crate) fn declarations(&mut self, follow: TokenSet) -> Step {
        let inner = follow.union(DECLARATION_START);
        self.declaration(inner)?;
        while self.cursor.check_any(DECLARATION_START) {
            self.declaration(inner)?;
        }
        Ok(())
    }

    /// `declaration = ( "bool" | "int" ) ID { "," ID } ";" .`
    pub(crate) fn declaration(&mut self, follow: TokenSet) -> Step {
        if self.cursor.check_any(DECLARATION_START) {
            self.accept("declaration");
        } else {
            self.report(Expected::OneOf(DECLARATION_START), "declaration", follow)?;
            self.recover(follow.with(TokenKind::Semicolon));
            if self.cursor.check(TokenKind::Semicolon) {
                self.accept("declaration");
            }
            return Ok(());
        }

        let names = follow.with(TokenKind::Comma).with(TokenKind::Semicolon);
        self.expect(TokenKind::Ident, "declaration", names)?;
        while self.cursor.check(TokenKind::Comma) {
            self.accept("declaration");
            self.expect(TokenKind::Ident, "declaration", names)?;
        }
        self.expect(TokenKind::Semicolon, "declaration", follow)
    }

    /// `statements = { statement [ ";" ] } .`
    pub(crate) fn statements(&mut self, follow: TokenSet) -> Step {
        let closers = follow.union(LIST_CLOSERS);
        while self.cursor.check_any(STATEMENT_START) {
            self.statement(
                follow
                    .union(STATEMENT_START)
                    .with(TokenKind::Semicolon),
            )?;
            if self.cursor.check(TokenKind::Semicolon) {
                self.accept("statements");
            } else if !self.cursor.check_any(closers) {
                self.expect(
                    TokenKind::Semicolon,
                    "statements",
                    follow.union(STATEMENT_START),
                )?;
            }
        }
        Ok(())
    }

    /// Nested `if`/`while` bodies recurse through here.
    pub(crate) fn statement(&mut self, follow: TokenSet) -> Step {
        ensure_sufficient_stack(|| self.statement_inner(follow))
    }

    fn statement_inner(&mut self, follow: TokenSet) -> Step {
        match self.cursor.current_kind() {
            TokenKind::Ident => {
                self.accept("statement");
                self.expect(TokenKind::Assign, "statement", follow.union(FACTOR_START))?;
                self.expression(follow)
            }
            TokenKind::If => {
                self.accept("statement");
                self.expression(follow.with(TokenKind::Then))?;
                self.expect(TokenKind::Then, "statement", follow.union(BODY_START))?;
                self.body(IF_BODY_FOLLOW)?;
                if self.cursor.check(TokenKind::Else) {
                    self.accept("statement");
                    self.body(IF_BODY_FOLLOW)?;
                }
                self.expect(TokenKind::End, "statement", follow)
            }
            TokenKind::While => {
                self.accept("statement");
                self.expression(follow.with(TokenKind::Do))?;
                self.expect(TokenKind::Do, "statement", follow.union(STATEMENT_START))?;
                self.statements(WHILE_BODY_FOLLOW)?;
                self.expect(TokenKind::End, "statement", follow)
            }
            TokenKind::Print => {
                self.accept("statement");
                self.expression(follow)
            }
            TokenKind::Dot => {
                self.accept("statement");
                Ok(())
            }
            _ => {
                self.report(Expected::OneOf(STATEMENT_FORMS), "statement", follow)?;
                self.recover(follow);
                Ok(())
            }
        }
    }

    /// `expression = simpleExpression [ relationalOperator simpleExpression ] .`
    pub(crate) fn expression(&mut self, follow: TokenSet) -> Step {
        ensure_sufficient_stack(|| self.expression_inner(follow))
    }

    fn expression_inner(&mut self, follow: TokenSet) -> Step {
        self.simple_expression(follow.union(RELATIONAL_OPS))?;
        if self.cursor.check_any(RELATIONAL_OPS) {
            self.relational_operator(follow.union(FACTOR_START))?;
            self.simple_expression(follow)?;
        }
        Ok(())
    }

    pub(crate) fn simple_expression(&mut self, follow: TokenSet) -> Step {
        let inner = follow.union(ADDITIVE_OPS);
        self.term(inner)?;
        while self.cursor.check_any(ADDITIVE_OPS) {
            self.accept("simpleExpression");
            self.term(inner)?;
        }
        Ok(())
    }

    pub(crate) fn term(&mut self, follow: TokenSet) -> Step {
        let inner = follow.union(MULTIPLICATIVE_OPS);
        self.factor(inner)?;
        while self.cursor.check_any(MULTIPLICATIVE_OPS) {
            self.accept("term");
            self.factor(inner)?;
        }
        Ok(())
    }

    /// `factor = [ unaryOperator ] ( "(" expression ")" | ID | NUM | "mod" factor ) .`
    ///
    /// Prefix `mod` is a one-operand form, distinct from the binary `mod` of `term`.
    pub(crate) fn factor(&mut self, follow: TokenSet) -> Step {
        ensure_sufficient_stack(|| self.factor_inner(follow))
    }

    fn factor_inner(&mut self, follow: TokenSet) -> Step {
        let mut expected = FACTOR_START;
        if self.cursor.check_any(UNARY_OPS) {
            self.unary_operator(follow.union(OPERAND_START))?;
            expected = OPERAND_START;
        }

        match self.cursor.current_kind() {
            TokenKind::LParen => {
                self.accept("factor");
                self.expression(follow.with(TokenKind::RParen))?;
                self.expect(TokenKind::RParen, "factor", follow)
            }
            TokenKind::Ident | TokenKind::Num => {
                self.accept("factor");
                Ok(())
            }
            TokenKind::Mod => {
                self.accept("factor");
                self.factor(follow)
            }
            _ => {
                self.report(Expected::OneOf(expected), "factor", follow)?;
                self.recover(follow);
                Ok(())
            }
        }
    }

    pub(crate) fn relational_operator(&mut self, follow: TokenSet) -> Step {
        self.one_of(RELATIONAL_OPS, "relationalOperator", follow)
    }

    pub(crate) fn unary_operator(&mut self, follow: TokenSet) -> Step {
        self.one_of(UNARY_OPS, "unaryOperator", follow)
    }

    fn one_of(&mut self, set: TokenSet, nonterminal: &'static str, follow: TokenSet) -> Step {
        if self.cursor.check_any(set) {
            self.accept(nonterminal);
            return Ok(());
        }
        self.report(Expected::OneOf(set), nonterminal, follow)?;
        self.recover(follow);
        Ok(())
    }
}
