//! Shared data model for the Tiny front end.
//!
//! The lexer produces [`Token`]s into a [`TokenList`]; the parser walks that
//! list with a forward-only cursor. Both phases report locations as
//! [`Position`] values (1-based line, column of the token's first character).

mod position;
mod token;

pub use position::Position;
pub use token::{Token, TokenKind, TokenList};
