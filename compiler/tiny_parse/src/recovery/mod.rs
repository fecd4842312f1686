//! Token sets and panic-mode synchronization.
//!
//! Follow sets are threaded through every recognizing method. In
//! [`RecoveryMode::PanicMode`](crate::RecoveryMode) they become the
//! synchronization points: after a mismatch the parser skips tokens until one
//! in the active set (or end-of-file) and resumes.

use std::fmt;

use tiny_ir::TokenKind;

use crate::cursor::Cursor;

/// A set of token kinds as a bitset over `TokenKind` discriminants.
///
/// `TokenKind` has fewer than 64 variants, so a `u64` covers all of them.
/// Membership and union are single bitwise operations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u64 << kind.discriminant_index())
    }

    /// Add a token kind to this set (builder for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Members in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL
            .into_iter()
            .filter(move |&kind| self.contains(kind))
    }
}

/// Members joined by ` or `, in discriminant order: `ID or if or while`.
impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            f.write_str(kind.as_str())?;
        }
        Ok(())
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<TokenKind> for TokenSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter().fold(TokenSet::new(), TokenSet::with)
    }
}

// FIRST sets of the grammar.

/// Starts a `declaration`.
pub const DECLARATION_START: TokenSet = TokenSet::new().with(TokenKind::Bool).with(TokenKind::Int);

/// Starts a `statement` inside `statements`.
pub const STATEMENT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print);

/// Every alternative of `statement`, including the bare `.`.
pub const STATEMENT_FORMS: TokenSet = STATEMENT_START.with(TokenKind::Dot);

pub const RELATIONAL_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Lt)
    .with(TokenKind::LtEq)
    .with(TokenKind::Eq)
    .with(TokenKind::NotEq)
    .with(TokenKind::GtEq)
    .with(TokenKind::Gt);

pub const ADDITIVE_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Plus)
    .with(TokenKind::Minus)
    .with(TokenKind::Or);

pub const MULTIPLICATIVE_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Star)
    .with(TokenKind::Slash)
    .with(TokenKind::Mod)
    .with(TokenKind::And);

pub const UNARY_OPS: TokenSet = TokenSet::new().with(TokenKind::Minus).with(TokenKind::Not);

/// Starts a `factor` once any unary operator is consumed.
pub const OPERAND_START: TokenSet = TokenSet::new()
    .with(TokenKind::LParen)
    .with(TokenKind::Ident)
    .with(TokenKind::Num)
    .with(TokenKind::Mod);

/// Starts a `factor`.
pub const FACTOR_START: TokenSet = OPERAND_START.union(UNARY_OPS);

/// Advance the cursor until reaching a token in `recovery` or end-of-file.
///
/// Returns the number of tokens skipped.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> usize {
    let mut skipped = 0;
    while !cursor.is_at_end() && !recovery.contains(cursor.current_kind()) {
        cursor.advance();
        skipped += 1;
    }
    skipped
}
