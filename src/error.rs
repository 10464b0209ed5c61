//! Error handling for catalog and membership operations

use thiserror::Error;

use crate::modules::books::Isbn;
use crate::modules::users::UserId;

/// Rejections raised by the guarded [`Library`](crate::Library) operations.
///
/// Plain lookups never fail; they return `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate isbn: a book with ISBN '{0}' is already in the catalog")]
    DuplicateIsbn(Isbn),

    #[error("duplicate user id: '{0}' is already a member")]
    DuplicateUserId(UserId),

    #[error("already borrowed: book '{isbn}' is checked out")]
    AlreadyBorrowed { isbn: Isbn },

    #[error("not borrowed: user '{user_id}' does not hold book '{isbn}'")]
    NotBorrowedBy { user_id: UserId, isbn: Isbn },

    #[error("unknown book: no catalog entry with ISBN '{0}'")]
    UnknownBook(Isbn),

    #[error("unknown user: no member with id '{0}'")]
    UnknownUser(UserId),
}

impl CatalogError {
    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateIsbn(_) => "duplicate_isbn",
            Self::DuplicateUserId(_) => "duplicate_user_id",
            Self::AlreadyBorrowed { .. } => "already_borrowed",
            Self::NotBorrowedBy { .. } => "not_borrowed",
            Self::UnknownBook(_) => "unknown_book",
            Self::UnknownUser(_) => "unknown_user",
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
