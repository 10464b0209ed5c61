//! Library members and the books checked out to them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::modules::books::{Book, Isbn};
use crate::utils::LOG_TARGET;

/// Identity key of a library member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for UserId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for UserId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A library member.
///
/// `borrowed_books` records ISBNs, not copies of the books: the catalog entry
/// stays the single source of truth for title, author and borrowed state.
/// Resolve them through [`Library::borrowed_books`](crate::Library::borrowed_books).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    user_id: UserId,
    name: String,
    #[serde(default)]
    borrowed_books: Vec<Isbn>,
}

impl User {
    pub fn new(user_id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            borrowed_books: Vec::new(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISBNs currently checked out to this user, in borrow order.
    pub fn borrowed_books(&self) -> &[Isbn] {
        &self.borrowed_books
    }

    pub fn has_borrowed(&self, isbn: &str) -> bool {
        self.borrowed_books.iter().any(|held| held == isbn)
    }

    /// Drop every record of `isbn` without touching any book, returning how
    /// many records went.
    pub(crate) fn release(&mut self, isbn: &str) -> usize {
        let before = self.borrowed_books.len();
        self.borrowed_books.retain(|held| held != isbn);
        before - self.borrowed_books.len()
    }

    /// Mark `book` borrowed and record it against this user.
    ///
    /// Unconditional: a book already out (to anyone, this user included) is
    /// recorded again. [`Library::checkout`](crate::Library::checkout) is the
    /// guarded entry point.
    pub fn borrow_book(&mut self, book: &mut Book) {
        book.borrow_book();
        self.borrowed_books.push(book.isbn().clone());
        tracing::debug!(
            target: LOG_TARGET,
            user_id = %self.user_id,
            isbn = %book.isbn(),
            held = self.borrowed_books.len(),
            "book borrowed"
        );
    }

    /// Clear the borrowed flag on `book` and drop every record of its ISBN.
    ///
    /// The flag is cleared even when this user never held the book.
    pub fn return_book(&mut self, book: &mut Book) {
        book.return_book();
        let before = self.borrowed_books.len();
        self.borrowed_books.retain(|held| held != book.isbn());
        tracing::debug!(
            target: LOG_TARGET,
            user_id = %self.user_id,
            isbn = %book.isbn(),
            released = before - self.borrowed_books.len(),
            "book returned"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_no_books() {
        let user = User::new("user1", "User One");
        assert_eq!(user.user_id(), "user1");
        assert_eq!(user.name(), "User One");
        assert!(user.borrowed_books().is_empty());
    }

    #[test]
    fn borrow_marks_book_and_records_isbn() {
        let mut user = User::new("user1", "User One");
        let mut book = Book::new("Book Title 1", "Author 1", "ISBN001");

        user.borrow_book(&mut book);

        assert!(book.is_borrowed());
        assert_eq!(user.borrowed_books(), &[Isbn::from("ISBN001")]);
        assert!(user.has_borrowed("ISBN001"));
    }

    #[test]
    fn return_clears_flag_and_record() {
        let mut user = User::new("user1", "User One");
        let mut book = Book::new("Book Title 1", "Author 1", "ISBN001");

        user.borrow_book(&mut book);
        user.return_book(&mut book);

        assert!(!book.is_borrowed());
        assert!(user.borrowed_books().is_empty());
    }

    #[test]
    fn double_borrow_records_twice_and_return_drops_both() {
        let mut user = User::new("user1", "User One");
        let mut book = Book::new("Book Title 1", "Author 1", "ISBN001");

        user.borrow_book(&mut book);
        user.borrow_book(&mut book);
        assert_eq!(user.borrowed_books().len(), 2);

        user.return_book(&mut book);
        assert!(user.borrowed_books().is_empty());
    }

    #[test]
    fn returning_unheld_book_still_clears_flag() {
        let mut user = User::new("user1", "User One");
        let mut kept = Book::new("Book Title 1", "Author 1", "ISBN001");
        let mut stray = Book::new("Book Title 2", "Author 2", "ISBN002");
        user.borrow_book(&mut kept);
        stray.borrow_book();

        user.return_book(&mut stray);

        assert!(!stray.is_borrowed());
        assert_eq!(user.borrowed_books(), &[Isbn::from("ISBN001")]);
    }

    #[test]
    fn release_drops_records_only() {
        let mut user = User::new("user1", "User One");
        let mut book = Book::new("Book Title 1", "Author 1", "ISBN001");
        user.borrow_book(&mut book);
        user.borrow_book(&mut book);

        assert_eq!(user.release("ISBN001"), 2);
        assert_eq!(user.release("ISBN001"), 0);
        assert!(user.borrowed_books().is_empty());
        assert!(book.is_borrowed());
    }
}
