use std::fmt;

use serde::{Deserialize, Serialize};

/// ISBN identifying a catalog entry. Accepted as-is, no checksum validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Isbn {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Isbn {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Isbn {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Isbn {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A catalog item and its borrowed status.
///
/// Two books are equal when their ISBNs are equal; title, author and the
/// borrowed flag are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Title of the book
    title: String,
    /// Author of the book
    author: String,
    /// Identity key
    isbn: Isbn,
    /// Whether the book is currently checked out
    #[serde(default)]
    is_borrowed: bool,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<Isbn>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            is_borrowed: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn is_borrowed(&self) -> bool {
        self.is_borrowed
    }

    /// Flag the book as checked out.
    pub fn borrow_book(&mut self) {
        self.is_borrowed = true;
    }

    /// Flag the book as back on the shelf.
    pub fn return_book(&mut self) {
        self.is_borrowed = false;
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_is_not_borrowed() {
        let book = Book::new("Book Title 1", "Author 1", "ISBN001");
        assert_eq!(book.title(), "Book Title 1");
        assert_eq!(book.author(), "Author 1");
        assert_eq!(book.isbn(), "ISBN001");
        assert!(!book.is_borrowed());
    }

    #[test]
    fn borrow_and_return_toggle_flag() {
        let mut book = Book::new("Book Title 1", "Author 1", "ISBN001");
        book.borrow_book();
        assert!(book.is_borrowed());
        book.borrow_book();
        assert!(book.is_borrowed());
        book.return_book();
        assert!(!book.is_borrowed());
    }

    #[test]
    fn equality_compares_isbn_only() {
        let mut a = Book::new("Book Title 1", "Author 1", "ISBN001");
        let b = Book::new("Another Title", "Someone Else", "ISBN001");
        let c = Book::new("Book Title 1", "Author 1", "ISBN002");
        a.borrow_book();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn empty_strings_are_accepted() {
        let book = Book::new("", "", "");
        assert_eq!(book.isbn().as_str(), "");
    }

    #[test]
    fn serializes_with_plain_isbn_string() {
        let book = Book::new("Book Title 1", "Author 1", "ISBN001");
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["isbn"], "ISBN001");
        assert_eq!(value["is_borrowed"], false);
    }
}
