use libris_kernel::settings::CatalogPolicy;
use serde::Serialize;

use crate::error::{CatalogError, CatalogResult};
use crate::modules::books::{Book, Isbn};
use crate::modules::users::{User, UserId};
use crate::utils::LOG_TARGET;

/// Aggregate root owning the catalog and the membership list.
///
/// Both collections keep insertion order and every lookup returns the first
/// match, which matters when the permissive policy lets duplicate keys in.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Library {
    policy: CatalogPolicy,
    books: Vec<Book>,
    users: Vec<User>,
}

impl Library {
    /// Create an empty library with the strict policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CatalogPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> CatalogPolicy {
        self.policy
    }

    /// Append `book` to the catalog.
    ///
    /// Under [`CatalogPolicy::Strict`] a second book with the same ISBN is
    /// rejected with [`CatalogError::DuplicateIsbn`].
    pub fn add_book(&mut self, book: Book) -> CatalogResult<()> {
        if self.policy == CatalogPolicy::Strict && self.book(book.isbn().as_str()).is_some() {
            tracing::warn!(target: LOG_TARGET, isbn = %book.isbn(), "rejected duplicate isbn");
            return Err(CatalogError::DuplicateIsbn(book.isbn().clone()));
        }

        tracing::debug!(
            target: LOG_TARGET,
            isbn = %book.isbn(),
            title = book.title(),
            "book added"
        );
        self.books.push(book);
        Ok(())
    }

    /// Remove every catalog entry with this ISBN, returning how many went.
    ///
    /// Loans of a removed ISBN are dropped from every member, so a later
    /// entry reusing the ISBN starts out unlent.
    pub fn remove_book(&mut self, isbn: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.isbn() != isbn);
        let removed = before - self.books.len();

        let mut released = 0;
        if removed > 0 {
            for user in &mut self.users {
                released += user.release(isbn);
            }
        }

        tracing::debug!(target: LOG_TARGET, isbn, removed, released, "remove book");
        removed
    }

    /// First entry with this title, as a mutable handle to the catalog copy.
    pub fn search_book_by_title(&mut self, title: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.title() == title)
    }

    /// First entry by this author, as a mutable handle to the catalog copy.
    pub fn search_book_by_author(&mut self, author: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.author() == author)
    }

    /// First entry with this ISBN, as a mutable handle to the catalog copy.
    pub fn search_book_by_isbn(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.isbn() == isbn)
    }

    /// Shared-reference lookup by ISBN.
    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn() == isbn)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Append `user` to the membership list.
    ///
    /// Under [`CatalogPolicy::Strict`] a repeated user id is rejected with
    /// [`CatalogError::DuplicateUserId`].
    pub fn add_user(&mut self, user: User) -> CatalogResult<()> {
        if self.policy == CatalogPolicy::Strict && self.user(user.user_id().as_str()).is_some() {
            tracing::warn!(
                target: LOG_TARGET,
                user_id = %user.user_id(),
                "rejected duplicate user id"
            );
            return Err(CatalogError::DuplicateUserId(user.user_id().clone()));
        }

        tracing::debug!(
            target: LOG_TARGET,
            user_id = %user.user_id(),
            name = user.name(),
            "user added"
        );
        self.users.push(user);
        Ok(())
    }

    /// Remove every member with this id, returning how many went.
    ///
    /// Books the departing member held go back on the shelf unless another
    /// remaining member still holds the same ISBN.
    pub fn remove_user(&mut self, user_id: &str) -> usize {
        let (departing, remaining): (Vec<User>, Vec<User>) = std::mem::take(&mut self.users)
            .into_iter()
            .partition(|user| user.user_id() == user_id);
        self.users = remaining;

        for isbn in departing.iter().flat_map(User::borrowed_books) {
            if self.users.iter().any(|user| user.has_borrowed(isbn.as_str())) {
                continue;
            }
            for book in self.books.iter_mut().filter(|book| book.isbn() == isbn) {
                book.return_book();
            }
        }

        tracing::debug!(target: LOG_TARGET, user_id, removed = departing.len(), "remove user");
        departing.len()
    }

    /// First member with this id, as a mutable handle to the stored record.
    pub fn get_user(&mut self, user_id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.user_id() == user_id)
    }

    /// Shared-reference lookup by user id.
    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.user_id() == user_id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Lend the catalog entry `isbn` to member `user_id`.
    ///
    /// Operates on the canonical catalog entry, so the borrowed flag seen
    /// through [`Library::book`] and the member's record always agree.
    pub fn checkout(&mut self, user_id: &str, isbn: &str) -> CatalogResult<()> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.user_id() == user_id)
            .ok_or_else(|| CatalogError::UnknownUser(UserId::from(user_id)))?;
        let book = self
            .books
            .iter_mut()
            .find(|book| book.isbn() == isbn)
            .ok_or_else(|| CatalogError::UnknownBook(Isbn::from(isbn)))?;

        if self.policy == CatalogPolicy::Strict && book.is_borrowed() {
            tracing::warn!(
                target: LOG_TARGET,
                user_id,
                isbn,
                "rejected checkout of borrowed book"
            );
            return Err(CatalogError::AlreadyBorrowed {
                isbn: book.isbn().clone(),
            });
        }

        user.borrow_book(book);
        Ok(())
    }

    /// Take the catalog entry `isbn` back from member `user_id`.
    ///
    /// Under [`CatalogPolicy::Strict`] the member must actually hold the
    /// book; otherwise [`CatalogError::NotBorrowedBy`] is returned and nothing
    /// changes.
    pub fn checkin(&mut self, user_id: &str, isbn: &str) -> CatalogResult<()> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.user_id() == user_id)
            .ok_or_else(|| CatalogError::UnknownUser(UserId::from(user_id)))?;
        let book = self
            .books
            .iter_mut()
            .find(|book| book.isbn() == isbn)
            .ok_or_else(|| CatalogError::UnknownBook(Isbn::from(isbn)))?;

        if self.policy == CatalogPolicy::Strict && !user.has_borrowed(isbn) {
            tracing::warn!(
                target: LOG_TARGET,
                user_id,
                isbn,
                "rejected checkin of book not held"
            );
            return Err(CatalogError::NotBorrowedBy {
                user_id: user.user_id().clone(),
                isbn: book.isbn().clone(),
            });
        }

        user.return_book(book);
        Ok(())
    }

    /// Resolve the books a member holds against the catalog.
    pub fn borrowed_books(&self, user_id: &str) -> CatalogResult<Vec<&Book>> {
        let user = self
            .user(user_id)
            .ok_or_else(|| CatalogError::UnknownUser(UserId::from(user_id)))?;

        Ok(user
            .borrowed_books()
            .iter()
            .filter_map(|isbn| self.book(isbn.as_str()))
            .collect())
    }
}
