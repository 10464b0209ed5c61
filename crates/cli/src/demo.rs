//! Self-checks exercising the catalog end to end.

use libris_catalog::{Book, CatalogPolicy, CatalogResult, Library, User};

/// Outcome of one named check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub passed: bool,
}

impl Check {
    fn new(name: &'static str, passed: bool) -> Self {
        Self { name, passed }
    }
}

/// Run every check against fresh libraries built with `policy`.
pub fn run(policy: CatalogPolicy) -> Vec<Check> {
    let mut checks = Vec::new();
    add_and_remove_book(policy, &mut checks);
    search_book(policy, &mut checks);
    user_management(policy, &mut checks);
    borrow_and_return_book(policy, &mut checks);
    checks
}

fn add_and_remove_book(policy: CatalogPolicy, checks: &mut Vec<Check>) {
    let mut library = Library::with_policy(policy);
    let added = library
        .add_book(Book::new("Book Title 1", "Author 1", "ISBN001"))
        .is_ok();

    let found = added
        && library
            .search_book_by_isbn("ISBN001")
            .is_some_and(|book| book.title() == "Book Title 1");
    checks.push(Check::new("addBook", found));

    library.remove_book("ISBN001");
    checks.push(Check::new(
        "removeBook",
        library.search_book_by_isbn("ISBN001").is_none(),
    ));
}

fn search_book(policy: CatalogPolicy, checks: &mut Vec<Check>) {
    let mut library = Library::with_policy(policy);
    let added = library
        .add_book(Book::new("Book Title 1", "Author 1", "ISBN001"))
        .and_then(|()| library.add_book(Book::new("Book Title 2", "Author 2", "ISBN002")))
        .is_ok();

    let by_title = library
        .search_book_by_title("Book Title 2")
        .is_some_and(|book| book.author() == "Author 2");
    checks.push(Check::new("searchBookByTitle", added && by_title));

    let by_author = library
        .search_book_by_author("Author 1")
        .is_some_and(|book| book.title() == "Book Title 1");
    checks.push(Check::new("searchBookByAuthor", added && by_author));

    let by_isbn = library
        .search_book_by_isbn("ISBN001")
        .is_some_and(|book| book.title() == "Book Title 1");
    checks.push(Check::new("searchBookByISBN", added && by_isbn));
}

fn user_management(policy: CatalogPolicy, checks: &mut Vec<Check>) {
    let mut library = Library::with_policy(policy);
    let added = library.add_user(User::new("user1", "User One")).is_ok();

    let found = added
        && library
            .get_user("user1")
            .is_some_and(|user| user.name() == "User One");
    checks.push(Check::new("addUser", found));

    library.remove_user("user1");
    checks.push(Check::new("removeUser", library.get_user("user1").is_none()));
}

fn borrow_and_return_book(policy: CatalogPolicy, checks: &mut Vec<Check>) {
    let mut library = Library::with_policy(policy);
    let ready = library
        .add_book(Book::new("Book Title 1", "Author 1", "ISBN001"))
        .and_then(|()| library.add_user(User::new("user1", "User One")))
        .is_ok();

    let borrowed = ready
        && library.checkout("user1", "ISBN001").is_ok()
        && library.book("ISBN001").is_some_and(Book::is_borrowed)
        && library
            .user("user1")
            .is_some_and(|user| !user.borrowed_books().is_empty());
    checks.push(Check::new("borrowBook", borrowed));

    let returned = borrowed
        && library.checkin("user1", "ISBN001").is_ok()
        && library.book("ISBN001").is_some_and(|book| !book.is_borrowed())
        && library
            .user("user1")
            .is_some_and(|user| user.borrowed_books().is_empty());
    checks.push(Check::new("returnBook", returned));
}

/// A small stocked library with one book out on loan.
pub fn sample_library(policy: CatalogPolicy) -> CatalogResult<Library> {
    let mut library = Library::with_policy(policy);
    library.add_book(Book::new(
        "The Rust Programming Language",
        "Steve Klabnik",
        "978-1718503106",
    ))?;
    library.add_book(Book::new("Programming Rust", "Jim Blandy", "978-1492052593"))?;
    library.add_book(Book::new(
        "Rust for Rustaceans",
        "Jon Gjengset",
        "978-1718501850",
    ))?;
    library.add_user(User::new("user1", "User One"))?;
    library.add_user(User::new("user2", "User Two"))?;
    library.checkout("user1", "978-1492052593")?;
    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_checks_pass_under_strict_policy() {
        let checks = run(CatalogPolicy::Strict);
        assert_eq!(checks.len(), 9);
        assert!(checks.iter().all(|check| check.passed), "{checks:?}");
    }

    #[test]
    fn all_checks_pass_under_permissive_policy() {
        let checks = run(CatalogPolicy::Permissive);
        assert!(checks.iter().all(|check| check.passed), "{checks:?}");
    }

    #[test]
    fn sample_library_has_one_loan() {
        let library = sample_library(CatalogPolicy::Strict).unwrap();
        assert_eq!(library.book_count(), 3);
        assert_eq!(library.user_count(), 2);
        let held = library.borrowed_books("user1").unwrap();
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].title(), "Programming Rust");
    }
}
