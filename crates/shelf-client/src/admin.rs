//! Admin command table.
//!
//! Admin operations are plain form submissions: each command maps to one
//! fixed endpoint and a list of required fields. There is no state to
//! coordinate, so this is a lookup table and nothing more.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ClientError, Result};

/// HTTP method of an admin endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        })
    }
}

/// Method and path template of an admin endpoint.
///
/// Path segments written as `{name}` are filled from the command's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// HTTP method.
    pub method: Method,
    /// Path template.
    pub path: &'static str,
}

/// Operations offered by the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminCommand {
    /// Sign in with username and password (form encoded).
    SignIn,
    /// Register a library member.
    RegisterMember,
    /// Update a member's details.
    UpdateMember,
    /// List a member's current loans.
    MemberLoans,
    /// Add a book to the catalog.
    RegisterBook,
    /// Update a book's details.
    UpdateBook,
    /// Loan status and history of one book.
    BookHistory,
    /// Lend a book to a member.
    LendBook,
    /// Take a lent book back.
    ReturnBook,
}

impl AdminCommand {
    /// All commands in dashboard order.
    pub const ALL: [AdminCommand; 9] = [
        Self::SignIn,
        Self::RegisterMember,
        Self::UpdateMember,
        Self::MemberLoans,
        Self::RegisterBook,
        Self::UpdateBook,
        Self::BookHistory,
        Self::LendBook,
        Self::ReturnBook,
    ];

    /// Endpoint the command is sent to.
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        let (method, path) = match self {
            Self::SignIn => (Method::Post, "/admin/signin"),
            Self::RegisterMember => (Method::Post, "/admin/members"),
            Self::UpdateMember => (Method::Put, "/admin/members/{memberId}"),
            Self::MemberLoans => (Method::Get, "/admin/members/{memberId}/loans"),
            Self::RegisterBook => (Method::Post, "/admin/books"),
            Self::UpdateBook => (Method::Put, "/admin/books/{bookId}"),
            Self::BookHistory => (Method::Get, "/admin/books/{bookId}/loans"),
            Self::LendBook => (Method::Post, "/admin/loans"),
            Self::ReturnBook => (Method::Post, "/admin/returns"),
        };
        Endpoint { method, path }
    }

    /// Fields that must be present and non-blank.
    #[must_use]
    pub const fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::SignIn => &["username", "password"],
            Self::RegisterMember => &["name", "email"],
            Self::UpdateMember => &["memberId", "name", "email"],
            Self::MemberLoans => &["memberId"],
            Self::RegisterBook => &["title", "author", "publisher", "year"],
            Self::UpdateBook => &["bookId", "title", "author", "publisher", "year"],
            Self::BookHistory => &["bookId"],
            Self::LendBook | Self::ReturnBook => &["bookId", "memberId"],
        }
    }

    /// Dashboard label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::RegisterMember => "Register member",
            Self::UpdateMember => "Update member",
            Self::MemberLoans => "Member loans",
            Self::RegisterBook => "Register book",
            Self::UpdateBook => "Update book",
            Self::BookHistory => "Book loan history",
            Self::LendBook => "Lend book",
            Self::ReturnBook => "Return book",
        }
    }

    /// Check the required fields and fill the path template.
    pub fn resolve(&self, fields: &BTreeMap<String, String>) -> Result<String> {
        for &name in self.required_fields() {
            if fields.get(name).is_none_or(|value| value.trim().is_empty()) {
                return Err(ClientError::MissingField(name));
            }
        }

        let mut path = self.endpoint().path.to_string();
        for (name, value) in fields {
            path = path.replace(&format!("{{{name}}}"), value.trim());
        }
        Ok(path)
    }
}

impl fmt::Display for AdminCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_every_placeholder_is_required() {
        for command in AdminCommand::ALL {
            let path = command.endpoint().path;
            for segment in path.split('/') {
                if let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    assert!(
                        command.required_fields().contains(&name),
                        "{command}: {name} is not required"
                    );
                }
            }
        }
    }

    #[test]
    fn test_resolve_fills_path() {
        let path = AdminCommand::MemberLoans
            .resolve(&fields(&[("memberId", " 42 ")]))
            .unwrap();
        assert_eq!(path, "/admin/members/42/loans");
    }

    #[test]
    fn test_resolve_rejects_blank_field() {
        let err = AdminCommand::LendBook
            .resolve(&fields(&[("bookId", "7"), ("memberId", "  ")]))
            .unwrap_err();
        assert_eq!(err, ClientError::MissingField("memberId"));
    }

    #[test]
    fn test_methods() {
        assert_eq!(AdminCommand::SignIn.endpoint().method, Method::Post);
        assert_eq!(AdminCommand::UpdateBook.endpoint().method.to_string(), "PUT");
    }
}
