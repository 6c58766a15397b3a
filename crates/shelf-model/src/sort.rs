//! Sortable columns and sort direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A column the catalog can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Book title.
    #[default]
    Title,
    /// Author name.
    Author,
    /// Publisher name.
    Publisher,
    /// Publication year.
    Year,
}

impl SortField {
    /// All sortable columns in display order.
    pub const ALL: [SortField; 4] = [Self::Title, Self::Author, Self::Publisher, Self::Year];

    /// Wire name used in query parameters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Publisher => "publisher",
            Self::Year => "year",
        }
    }

    /// Column header label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Publisher => "Publisher",
            Self::Year => "Year",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ModelError::UnknownSortField(name.to_string()))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Wire name used in query parameters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ModelError::UnknownSortOrder(other.to_string())),
        }
    }
}

/// The active sort column and its direction.
///
/// Exactly one spec is active at a time. The default is title ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column being sorted.
    pub field: SortField,
    /// Direction of the sort.
    pub order: SortOrder,
}

impl SortSpec {
    /// Create a sort spec.
    #[must_use]
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Direction shown for `field`, or `None` when it is not the active column.
    #[must_use]
    pub fn order_for(&self, field: SortField) -> Option<SortOrder> {
        (self.field == field).then_some(self.order)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_str() {
        assert_eq!("title".parse::<SortField>().unwrap(), SortField::Title);
        assert_eq!(" Year ".parse::<SortField>().unwrap(), SortField::Year);
        assert_eq!(
            "isbn".parse::<SortField>(),
            Err(ModelError::UnknownSortField("isbn".to_string()))
        );
    }

    #[test]
    fn test_order_from_str() {
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("up".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_flipped() {
        assert_eq!(SortOrder::Asc.flipped(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.flipped().flipped(), SortOrder::Desc);
    }

    #[test]
    fn test_order_for() {
        let spec = SortSpec::new(SortField::Author, SortOrder::Desc);
        assert_eq!(spec.order_for(SortField::Author), Some(SortOrder::Desc));
        assert_eq!(spec.order_for(SortField::Title), None);
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&SortSpec::default()).unwrap();
        assert_eq!(json, r#"{"field":"title","order":"asc"}"#);
    }
}
