// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

/// Filter dimension for the project list. The set is fixed for the process
/// lifetime; `ALL` gives the selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    All,
    Static,
    Responsive,
    Dynamic,
    React,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Static,
        Self::Responsive,
        Self::Dynamic,
        Self::React,
    ];

    /// Wire id, as the remote API expects it in the `category` query param.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Static => "STATIC",
            Self::Responsive => "RESPONSIVE",
            Self::Dynamic => "DYNAMIC",
            Self::React => "REACT",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Static => "Static",
            Self::Responsive => "Responsive",
            Self::Dynamic => "Dynamic",
            Self::React => "React",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ALL" => Some(Self::All),
            "STATIC" => Some(Self::Static),
            "RESPONSIVE" => Some(Self::Responsive),
            "DYNAMIC" => Some(Self::Dynamic),
            "REACT" => Some(Self::React),
            _ => None,
        }
    }
}

/// Lifecycle state of the most recent fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiStatus {
    Initial,
    InProgress,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn category_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn unknown_category_id_is_rejected() {
        assert_eq!(Category::parse("VUE"), None);
        assert_eq!(Category::parse("all"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn selector_order_starts_with_all() {
        assert_eq!(Category::ALL[0], Category::All);
        assert_eq!(Category::ALL.len(), 5);
    }
}
