use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title can't be blank".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBody(String);

impl ArticleBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("body can't be blank".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleBody> for String {
    fn from(value: ArticleBody) -> Self {
        value.0
    }
}

/// The closed set of editorial categories. Listing keywords such as `all`,
/// `local` and `current` are not categories and never parse into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sport,
    Economy,
    Politics,
    Culture,
    Science,
    Lifestyle,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Sport,
        Category::Economy,
        Category::Politics,
        Category::Culture,
        Category::Science,
        Category::Lifestyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sport => "sport",
            Category::Economy => "economy",
            Category::Politics => "politics",
            Category::Culture => "culture",
            Category::Science => "science",
            Category::Lifestyle => "lifestyle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sport" => Ok(Category::Sport),
            "economy" => Ok(Category::Economy),
            "politics" => Ok(Category::Politics),
            "culture" => Ok(Category::Culture),
            "science" => Ok(Category::Science),
            "lifestyle" => Ok(Category::Lifestyle),
            _ => Err(DomainError::Validation(
                "category is not included in the list".into(),
            )),
        }
    }
}
