use serde::{Deserialize, Serialize};

/// Category id as stored: one-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

/// Category id as seen by clients: zero-based, the index into the
/// `categories` list returned by `GET /categories`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ExternalCategoryId(pub i64);

impl ExternalCategoryId {
    pub fn to_internal(self) -> CategoryId {
        CategoryId(self.0.wrapping_add(1))
    }
}

impl CategoryId {
    pub fn to_external(self) -> ExternalCategoryId {
        ExternalCategoryId(self.0.wrapping_sub(1))
    }
}

impl From<ExternalCategoryId> for CategoryId {
    fn from(id: ExternalCategoryId) -> Self {
        id.to_internal()
    }
}

impl From<CategoryId> for ExternalCategoryId {
    fn from(id: CategoryId) -> Self {
        id.to_external()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: &str) -> Self {
        Category {
            id: CategoryId(id),
            kind: kind.to_string(),
        }
    }
}

/// Reference categories inserted into an empty store at startup.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];
