use chrono::serde::ts_milliseconds;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::MemozError;

/// Card color, drawn pseudo-randomly at creation from a fixed palette.
/// Purely visual; carries no meaning beyond display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Blue,
    Emerald,
    Rose,
    Purple,
    Orange,
}

impl Color {
    pub const PALETTE: [Color; 6] = [
        Color::Yellow,
        Color::Blue,
        Color::Emerald,
        Color::Rose,
        Color::Purple,
        Color::Orange,
    ];

    pub fn random() -> Self {
        Self::PALETTE[rand::thread_rng().gen_range(0..Self::PALETTE.len())]
    }
}

/// The fixed category label set of the board, used for filtering.
///
/// Labels are the board's native Korean ones; [`FromStr`] also accepts
/// English aliases for terminal ergonomics. The filter-only 전체 ("all")
/// pseudo-label is not a category and lives at the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[serde(rename = "할일")]
    Todo,
    #[serde(rename = "아이디어")]
    Idea,
    #[serde(rename = "유머")]
    Humor,
    #[serde(rename = "좋은글")]
    Quote,
    #[serde(rename = "비밀번호")]
    Password,
    /// Catch-all, assigned when no category is given.
    #[default]
    #[serde(rename = "기타")]
    Etc,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Todo,
        Category::Idea,
        Category::Humor,
        Category::Quote,
        Category::Password,
        Category::Etc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Todo => "할일",
            Category::Idea => "아이디어",
            Category::Humor => "유머",
            Category::Quote => "좋은글",
            Category::Password => "비밀번호",
            Category::Etc => "기타",
        }
    }

    pub fn alias(&self) -> &'static str {
        match self {
            Category::Todo => "todo",
            Category::Idea => "idea",
            Category::Humor => "humor",
            Category::Quote => "quote",
            Category::Password => "password",
            Category::Etc => "etc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = MemozError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        let lowered = needle.to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label() == needle || c.alias() == lowered)
            .ok_or_else(|| MemozError::UnknownCategory(needle.to_string()))
    }
}

/// One sticky note on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    pub id: Uuid,
    pub text: String,
    /// Stamped at creation; display only, never used for ordering.
    #[serde(with = "ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub color: Color,
    pub category: Category,
}

impl Memo {
    pub fn new(text: String, category: Category) -> Self {
        // Epoch-ms is the wire precision; truncate up front so a round-trip
        // through the slot leaves the memo unchanged.
        let now = Utc::now();
        let created_at = DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now);
        Self {
            id: Uuid::new_v4(),
            text,
            created_at,
            color: Color::random(),
            category,
        }
    }
}
