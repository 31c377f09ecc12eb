//! Note entity model and DTOs.

use notekeeper_core::note::{validate_note_content, validate_note_title};
use notekeeper_core::types::{DbId, Timestamp};
use notekeeper_core::validation::{FieldReader, ValidationError};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use crate::models::check;

/// A row from the `notes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category_id: Option<DbId>,
    /// Set by the database on insert and never updated.
    pub created_at: Timestamp,
    pub is_favorite: bool,
}

/// DTO for creating a new note.
#[derive(Debug, Clone, Default)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
    pub category_id: Option<DbId>,
    /// Defaults to `false` if omitted.
    pub is_favorite: Option<bool>,
}

impl CreateNote {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let reader = FieldReader::new(body)?;

        let title = reader.required_string("title")?;
        check("title", validate_note_title(&title))?;

        let content = reader.required_string("content")?;
        check("content", validate_note_content(&content))?;

        let category_id = reader.optional_id("categoryId")?;
        let is_favorite = reader.optional_bool("isFavorite")?;

        Ok(Self {
            title,
            content,
            category_id,
            is_favorite,
        })
    }
}

/// DTO for partially updating a note.
///
/// `category_id` uses `Option<Option<DbId>>` so a note can be moved out of
/// its category: `Some(None)` clears the reference.
#[derive(Debug, Clone, Default)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<Option<DbId>>,
    pub is_favorite: Option<bool>,
}

impl UpdateNote {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let reader = FieldReader::new(body)?;

        let title = reader.patch_string("title")?;
        if let Some(ref title) = title {
            check("title", validate_note_title(title))?;
        }

        let content = reader.patch_string("content")?;
        if let Some(ref content) = content {
            check("content", validate_note_content(content))?;
        }

        let category_id = reader.patch_nullable_id("categoryId")?;
        let is_favorite = reader.patch_bool("isFavorite")?;

        Ok(Self {
            title,
            content,
            category_id,
            is_favorite,
        })
    }

    /// The category this patch moves the note into, if any.
    pub fn target_category(&self) -> Option<DbId> {
        self.category_id.flatten()
    }
}
