//! Category entity model and DTOs.

use notekeeper_core::category::validate_category_name;
use notekeeper_core::color::validate_hex_color;
use notekeeper_core::types::DbId;
use notekeeper_core::validation::{FieldReader, ValidationError};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use crate::models::check;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Default)]
pub struct CreateCategory {
    pub name: String,
    /// Defaults to `#000000` if omitted.
    pub color: Option<String>,
}

impl CreateCategory {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let reader = FieldReader::new(body)?;

        let name = reader.required_string("name")?;
        check("name", validate_category_name(&name))?;

        let color = reader.optional_string("color")?;
        if let Some(ref color) = color {
            check("color", validate_hex_color(color))?;
        }

        Ok(Self { name, color })
    }
}

/// DTO for updating an existing category. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl UpdateCategory {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let reader = FieldReader::new(body)?;

        let name = reader.patch_string("name")?;
        if let Some(ref name) = name {
            check("name", validate_category_name(name))?;
        }

        let color = reader.patch_string("color")?;
        if let Some(ref color) = color {
            check("color", validate_hex_color(color))?;
        }

        Ok(Self { name, color })
    }
}
