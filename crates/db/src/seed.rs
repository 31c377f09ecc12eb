//! One-time demo data bootstrap.

use notekeeper_core::seed::DEMO_CATEGORIES;
use sqlx::PgPool;

use crate::models::category::CreateCategory;
use crate::models::note::CreateNote;
use crate::repositories::{CategoryRepo, NoteRepo};

/// Insert the demo categories and notes if no categories exist yet.
///
/// Returns `true` if data was inserted, `false` if the table already had
/// rows and nothing was done.
pub async fn seed_demo_data(pool: &PgPool) -> Result<bool, sqlx::Error> {
    if CategoryRepo::count(pool).await? > 0 {
        tracing::debug!("Categories present, skipping demo seed");
        return Ok(false);
    }

    for seed in DEMO_CATEGORIES {
        let category = CategoryRepo::create(
            pool,
            &CreateCategory {
                name: seed.name.to_string(),
                color: Some(seed.color.to_string()),
            },
        )
        .await?;

        for note in seed.notes {
            NoteRepo::create(
                pool,
                &CreateNote {
                    title: note.title.to_string(),
                    content: note.content.to_string(),
                    category_id: Some(category.id),
                    is_favorite: Some(note.is_favorite),
                },
            )
            .await?;
        }
    }

    tracing::info!(categories = DEMO_CATEGORIES.len(), "Seeded demo data");
    Ok(true)
}
