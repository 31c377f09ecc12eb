//! Demo data inserted on first startup when the categories table is empty.

/// A demo note, attached to the category that lists it.
#[derive(Debug, Clone, Copy)]
pub struct SeedNote {
    pub title: &'static str,
    pub content: &'static str,
    pub is_favorite: bool,
}

/// A demo category and its notes.
#[derive(Debug, Clone, Copy)]
pub struct SeedCategory {
    pub name: &'static str,
    pub color: &'static str,
    pub notes: &'static [SeedNote],
}

/// Demo categories in insertion order.
pub const DEMO_CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        name: "PowerShell",
        color: "#3B82F6",
        notes: &[SeedNote {
            title: "Basic Commands",
            content: "Get-ChildItem - lists files\nGet-Service - lists services\nGet-Help - gets help",
            is_favorite: true,
        }],
    },
    SeedCategory {
        name: "GitHub",
        color: "#1F2937",
        notes: &[SeedNote {
            title: "Git Workflow",
            content: "git init\ngit add .\ngit commit -m 'Initial commit'\ngit push",
            is_favorite: false,
        }],
    },
    SeedCategory {
        name: "Recipes",
        color: "#10B981",
        notes: &[SeedNote {
            title: "Pasta Carbonara",
            content: "Ingredients: Pasta, Eggs, Pecorino Cheese, Guanciale, Black Pepper.",
            is_favorite: false,
        }],
    },
];

/// Total number of demo notes across all categories.
pub fn demo_note_count() -> usize {
    DEMO_CATEGORIES.iter().map(|c| c.notes.len()).sum()
}
