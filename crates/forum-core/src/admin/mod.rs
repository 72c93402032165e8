//! Static admin schema declarations
//!
//! Maps each managed entity to its displayed, searchable, and filterable
//! fields. The administrative collaborator reads this table to build its
//! list screens; it is an explicit declaration, not runtime reflection.

use serde::Serialize;

/// Admin screen declaration for one entity type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminEntity {
    /// Entity name as exposed in admin routes
    pub entity: &'static str,
    /// Columns shown on the list screen
    pub display_fields: &'static [&'static str],
    /// Fields covered by the search box
    pub search_fields: &'static [&'static str],
    /// Fields offered as list filters
    pub filter_fields: &'static [&'static str],
}

/// All managed entities, in admin display order
pub const ADMIN_ENTITIES: &[AdminEntity] = &[
    AdminEntity {
        entity: "category",
        display_fields: &["name", "description", "thread_count", "created_date"],
        search_fields: &["name", "description"],
        filter_fields: &[],
    },
    AdminEntity {
        entity: "thread",
        display_fields: &[
            "title",
            "category",
            "author",
            "is_pinned",
            "is_locked",
            "created_date",
            "views",
        ],
        search_fields: &["title"],
        filter_fields: &["category", "is_pinned", "is_locked", "created_date"],
    },
    AdminEntity {
        entity: "post",
        display_fields: &["thread", "author", "created_date", "is_edited"],
        search_fields: &["content", "author_username"],
        filter_fields: &["created_date", "is_edited"],
    },
    AdminEntity {
        entity: "user_profile",
        display_fields: &["user", "location", "joined_date", "post_count", "thread_count"],
        search_fields: &["username", "location"],
        filter_fields: &[],
    },
];

/// Look up the declaration for an entity by name
pub fn admin_entity(name: &str) -> Option<&'static AdminEntity> {
    ADMIN_ENTITIES.iter().find(|e| e.entity == name)
}
