//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CategoryQuery, CategoryRepository, Page, PostQuery, PostRepository, ProfileQuery,
    ProfileRepository, RepoResult, ThreadQuery, ThreadRepository, ThreadSort, UserRepository,
};
