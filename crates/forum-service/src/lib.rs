//! # forum-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::requests::*;
pub use dto::responses::*;
pub use services::{
    CategoryService, PostService, ProfileService, ServiceContext, ServiceError, ServiceResult,
    StatsService, ThreadService, UserService,
};
