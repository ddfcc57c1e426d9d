// noizb library
// Calendar view-model, shopping list and session collaborators for couples

pub mod models;
pub mod render;
pub mod services;
pub mod utils;
