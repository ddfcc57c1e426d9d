// Module exports for models

pub mod calendar;
pub mod category;
pub mod event;
pub mod identity;
pub mod settings;
pub mod shopping;
pub mod ui;
