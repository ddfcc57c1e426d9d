// Service module exports

pub mod calendar;
pub mod settings;
pub mod share;
pub mod shopping;
pub mod store;
