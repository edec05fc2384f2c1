//! Service Layer
//!
//! Mutation workflows over the remote stores.

mod item_service;

#[cfg(test)]
mod tests;

pub use item_service::ItemService;
