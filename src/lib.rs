// src/lib.rs

//! cms-admin: client core of a content-management dashboard

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod store;
pub mod utils;

#[cfg(test)]
mod testing;
