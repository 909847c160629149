// src/handlers/mod.rs

pub mod admin;
pub mod assessment;
pub mod assignment;
pub mod auth;
pub mod catalog;
pub mod user;
