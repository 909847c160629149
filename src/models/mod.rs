// src/models/mod.rs

pub mod assessment;
pub mod assignment;
pub mod course;
pub mod knowledge_gap;
pub mod question;
pub mod recommendation;
pub mod user;
