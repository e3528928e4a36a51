//! JSON REST API for to-do tasks, built on actix-web.

pub mod config;
pub mod error;
pub mod memory_store;
pub mod models;
pub mod rest;
pub mod service;
