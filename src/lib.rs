//! Core library exports for the Topicboard service.
//!
//! This crate exposes the domain entities, Diesel models, repositories,
//! DTOs, routes and service layers used by the Topicboard web application.

pub mod db;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
