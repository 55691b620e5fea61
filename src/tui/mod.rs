//! Terminal front-end: app state, key handling and rendering.

pub mod app;
pub mod controller;
pub mod ui;
