pub mod encode;
pub mod model;
pub mod service;
pub mod types;
pub mod ui;
