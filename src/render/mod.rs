//! HTML fragments for each page region
//!
//! - [`views`]: maud templates for stores, dashboard, history and products
//! - [`format`]: money and pt-BR date formatting

pub mod format;
pub mod views;

pub use format::{date_pt_br, money};
