//! View renderers for the models section of the console

pub mod model_row;
pub mod table;

pub use model_row::{render_model_row, write_model_row};
pub use table::{render_models_page, render_models_table, write_models_table};
