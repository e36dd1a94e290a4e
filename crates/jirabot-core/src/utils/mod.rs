//! Text utilities.

mod template;
mod text;

pub use template::render_template;
pub use text::{strip_priority_prefix, truncate};
