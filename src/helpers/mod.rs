//! Helper functions that produce the HTML fragments placed into templates

mod html;
mod list;
mod url;

pub use html::*;
pub use list::*;
pub use url::*;
