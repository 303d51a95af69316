pub mod dom;
pub mod error;
pub mod mirror;
pub mod naming;
pub mod origin;

pub use dom::{HtmlTree, MarkupTree};
pub use error::MirrorError;
pub use mirror::PageMirror;
