//! Site Module - page state and server-side rendering

pub mod contact;
pub mod header;
pub mod render;

pub use contact::{ContactFormState, FormField, SubmitStatus};
pub use header::{HeaderState, NavItem, NAV_ITEMS};
pub use render::{render_page, PageData};
