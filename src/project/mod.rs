//! Document loading: from `.arxml` files to a populated [`Workspace`](crate::workspace::Workspace).

mod arxml_loader;
mod detect;

pub use arxml_loader::{ARXML_EXTENSION, ArxmlLoader, collect_arxml_paths};
pub use detect::detect_version;
