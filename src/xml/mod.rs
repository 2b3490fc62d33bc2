//! Owned XML element tree.
//!
//! ARXML is navigated by child path (`PROVIDER-IREF/P-PORT-PROTOTYPE-REF`)
//! far more than it is streamed, so documents are read into a small owned
//! tree first. Building the tree uses `quick-xml` events; everything after
//! that works on [`XmlElement`].
//!
//! ```text
//! bytes ──quick-xml──▶ XmlDocument { root: XmlElement }
//!                              │
//!                              ▼
//!            find("A/B") / children() / text()
//! ```

mod reader;
mod tree;

pub use reader::XmlDocument;
pub use tree::XmlElement;
