//! Software component model.
//!
//! Entities are built bottom-up by the [`parser`](crate::parser) and
//! own their children in plain `Vec`s, in document order:
//!
//! ```text
//! ComponentType
//! ├── require_ports: Vec<Port> ── com_specs: Vec<ComSpec>
//! ├── provide_ports: Vec<Port> ── com_specs: Vec<ComSpec>
//! ├── behavior: Option<InternalBehavior>
//! ├── implementation: Option<RefPath>     (back-reference, set once)
//! └── kind: ComponentKind
//!     └── Composition(CompositionBody)
//!         ├── components: Vec<ComponentPrototype>
//!         └── connectors: Vec<Connector>
//! ```
//!
//! Every cross-entity reference (`type_ref`, `behavior_ref`,
//! `interface_ref`, ...) is a [`RefPath`](crate::base::RefPath) string.
//! Resolving it is up to the [`Workspace`](crate::workspace::Workspace).

mod behavior;
mod component;
mod composition;
mod comspec;
mod implementation;
mod port;

pub use behavior::{InternalBehavior, RunnableEntity};
pub use component::{ComponentKind, ComponentType};
pub use composition::{
    AssemblyConnector, ComponentPrototype, CompositionBody, Connector, DelegationConnector,
    PortInstanceRef,
};
pub use comspec::{ComSpec, DataElementComSpec, OperationComSpec};
pub use implementation::SwcImplementation;
pub use port::{Port, PortDirection};
