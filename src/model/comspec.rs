//! Communication specifications attached to ports.

use smol_str::SmolStr;

/// Per-port contract detail for one operation or data element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComSpec {
    /// Client/server role.
    Operation(OperationComSpec),
    /// Sender/receiver role.
    DataElement(DataElementComSpec),
}

impl ComSpec {
    /// The operation or data element this spec applies to.
    ///
    /// `None` when the reference did not match the port's interface.
    pub fn name(&self) -> Option<&str> {
        match self {
            ComSpec::Operation(spec) => spec.name.as_deref(),
            ComSpec::DataElement(spec) => spec.name.as_deref(),
        }
    }

    pub fn as_operation(&self) -> Option<&OperationComSpec> {
        match self {
            ComSpec::Operation(spec) => Some(spec),
            ComSpec::DataElement(_) => None,
        }
    }

    pub fn as_data_element(&self) -> Option<&DataElementComSpec> {
        match self {
            ComSpec::DataElement(spec) => Some(spec),
            ComSpec::Operation(_) => None,
        }
    }
}

/// ComSpec for a client/server operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationComSpec {
    pub name: Option<SmolStr>,
    pub queue_length: Option<u32>,
}

impl OperationComSpec {
    pub fn new(name: Option<SmolStr>) -> Self {
        Self {
            name,
            queue_length: None,
        }
    }
}

/// ComSpec for a sender/receiver data element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataElementComSpec {
    pub name: Option<SmolStr>,
    /// Receiver alive timeout, as written in the document.
    pub alive_timeout: Option<String>,
    pub queue_length: Option<u32>,
    /// Reference to the constant used as initial value.
    pub init_value_ref: Option<String>,
    pub can_invalidate: Option<bool>,
}

impl DataElementComSpec {
    pub fn new(name: Option<SmolStr>) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }
}

impl From<OperationComSpec> for ComSpec {
    fn from(spec: OperationComSpec) -> Self {
        ComSpec::Operation(spec)
    }
}

impl From<DataElementComSpec> for ComSpec {
    fn from(spec: DataElementComSpec) -> Self {
        ComSpec::DataElement(spec)
    }
}
