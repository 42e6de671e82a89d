//! Binding between stored entity types and the address space they live in.

use pn_01_addressing::AddressKind;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{Keyed, Owner, Record};

/// Entity that is stored in a container under its own address kind.
pub trait ContainerEntry: Keyed + Clone + Serialize + DeserializeOwned + Send + Sync {
    /// Address kind whose prefix the entity's containers use.
    const KIND: AddressKind;
}

impl ContainerEntry for Owner {
    const KIND: AddressKind = AddressKind::Owner;
}

impl ContainerEntry for Record {
    const KIND: AddressKind = AddressKind::Record;
}
