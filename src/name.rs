use crate::idmap::{IdIndex, IdMap};

/// Id for an interned element or attribute name.
///
/// Ids are only meaningful within the [`Document`](crate::Document) that
/// produced them. Names are the literal qualified names as tokenized,
/// prefix included, so `foo:bar` and `bar` are distinct names.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct NameId(u32);

impl IdIndex<NameId> for NameId {
    fn to_id(index: usize) -> NameId {
        NameId(index as u32)
    }

    fn from_id(id: NameId) -> usize {
        id.0 as usize
    }
}

pub(crate) type NameLookup = IdMap<NameId, String>;
