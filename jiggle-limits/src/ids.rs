use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a limit record. Updates locate records by this value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LimitId(Uuid);

impl LimitId {
    pub const NIL: Self = Self(Uuid::nil());

    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for LimitId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for LimitId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| Error::InvalidValue {
                message: format!("limit id '{s}': {e}"),
            })
    }
}

impl fmt::Display for LimitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Hands out fresh identifiers, e.g. when an editor duplicates a record.
pub trait IdSource {
    fn next_id(&mut self) -> LimitId;
}

/// Random (v4) identifiers.
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> LimitId {
        LimitId::new_random()
    }
}

/// Deterministic identifiers counting up from a starting value.
#[derive(Clone, Debug)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn starting_at(first: u128) -> Self {
        Self { next: first }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> LimitId {
        let id = LimitId::from_u128(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
