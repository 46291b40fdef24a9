use cosmwasm_schema::cw_serde;

/// Status code reported for a binding that was never recorded
pub const NO_STATUS: u64 = 0;

/// Issuer lifecycle. Stored on chain as its integer code.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum IssuerStatus {
    Active,
    Deprecated,
    InConflict,
}

impl IssuerStatus {
    pub const ALL: [IssuerStatus; 3] = [
        IssuerStatus::Active,
        IssuerStatus::Deprecated,
        IssuerStatus::InConflict,
    ];

    pub fn code(self) -> u64 {
        match self {
            IssuerStatus::Active => 1,
            IssuerStatus::Deprecated => 2,
            IssuerStatus::InConflict => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IssuerStatus::Active => "active",
            IssuerStatus::Deprecated => "deprecated",
            IssuerStatus::InConflict => "in_conflict",
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }
}

/// Schema and binding lifecycle. Shares codes 1 and 2 with [`IssuerStatus`].
#[cw_serde]
#[derive(Copy, Eq)]
pub enum SchemaStatus {
    Active,
    Deprecated,
}

impl SchemaStatus {
    pub const ALL: [SchemaStatus; 2] = [SchemaStatus::Active, SchemaStatus::Deprecated];

    pub fn code(self) -> u64 {
        match self {
            SchemaStatus::Active => 1,
            SchemaStatus::Deprecated => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SchemaStatus::Active => "active",
            SchemaStatus::Deprecated => "deprecated",
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }
}

impl From<SchemaStatus> for IssuerStatus {
    fn from(status: SchemaStatus) -> Self {
        match status {
            SchemaStatus::Active => IssuerStatus::Active,
            SchemaStatus::Deprecated => IssuerStatus::Deprecated,
        }
    }
}
