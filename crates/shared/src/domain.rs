use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(EntityId);

/// Beneficiary collections are keyed by the id of the asset that owns them.
pub type AssetId = EntityId;

pub const PERSONAL_INFO_FIELDS: &[&str] = &["fullName", "fathersName", "address", "age", "dob"];
pub const ASSET_FIELDS: &[&str] = &["name", "type", "value"];
pub const BENEFICIARY_FIELDS: &[&str] = &["name", "age", "mobile", "sharePercentage"];
pub const PERSON_FIELDS: &[&str] = &["name", "age", "mobile", "address"];

pub const SHARE_PERCENTAGE_FIELD: &str = "sharePercentage";

pub const ASSET_TYPES: &[&str] = &[
    "Real Estate",
    "Vehicle",
    "Personal Property",
    "Financial Asset",
    "Business Interest",
    "Intellectual Property",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Asset,
    Beneficiary,
    Witness,
    Executor,
}

impl EntityKind {
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Asset => ASSET_FIELDS,
            Self::Beneficiary => BENEFICIARY_FIELDS,
            Self::Witness | Self::Executor => PERSON_FIELDS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Beneficiary => "beneficiary",
            Self::Witness => "witness",
            Self::Executor => "executor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WillSection {
    #[default]
    Personal,
    Assets,
    Beneficiaries,
    Witnesses,
}

impl WillSection {
    pub const ALL: [WillSection; 4] = [
        Self::Personal,
        Self::Assets,
        Self::Beneficiaries,
        Self::Witnesses,
    ];

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Assets),
            Self::Assets => Some(Self::Beneficiaries),
            Self::Beneficiaries => Some(Self::Witnesses),
            Self::Witnesses => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Assets => Some(Self::Personal),
            Self::Beneficiaries => Some(Self::Assets),
            Self::Witnesses => Some(Self::Beneficiaries),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Assets => "Assets",
            Self::Beneficiaries => "Beneficiaries",
            Self::Witnesses => "Witnesses",
        }
    }
}

impl fmt::Display for WillSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
