//! Will packages on offer and the buyer's pick.

use serde::Serialize;
use tracing::info;

use crate::error::PackageError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub id: &'static str,
    pub name: &'static str,
    pub price_usd: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub is_popular: bool,
}

static CATALOG: &[Package] = &[
    Package {
        id: "basic",
        name: "Basic Will",
        price_usd: 99,
        description:
            "Ideal for individuals with simple estates and straightforward inheritance wishes.",
        features: &[
            "Legally valid will document",
            "Name beneficiaries for your assets",
            "Appoint executors",
            "Digital copy of your will",
            "Email support",
        ],
        is_popular: false,
    },
    Package {
        id: "standard",
        name: "Standard Will",
        price_usd: 199,
        description: "Perfect for individuals or couples with children and more complex asset distribution needs.",
        features: &[
            "Everything in Basic Will",
            "Assign guardians for minor children",
            "Create specific bequests",
            "Will storage for 10 years",
            "Priority email support",
            "One free update per year",
        ],
        is_popular: true,
    },
    Package {
        id: "premium",
        name: "Premium Estate Plan",
        price_usd: 299,
        description:
            "Comprehensive estate planning for those with complex assets or business interests.",
        features: &[
            "Everything in Standard Will",
            "Living trust creation",
            "Power of attorney documents",
            "Healthcare directives",
            "Lifetime will storage",
            "Unlimited updates",
            "Priority phone support",
        ],
        is_popular: false,
    },
];

pub fn catalog() -> &'static [Package] {
    CATALOG
}

pub fn find_package(id: &str) -> Option<&'static Package> {
    CATALOG.iter().find(|package| package.id == id)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PackageSelection {
    selected: Option<&'static Package>,
}

impl PackageSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&'static Package> {
        self.selected
    }

    /// An unknown id leaves the current pick untouched.
    pub fn select(&mut self, id: &str) -> Result<&'static Package, PackageError> {
        let package = find_package(id).ok_or_else(|| PackageError::UnknownPackage(id.into()))?;
        self.selected = Some(package);
        Ok(package)
    }

    /// The package to author a will under, once one has been picked.
    pub fn purchase(&self) -> Option<&'static Package> {
        let package = self.selected?;
        info!(package = package.id, "package purchased");
        Some(package)
    }
}

#[cfg(test)]
#[path = "tests/packages_tests.rs"]
mod tests;
