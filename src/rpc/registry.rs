use std::sync::Arc;

use crate::{
    interfaces::gateway::Gateway,
    rpc::{
        handler::{ApiHandler, Handler},
        methods::{v1, v09},
    },
};

pub const V0_9: &str = "v0.9";
pub const V1_0: &str = "v1.0";
pub const DEFAULT_VERSION: &str = V1_0;

pub type OperationTable = &'static [(&'static str, HandlerKind)];

const V0_9_OPERATIONS: OperationTable = &[
    ("authorization", HandlerKind::V09Authorization),
    ("elastiCubes", HandlerKind::V09ElastiCubes),
    ("branding", HandlerKind::V09Branding),
    ("reporting", HandlerKind::V09Reporting),
    ("palettes", HandlerKind::V09Palettes),
    ("users", HandlerKind::V09Users),
    ("groups", HandlerKind::V09Groups),
    ("settings", HandlerKind::V09Settings),
    ("roles", HandlerKind::V09Roles),
    ("dataSources", HandlerKind::V09DataSources),
    ("geo", HandlerKind::V09Geo),
];

const V1_0_OPERATIONS: OperationTable = &[
    ("users", HandlerKind::Users),
    ("groups", HandlerKind::Groups),
    ("application", HandlerKind::Application),
    ("authentication", HandlerKind::Authentication),
    ("account", HandlerKind::Account),
    ("admin", HandlerKind::Admin),
];

const VERSION_TABLE: &[(&str, OperationTable)] =
    &[(V0_9, V0_9_OPERATIONS), (V1_0, V1_0_OPERATIONS)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    Authentication,
    Users,
    Groups,
    Application,
    Account,
    Admin,
    V09Authorization,
    V09ElastiCubes,
    V09Branding,
    V09Reporting,
    V09Palettes,
    V09Users,
    V09Groups,
    V09Settings,
    V09Roles,
    V09DataSources,
    V09Geo,
}

impl HandlerKind {
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Authentication => "v1::Authentication",
            Self::Users => "v1::Users",
            Self::Groups => "v1::Groups",
            Self::Application => "v1::Application",
            Self::Account => "v1::Account",
            Self::Admin => "v1::Admin",
            Self::V09Authorization => "v09::Authorization",
            Self::V09ElastiCubes => "v09::ElastiCubes",
            Self::V09Branding => "v09::Branding",
            Self::V09Reporting => "v09::Reporting",
            Self::V09Palettes => "v09::Palettes",
            Self::V09Users => "v09::Users",
            Self::V09Groups => "v09::Groups",
            Self::V09Settings => "v09::Settings",
            Self::V09Roles => "v09::Roles",
            Self::V09DataSources => "v09::DataSources",
            Self::V09Geo => "v09::Geo",
        }
    }

    #[must_use]
    pub fn build(self, gateway: Gateway) -> Handler {
        match self {
            Self::Authentication => construct::<v1::Authentication>(gateway),
            Self::Users => construct::<v1::Users>(gateway),
            Self::Groups => construct::<v1::Groups>(gateway),
            Self::Application => construct::<v1::Application>(gateway),
            Self::Account => construct::<v1::Account>(gateway),
            Self::Admin => construct::<v1::Admin>(gateway),
            Self::V09Authorization => construct::<v09::Authorization>(gateway),
            Self::V09ElastiCubes => construct::<v09::ElastiCubes>(gateway),
            Self::V09Branding => construct::<v09::Branding>(gateway),
            Self::V09Reporting => construct::<v09::Reporting>(gateway),
            Self::V09Palettes => construct::<v09::Palettes>(gateway),
            Self::V09Users => construct::<v09::Users>(gateway),
            Self::V09Groups => construct::<v09::Groups>(gateway),
            Self::V09Settings => construct::<v09::Settings>(gateway),
            Self::V09Roles => construct::<v09::Roles>(gateway),
            Self::V09DataSources => construct::<v09::DataSources>(gateway),
            Self::V09Geo => construct::<v09::Geo>(gateway),
        }
    }
}

fn construct<T: ApiHandler>(gateway: Gateway) -> Handler {
    Arc::new(T::from_gateway(gateway)).into_handler()
}

#[must_use]
pub fn versions() -> Vec<&'static str> {
    VERSION_TABLE.iter().map(|(version, _)| *version).collect()
}

#[must_use]
pub fn is_supported_version(version: &str) -> bool {
    operations(version).is_some()
}

#[must_use]
pub fn operations(version: &str) -> Option<OperationTable> {
    VERSION_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == version)
        .map(|(_, table)| *table)
}

#[must_use]
pub fn lookup(version: &str, name: &str) -> Option<HandlerKind> {
    find_operation(operations(version)?, name)
}

#[must_use]
pub fn find_operation(table: OperationTable, name: &str) -> Option<HandlerKind> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, kind)| *kind)
}

#[must_use]
pub fn operation_names(table: OperationTable) -> Vec<String> {
    table.iter().map(|(name, _)| (*name).to_owned()).collect()
}
