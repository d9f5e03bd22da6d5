mod authorization;
mod branding;
mod data_sources;
mod elasti_cubes;
mod geo;
mod groups;
mod palettes;
mod reporting;
mod roles;
mod settings;
mod users;

pub use authorization::Authorization;
pub use branding::Branding;
pub use data_sources::DataSources;
pub use elasti_cubes::ElastiCubes;
pub use geo::Geo;
pub use groups::Groups;
pub use palettes::Palettes;
pub use reporting::Reporting;
pub use roles::Roles;
pub use settings::Settings;
pub use users::Users;
