pub mod app_config;
pub mod business;
pub mod category;
pub mod config;
pub mod error;
pub mod geo;
pub mod query;
pub mod radius;

pub use app_config::{AppConfig, Environment};
pub use business::{Business, SearchResults, NOT_AVAILABLE};
pub use category::Category;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use geo::{distance_between, distance_km, Coordinate, UNREACHABLE_KM};
pub use query::{SearchQuery, DEFAULT_RADIUS_KM};
pub use radius::{plan_radii, RadiusPlan, NEAR_FIELD_RADIUS_M};
