//! Collection Points Module
//!
//! Item catalog, point registration and point lookup for the Ecoleta server.
//! The public contract lives in `collection-points-sdk` and is re-exported here.

pub use collection_points_sdk::{
    CollectionPointsApi, CollectionPointsError, Item, ItemSelection, NewPoint, Point, PointDetails,
    PointFilter,
};

pub mod config;
pub use config::CollectionPointsConfig;

pub mod module;
pub use module::{CollectionPointsModule, ConcreteService};

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
