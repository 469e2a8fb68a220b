use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use collection_points_sdk::CollectionPointsApi;
use ecoleta_db::Db;
use tracing::info;

use crate::api::rest::context::ApiContext;
use crate::api::rest::routes;
use crate::config::CollectionPointsConfig;
use crate::domain::catalog::ITEM_CATALOG;
use crate::domain::service::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{OrmItemsRepository, OrmPointsRepository};
use crate::infra::uploads::ImageStore;
use crate::local_client::CollectionPointsLocalClient;

/// Domain service wired to the `SeaORM` repositories.
pub type ConcreteService = Service<OrmPointsRepository, OrmItemsRepository>;

/// The collection-points module: migrated storage, the domain service and
/// its REST surface.
pub struct CollectionPointsModule {
    config: CollectionPointsConfig,
    service: Arc<ConcreteService>,
    ctx: Arc<ApiContext>,
}

impl CollectionPointsModule {
    /// Migrate the schema, seed the item catalog and prepare the upload
    /// directory with the item icons.
    ///
    /// # Errors
    /// Fails if migrations fail or the upload directory cannot be created.
    pub async fn init(db: Db, config: CollectionPointsConfig) -> anyhow::Result<Self> {
        info!("Initializing collection-points module");

        db.run_migrations::<Migrator>()
            .await
            .context("collection-points migrations failed")?;

        let images = ImageStore::open(&config.uploads_dir).with_context(|| {
            format!(
                "cannot create uploads directory {}",
                config.uploads_dir.display()
            )
        })?;

        for entry in &ITEM_CATALOG {
            images
                .install(entry.image, entry.icon_svg.as_bytes())
                .await
                .with_context(|| format!("cannot install item icon {}", entry.image))?;
        }

        let service = Arc::new(Service::new(
            Arc::new(db),
            Arc::new(OrmPointsRepository),
            Arc::new(OrmItemsRepository),
        ));
        let ctx = Arc::new(ApiContext::new(
            Arc::clone(&service),
            Arc::new(images),
            config.public_base_url.clone(),
        ));

        info!(uploads_dir = %config.uploads_dir.display(), "Collection-points module initialized");
        Ok(Self {
            config,
            service,
            ctx,
        })
    }

    /// REST routes of the module.
    pub fn router(&self) -> Router {
        routes::router(Arc::clone(&self.ctx), self.config.max_body_bytes())
    }

    /// In-process client for other parts of the server.
    #[must_use]
    pub fn client(&self) -> Arc<dyn CollectionPointsApi> {
        Arc::new(CollectionPointsLocalClient::new(Arc::clone(&self.service)))
    }
}
