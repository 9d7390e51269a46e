use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::manager::LibraryManager;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;

pub fn create_catalog_service(config: &Configuration) -> Arc<dyn CatalogService> {
    let publisher = create_publisher(config.events_via);
    Arc::new(CatalogServiceImpl::new(config, LibraryManager::new(), publisher))
}
