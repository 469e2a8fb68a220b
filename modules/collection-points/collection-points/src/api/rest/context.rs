use std::sync::Arc;

use crate::infra::uploads::ImageStore;
use crate::module::ConcreteService;

/// Everything the REST handlers need, built once at start-up and shared
/// through an `Extension`.
pub struct ApiContext {
    pub service: Arc<ConcreteService>,
    pub images: Arc<ImageStore>,
    public_base_url: String,
}

impl ApiContext {
    pub fn new(
        service: Arc<ConcreteService>,
        images: Arc<ImageStore>,
        public_base_url: impl Into<String>,
    ) -> Self {
        let mut public_base_url = public_base_url.into();
        while public_base_url.ends_with('/') {
            public_base_url.pop();
        }
        Self {
            service,
            images,
            public_base_url,
        }
    }

    /// Public URL of a stored image.
    #[must_use]
    pub fn image_url(&self, file_name: &str) -> String {
        format!("{}/uploads/{file_name}", self.public_base_url)
    }
}
