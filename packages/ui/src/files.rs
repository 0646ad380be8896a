//! Reading a picked file into a data URL.

use std::sync::Arc;

use api::data_url::{self, DataUrlError};
use dioxus::html::FileEngine;

/// A file chosen in an `<input type="file">`, not read yet.
#[derive(Clone)]
pub struct PickedFile {
    engine: Arc<dyn FileEngine>,
    name: String,
}

impl PartialEq for PickedFile {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.engine, &other.engine) && self.name == other.name
    }
}

impl PickedFile {
    /// First file of a change event, if any was picked.
    pub fn first(engine: Arc<dyn FileEngine>) -> Option<Self> {
        let name = engine.files().into_iter().next()?;
        Some(Self { engine, name })
    }

    /// Read the whole file once and encode it. Fails when the read fails.
    pub async fn to_data_url(&self) -> Result<String, DataUrlError> {
        let bytes = self
            .engine
            .read_file(&self.name)
            .await
            .ok_or_else(|| DataUrlError::Read(self.name.clone()))?;
        Ok(data_url::encode(&bytes, data_url::mime_from_name(&self.name)))
    }
}
