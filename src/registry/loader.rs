use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use thiserror::Error;

use super::assets::StarfieldConfigAsset;

#[derive(Debug, Error)]
pub enum RonLoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Loads `starfield.config.ron` into a [`StarfieldConfigAsset`].
#[derive(Default, bevy::reflect::TypePath)]
pub struct StarfieldConfigLoader;

impl AssetLoader for StarfieldConfigLoader {
    type Asset = StarfieldConfigAsset;
    type Settings = ();
    type Error = RonLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let asset = ron::de::from_bytes::<StarfieldConfigAsset>(&bytes)?;
        Ok(asset)
    }

    fn extensions(&self) -> &[&str] {
        &["config.ron"]
    }
}
