use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    assets::decode::decode_payload,
    assets::placeholder::synthesize_placeholder,
    foundation::error::{StudioError, StudioResult},
    foundation::math::Fnv1a64,
    scene::model::{ImageSource, Scene},
};

/// Decoded image in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    pub width: u32,
    pub height: u32,
    /// Premultiplied RGBA8, row-major, tightly packed.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Content hash of an image source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(u64);

impl AssetId {
    pub fn of(source: &ImageSource) -> Self {
        let mut h = Fnv1a64::new_default();
        match source {
            ImageSource::Embedded(payload) => {
                h.write_u8(0);
                h.write_bytes(payload.as_data_url().as_bytes());
            }
            ImageSource::Placeholder { url } => {
                h.write_u8(1);
                h.write_bytes(url.as_bytes());
            }
        }
        Self(h.finish())
    }
}

/// Every image a scene references, decoded up front.
///
/// Rasterization never touches payload bytes or the network; it only looks images up here. A
/// payload that fails to decode fails the whole preparation, so a scene that prepared
/// successfully always renders.
#[derive(Clone, Debug, Default)]
pub struct PreparedAssetStore {
    images: HashMap<AssetId, PreparedImage>,
}

impl PreparedAssetStore {
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = scene.nodes.len()))]
    pub fn prepare(scene: &Scene) -> StudioResult<Self> {
        let mut images = HashMap::new();
        for node in scene.image_nodes() {
            let id = AssetId::of(&node.source);
            if images.contains_key(&id) {
                continue;
            }
            let prepared = match &node.source {
                ImageSource::Embedded(payload) => decode_payload(payload)?,
                ImageSource::Placeholder { url } => synthesize_placeholder(url),
            };
            tracing::trace!(
                slot = node.slot.name(),
                width = prepared.width,
                height = prepared.height,
                "prepared image"
            );
            images.insert(id, prepared);
        }
        Ok(Self { images })
    }

    pub fn get(&self, id: AssetId) -> StudioResult<&PreparedImage> {
        self.images
            .get(&id)
            .ok_or_else(|| StudioError::render(format!("image asset {:016x} was not prepared", id.0)))
    }

    pub fn image_for(&self, source: &ImageSource) -> StudioResult<&PreparedImage> {
        self.get(AssetId::of(source))
    }

    pub fn contains(&self, id: AssetId) -> bool {
        self.images.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
