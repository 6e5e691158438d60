// SPDX-License-Identifier: MPL-2.0
//! Contentful `entries` response and link resolution.
//!
//! Entries reference their image through an asset link (`sys.id`); the
//! asset itself lives in `includes.Asset`. Links that cannot be resolved
//! produce entries without an image, which the gallery query then skips.

use crate::application::port::{RawEntry, RawFile, RawImage};
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level body of `GET /spaces/{space}/environments/{env}/entries`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EntriesResponse {
    #[serde(default)]
    pub items: Vec<EntryDto>,
    #[serde(default)]
    pub includes: Includes,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Includes {
    #[serde(default, rename = "Asset")]
    pub assets: Vec<AssetDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SysDto {
    pub id: String,
    #[serde(default, rename = "linkType")]
    pub link_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryDto {
    pub sys: SysDto,
    #[serde(default)]
    pub fields: EntryFields,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct EntryFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub images: Option<AssetRef>,
}

/// The `images` field: normally a link, anything else is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AssetRef {
    Link { sys: SysDto },
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetDto {
    pub sys: SysDto,
    #[serde(default)]
    pub fields: AssetFields,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AssetFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub file: Option<FileDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileDto {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub details: Option<FileDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileDetails {
    #[serde(default)]
    pub image: Option<ImageDetails>,
}

/// Pixel size of an image asset. A missing or non-integer side becomes
/// `None`, so the entry is skipped instead of failing the whole body.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct ImageDetails {
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub height: Option<u32>,
}

fn lenient_dimension<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| u32::try_from(n).ok()))
}

impl From<&AssetDto> for RawImage {
    fn from(asset: &AssetDto) -> Self {
        let file = asset.fields.file.as_ref().map(|file| {
            let image = file.details.as_ref().and_then(|d| d.image);
            RawFile {
                url: file.url.clone(),
                width: image.and_then(|i| i.width),
                height: image.and_then(|i| i.height),
            }
        });

        RawImage {
            title: asset.fields.title.clone(),
            file,
        }
    }
}

/// Resolves asset links and flattens the response into raw entries,
/// keeping the order of `items`.
#[must_use]
pub fn resolve_entries(response: EntriesResponse) -> Vec<RawEntry> {
    let assets: HashMap<&str, &AssetDto> = response
        .includes
        .assets
        .iter()
        .map(|asset| (asset.sys.id.as_str(), asset))
        .collect();

    response
        .items
        .iter()
        .map(|item| {
            let images = match &item.fields.images {
                Some(AssetRef::Link { sys }) => {
                    let is_asset = sys.link_type.as_deref().is_none_or(|t| t == "Asset");
                    let resolved = assets.get(sys.id.as_str()).filter(|_| is_asset);
                    if resolved.is_none() {
                        tracing::debug!(entry = %item.sys.id, asset = %sys.id, "unresolved asset link");
                    }
                    resolved.map(|asset| RawImage::from(*asset))
                }
                Some(AssetRef::Other(_)) | None => None,
            };

            RawEntry {
                title: item.fields.title.clone(),
                images,
            }
        })
        .collect()
}
