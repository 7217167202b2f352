use super::AssetDescriptor;
use crate::error::SfxPrepError;
use itertools::Itertools;
use std::path::Path;
use url::Url;

/// A validated asset descriptor with parsed candidate URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub description: String,
    pub urls: Vec<Url>,
    pub search_keywords: Vec<String>,
}

impl AssetDescriptor {
    pub fn resolve(&self) -> Result<Asset, SfxPrepError> {
        let invalid = |details: String| SfxPrepError::AssetValidation {
            asset: self.name.clone(),
            details,
        };

        // The name must stay inside the output directory.
        let file_name = Path::new(&self.name).file_name().and_then(|n| n.to_str());
        let is_bare_file_name =
            !self.name.contains(['/', '\\']) && file_name == Some(self.name.as_str());
        if !is_bare_file_name {
            return Err(invalid("name must be a plain file name".to_string()));
        }

        if self.urls.is_empty() {
            return Err(invalid("no candidate URLs".to_string()));
        }

        let urls = self
            .urls
            .iter()
            .map(|raw| {
                let url = Url::parse(raw).map_err(|e| invalid(format!("invalid URL {raw}: {e}")))?;
                match url.scheme() {
                    "http" | "https" => Ok(url),
                    scheme => Err(invalid(format!("unsupported URL scheme {scheme} in {raw}"))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Asset {
            name: self.name.clone(),
            description: self.description.clone(),
            urls,
            search_keywords: self.search_keywords.clone(),
        })
    }
}

pub fn resolve_assets(descriptors: &[AssetDescriptor]) -> Result<Vec<Asset>, SfxPrepError> {
    if descriptors.is_empty() {
        return Err(SfxPrepError::ConfigValidation {
            details: "No assets configured.".to_string(),
        });
    }

    if let Some(duplicate) = descriptors.iter().map(|d| d.name.as_str()).duplicates().next() {
        return Err(SfxPrepError::AssetValidation {
            asset: duplicate.to_string(),
            details: "name is declared more than once".to_string(),
        });
    }

    descriptors.iter().map(AssetDescriptor::resolve).collect()
}
