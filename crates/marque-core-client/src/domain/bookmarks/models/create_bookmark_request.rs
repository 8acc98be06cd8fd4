// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use url::Url;

/// Validated input for a bookmark creation. Construction is the validation
/// boundary; everything below it assumes a non-empty trimmed title and an
/// absolute URL.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookmarkRequest {
    title: String,
    url: Url,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Enter a valid URL")]
    InvalidUrl,
}

impl CreateBookmarkRequest {
    pub fn new(title: impl AsRef<str>, url: impl AsRef<str>) -> Result<Self, ValidationError> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let url = Url::parse(url.as_ref().trim()).map_err(|_| ValidationError::InvalidUrl)?;

        Ok(CreateBookmarkRequest {
            title: title.to_string(),
            url,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}
