use serde::{Deserialize, Serialize};
use url::Url;

/// A share post may carry at most this many embed URLs
pub const MAX_EMBEDS: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    #[error("A post accepts at most {MAX_EMBEDS} embeds, got {0}")]
    TooManyEmbeds(usize),
}

/// Social post handed to the host's native compose action
///
/// Carries the promotional text plus zero, one, or two attachment URLs
/// (typically an image and/or a canonical link).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePost {
    pub text: String,
    pub embeds: Vec<Url>,
}

impl SharePost {
    pub fn new(text: String) -> Self {
        Self { text, embeds: Vec::new() }
    }

    pub fn with_embeds(text: String, embeds: Vec<Url>) -> Result<Self, EntityError> {
        if embeds.len() > MAX_EMBEDS {
            return Err(EntityError::TooManyEmbeds(embeds.len()));
        }
        Ok(Self { text, embeds })
    }
}
