use crate::ranking::Distribution;

/// Opaque on-device classifier. Takes an encoded image and produces one
/// probability per label in its vocabulary. A malformed input is an error,
/// never a partial distribution.
pub trait ImageClassifier: Send + Sync {
    fn classify(
        &self,
        image: &[u8],
    ) -> Result<Distribution, Box<dyn std::error::Error + Send + Sync>>;
}
