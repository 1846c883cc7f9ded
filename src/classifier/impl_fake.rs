use crate::classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::ranking::Distribution;
use rand::distr::{Distribution as RandDistribution, Uniform};
use std::sync::Arc;

const VOCABULARY: &[&str] = &[
    "dog", "cat", "person", "car", "chair", "table", "bird", "tree", "bicycle", "book", "laptop",
    "phone", "cup", "bottle", "keyboard", "mouse", "plant", "clock",
];

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        image: &[u8],
    ) -> Result<Distribution, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Classifying image ({} bytes)...", image.len()))?;

        let mut rng = rand::rng();

        let score_dist = Uniform::new(0.0f32, 1.0)?;

        let distribution: Distribution = VOCABULARY
            .iter()
            .map(|label| (label.to_string(), score_dist.sample(&mut rng)))
            .collect();

        self.logger.info("Image classified")?;

        Ok(distribution)
    }
}
