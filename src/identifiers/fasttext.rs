//! Fasttext language detector
use std::path::Path;

use fasttext::{FastText as FastTextLib, Prediction};
use log::debug;

use super::LangDetector;
use crate::error::Error;

/// Clean the prediction label field from `__label__xx` into `xx`.
fn clean_label(prediction: &Prediction) -> String {
    prediction
        .label
        .strip_prefix("__label__")
        .unwrap_or(&prediction.label)
        .to_string()
}

/// Holds a [fasttext::FastText] instance and its prediction threshold.
pub struct FastText {
    predictor: FastTextLib,
    pub threshold: f32,
}

impl FastText {
    /// Create a new fasttext language identifier, using `lid.176.bin` at `.`
    /// and no prediction threshold.
    pub fn new_lid() -> Result<Self, Error> {
        Self::new(Path::new("lid.176.bin"), 0.0)
    }

    /// Create a new fasttext classifier.
    ///
    /// filename has to be a path to a `bin` file.
    ///
    /// # Errors
    /// Propagates [fasttext::FastText] loading errors.
    pub fn new(filename: &Path, threshold: f32) -> Result<Self, Error> {
        let mut predictor = FastTextLib::new();
        let filename_str = filename.to_str().ok_or_else(|| {
            Error::Custom(format!("invalid filepath for lid: {:?}", filename))
        })?;
        predictor
            .load_model(filename_str)
            .map_err(Error::FastText)?;
        debug!("loaded language identification model {:?}", filename);
        Ok(Self {
            predictor,
            threshold,
        })
    }
}

impl LangDetector for FastText {
    fn detect(&self, text: &str) -> Option<String> {
        // fasttext predicts on a single line
        let text = text.replace(['\n', char::from(0)], " ");
        match self.predictor.predict(&text, 1, self.threshold) {
            Ok(predictions) => predictions.first().map(clean_label),
            Err(e) => {
                debug!("language detection failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_label() {
        let p = Prediction {
            prob: 0.9,
            label: "__label__fi".to_string(),
        };
        assert_eq!(clean_label(&p), "fi");

        let p = Prediction {
            prob: 0.9,
            label: "fi".to_string(),
        };
        assert_eq!(clean_label(&p), "fi");
    }

    #[test]
    #[ignore]
    fn test_detect_fi() {
        let classifier = FastText::new_lid().expect("could not instantiate a classifier");
        let sentence = "Kissa istuu puussa ja katselee lintuja, jotka laulavat kauniisti.";
        assert_eq!(classifier.detect(sentence), Some("fi".to_string()));
    }
}
