/*! Language detection contract.

Detection is best effort: any failure (not enough text, unreliable prediction, model error)
yields [None], which filters treat as "not the target language".
!*/

pub trait LangDetector {
    /// Returns the detected language code (e.g. `fi`), if any.
    fn detect(&self, text: &str) -> Option<String>;
}

impl<T: LangDetector + ?Sized> LangDetector for Box<T> {
    fn detect(&self, text: &str) -> Option<String> {
        (**self).detect(text)
    }
}
