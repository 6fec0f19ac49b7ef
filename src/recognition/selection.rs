use super::engine::RecognizerDescriptor;

const PREFERRED_CULTURE_PREFIX: &str = "en";

/// Whether a descriptor is an English recognizer
pub fn is_english(descriptor: &RecognizerDescriptor) -> bool {
    descriptor.culture_id.starts_with(PREFERRED_CULTURE_PREFIX)
}

/// Pick the recognizer to use for the whole run.
///
/// Prefers the first English culture, falls back to the first descriptor in
/// enumeration order, and returns `None` when nothing is installed.
pub fn select_recognizer(available: &[RecognizerDescriptor]) -> Option<&RecognizerDescriptor> {
    available
        .iter()
        .find(|d| is_english(d))
        .or_else(|| available.first())
}
