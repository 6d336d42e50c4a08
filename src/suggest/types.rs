use serde::Deserialize;

/// Wire form of the OpenSearch suggestions body: the echoed query followed by
/// the suggestion strings. Serde serializes the tuple as a two-element JSON
/// array.
pub type SuggestBody = (String, Vec<String>);

#[derive(Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
}
