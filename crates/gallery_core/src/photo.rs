use serde::Deserialize;

/// One element of the remote photo listing.
///
/// Field names match the wire schema; keys the server adds beyond these are
/// ignored during deserialization, while a missing `id` or `img_src` rejects
/// the element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    pub img_src: String,
}
