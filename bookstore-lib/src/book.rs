use serde::{Deserialize, Serialize};

/// Details of a single book as returned by the book API.
///
/// `title` and `author` are present in every well-formed payload; the
/// remaining metadata varies by book, so partial payloads still decode. The
/// numeric-looking fields (`pages`, `year`, `rating`) are kept as strings
/// because that is how the API serializes them.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct BookDetail {
    /// Title of the book.
    pub title: String,
    /// Author(s) of the book, as a single display string.
    pub author: String,
    /// Subtitle, when the book has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Publisher of this edition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// The ISBN-13 echoed back by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn13: Option<String>,
    /// Page count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    /// Year of publication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Average rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// Short description of the book.
    #[serde(default, rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// List price, including the currency symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// URL of the cover image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// URL of the book's page on the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_decodes() {
        let detail: BookDetail =
            serde_json::from_str(r#"{"title":"Example","author":"A"}"#).unwrap();

        assert_eq!("Example", detail.title);
        assert_eq!("A", detail.author);
        assert_eq!(None, detail.subtitle);
        assert_eq!(None, detail.description);
    }

    #[test]
    fn desc_field_maps_to_description() {
        let detail: BookDetail = serde_json::from_str(
            r#"{"title":"Example","author":"A","desc":"A short description"}"#,
        )
        .unwrap();

        assert_eq!(Some("A short description".to_owned()), detail.description);
    }

    #[test]
    fn missing_title_is_rejected() {
        let res = serde_json::from_str::<BookDetail>(r#"{"author":"A"}"#);

        assert!(res.is_err());
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let detail: BookDetail =
            serde_json::from_str(r#"{"title":"Example","author":"A"}"#).unwrap();
        let json = serde_json::to_string(&detail).unwrap();

        assert_eq!(r#"{"title":"Example","author":"A"}"#, json);
    }
}
