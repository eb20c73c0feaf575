//! Boundary types: the parsed search response coming in, the gallery
//! summary going out.

use serde::{Deserialize, Serialize};

use pup_core::{Error, Image, Photo, Result};

// ---------------------------------------------------------------------------
// SearchResponse
// ---------------------------------------------------------------------------

/// A parsed photo search result, as supplied by the API client
/// collaborator.
///
/// Pagination fields arrive as integer-convertible strings, exactly as
/// they appear on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub page: String,
    pub pages: String,
    #[serde(rename = "perpage")]
    pub per_page: String,
    pub total: String,
    pub photos: Vec<Photo>,
}

// ---------------------------------------------------------------------------
// GallerySummary
// ---------------------------------------------------------------------------

/// The outbound summary: pagination as integers plus the full current
/// image list. Wire format is the caller's concern; this is shape only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GallerySummary {
    pub page: i32,
    pub pages: i32,
    #[serde(rename = "perpage")]
    pub per_page: i32,
    pub total: i32,
    pub images: Vec<Image>,
}

impl GallerySummary {
    /// Translate a search response into a summary, attaching `images`.
    ///
    /// All four pagination fields must convert; any failure rejects the
    /// whole translation rather than partially populating it.
    pub fn build(search: &SearchResponse, images: Vec<Image>) -> Result<Self> {
        Ok(Self {
            page: parse_count("page", &search.page)?,
            pages: parse_count("pages", &search.pages)?,
            per_page: parse_count("perpage", &search.per_page)?,
            total: parse_count("total", &search.total)?,
            images,
        })
    }
}

fn parse_count(field: &str, value: &str) -> Result<i32> {
    value
        .parse::<i32>()
        .map_err(|_| Error::Validation(format!("{field} is not numeric: {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(page: &str, pages: &str, per_page: &str, total: &str) -> SearchResponse {
        SearchResponse {
            page: page.into(),
            pages: pages.into(),
            per_page: per_page.into(),
            total: total.into(),
            photos: Vec::new(),
        }
    }

    #[test]
    fn build_converts_all_fields() {
        let summary = GallerySummary::build(&search("1", "25", "20", "500"), Vec::new()).unwrap();
        assert_eq!(summary.page, 1);
        assert_eq!(summary.pages, 25);
        assert_eq!(summary.per_page, 20);
        assert_eq!(summary.total, 500);
        assert!(summary.images.is_empty());
    }

    #[test]
    fn non_numeric_field_rejects_whole_translation() {
        let err = GallerySummary::build(&search("1", "25", "twenty", "500"), Vec::new())
            .unwrap_err();
        match err {
            Error::Validation(msg) => assert!(msg.contains("perpage"), "got: {msg}"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn every_field_is_checked() {
        for bad in 0..4 {
            let fields = ["1", "2", "3", "4"].map(String::from);
            let mut s = search(&fields[0], &fields[1], &fields[2], &fields[3]);
            match bad {
                0 => s.page = "x".into(),
                1 => s.pages = "x".into(),
                2 => s.per_page = "x".into(),
                _ => s.total = "x".into(),
            }
            assert!(GallerySummary::build(&s, Vec::new()).is_err());
        }
    }

    #[test]
    fn summary_serializes_wire_names() {
        let summary = GallerySummary::build(&search("1", "1", "20", "0"), Vec::new()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["perpage"], 20);
        assert!(json.get("per_page").is_none());
    }

    #[test]
    fn search_response_deserializes_wire_names() {
        let json = r#"{"page":"2","pages":"9","perpage":"10","total":"87","photos":[]}"#;
        let search: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(search.per_page, "10");
        assert!(search.photos.is_empty());
    }
}
