use serde::{Deserialize, Serialize};

/// Raw response of `GET band/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BandListResponse {
    pub bands: Vec<String>,
}

/// Every band the service knows about, in service order
///
/// Loaded once when the page becomes ready and never refreshed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BandCatalog {
    bands: Vec<String>,
}

impl BandCatalog {
    pub fn new(bands: Vec<String>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[String] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn contains(&self, band: &str) -> bool {
        self.bands.iter().any(|b| b == band)
    }
}

impl From<BandListResponse> for BandCatalog {
    fn from(response: BandListResponse) -> Self {
        Self::new(response.bands)
    }
}

/// Response of `GET band/{name}`: bands ordered by descending similarity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarBands {
    /// The band that was looked up, echoed by the service
    #[serde(default)]
    pub name: Option<String>,
    pub similar: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_from_response_keeps_order() {
        let response: BandListResponse =
            serde_json::from_str(r#"{"bands": ["A", "B", "C"]}"#).unwrap();
        let catalog = BandCatalog::from(response);
        assert_eq!(catalog.bands(), &["A", "B", "C"]);
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("B"));
        assert!(!catalog.contains("D"));
    }

    #[test]
    fn test_similar_bands_without_name() {
        let similar: SimilarBands = serde_json::from_str(r#"{"similar": ["X", "Y"]}"#).unwrap();
        assert_eq!(similar.name, None);
        assert_eq!(similar.similar, vec!["X", "Y"]);
    }
}
