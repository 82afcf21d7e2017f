use crate::config::BingConfig;
use crate::utils::image_file_name;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

/// Oldest picture the archive endpoint will hand out.
pub const MAX_DAYS_BACK: u8 = 7;

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    images: Option<Vec<ImageMetadata>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageMetadata {
    #[serde(rename = "url")]
    pub relative_url: String,
    #[serde(rename = "startdate")]
    pub start_date: String,
    pub title: String,
}

impl ImageMetadata {
    /// `start_date` as a calendar date, when it is a valid `YYYYMMDD`.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.start_date, "%Y%m%d").ok()
    }

    pub fn resolve(&self, config: &BingConfig) -> ResolvedImage {
        let local_filename = image_file_name(&self.start_date, &self.title);
        ResolvedImage {
            absolute_url: config.image_url(&self.relative_url),
            local_path: config.download_dir.join(&local_filename),
            local_filename,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub absolute_url: String,
    pub local_filename: String,
    pub local_path: PathBuf,
}

/// Lenient days-back parsing: anything that is not an integer means today.
pub fn parse_days_back(arg: Option<&str>) -> u8 {
    arg.and_then(|a| a.trim().parse::<i32>().ok())
        .map(clamp_days_back)
        .unwrap_or(0)
}

pub fn clamp_days_back(days: i32) -> u8 {
    days.clamp(0, MAX_DAYS_BACK as i32) as u8
}

/// Returns the first entry of the archive's `images` array.
pub fn parse_metadata(body: &str) -> Result<ImageMetadata> {
    let response: ArchiveResponse = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("invalid archive JSON: {}", e)))?;

    response
        .images
        .and_then(|images| images.into_iter().next())
        .ok_or_else(|| {
            Error::MalformedResponse("No image data found in Bing API response.".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_matches_min_max() {
        for n in [-100, -1, 0, 1, 3, 7, 8, 99, i32::MIN, i32::MAX] {
            assert_eq!(clamp_days_back(n) as i32, n.min(7).max(0), "n = {}", n);
        }
    }

    #[test]
    fn parses_and_clamps_arguments() {
        assert_eq!(parse_days_back(Some("3")), 3);
        assert_eq!(parse_days_back(Some("99")), 7);
        assert_eq!(parse_days_back(Some("-4")), 0);
        assert_eq!(parse_days_back(Some(" 5 ")), 5);
        assert_eq!(parse_days_back(Some("+2")), 2);
    }

    #[test]
    fn unparsable_arguments_fall_back_to_today() {
        assert_eq!(parse_days_back(None), 0);
        assert_eq!(parse_days_back(Some("abc")), 0);
        assert_eq!(parse_days_back(Some("")), 0);
        assert_eq!(parse_days_back(Some("2.5")), 0);
        assert_eq!(parse_days_back(Some("99999999999")), 0);
    }

    #[test]
    fn takes_first_image_and_ignores_extra_fields() {
        let body = r#"{
            "images": [
                {"url": "/th?id=X", "startdate": "20240101", "title": "A B?C", "hsh": "abc"},
                {"url": "/th?id=Y", "startdate": "20231231", "title": "Other"}
            ],
            "tooltips": {"loading": "Loading..."}
        }"#;
        let meta = parse_metadata(body).unwrap();
        assert_eq!(meta.relative_url, "/th?id=X");
        assert_eq!(meta.start_date, "20240101");
        assert_eq!(meta.title, "A B?C");
        assert_eq!(meta.date(), NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let meta = parse_metadata(r#"{"images": [{"url": "/th?id=Z"}]}"#).unwrap();
        assert_eq!(meta.relative_url, "/th?id=Z");
        assert_eq!(meta.start_date, "");
        assert_eq!(meta.title, "");
        assert_eq!(meta.date(), None);
    }

    #[test]
    fn empty_or_missing_images_is_malformed() {
        for body in [r#"{"images": []}"#, r#"{}"#, r#"{"images": null}"#] {
            let err = parse_metadata(body).unwrap_err();
            assert!(matches!(err, Error::MalformedResponse(_)), "body = {}", body);
        }
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = parse_metadata("<html>oops</html>").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn resolves_url_filename_and_path() {
        let config = BingConfig {
            download_dir: PathBuf::from("/tmp/walls"),
            ..BingConfig::default()
        };
        let meta = ImageMetadata {
            relative_url: "/th?id=X".to_string(),
            start_date: "20240101".to_string(),
            title: "A B?C".to_string(),
        };
        let resolved = meta.resolve(&config);
        assert_eq!(resolved.absolute_url, "https://www.bing.com/th?id=X");
        assert_eq!(resolved.local_filename, "20240101-A-BC.jpg");
        assert_eq!(
            resolved.local_path,
            PathBuf::from("/tmp/walls/20240101-A-BC.jpg")
        );
    }
}
