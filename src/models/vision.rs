//! Azure AI Vision image analysis data models
//!
//! Response structures of the Image Analysis 4.0 `analyze` operation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual features that can be requested from the analysis service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualFeature {
    Caption,
    Tags,
    Objects,
}

impl VisualFeature {
    /// Query parameter spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualFeature::Caption => "caption",
            VisualFeature::Tags => "tags",
            VisualFeature::Objects => "objects",
        }
    }
}

impl fmt::Display for VisualFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Features requested by the vision page
pub const DEFAULT_FEATURES: [VisualFeature; 3] =
    [VisualFeature::Caption, VisualFeature::Tags, VisualFeature::Objects];

/// Analyze request body for a remote image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeUrlRequest {
    pub url: String,
}

/// Image analysis result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    #[serde(default)]
    pub model_version: Option<String>,
    #[serde(default)]
    pub caption_result: Option<CaptionResult>,
    #[serde(default)]
    pub tags_result: Option<TagsResult>,
    #[serde(default)]
    pub objects_result: Option<ObjectsResult>,
    #[serde(default)]
    pub metadata: Option<ImageMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptionResult {
    pub text: String,
    pub confidence: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TagsResult {
    #[serde(default)]
    pub values: Vec<DetectedTag>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectedTag {
    pub name: String,
    pub confidence: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ObjectsResult {
    #[serde(default)]
    pub values: Vec<DetectedObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetectedObject {
    pub bounding_box: BoundingBox,
    #[serde(default)]
    pub tags: Vec<DetectedTag>,
}

impl DetectedObject {
    /// Most confident label of the object, if any
    pub fn label(&self) -> Option<&DetectedTag> {
        self.tags
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

/// Pixel rectangle of a detected object
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
}

impl ImageAnalysis {
    pub fn caption(&self) -> Option<&CaptionResult> {
        self.caption_result.as_ref()
    }

    pub fn tags(&self) -> &[DetectedTag] {
        self.tags_result.as_ref().map(|t| t.values.as_slice()).unwrap_or(&[])
    }

    pub fn objects(&self) -> &[DetectedObject] {
        self.objects_result.as_ref().map(|o| o.values.as_slice()).unwrap_or(&[])
    }
}
