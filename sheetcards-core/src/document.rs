//! The subset of the Google Docs document resource the parser reads.
//!
//! Every level defaults when absent, so an unexpected shape degrades to
//! "no text" instead of failing the import.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    pub document_id: String,
    pub title: String,
    pub body: Body,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Body {
    pub content: Vec<StructuralElement>,
}

/// Tables, section breaks and the like carry no `paragraph` and are skipped.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StructuralElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<Paragraph>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Paragraph {
    pub elements: Vec<ParagraphElement>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParagraphElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TextRun {
    pub content: String,
    pub text_style: TextStyle,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dimension>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Dimension {
    pub magnitude: Option<f64>,
    pub unit: Option<String>,
}

impl Document {
    pub fn from_paragraphs(paragraphs: impl IntoIterator<Item = Paragraph>) -> Self {
        Self {
            body: Body {
                content: paragraphs
                    .into_iter()
                    .map(|p| StructuralElement { paragraph: Some(p) })
                    .collect(),
            },
            ..Self::default()
        }
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.content.iter().filter_map(|e| e.paragraph.as_ref())
    }
}

impl Paragraph {
    pub fn from_runs(runs: impl IntoIterator<Item = TextRun>) -> Self {
        Self {
            elements: runs
                .into_iter()
                .map(|r| ParagraphElement { text_run: Some(r) })
                .collect(),
        }
    }

    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|e| e.text_run.as_ref())
    }
}

impl TextRun {
    pub fn new(content: impl Into<String>, font_size: Option<f64>) -> Self {
        Self {
            content: content.into(),
            text_style: TextStyle {
                font_size: font_size.map(|magnitude| Dimension {
                    magnitude: Some(magnitude),
                    unit: Some("PT".to_string()),
                }),
            },
        }
    }

    pub fn font_size(&self) -> Option<f64> {
        self.text_style.font_size.as_ref().and_then(|d| d.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_on_missing_levels() {
        let json = r#"{
            "documentId": "abc",
            "body": { "content": [
                { "sectionBreak": {} },
                { "paragraph": { "elements": [
                    { "textRun": { "content": "Q. One?\n", "textStyle": { "fontSize": { "magnitude": 15, "unit": "PT" } } } },
                    { "inlineObjectElement": {} },
                    { "textRun": { "content": "tail" } }
                ] } },
                { "paragraph": {} }
            ] }
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.document_id, "abc");
        let paras: Vec<_> = doc.paragraphs().collect();
        assert_eq!(paras.len(), 2);
        let runs: Vec<_> = paras[0].runs().collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].font_size(), Some(15.0));
        assert_eq!(runs[1].font_size(), None);
        assert_eq!(paras[1].runs().count(), 0);
    }

    #[test]
    fn empty_object_is_an_empty_document() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.paragraphs().count(), 0);
    }
}
