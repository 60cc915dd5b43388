use crate::{check_status, http_client, join_segments, parse_base, AccessToken, DOCS_API_URL};
use async_trait::async_trait;
use reqwest::{Client, Url};
use sheetcards_core::{CoreError, Document, DocumentSource};
use std::path::PathBuf;

/// Fetches documents from the Docs v1 API.
pub struct DocsClient {
    client: Client,
    base_url: Url,
    token: AccessToken,
}

impl DocsClient {
    pub fn new(token: AccessToken) -> Result<Self, CoreError> {
        Self::with_base_url(DOCS_API_URL, token)
    }

    pub fn with_base_url(base_url: &str, token: AccessToken) -> Result<Self, CoreError> {
        Ok(Self {
            client: http_client()?,
            base_url: parse_base(base_url)?,
            token,
        })
    }

    fn document_url(&self, id: &str) -> Url {
        join_segments(&self.base_url, ["v1", "documents", id])
    }
}

#[async_trait]
impl DocumentSource for DocsClient {
    async fn fetch_document(&self, id: &str) -> Result<Document, CoreError> {
        let url = self.document_url(id);
        tracing::debug!(%url, "fetching document");
        let resp = self
            .client
            .get(url)
            .bearer_auth(self.token.as_str())
            .send()
            .await
            .map_err(|e| CoreError::RemoteRead(e.to_string()))?;
        let doc: Document = check_status(resp, CoreError::RemoteRead)
            .await?
            .json()
            .await
            .map_err(|e| CoreError::RemoteRead(format!("document {id}: {e}")))?;
        tracing::info!(id, title = %doc.title, "fetched document");
        Ok(doc)
    }
}

/// A document saved as Docs API JSON, e.g. from `documents.get`.
/// The id passed to `fetch_document` is ignored.
pub struct DocumentFile {
    path: PathBuf,
}

impl DocumentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSource for DocumentFile {
    async fn fetch_document(&self, _id: &str) -> Result<Document, CoreError> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::RemoteRead(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&data)
            .map_err(|e| CoreError::RemoteRead(format!("{}: {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetcards_core::{parse_questions, QaPair};

    #[test]
    fn document_url() {
        let c = DocsClient::new(AccessToken::new("t")).unwrap();
        assert_eq!(
            c.document_url("1j17uqOoBx").as_str(),
            "https://docs.googleapis.com/v1/documents/1j17uqOoBx"
        );
    }

    #[tokio::test]
    async fn reads_exported_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(
            &path,
            r#"{"title":"Stats","body":{"content":[
                {"paragraph":{"elements":[{"textRun":{"content":"Q. Median?\n","textStyle":{"fontSize":{"magnitude":15,"unit":"PT"}}}}]}},
                {"paragraph":{"elements":[{"textRun":{"content":"Middle value.\n","textStyle":{"fontSize":{"magnitude":11,"unit":"PT"}}}}]}}
            ]}}"#,
        )
        .unwrap();

        let doc = DocumentFile::new(&path).fetch_document("ignored").await.unwrap();
        assert_eq!(doc.title, "Stats");
        assert_eq!(parse_questions(&doc), vec![QaPair::new("Median?", "Middle value.")]);
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let err = DocumentFile::new("/nonexistent/doc.json")
            .fetch_document("x")
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::RemoteRead(_)));
    }
}
