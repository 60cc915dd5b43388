use crate::{a1, check_status, http_client, join_segments, parse_base, AccessToken, SHEETS_API_URL};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sheetcards_core::{CoreError, SheetTable};

/// One worksheet of a spreadsheet, via the Sheets v4 `values` endpoints.
pub struct SheetsTable {
    client: Client,
    base_url: Url,
    token: AccessToken,
    spreadsheet_id: String,
    worksheet: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ValueRange {
    range: String,
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRangeBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<&'a str>,
    major_dimension: &'static str,
    values: &'a [Vec<String>],
}

fn cell_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn read_err(e: reqwest::Error) -> CoreError {
    CoreError::RemoteRead(e.to_string())
}

fn write_err(e: reqwest::Error) -> CoreError {
    CoreError::RemoteWrite(e.to_string())
}

impl SheetsTable {
    pub fn new(
        token: AccessToken,
        spreadsheet_id: impl Into<String>,
        worksheet: impl Into<String>,
    ) -> Result<Self, CoreError> {
        Self::with_base_url(SHEETS_API_URL, token, spreadsheet_id, worksheet)
    }

    pub fn with_base_url(
        base_url: &str,
        token: AccessToken,
        spreadsheet_id: impl Into<String>,
        worksheet: impl Into<String>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            client: http_client()?,
            base_url: parse_base(base_url)?,
            token,
            spreadsheet_id: spreadsheet_id.into(),
            worksheet: worksheet.into(),
        })
    }

    fn values_url(&self, range: &str) -> Url {
        join_segments(
            &self.base_url,
            ["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values", range],
        )
    }
}

#[async_trait]
impl SheetTable for SheetsTable {
    async fn read_rows(&self) -> Result<Vec<Vec<String>>, CoreError> {
        let url = self.values_url(&a1::quote_sheet(&self.worksheet));
        tracing::debug!(%url, "reading sheet");
        let resp = self
            .client
            .get(url)
            .bearer_auth(self.token.as_str())
            .send()
            .await
            .map_err(read_err)?;
        let body: ValueRange = check_status(resp, CoreError::RemoteRead)
            .await?
            .json()
            .await
            .map_err(read_err)?;
        tracing::debug!(range = %body.range, rows = body.values.len(), "sheet read");
        Ok(body
            .values
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect())
    }

    async fn update_cell(&self, row: usize, col: usize, value: &str) -> Result<(), CoreError> {
        let range = a1::cell_range(&self.worksheet, row, col);
        let values = [vec![value.to_string()]];
        let body = ValueRangeBody {
            range: Some(&range),
            major_dimension: "ROWS",
            values: &values,
        };
        let resp = self
            .client
            .put(self.values_url(&range))
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(self.token.as_str())
            .json(&body)
            .send()
            .await
            .map_err(write_err)?;
        check_status(resp, CoreError::RemoteWrite).await?;
        tracing::debug!(%range, value, "cell updated");
        Ok(())
    }

    async fn append_rows(&self, rows: Vec<Vec<String>>) -> Result<(), CoreError> {
        let target = format!("{}:append", a1::quote_sheet(&self.worksheet));
        let body = ValueRangeBody {
            range: None,
            major_dimension: "ROWS",
            values: &rows,
        };
        let resp = self
            .client
            .post(self.values_url(&target))
            .query(&[("valueInputOption", "RAW"), ("insertDataOption", "INSERT_ROWS")])
            .bearer_auth(self.token.as_str())
            .json(&body)
            .send()
            .await
            .map_err(write_err)?;
        check_status(resp, CoreError::RemoteWrite).await?;
        tracing::debug!(rows = rows.len(), "rows appended");
        Ok(())
    }
}
