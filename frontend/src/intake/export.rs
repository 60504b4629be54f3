use chrono::NaiveDate;
use wasm_bindgen::{JsCast, JsValue};

use crate::intake::model::IntakeRecord;
use crate::intake::store::StoreError;

pub const EXPORT_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: String,
    pub contents: String,
}

impl ExportDocument {
    pub fn from_records(records: &[IntakeRecord], today: NaiveDate) -> Result<Self, StoreError> {
        let contents = serde_json::to_string_pretty(records).map_err(StoreError::Encode)?;
        Ok(Self {
            file_name: format!("intake-submissions-{}.json", today.format("%Y-%m-%d")),
            contents,
        })
    }
}

/// Offers `doc` to the user as a file download through a temporary link.
pub fn download(doc: &ExportDocument) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = web_sys::js_sys::Array::of1(&JsValue::from_str(&doc.contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(EXPORT_MIME_TYPE);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let link: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(&doc.file_name);
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    web_sys::Url::revoke_object_url(&url)?;

    log::info!("Exported submissions as {}", doc.file_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::test_support::complete_draft;
    use chrono::{TimeZone, Utc};

    #[test]
    fn file_name_uses_the_date() {
        let doc = ExportDocument::from_records(&[], NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()).unwrap();
        assert_eq!(doc.file_name, "intake-submissions-2025-01-09.json");
        assert_eq!(doc.contents, "[]");
    }

    #[test]
    fn contents_are_pretty_printed() {
        let at = Utc.with_ymd_and_hms(2025, 1, 9, 8, 30, 0).unwrap();
        let record = IntakeRecord::from_draft(&complete_draft(), at).unwrap();
        let doc = ExportDocument::from_records(&[record], NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()).unwrap();

        assert!(doc.contents.starts_with("[\n  {\n    \"name\": \"Jane Doe\","));
        assert!(doc.contents.contains("\"submittedAt\": \"2025-01-09T08:30:00.000Z\""));
    }
}
