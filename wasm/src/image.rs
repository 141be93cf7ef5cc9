//! Reading the selected photo into memory

use js_sys::Promise;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

/// Read a file as a `data:` URI
pub async fn read_as_data_uri(file: &File) -> Result<String, JsValue> {
    let reader = FileReader::new()?;

    let promise = Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader.read_as_data_url(file)?;
    JsFuture::from(promise).await?;

    reader.set_onload(None);
    reader.set_onerror(None);

    reader
        .result()?
        .as_string()
        .ok_or_else(|| JsValue::from_str("file reader returned no data"))
}
