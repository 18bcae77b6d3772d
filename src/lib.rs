#[cfg(feature = "napi")]
#[macro_use]
extern crate napi_derive;

pub mod converter;
pub mod error;
pub mod files;
pub mod types;
pub mod writer;

pub use converter::{convert, convert_with_options, ConvertOptions, ScalarStyle, UuidInjection};
pub use error::{Error, Result};
pub use files::{convert_all, convert_file, BatchReport, FileOptions};
pub use types::{PlistDocument, PlistNode};

// ── WASM bindings ──────────────────────────────────────────────────

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use wasm_bindgen::prelude::*;

    /// Convert a JSON string into a TextMate plist XML string.
    #[wasm_bindgen]
    pub fn convert(json: &str, inject_uuid: bool) -> Result<String, JsError> {
        crate::converter::convert(json, inject_uuid).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Convert with JSON-style (`true`/`null`) or legacy (`True`/`None`) scalars.
    #[wasm_bindgen(js_name = "convertWithStyle")]
    pub fn convert_with_style(json: &str, inject_uuid: bool, legacy_scalars: bool) -> Result<String, JsError> {
        let options = crate::converter::ConvertOptions {
            uuid: inject_uuid.into(),
            scalar_style: scalar_style(legacy_scalars),
            ..Default::default()
        };
        crate::converter::convert_with_options(json, &options).map_err(|e| JsError::new(&e.to_string()))
    }

    fn scalar_style(legacy: bool) -> crate::converter::ScalarStyle {
        if legacy {
            crate::converter::ScalarStyle::Legacy
        } else {
            crate::converter::ScalarStyle::Canonical
        }
    }
}

// ── Node bindings ──────────────────────────────────────────────────

#[cfg(feature = "napi")]
mod napi_bindings {
    use napi::bindgen_prelude::*;

    /// Convert a JSON string into a TextMate plist XML string.
    #[napi]
    pub fn convert(json: String, inject_uuid: Option<bool>) -> Result<String> {
        crate::converter::convert(&json, inject_uuid.unwrap_or(false)).map_err(|e| Error::from_reason(e.to_string()))
    }

    /// Convert a JSON file on disk and return the path of the written plist.
    #[napi(js_name = "convertFile")]
    pub fn convert_file(
        path: String,
        inject_uuid: Option<bool>,
        extension: Option<String>,
        override_existing: Option<bool>,
    ) -> Result<String> {
        let mut options = crate::files::FileOptions::default();
        options.convert.uuid = inject_uuid.unwrap_or(false).into();
        if let Some(extension) = extension {
            options.extension = extension;
        }
        options.override_existing = override_existing.unwrap_or(false);

        let output = crate::files::convert_file(&path, &options).map_err(|e| Error::from_reason(e.to_string()))?;
        Ok(output.to_string_lossy().into_owned())
    }
}
