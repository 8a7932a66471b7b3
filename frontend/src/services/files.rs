//! Selected files, as the browser reports them.
//!
//! Wraps `web_sys::File` so intake and the upload simulation can read the
//! declared name/size/type and mint an object URL for it.

use web_sys::{File, FileList, Url};
use zipslides::{FileHandle, UploadError, UploadResult};

use crate::types::js_error_message;

/// A file from an `<input type="file">` or a drop.
#[derive(Debug, Clone)]
pub struct BrowserFile(File);

impl BrowserFile {
    /// All files in a selection, in order.
    pub fn from_list(list: &FileList) -> Vec<BrowserFile> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(BrowserFile)
            .collect()
    }
}

impl FileHandle for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    fn local_url(&self) -> UploadResult<String> {
        Url::create_object_url_with_blob(&self.0).map_err(|e| UploadError::LocalReference {
            name: self.0.name(),
            reason: js_error_message(&e),
        })
    }
}
