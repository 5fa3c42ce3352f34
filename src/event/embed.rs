// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Out-of-band attachments (screenshots, logs) emitted by step definitions.

use std::path::{Path, PathBuf};

use mime::Mime;

/// File attached to the output of listeners supporting it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Embed {
    /// Path to the attached file.
    pub file: PathBuf,

    /// [`Mime`] type of the [`Embed::file`].
    pub mime_type: Mime,

    /// Human-readable label of this attachment.
    pub label: String,
}

impl Embed {
    /// Creates a new [`Embed`].
    #[must_use]
    pub fn new(
        file: impl Into<PathBuf>,
        mime_type: Mime,
        label: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            mime_type,
            label: label.into(),
        }
    }

    /// Creates a new [`Embed`], guessing its [`Mime`] type from the file
    /// extension and falling back to [`mime::APPLICATION_OCTET_STREAM`].
    #[must_use]
    pub fn guessed(file: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        let file = file.into();
        let mime_type = guess_mime(&file);
        Self::new(file, mime_type, label)
    }
}

fn guess_mime(file: &Path) -> Mime {
    let ext = file
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => mime::IMAGE_PNG,
        Some("jpg" | "jpeg") => mime::IMAGE_JPEG,
        Some("gif") => mime::IMAGE_GIF,
        Some("svg") => mime::IMAGE_SVG,
        Some("txt" | "log") => mime::TEXT_PLAIN,
        Some("html" | "htm") => mime::TEXT_HTML,
        Some("json") => mime::APPLICATION_JSON,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_common_types() {
        assert_eq!(Embed::guessed("shot.PNG", "screen").mime_type, mime::IMAGE_PNG);
        assert_eq!(Embed::guessed("run.log", "log").mime_type, mime::TEXT_PLAIN);
        assert_eq!(
            Embed::guessed("dump", "core").mime_type,
            mime::APPLICATION_OCTET_STREAM,
        );
    }
}
