//! Error types for fontpie operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::css::Location;

/// Fatal errors that abort a whole stylesheet transformation.
///
/// Problems confined to a single `@font-face` rule are reported as
/// [`Warning`](crate::Warning)s instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Options are required: no font types were supplied")]
    MissingFontTypes,

    #[error("resolve_filename and src_url_to_filename cannot both be supplied")]
    ConflictingFilenameResolvers,

    #[error("{location}: fontpie error: could not compute metrics for {}", filename.display())]
    Metrics { filename: PathBuf, location: Location },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
