// src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a plotting run can fail. All of them are fatal.
#[derive(Debug, Error)]
pub enum LeadError {
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed lead document {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("required group <{0}> is missing")]
    MissingGroup(&'static str),

    #[error("invalid number {token:?} in <{group}>")]
    BadNumber { group: &'static str, token: String },

    #[error("short record in <{group}>: need {needed} values, found {found}")]
    ShortRecord {
        group: &'static str,
        needed: usize,
        found: usize,
    },

    #[error("{kind} expects {expected} values in <shape_data>, found {found}")]
    ShapeArity {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("cannot print the shape summary: {0}")]
    Summary(#[source] io::Error),

    #[error("drawing failed: {0}")]
    Render(String),

    #[error("cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<cairo::Error> for LeadError {
    fn from(e: cairo::Error) -> Self {
        LeadError::Render(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LeadError>;
