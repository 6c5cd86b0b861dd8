/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use thiserror::Error;
use odin_common::map_to_opaque_error;

pub type Result<T> = std::result::Result<T, OdinPointingError>;

#[derive(Error,Debug)]
pub enum OdinPointingError {

    /// `row` is the 1-based line number within `file` (0 if unknown)
    #[error("parse error in {file}:{row}: {msg}")]
    ParseError { file: String, row: u64, msg: String },

    #[error("empty input {0}")]
    EmptyInput(String),

    #[error("time series not sorted {0}")]
    NotSorted(String),

    #[error("length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("invalid option {0}")]
    InvalidOption(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("csv error {0}")]
    CsvError( #[from] csv::Error),

    #[error("glob pattern error {0}")]
    PatternError( #[from] glob::PatternError),

    #[error("glob error {0}")]
    GlobError( #[from] glob::GlobError),

    #[error("config error {0}")]
    ConfigError(String),

    #[error("operation failed {0}")]
    OpFailedError(String),
}

map_to_opaque_error!{ ron::error::SpannedError => OdinPointingError::ConfigError }

macro_rules! parse_error {
    ($file:expr, $row:expr, $fmt:literal $(, $arg:expr )* ) => {
        OdinPointingError::ParseError{ file: $file.to_string(), row: $row, msg: format!( $fmt $(, $arg)* ) }
    };
}
pub (crate) use parse_error;

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinPointingError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;
