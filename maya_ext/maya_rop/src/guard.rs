// Copyright 2015-2023 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Error raised when a precondition on an argument is violated. These indicate a contract breach
/// by the caller and are reported at the point of the check.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum ArgumentError {
    /// A required argument was not provided.
    #[error("Argument '{name}' was absent.")]
    Absent { name: &'static str },
}

impl ArgumentError {
    /// The name of the offending argument.
    pub fn name(&self) -> &'static str {
        match self {
            ArgumentError::Absent { name } => name,
        }
    }
}

/// Require that an optional argument is present.
///
/// # Arguments
/// * `value` - The possibly absent value.
/// * `name` - The name of the argument, used in the error.
pub fn require<T>(value: Option<T>, name: &'static str) -> Result<T, ArgumentError> {
    value.ok_or(ArgumentError::Absent { name })
}
