// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

/*!
Errores (errors)
================

Tipo de error común de la biblioteca.

Every error is raised at the point where the invalid input is detected and carries
the received text or value, so that data entry mistakes in the source spreadsheets
can be traced back.
*/

use std::fmt;

/// Errores de resolución de factores de emisión
///
/// Emission factor resolution errors
#[derive(Debug, Clone, PartialEq)]
pub enum GridFactorsError {
    /// Texto de configuración no reconocido
    ///
    /// Unrecognized configuration text for the given field
    InvalidConfigurationValue {
        /// Configuration field being normalized
        field: &'static str,
        /// Raw text as received
        value: String,
    },
    /// Etiqueta numérica fuera del conjunto de valores válidos
    ///
    /// Numeric tag outside the closed set of an enumeration
    InvalidEnumerationValue {
        /// Enumeration name
        kind: &'static str,
        /// Received tag
        value: u32,
    },
    /// Versión de los datos META no disponible
    ///
    /// Unsupported META dataset version
    InvalidDatasetVersion(u32),
    /// Fuente de factores de red no válida
    ///
    /// Grid source tag not handled by the selection algorithm
    InvalidGridSource(u32),
    /// Rango de factores de red no válido
    ///
    /// Grid range tag not handled by the selection algorithm
    InvalidGridRange(u32),
    /// Falta un valor obligatorio de configuración
    ///
    /// Required configuration key not found
    MissingConfigurationValue(&'static str),
    /// Error de interpretación de un documento de configuración
    ///
    /// Malformed configuration document
    ConfigParse(String),
}

impl fmt::Display for GridFactorsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GridFactorsError::*;
        match self {
            InvalidConfigurationValue { field, value } => {
                write!(f, "Invalid {} name=\"{}\"", field, value)
            }
            InvalidEnumerationValue { kind, value } => {
                write!(f, "Invalid {} enumeration value={}", kind, value)
            }
            InvalidDatasetVersion(version) => write!(
                f,
                "Invalid grid_emissions_version={} for grid source META (valid versions: 1, 2, 3, 4)",
                version
            ),
            InvalidGridSource(tag) => write!(f, "Invalid emissions_grid_source={}", tag),
            InvalidGridRange(tag) => write!(f, "Invalid emissions_grid_range={}", tag),
            MissingConfigurationValue(key) => write!(f, "Missing configuration value for {}", key),
            ConfigParse(desc) => write!(f, "Could not parse configuration ({})", desc),
        }
    }
}

impl std::error::Error for GridFactorsError {}

impl From<serde_json::Error> for GridFactorsError {
    fn from(err: serde_json::Error) -> Self {
        GridFactorsError::ConfigParse(err.to_string())
    }
}

impl From<std::num::ParseIntError> for GridFactorsError {
    fn from(err: std::num::ParseIntError) -> Self {
        GridFactorsError::ConfigParse(format!("wrong number format: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_carry_received_values() {
        let err = GridFactorsError::InvalidConfigurationValue {
            field: "grid range",
            value: "Medio".into(),
        };
        assert_eq!(err.to_string(), "Invalid grid range name=\"Medio\"");
        assert_eq!(
            GridFactorsError::InvalidDatasetVersion(99).to_string(),
            "Invalid grid_emissions_version=99 for grid source META (valid versions: 1, 2, 3, 4)"
        );
        assert_eq!(
            GridFactorsError::InvalidGridSource(7).to_string(),
            "Invalid emissions_grid_source=7"
        );
    }

    #[test]
    fn wraps_number_errors() {
        let err: GridFactorsError = "x1".parse::<u32>().unwrap_err().into();
        match err {
            GridFactorsError::ConfigParse(msg) => assert!(msg.starts_with("wrong number format")),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
