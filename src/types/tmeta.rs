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
Tipos para la definición de metadatos
=====================================

- Tipo Meta y sus traits
*/

use std::fmt;
use std::str;

use serde_derive::{Deserialize, Serialize};

use crate::error::GridFactorsError;

/// Metadatos de configuración
///
/// Configuration metadata, written as `#META KEY: value` lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// metadata name.
    pub key: String,
    /// metadata value
    pub value: String,
}

impl Meta {
    /// Metadata constructor
    pub fn new<T, U>(key: T, value: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Meta {
    /// Textual representation of metadata.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#META {}: {}", self.key, self.value)
    }
}

impl str::FromStr for Meta {
    type Err = GridFactorsError;

    fn from_str(s: &str) -> Result<Meta, Self::Err> {
        let line = s.trim();
        if !line.starts_with("#META") {
            return Err(GridFactorsError::ConfigParse(format!(
                "not a metadata line: \"{}\"",
                s
            )));
        }
        let items: Vec<&str> = line[5..].splitn(2, ':').map(str::trim).collect();
        if items.len() == 2 && !items[0].is_empty() {
            Ok(Meta::new(items[0], items[1]))
        } else {
            Err(GridFactorsError::ConfigParse(format!(
                "wrong metadata format: \"{}\"",
                s
            )))
        }
    }
}

/// Trait común para gestionar metadatos
pub trait MetaVec {
    /// Get vector of metadata
    fn get_metavec(&self) -> &Vec<Meta>;

    /// Check if key is included in metadata
    fn has_meta(&self, key: &str) -> bool {
        self.get_metavec().iter().any(|m| m.key == key)
    }

    /// Get (optional) metadata value by key
    fn get_meta(&self, key: &str) -> Option<&str> {
        self.get_metavec()
            .iter()
            .find(|m| m.key == key)
            .map(|v| v.value.as_str())
    }
}

impl MetaVec for Vec<Meta> {
    fn get_metavec(&self) -> &Vec<Meta> {
        self
    }
}

// ========================== Tests

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tmeta() {
        let meta = Meta {
            key: "EMISSIONS_GRID_SOURCE".to_string(),
            value: "Meta-Analysis".to_string(),
        };
        let meta2 = Meta::new("EMISSIONS_GRID_SOURCE", "Meta-Analysis");
        let metastr = "#META EMISSIONS_GRID_SOURCE: Meta-Analysis";
        assert_eq!(format!("{}", meta), metastr);
        assert_eq!(format!("{}", meta2), metastr);
        assert_eq!(format!("{}", metastr.parse::<Meta>().unwrap()), metastr);
    }

    #[test]
    fn tmeta_errors() {
        assert!("EMISSIONS_GRID_SOURCE: IPCC Only".parse::<Meta>().is_err());
        assert!("#META EMISSIONS_GRID_SOURCE".parse::<Meta>().is_err());
        assert!("#META : IPCC Only".parse::<Meta>().is_err());
    }

    #[test]
    fn metavec() {
        let metas = vec![
            Meta::new("CO2EQ_SOURCE", "AR4"),
            Meta::new("GRID_EMISSIONS_VERSION", "2"),
        ];
        assert!(metas.has_meta("CO2EQ_SOURCE"));
        assert!(!metas.has_meta("EMISSIONS_GRID_RANGE"));
        assert_eq!(metas.get_meta("GRID_EMISSIONS_VERSION"), Some("2"));
    }
}
