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

//! Estándares de equivalencia de CO2

use std::convert::TryFrom;
use std::str;

use serde_derive::{Deserialize, Serialize};
use strum_macros::Display;

use crate::error::GridFactorsError;
use crate::normalize::{conversion_source_name, string_to_conversion_source};

/// Estándar de conversión de gases a CO2 equivalente
///
/// Standard used to convert CH4, N2O and other greenhouse gases to equivalent CO2
/// by global warming potential.
#[allow(non_camel_case_types)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Co2EqSource {
    /// IPCC 5th Assessment Report, as amended with feedback. Preferred selection.
    AR5_WITH_FEEDBACK,
    /// IPCC 4th Assessment Report
    AR4,
    /// IPCC Second Assessment Report
    SAR,
}

impl Co2EqSource {
    /// All standards, in declaration order
    pub const ALL: [Co2EqSource; 3] = [
        Co2EqSource::AR5_WITH_FEEDBACK,
        Co2EqSource::AR4,
        Co2EqSource::SAR,
    ];

    /// Numeric tag of the standard (1-based, declaration order)
    pub fn tag(self) -> u32 {
        match self {
            Co2EqSource::AR5_WITH_FEEDBACK => 1,
            Co2EqSource::AR4 => 2,
            Co2EqSource::SAR => 3,
        }
    }
}

/// Estándar usado cuando no se indica ninguno: AR5 with feedback
impl Default for Co2EqSource {
    fn default() -> Self {
        Co2EqSource::AR5_WITH_FEEDBACK
    }
}

impl TryFrom<u32> for Co2EqSource {
    type Error = GridFactorsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Co2EqSource::AR5_WITH_FEEDBACK),
            2 => Ok(Co2EqSource::AR4),
            3 => Ok(Co2EqSource::SAR),
            _ => Err(GridFactorsError::InvalidEnumerationValue {
                kind: "CO2EQ_SOURCE",
                value,
            }),
        }
    }
}

impl TryFrom<String> for Co2EqSource {
    type Error = GridFactorsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Acepta el nombre canónico (`Display`) o cualquier sinónimo del normalizador
impl str::FromStr for Co2EqSource {
    type Err = GridFactorsError;

    fn from_str(s: &str) -> Result<Co2EqSource, Self::Err> {
        match Co2EqSource::ALL.iter().find(|v| v.to_string() == s) {
            Some(value) => Ok(*value),
            None => string_to_conversion_source(s),
        }
    }
}

/// Serializa con un nombre aceptado por el normalizador
impl From<Co2EqSource> for String {
    fn from(value: Co2EqSource) -> String {
        conversion_source_name(value).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_ar5_with_feedback() {
        assert_eq!(Co2EqSource::default(), Co2EqSource::AR5_WITH_FEEDBACK);
    }

    #[test]
    fn tags() {
        for source in Co2EqSource::ALL.iter() {
            assert_eq!(Co2EqSource::try_from(source.tag()), Ok(*source));
        }
        assert_eq!(
            Co2EqSource::try_from(4u32),
            Err(GridFactorsError::InvalidEnumerationValue {
                kind: "CO2EQ_SOURCE",
                value: 4
            })
        );
        assert!(Co2EqSource::try_from(0u32).is_err());
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(Co2EqSource::AR5_WITH_FEEDBACK.to_string(), "AR5_WITH_FEEDBACK");
        assert_eq!("SAR".parse::<Co2EqSource>(), Ok(Co2EqSource::SAR));
        assert_eq!(
            "AR5 with Feedback".parse::<Co2EqSource>(),
            Ok(Co2EqSource::AR5_WITH_FEEDBACK)
        );
    }

    #[test]
    fn names_read_back() {
        for source in Co2EqSource::ALL.iter() {
            let json = serde_json::to_string(source).unwrap();
            assert_eq!(serde_json::from_str::<Co2EqSource>(&json).unwrap(), *source);
            assert_eq!(source.to_string().parse::<Co2EqSource>(), Ok(*source));
        }
        assert_eq!(
            serde_json::to_string(&Co2EqSource::AR5_WITH_FEEDBACK).unwrap(),
            "\"ar5 with feedback\""
        );
    }
}
