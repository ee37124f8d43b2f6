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
Equivalencia de CO2 (CO2 equivalence)
=====================================

Multiplicadores para convertir CH4 y N2O a CO2 equivalente según el estándar elegido.
*/

use std::convert::TryFrom;

use serde_derive::Serialize;

use crate::error::GridFactorsError;
use crate::types::Co2EqSource;

/// Multiplicadores (CH4, N2O) de un estándar de equivalencia de CO2
///
/// | Standard          | CH4 | N2O |
/// |-------------------|-----|-----|
/// | AR5_WITH_FEEDBACK | 34  | 298 |
/// | AR4               | 25  | 298 |
/// | SAR               | 21  | 310 |
pub fn conversion_factors(source: Co2EqSource) -> (f64, f64) {
    match source {
        Co2EqSource::AR5_WITH_FEEDBACK => (34.0, 298.0),
        Co2EqSource::AR4 => (25.0, 298.0),
        Co2EqSource::SAR => (21.0, 310.0),
    }
}

/// Conversión de CH4/N2O a CO2 equivalente
///
/// Convert CH4, N2O to equivalent CO2 following a conversion standard.
///
/// `Co2Equiv::default()` uses AR5 with feedback, the preferred standard. Callers
/// that do not choose a standard get that one, so results change if the default
/// ever changes.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Co2Equiv {
    /// Conversion standard
    pub conversion_source: Co2EqSource,
    /// kg CO2-eq per kg of CH4
    pub ch4_multiplier: f64,
    /// kg CO2-eq per kg of N2O
    pub n2o_multiplier: f64,
}

impl Co2Equiv {
    /// Multipliers for the given standard
    pub fn new(conversion_source: Co2EqSource) -> Self {
        let (ch4_multiplier, n2o_multiplier) = conversion_factors(conversion_source);
        Self {
            conversion_source,
            ch4_multiplier,
            n2o_multiplier,
        }
    }

    /// Multipliers for a standard given by its numeric tag
    pub fn from_tag(tag: u32) -> Result<Self, GridFactorsError> {
        Co2EqSource::try_from(tag).map(Co2Equiv::new)
    }

    /// (CH4, N2O) multipliers
    pub fn multipliers(&self) -> (f64, f64) {
        (self.ch4_multiplier, self.n2o_multiplier)
    }

    /// Equivalent CO2 mass of a CH4 mass
    pub fn ch4_to_co2eq(&self, mass: f64) -> f64 {
        mass * self.ch4_multiplier
    }

    /// Equivalent CO2 mass of a N2O mass
    pub fn n2o_to_co2eq(&self, mass: f64) -> f64 {
        mass * self.n2o_multiplier
    }
}

impl Default for Co2Equiv {
    fn default() -> Self {
        Co2Equiv::new(Co2EqSource::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn multipliers_by_standard() {
        assert_eq!(
            Co2Equiv::new(Co2EqSource::AR5_WITH_FEEDBACK).multipliers(),
            (34.0, 298.0)
        );
        assert_eq!(Co2Equiv::new(Co2EqSource::AR4).multipliers(), (25.0, 298.0));
        assert_eq!(Co2Equiv::new(Co2EqSource::SAR).multipliers(), (21.0, 310.0));
    }

    #[test]
    fn default_standard() {
        let conv = Co2Equiv::default();
        assert_eq!(conv.conversion_source, Co2EqSource::AR5_WITH_FEEDBACK);
        assert_eq!(conv, Co2Equiv::new(Co2EqSource::AR5_WITH_FEEDBACK));
    }

    #[test]
    fn from_tag() {
        assert_eq!(Co2Equiv::from_tag(3), Ok(Co2Equiv::new(Co2EqSource::SAR)));
        assert_eq!(
            Co2Equiv::from_tag(9),
            Err(GridFactorsError::InvalidEnumerationValue {
                kind: "CO2EQ_SOURCE",
                value: 9
            })
        );
    }

    #[test]
    fn conversions() {
        let conv = Co2Equiv::new(Co2EqSource::AR4);
        assert_eq!(conv.ch4_to_co2eq(2.0), 50.0);
        assert_eq!(conv.n2o_to_co2eq(0.5), 149.0);
    }
}
