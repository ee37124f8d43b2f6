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
Salida en formato simple (plain text output)
============================================

Representación compacta en texto de tablas, multiplicadores y configuración.
*/

use itertools::Itertools;

use crate::co2eq::Co2Equiv;
use crate::config::EmissionsConfig;
use crate::types::YearlyTable;

// ==================== Conversión a formato simple

/// Muestra en formato simple
///
/// Esta función usa un formato simple y compacto para representar la información sobre
/// factores de emisión
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

// ================= Implementaciones ====================

/// Tabla como texto separado por comas, con cabecera y 9 decimales
impl AsPlain for YearlyTable {
    fn to_plain(&self) -> String {
        let header = std::iter::once(self.index_name().to_string())
            .chain(self.columns().iter().map(|r| r.to_string()))
            .join(", ");
        let rows = self
            .rows()
            .iter()
            .map(|row| {
                let values = row.values.iter().map(|v| format!("{:.9}", v)).join(", ");
                format!("{}, {}", row.year, values)
            })
            .join("\n");
        format!("{}\n{}", header, rows)
    }
}

impl AsPlain for Co2Equiv {
    fn to_plain(&self) -> String {
        format!(
            "CO2-eq conversion ({}): CH4 x {}, N2O x {}",
            self.conversion_source, self.ch4_multiplier, self.n2o_multiplier
        )
    }
}

impl AsPlain for EmissionsConfig {
    fn to_plain(&self) -> String {
        let version = if self.emissions_grid_source.is_versioned() {
            format!(" v{}", self.grid_emissions_version)
        } else {
            String::new()
        };
        format!(
            "Grid factors: {}{} {}, {}",
            self.emissions_grid_source, version, self.emissions_grid_range, self.co2eq_source
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Co2EqSource, GridRange, GridSource};
    use pretty_assertions::assert_eq;

    #[test]
    fn co2equiv_plain() {
        assert_eq!(
            Co2Equiv::default().to_plain(),
            "CO2-eq conversion (AR5_WITH_FEEDBACK): CH4 x 34, N2O x 298"
        );
        assert_eq!(
            Co2Equiv::new(Co2EqSource::SAR).to_plain(),
            "CO2-eq conversion (SAR): CH4 x 21, N2O x 310"
        );
    }

    #[test]
    fn config_plain() {
        let meta = EmissionsConfig::new(GridSource::META, GridRange::LOW)
            .with_grid_emissions_version(3);
        assert_eq!(meta.to_plain(), "Grid factors: META v3 LOW, AR5_WITH_FEEDBACK");
        let ipcc = EmissionsConfig::new(GridSource::IPCC, GridRange::HIGH)
            .with_co2eq_source(Co2EqSource::AR4)
            .with_grid_emissions_version(3);
        assert_eq!(ipcc.to_plain(), "Grid factors: IPCC HIGH, AR4");
    }

    #[test]
    fn table_plain() {
        let table =
            YearlyTable::from_fn(|year, region| f64::from(year) + region.index() as f64 / 10.0);
        let plain = table.to_plain();
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines.len(), 47);
        assert_eq!(
            lines[0],
            "Year, World, OECD90, Eastern Europe, Asia (Sans Japan), Middle East and Africa, Latin America, China, India, EU, USA"
        );
        assert!(lines[1].starts_with("2015, 2015.000000000, 2015.100000000, "));
        assert!(lines[46].starts_with("2060, "));
    }
}
