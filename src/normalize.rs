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
Normalización de textos de configuración
========================================

Conversion of the free-text values found in the spreadsheet versions of the models
("Advanced Controls" sheet) to the enumerated types of this crate.

Matching is exact after lowercasing the input. Each accepted spelling is listed in
a synonym table; there is no trimming and no approximate matching.
*/

use crate::error::GridFactorsError;
use crate::types::{Co2EqSource, GridRange, GridSource};

/// Nombres aceptados para el estándar de equivalencia de CO2 ("Advanced Controls"!I185)
pub const CONVERSION_SOURCE_NAMES: [(&str, Co2EqSource); 4] = [
    ("ar5 with feedback", Co2EqSource::AR5_WITH_FEEDBACK),
    ("ar5_with_feedback", Co2EqSource::AR5_WITH_FEEDBACK),
    ("ar4", Co2EqSource::AR4),
    ("sar", Co2EqSource::SAR),
];

/// Nombres aceptados para la fuente de factores de red ("Advanced Controls"!C189)
pub const GRID_SOURCE_NAMES: [(&str, GridSource); 5] = [
    ("meta-analysis", GridSource::META),
    ("meta_analysis", GridSource::META),
    ("meta analysis", GridSource::META),
    ("ipcc only", GridSource::IPCC),
    ("ipcc_only", GridSource::IPCC),
];

/// Nombres aceptados para el rango de factores de red ("Advanced Controls"!D189)
pub const GRID_RANGE_NAMES: [(&str, GridRange); 4] = [
    ("mean", GridRange::MEAN),
    ("median", GridRange::MEAN),
    ("high", GridRange::HIGH),
    ("low", GridRange::LOW),
];

fn lookup<T: Copy>(
    names: &[(&str, T)],
    field: &'static str,
    text: &str,
) -> Result<T, GridFactorsError> {
    let key = text.to_lowercase();
    names
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
        .ok_or_else(|| GridFactorsError::InvalidConfigurationValue {
            field,
            value: text.to_string(),
        })
}

/// Nombre de un estándar de equivalencia de CO2 aceptado por `string_to_conversion_source`
pub fn conversion_source_name(source: Co2EqSource) -> &'static str {
    match source {
        Co2EqSource::AR5_WITH_FEEDBACK => "ar5 with feedback",
        Co2EqSource::AR4 => "ar4",
        Co2EqSource::SAR => "sar",
    }
}

/// Nombre de una fuente de factores de red aceptado por `string_to_emissions_grid_source`
pub fn emissions_grid_source_name(source: GridSource) -> &'static str {
    match source {
        GridSource::META => "meta-analysis",
        GridSource::IPCC => "ipcc only",
    }
}

/// Nombre de un rango de factores de red aceptado por `string_to_emissions_grid_range`
pub fn emissions_grid_range_name(range: GridRange) -> &'static str {
    match range {
        GridRange::MEAN => "mean",
        GridRange::HIGH => "high",
        GridRange::LOW => "low",
    }
}

/// Estándar de equivalencia de CO2 a partir de su nombre
///
/// Convert a CO2-equivalence standard name (e.g. "AR5 with feedback") to `Co2EqSource`.
pub fn string_to_conversion_source(text: &str) -> Result<Co2EqSource, GridFactorsError> {
    lookup(&CONVERSION_SOURCE_NAMES, "conversion", text)
}

/// Fuente de factores de red a partir de su nombre
///
/// Convert a grid source name (e.g. "Meta-Analysis", "IPCC Only") to `GridSource`.
pub fn string_to_emissions_grid_source(text: &str) -> Result<GridSource, GridFactorsError> {
    lookup(&GRID_SOURCE_NAMES, "grid source", text)
}

/// Rango de factores de red a partir de su nombre
///
/// Convert a grid range name (e.g. "Mean", "Median", "High") to `GridRange`.
pub fn string_to_emissions_grid_range(text: &str) -> Result<GridRange, GridFactorsError> {
    lookup(&GRID_RANGE_NAMES, "grid range", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn synonym_tables_are_lowercase() {
        let names = CONVERSION_SOURCE_NAMES
            .iter()
            .map(|(n, _)| *n)
            .chain(GRID_SOURCE_NAMES.iter().map(|(n, _)| *n))
            .chain(GRID_RANGE_NAMES.iter().map(|(n, _)| *n));
        for name in names {
            assert_eq!(name, name.to_lowercase());
        }
    }

    #[test]
    fn every_value_has_a_synonym() {
        for source in Co2EqSource::ALL.iter() {
            assert!(CONVERSION_SOURCE_NAMES.iter().any(|(_, v)| v == source));
        }
        for source in GridSource::ALL.iter() {
            assert!(GRID_SOURCE_NAMES.iter().any(|(_, v)| v == source));
        }
        for range in GridRange::ALL.iter() {
            assert!(GRID_RANGE_NAMES.iter().any(|(_, v)| v == range));
        }
    }

    #[test]
    fn names_normalize_back() {
        for source in Co2EqSource::ALL.iter() {
            let name = conversion_source_name(*source);
            assert_eq!(string_to_conversion_source(name), Ok(*source));
        }
        for source in GridSource::ALL.iter() {
            let name = emissions_grid_source_name(*source);
            assert_eq!(string_to_emissions_grid_source(name), Ok(*source));
        }
        for range in GridRange::ALL.iter() {
            let name = emissions_grid_range_name(*range);
            assert_eq!(string_to_emissions_grid_range(name), Ok(*range));
        }
        assert_eq!(emissions_grid_source_name(GridSource::IPCC), "ipcc only");
    }

    #[test]
    fn conversion_source() {
        assert_eq!(
            string_to_conversion_source("AR5 with feedback"),
            Ok(Co2EqSource::AR5_WITH_FEEDBACK)
        );
        assert_eq!(
            string_to_conversion_source("ar5_WITH_feedback"),
            Ok(Co2EqSource::AR5_WITH_FEEDBACK)
        );
        assert_eq!(string_to_conversion_source("AR4"), Ok(Co2EqSource::AR4));
        assert_eq!(string_to_conversion_source("sar"), Ok(Co2EqSource::SAR));
        assert_eq!(
            string_to_conversion_source("AR5"),
            Err(GridFactorsError::InvalidConfigurationValue {
                field: "conversion",
                value: "AR5".into()
            })
        );
    }

    #[test]
    fn grid_source() {
        for text in &["Meta-Analysis", "meta_analysis", "META ANALYSIS"] {
            assert_eq!(string_to_emissions_grid_source(text), Ok(GridSource::META));
        }
        for text in &["IPCC Only", "ipcc_only"] {
            assert_eq!(string_to_emissions_grid_source(text), Ok(GridSource::IPCC));
        }
        assert!(string_to_emissions_grid_source("IPCC").is_err());
        assert!(string_to_emissions_grid_source("meta").is_err());
    }

    #[test]
    fn grid_range() {
        assert_eq!(string_to_emissions_grid_range("Mean"), Ok(GridRange::MEAN));
        assert_eq!(
            string_to_emissions_grid_range("median"),
            string_to_emissions_grid_range("mean")
        );
        assert_eq!(string_to_emissions_grid_range("HIGH"), Ok(GridRange::HIGH));
        assert_eq!(string_to_emissions_grid_range("low"), Ok(GridRange::LOW));
    }

    #[test]
    fn no_trimming_or_partial_matches() {
        assert!(string_to_emissions_grid_range(" mean").is_err());
        assert!(string_to_emissions_grid_range("mea").is_err());
        assert!(string_to_emissions_grid_range("").is_err());
    }

    #[test]
    fn errors_keep_raw_text() {
        let err = string_to_emissions_grid_range("Bogus").unwrap_err();
        assert_eq!(
            err,
            GridFactorsError::InvalidConfigurationValue {
                field: "grid range",
                value: "Bogus".into()
            }
        );
        assert_eq!(err.to_string(), "Invalid grid range name=\"Bogus\"");
    }
}
