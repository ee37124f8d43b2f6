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
Configuración (configuration)
=============================

Parámetros de selección de factores de emisión, obtenidos de los textos de las hojas
de cálculo, de un documento JSON o de líneas de metadatos `#META CLAVE: valor`.

Recognized keys. Metadata lines use the upper-case names; JSON documents accept
either spelling:

- `CO2EQ_SOURCE` / `co2eq_source` ("Advanced Controls"!I185), optional, defaults to AR5 with feedback
- `EMISSIONS_GRID_SOURCE` / `emissions_grid_source` ("Advanced Controls"!C189), required
- `EMISSIONS_GRID_RANGE` / `emissions_grid_range` ("Advanced Controls"!D189), required
- `GRID_EMISSIONS_VERSION` / `grid_emissions_version`, optional, defaults to 1
*/

use std::fmt;
use std::str;

use serde_derive::{Deserialize, Serialize};

use crate::{
    co2eq::Co2Equiv,
    error::GridFactorsError,
    normalize::{
        conversion_source_name, emissions_grid_range_name, emissions_grid_source_name,
        string_to_conversion_source, string_to_emissions_grid_range,
        string_to_emissions_grid_source,
    },
    types::{Co2EqSource, GridRange, GridSource, Meta, MetaVec},
};

/// Versión de los datos META usada si no se indica otra
pub const DEFAULT_GRID_EMISSIONS_VERSION: u32 = 1;

/// Configuración de factores de emisión
///
/// Emission factor configuration (a value object, built per request)
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct EmissionsConfig {
    /// CO2-equivalence standard
    pub co2eq_source: Co2EqSource,
    /// Grid emission factors source
    pub emissions_grid_source: GridSource,
    /// Grid emission factors range
    pub emissions_grid_range: GridRange,
    /// META dataset version (ignored for IPCC)
    pub grid_emissions_version: u32,
}

/// Configuración sin interpretar, tal como aparece en el documento
#[derive(Debug, Default, Deserialize)]
struct RawEmissionsConfig {
    #[serde(alias = "CO2EQ_SOURCE")]
    co2eq_source: Option<String>,
    #[serde(alias = "EMISSIONS_GRID_SOURCE")]
    emissions_grid_source: Option<String>,
    #[serde(alias = "EMISSIONS_GRID_RANGE")]
    emissions_grid_range: Option<String>,
    #[serde(alias = "GRID_EMISSIONS_VERSION")]
    grid_emissions_version: Option<u32>,
}

impl RawEmissionsConfig {
    fn normalize(self) -> Result<EmissionsConfig, GridFactorsError> {
        EmissionsConfig::from_strings(
            self.co2eq_source.as_ref().map(String::as_str),
            self.emissions_grid_source
                .as_ref()
                .map(String::as_str)
                .ok_or(GridFactorsError::MissingConfigurationValue(
                    "EMISSIONS_GRID_SOURCE",
                ))?,
            self.emissions_grid_range
                .as_ref()
                .map(String::as_str)
                .ok_or(GridFactorsError::MissingConfigurationValue(
                    "EMISSIONS_GRID_RANGE",
                ))?,
            self.grid_emissions_version,
        )
    }
}

impl EmissionsConfig {
    /// Configuration with the default CO2-equivalence standard (AR5 with feedback)
    /// and the default META dataset version (1)
    pub fn new(emissions_grid_source: GridSource, emissions_grid_range: GridRange) -> Self {
        Self {
            co2eq_source: Co2EqSource::default(),
            emissions_grid_source,
            emissions_grid_range,
            grid_emissions_version: DEFAULT_GRID_EMISSIONS_VERSION,
        }
    }

    /// Set the CO2-equivalence standard
    pub fn with_co2eq_source(mut self, co2eq_source: Co2EqSource) -> Self {
        self.co2eq_source = co2eq_source;
        self
    }

    /// Set the META dataset version
    pub fn with_grid_emissions_version(mut self, version: u32) -> Self {
        self.grid_emissions_version = version;
        self
    }

    /// Configuración a partir de los textos de la hoja de cálculo
    ///
    /// Build a configuration from already extracted spreadsheet texts.
    /// Missing `co2eq_source` and `version` take their documented defaults.
    pub fn from_strings(
        co2eq_source: Option<&str>,
        grid_source: &str,
        grid_range: &str,
        version: Option<u32>,
    ) -> Result<Self, GridFactorsError> {
        let co2eq_source = match co2eq_source {
            Some(text) => string_to_conversion_source(text)?,
            None => Co2EqSource::default(),
        };
        Ok(Self {
            co2eq_source,
            emissions_grid_source: string_to_emissions_grid_source(grid_source)?,
            emissions_grid_range: string_to_emissions_grid_range(grid_range)?,
            grid_emissions_version: version.unwrap_or(DEFAULT_GRID_EMISSIONS_VERSION),
        })
    }

    /// Configuración a partir de un documento JSON
    ///
    /// Build a configuration from a JSON object. Unknown keys are ignored, so a
    /// complete advanced controls document can be used.
    pub fn from_json(s: &str) -> Result<Self, GridFactorsError> {
        let raw: RawEmissionsConfig = serde_json::from_str(s)?;
        raw.normalize()
    }

    /// Configuración a partir de metadatos
    pub fn from_metas(metas: &Vec<Meta>) -> Result<Self, GridFactorsError> {
        let grid_emissions_version = metas
            .get_meta("GRID_EMISSIONS_VERSION")
            .map(|v| v.parse::<u32>())
            .transpose()?;
        RawEmissionsConfig {
            co2eq_source: metas.get_meta("CO2EQ_SOURCE").map(str::to_string),
            emissions_grid_source: metas.get_meta("EMISSIONS_GRID_SOURCE").map(str::to_string),
            emissions_grid_range: metas.get_meta("EMISSIONS_GRID_RANGE").map(str::to_string),
            grid_emissions_version,
        }
        .normalize()
    }

    /// CO2 equivalence multipliers for the configured standard
    pub fn co2_equiv(&self) -> Co2Equiv {
        Co2Equiv::new(self.co2eq_source)
    }

    /// Configuration as metadata, using names accepted by the text normalizer
    pub fn to_metas(&self) -> Vec<Meta> {
        vec![
            Meta::new("CO2EQ_SOURCE", conversion_source_name(self.co2eq_source)),
            Meta::new(
                "EMISSIONS_GRID_SOURCE",
                emissions_grid_source_name(self.emissions_grid_source),
            ),
            Meta::new(
                "EMISSIONS_GRID_RANGE",
                emissions_grid_range_name(self.emissions_grid_range),
            ),
            Meta::new(
                "GRID_EMISSIONS_VERSION",
                self.grid_emissions_version.to_string(),
            ),
        ]
    }
}

impl fmt::Display for EmissionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.to_metas().iter().map(|m| m.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Lee una configuración en formato de metadatos:
///
/// ```text
/// # Controles avanzados
/// #META CO2EQ_SOURCE: AR5 with feedback
/// #META EMISSIONS_GRID_SOURCE: Meta-Analysis
/// #META EMISSIONS_GRID_RANGE: Mean
/// #META GRID_EMISSIONS_VERSION: 3
/// ```
///
/// Comment lines and empty lines are skipped; any other line is an error.
impl str::FromStr for EmissionsConfig {
    type Err = GridFactorsError;

    fn from_str(s: &str) -> Result<EmissionsConfig, Self::Err> {
        let metas = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !(l.starts_with('#') && !l.starts_with("#META")))
            .map(|l| l.parse::<Meta>())
            .collect::<Result<Vec<_>, _>>()?;
        EmissionsConfig::from_metas(&metas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = EmissionsConfig::new(GridSource::META, GridRange::MEAN);
        assert_eq!(config.co2eq_source, Co2EqSource::AR5_WITH_FEEDBACK);
        assert_eq!(config.grid_emissions_version, 1);
        assert_eq!(config.co2_equiv().multipliers(), (34.0, 298.0));
    }

    #[test]
    fn from_strings() {
        let config =
            EmissionsConfig::from_strings(Some("SAR"), "IPCC Only", "High", Some(2)).unwrap();
        assert_eq!(
            config,
            EmissionsConfig::new(GridSource::IPCC, GridRange::HIGH)
                .with_co2eq_source(Co2EqSource::SAR)
                .with_grid_emissions_version(2)
        );
        assert_eq!(
            EmissionsConfig::from_strings(None, "Meta-Analysis", "Average", None),
            Err(GridFactorsError::InvalidConfigurationValue {
                field: "grid range",
                value: "Average".into()
            })
        );
    }

    #[test]
    fn from_json() {
        let config = EmissionsConfig::from_json(
            r#"{
                "emissions_grid_source": "meta_analysis",
                "emissions_grid_range": "Low",
                "grid_emissions_version": 3,
                "report_end_year": 2050
            }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            EmissionsConfig::new(GridSource::META, GridRange::LOW).with_grid_emissions_version(3)
        );
    }

    #[test]
    fn from_json_upper_case_keys() {
        let config = EmissionsConfig::from_json(
            r#"{
                "CO2EQ_SOURCE": "SAR",
                "EMISSIONS_GRID_SOURCE": "IPCC Only",
                "EMISSIONS_GRID_RANGE": "High",
                "GRID_EMISSIONS_VERSION": 2
            }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            EmissionsConfig::new(GridSource::IPCC, GridRange::HIGH)
                .with_co2eq_source(Co2EqSource::SAR)
                .with_grid_emissions_version(2)
        );
    }

    #[test]
    fn json_reads_back() {
        for source in GridSource::ALL.iter() {
            for range in GridRange::ALL.iter() {
                for co2eq_source in Co2EqSource::ALL.iter() {
                    let config = EmissionsConfig::new(*source, *range)
                        .with_co2eq_source(*co2eq_source)
                        .with_grid_emissions_version(3);
                    let json = serde_json::to_string(&config).unwrap();
                    assert_eq!(EmissionsConfig::from_json(&json), Ok(config));
                }
            }
        }
    }

    #[test]
    fn from_json_errors() {
        assert_eq!(
            EmissionsConfig::from_json(r#"{"emissions_grid_source": "IPCC Only"}"#),
            Err(GridFactorsError::MissingConfigurationValue(
                "EMISSIONS_GRID_RANGE"
            ))
        );
        match EmissionsConfig::from_json("{ not json") {
            Err(GridFactorsError::ConfigParse(_)) => (),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn from_meta_lines() {
        let config = "# Controles avanzados
#META CO2EQ_SOURCE: AR4
#META EMISSIONS_GRID_SOURCE: IPCC Only

#META EMISSIONS_GRID_RANGE: Median
"
        .parse::<EmissionsConfig>()
        .unwrap();
        assert_eq!(
            config,
            EmissionsConfig::new(GridSource::IPCC, GridRange::MEAN)
                .with_co2eq_source(Co2EqSource::AR4)
        );
        assert!("#META EMISSIONS_GRID_SOURCE: IPCC Only\nEMISSIONS_GRID_RANGE: Mean"
            .parse::<EmissionsConfig>()
            .is_err());
        match "#META EMISSIONS_GRID_SOURCE: IPCC Only\n#META EMISSIONS_GRID_RANGE: Mean\n#META GRID_EMISSIONS_VERSION: two"
            .parse::<EmissionsConfig>()
        {
            Err(GridFactorsError::ConfigParse(_)) => (),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn display_roundtrip() {
        let config = EmissionsConfig::new(GridSource::META, GridRange::HIGH)
            .with_grid_emissions_version(4);
        let text = config.to_string();
        assert_eq!(
            text,
            "#META CO2EQ_SOURCE: ar5 with feedback
#META EMISSIONS_GRID_SOURCE: meta-analysis
#META EMISSIONS_GRID_RANGE: high
#META GRID_EMISSIONS_VERSION: 4"
        );
        assert_eq!(text.parse::<EmissionsConfig>(), Ok(config));
    }
}
