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

//! Fuente y rango de los factores de emisión de la red eléctrica

use std::convert::TryFrom;
use std::str;

use serde_derive::{Deserialize, Serialize};
use strum_macros::Display;

use crate::error::GridFactorsError;
use crate::normalize::{
    emissions_grid_range_name, emissions_grid_source_name, string_to_emissions_grid_range,
    string_to_emissions_grid_source,
};

/// Origen de las proyecciones de intensidad de carbono de la red
///
/// Methodology behind the grid carbon-intensity projections
#[allow(non_camel_case_types)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum GridSource {
    /// Meta-analysis of multiple studies. Several dataset versions are available.
    META,
    /// Single IPCC reference table
    IPCC,
}

impl GridSource {
    /// All grid sources, in declaration order
    pub const ALL: [GridSource; 2] = [GridSource::META, GridSource::IPCC];

    /// Numeric tag of the grid source (1-based, declaration order)
    pub fn tag(self) -> u32 {
        match self {
            GridSource::META => 1,
            GridSource::IPCC => 2,
        }
    }

    /// Does this source select among several dataset versions?
    pub fn is_versioned(self) -> bool {
        self == GridSource::META
    }
}

impl TryFrom<u32> for GridSource {
    type Error = GridFactorsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(GridSource::META),
            2 => Ok(GridSource::IPCC),
            _ => Err(GridFactorsError::InvalidGridSource(value)),
        }
    }
}

impl TryFrom<String> for GridSource {
    type Error = GridFactorsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Acepta el nombre canónico (`Display`) o cualquier sinónimo del normalizador
impl str::FromStr for GridSource {
    type Err = GridFactorsError;

    fn from_str(s: &str) -> Result<GridSource, Self::Err> {
        match GridSource::ALL.iter().find(|v| v.to_string() == s) {
            Some(value) => Ok(*value),
            None => string_to_emissions_grid_source(s),
        }
    }
}

/// Serializa con un nombre aceptado por el normalizador
impl From<GridSource> for String {
    fn from(value: GridSource) -> String {
        emissions_grid_source_name(value).to_string()
    }
}

/// Banda estadística seleccionada dentro de una proyección
///
/// Statistical band selected within a grid source projection
#[allow(non_camel_case_types)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum GridRange {
    /// Central estimate ("medium" column of the datasets)
    MEAN,
    /// High estimate
    HIGH,
    /// Low estimate
    LOW,
}

impl GridRange {
    /// All grid ranges, in declaration order
    pub const ALL: [GridRange; 3] = [GridRange::MEAN, GridRange::HIGH, GridRange::LOW];

    /// Numeric tag of the grid range (1-based, declaration order)
    pub fn tag(self) -> u32 {
        match self {
            GridRange::MEAN => 1,
            GridRange::HIGH => 2,
            GridRange::LOW => 3,
        }
    }

    /// Name of the reference dataset column holding this range
    pub fn column_name(self) -> &'static str {
        match self {
            GridRange::MEAN => "medium",
            GridRange::HIGH => "high",
            GridRange::LOW => "low",
        }
    }
}

impl TryFrom<u32> for GridRange {
    type Error = GridFactorsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(GridRange::MEAN),
            2 => Ok(GridRange::HIGH),
            3 => Ok(GridRange::LOW),
            _ => Err(GridFactorsError::InvalidGridRange(value)),
        }
    }
}

impl TryFrom<String> for GridRange {
    type Error = GridFactorsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Acepta el nombre canónico (`Display`) o cualquier sinónimo del normalizador
impl str::FromStr for GridRange {
    type Err = GridFactorsError;

    fn from_str(s: &str) -> Result<GridRange, Self::Err> {
        match GridRange::ALL.iter().find(|v| v.to_string() == s) {
            Some(value) => Ok(*value),
            None => string_to_emissions_grid_range(s),
        }
    }
}

/// Serializa con un nombre aceptado por el normalizador
impl From<GridRange> for String {
    fn from(value: GridRange) -> String {
        emissions_grid_range_name(value).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grid_source_tags() {
        for source in GridSource::ALL.iter() {
            assert_eq!(GridSource::try_from(source.tag()), Ok(*source));
        }
        assert_eq!(
            GridSource::try_from(3u32),
            Err(GridFactorsError::InvalidGridSource(3))
        );
    }

    #[test]
    fn grid_range_tags() {
        for range in GridRange::ALL.iter() {
            assert_eq!(GridRange::try_from(range.tag()), Ok(*range));
        }
        assert_eq!(
            GridRange::try_from(0u32),
            Err(GridFactorsError::InvalidGridRange(0))
        );
    }

    #[test]
    fn column_names() {
        assert_eq!(GridRange::MEAN.column_name(), "medium");
        assert_eq!(GridRange::HIGH.column_name(), "high");
        assert_eq!(GridRange::LOW.column_name(), "low");
    }

    #[test]
    fn only_meta_is_versioned() {
        assert!(GridSource::META.is_versioned());
        assert!(!GridSource::IPCC.is_versioned());
    }

    #[test]
    fn deserialize_from_free_text() {
        let source: GridSource = serde_json::from_str("\"IPCC Only\"").unwrap();
        assert_eq!(source, GridSource::IPCC);
        let range: GridRange = serde_json::from_str("\"Median\"").unwrap();
        assert_eq!(range, GridRange::MEAN);
        assert!(serde_json::from_str::<GridRange>("\"average\"").is_err());
    }

    #[test]
    fn names_read_back() {
        for source in GridSource::ALL.iter() {
            let json = serde_json::to_string(source).unwrap();
            assert_eq!(serde_json::from_str::<GridSource>(&json).unwrap(), *source);
            assert_eq!(source.to_string().parse::<GridSource>(), Ok(*source));
        }
        for range in GridRange::ALL.iter() {
            let json = serde_json::to_string(range).unwrap();
            assert_eq!(serde_json::from_str::<GridRange>(&json).unwrap(), *range);
            assert_eq!(range.to_string().parse::<GridRange>(), Ok(*range));
        }
        assert_eq!(
            serde_json::to_string(&GridSource::IPCC).unwrap(),
            "\"ipcc only\""
        );
        assert!("Meta".parse::<GridSource>().is_err());
    }
}
