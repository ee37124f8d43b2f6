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

//! Regiones (columnas) de las tablas anuales

use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Región de las tablas de factores de red
///
/// Region column of a yearly table. Display and parsing use the column names of the
/// source spreadsheets ("Eastern Europe", "Asia (Sans Japan)", ...).
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Region {
    /// Global values, selected from a reference dataset
    World,
    /// OECD member countries as of 1990
    OECD90,
    /// Eastern Europe
    #[strum(serialize = "Eastern Europe")]
    #[serde(rename = "Eastern Europe")]
    EasternEurope,
    /// Asia, excluding Japan
    #[strum(serialize = "Asia (Sans Japan)")]
    #[serde(rename = "Asia (Sans Japan)")]
    AsiaSansJapan,
    /// Middle East and Africa
    #[strum(serialize = "Middle East and Africa")]
    #[serde(rename = "Middle East and Africa")]
    MiddleEastAndAfrica,
    /// Latin America
    #[strum(serialize = "Latin America")]
    #[serde(rename = "Latin America")]
    LatinAmerica,
    /// China
    China,
    /// India
    India,
    /// European Union
    EU,
    /// United States of America
    USA,
}

impl Region {
    /// Columnas de las tablas anuales, en orden
    ///
    /// Yearly table columns, in order
    pub const ALL: [Region; 10] = [
        Region::World,
        Region::OECD90,
        Region::EasternEurope,
        Region::AsiaSansJapan,
        Region::MiddleEastAndAfrica,
        Region::LatinAmerica,
        Region::China,
        Region::India,
        Region::EU,
        Region::USA,
    ];

    /// Position of the region in the column order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Is this the global column?
    pub fn is_world(self) -> bool {
        self == Region::World
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn column_order_matches_index() {
        for (i, region) in Region::ALL.iter().enumerate() {
            assert_eq!(region.index(), i);
        }
    }

    #[test]
    fn column_names() {
        let names: Vec<String> = Region::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "World",
                "OECD90",
                "Eastern Europe",
                "Asia (Sans Japan)",
                "Middle East and Africa",
                "Latin America",
                "China",
                "India",
                "EU",
                "USA"
            ]
        );
        assert_eq!(
            "Latin America".parse::<Region>().ok(),
            Some(Region::LatinAmerica)
        );
        assert!("LatinAmerica".parse::<Region>().is_err());
    }
}
