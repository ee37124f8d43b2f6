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
Tablas anuales (yearly tables)
==============================

Tabla de valores por año (2015-2060) y región, con columnas fijas y ordenadas.
*/

use serde_derive::Serialize;

use super::Region;

/// Primer año de las tablas anuales
pub const FIRST_YEAR: i32 = 2015;

/// Último año de las tablas anuales
pub const LAST_YEAR: i32 = 2060;

/// Número de filas (años) de las tablas anuales
pub const NUM_YEARS: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

/// Fila de una tabla anual: un valor por región, en el orden de `Region::ALL`
///
/// Yearly table row
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct YearlyRow {
    /// Year
    pub year: i32,
    /// One value per region column
    pub values: [f64; 10],
}

impl YearlyRow {
    /// Value of the row for the given region
    pub fn get(&self, region: Region) -> f64 {
        self.values[region.index()]
    }
}

/// Tabla anual de factores por región
///
/// Year x region table of f64 values. Rows always span `FIRST_YEAR..=LAST_YEAR` and
/// columns are always `Region::ALL`, in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyTable {
    index: &'static str,
    columns: Vec<Region>,
    rows: Vec<YearlyRow>,
}

impl YearlyTable {
    /// Build a table calling `value(year, region)` for every cell
    pub fn from_fn<F>(mut value: F) -> Self
    where
        F: FnMut(i32, Region) -> f64,
    {
        let rows = (FIRST_YEAR..=LAST_YEAR)
            .map(|year| {
                let mut values = [0.0; 10];
                for region in Region::ALL.iter() {
                    values[region.index()] = value(year, *region);
                }
                YearlyRow { year, values }
            })
            .collect();
        Self {
            index: "Year",
            columns: Region::ALL.to_vec(),
            rows,
        }
    }

    /// Name of the table index
    pub fn index_name(&self) -> &'static str {
        self.index
    }

    /// Region columns, in order
    pub fn columns(&self) -> &[Region] {
        &self.columns
    }

    /// Table rows, ordered by year
    pub fn rows(&self) -> &[YearlyRow] {
        &self.rows
    }

    /// Years of the table index
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.iter().map(|r| r.year)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a given year, if inside the table range
    pub fn row(&self, year: i32) -> Option<&YearlyRow> {
        if year < FIRST_YEAR || year > LAST_YEAR {
            return None;
        }
        self.rows.get((year - FIRST_YEAR) as usize)
    }

    /// Value for a given year and region, if the year is inside the table range
    pub fn get(&self, year: i32, region: Region) -> Option<f64> {
        self.row(year).map(|r| r.get(region))
    }

    /// All values of a region column, ordered by year
    pub fn column(&self, region: Region) -> Vec<f64> {
        self.rows.iter().map(|r| r.get(region)).collect()
    }
}
