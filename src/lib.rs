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
GridFactors
===========

This crate provides a library and binary that **resolves the emission factors of the
electricity grid** used by climate solution models: yearly tables (2015-2060) of grid
carbon intensity per world region, and the multipliers that convert CH4 and N2O masses
to CO2-equivalent.

The grid factors come from the AMPERE 3 MESSAGE Base model (World column, selected by
source, range and dataset version) and from fixed regional factors. Direct CO2 factors
derive from the AMPERE/MESSAGE WG3 BAU generation mixes and the IPCC WG3 Annex III
emission factors by fuel.

It also holds the following assumptions:

- reference data is static and embedded in the library
- only the World column depends on the selected dataset
- direct CO2 factors are constant over time
- configuration texts are matched exactly after lowercasing

Este *crate* proporciona una biblioteca y un programa que **obtiene los factores de
emisión de la red eléctrica** empleados en los modelos de soluciones climáticas: tablas
anuales (2015-2060) de intensidad de carbono de la red por región, y los multiplicadores
de conversión de CH4 y N2O a CO2 equivalente.

# Ejemplo

```rust
use gridfactors::*;

// Configuración a partir de los textos de la hoja de cálculo
let config = EmissionsConfig::from_strings(
    Some("AR5 with feedback"),
    "Meta-Analysis",
    "Median",
    Some(3),
).unwrap();

// Multiplicadores de CO2 equivalente
let co2eq = config.co2_equiv();
assert_eq!(co2eq.multipliers(), (34.0, 298.0));

// Tablas de factores de emisión de la red
let resolver = GridFactorResolver::new();
let table = resolver.conv_ref_grid_co2eq_per_kwh(&config).unwrap();
let direct = resolver.conv_ref_grid_co2_per_kwh();

// Visualización compacta
println!("{}", table.to_plain());
println!("{}", direct.to_plain());
```

*/

#![deny(missing_docs)]

#[cfg(test)] // <-- not needed in examples + integration tests
#[macro_use]
extern crate pretty_assertions;

mod asplain;
mod co2eq;
mod config;
mod grid;
mod normalize;

pub mod datasets;
pub mod error;
pub mod types;

pub use asplain::*;
pub use co2eq::*;
pub use config::*;
pub use grid::*;
pub use normalize::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
