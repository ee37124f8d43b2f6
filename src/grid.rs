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
Factores de emisión de la red eléctrica (grid emission factors)
===============================================================

Resolución de tablas anuales de intensidad de carbono de la red eléctrica por región.

The resolver memoizes every table it builds, so repeated requests for the same
configuration return the same `Arc<YearlyTable>`. Reference data never changes, so
cache entries are never invalidated.
*/

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::{debug, trace};

use crate::{
    config::EmissionsConfig,
    datasets::{co2eq_region_factor, dataset_for, direct_co2_factor},
    error::GridFactorsError,
    types::{GridRange, GridSource, YearlyTable, FIRST_YEAR},
};

/// Clave canónica de la caché: la versión sólo cuenta para META
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct GridKey {
    source: GridSource,
    range: GridRange,
    version: Option<u32>,
}

impl GridKey {
    fn new(source: GridSource, range: GridRange, version: u32) -> Self {
        let version = if source.is_versioned() {
            Some(version)
        } else {
            None
        };
        Self {
            source,
            range,
            version,
        }
    }
}

/// Resolución de factores de emisión de la red
///
/// Grid emission factor resolver. Safe to share between threads: the cache is the
/// only mutable state and insertions keep the first table built for a key.
#[derive(Debug, Default)]
pub struct GridFactorResolver {
    co2eq_tables: RwLock<HashMap<GridKey, Arc<YearlyTable>>>,
    co2_table: OnceLock<Arc<YearlyTable>>,
}

impl GridFactorResolver {
    /// New resolver with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Tabla de factores de emisión equivalente de la red (kg CO2-eq/kWh)
    ///
    /// Grid emission factors (kg CO2-eq per kWh) derived from the AMPERE 3 MESSAGE Base
    /// model ("Emissions Factors"!A11:K57). The `World` column comes unchanged from the
    /// reference dataset selected by `grid_source`, `dataset_version` and `grid_range`.
    /// The other regions take fixed factors, independent of the selection.
    ///
    /// `dataset_version` is only used for `GridSource::META` (versions 1 to 4) and is
    /// ignored for `GridSource::IPCC`.
    pub fn resolve_co2eq_grid_table(
        &self,
        grid_source: GridSource,
        grid_range: GridRange,
        dataset_version: u32,
    ) -> Result<Arc<YearlyTable>, GridFactorsError> {
        let key = GridKey::new(grid_source, grid_range, dataset_version);

        if let Some(table) = self
            .co2eq_tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            trace!(?key, "Grid CO2-eq table found in cache");
            return Ok(Arc::clone(table));
        }

        let dataset = dataset_for(grid_source, dataset_version)?;
        debug!(
            %grid_source,
            %grid_range,
            dataset = dataset.name,
            "Building grid CO2-eq table"
        );
        let table = YearlyTable::from_fn(|year, region| {
            co2eq_region_factor(region)
                .unwrap_or_else(|| dataset.rows[(year - FIRST_YEAR) as usize].get(grid_range))
        });

        let mut tables = self
            .co2eq_tables
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let table = tables.entry(key).or_insert_with(|| Arc::new(table));
        Ok(Arc::clone(table))
    }

    /// Tabla de factores de emisión directa de la red (kg CO2/kWh)
    ///
    /// Generation mixes from the AMPERE/MESSAGE WG3 BAU scenario, direct emission
    /// factors by fuel from the IPCC WG3 Annex III Table A.III.2
    /// ("Emissions Factors"!A66:K112). Constant for every year.
    pub fn fixed_direct_emissions_table(&self) -> Arc<YearlyTable> {
        Arc::clone(self.co2_table.get_or_init(|| {
            debug!("Building grid direct CO2 table");
            Arc::new(YearlyTable::from_fn(|_, region| direct_co2_factor(region)))
        }))
    }

    /// Grid CO2-eq table for a configuration
    pub fn conv_ref_grid_co2eq_per_kwh(
        &self,
        config: &EmissionsConfig,
    ) -> Result<Arc<YearlyTable>, GridFactorsError> {
        self.resolve_co2eq_grid_table(
            config.emissions_grid_source,
            config.emissions_grid_range,
            config.grid_emissions_version,
        )
    }

    /// Grid direct CO2 table (same for every configuration)
    pub fn conv_ref_grid_co2_per_kwh(&self) -> Arc<YearlyTable> {
        self.fixed_direct_emissions_table()
    }

    /// Number of CO2-eq tables held in the cache
    pub fn cached_tables(&self) -> usize {
        self.co2eq_tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Region;
    use pretty_assertions::assert_eq;

    #[test]
    fn world_column_from_dataset() {
        let resolver = GridFactorResolver::new();
        let table = resolver
            .resolve_co2eq_grid_table(GridSource::META, GridRange::MEAN, 1)
            .unwrap();
        assert_eq!(table.get(2015, Region::World), Some(0.580491641));
        assert_eq!(table.get(2060, Region::World), Some(0.559324305));
        assert_eq!(table.get(2030, Region::EU), Some(0.360629290));
    }

    #[test]
    fn memoized_by_canonical_key() {
        let resolver = GridFactorResolver::new();
        let a = resolver
            .resolve_co2eq_grid_table(GridSource::IPCC, GridRange::LOW, 1)
            .unwrap();
        let b = resolver
            .resolve_co2eq_grid_table(GridSource::IPCC, GridRange::LOW, 7)
            .unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(resolver.cached_tables(), 1);

        let c = resolver
            .resolve_co2eq_grid_table(GridSource::META, GridRange::LOW, 1)
            .unwrap();
        let d = resolver
            .resolve_co2eq_grid_table(GridSource::META, GridRange::LOW, 2)
            .unwrap();
        assert!(!Arc::ptr_eq(&c, &d));
        assert_eq!(resolver.cached_tables(), 3);
    }

    #[test]
    fn errors_are_not_cached() {
        let resolver = GridFactorResolver::new();
        assert_eq!(
            resolver.resolve_co2eq_grid_table(GridSource::META, GridRange::MEAN, 99),
            Err(GridFactorsError::InvalidDatasetVersion(99))
        );
        assert_eq!(resolver.cached_tables(), 0);
    }

    #[test]
    fn direct_table_is_shared() {
        let resolver = GridFactorResolver::new();
        let a = resolver.fixed_direct_emissions_table();
        let b = resolver.conv_ref_grid_co2_per_kwh();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.get(2042, Region::World), Some(0.484512031078339));
        assert_eq!(a.get(2015, Region::USA), Some(0.594563066959381));
    }
}
