// Copyright (c) 2018 Ministerio de Fomento
//                    Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

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

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>
//            Daniel Jiménez González <danielj@ietcc.csic.es>
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

use exitcode;

use serde_json;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::ResultExt;
use serde_derive::Serialize;
use tracing::{debug, info};

use gridfactors::error::GridFactorsError;
use gridfactors::types::{Co2EqSource, YearlyTable};
use gridfactors::*;

// Funciones auxiliares -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("Archivo {} no encontrado", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Error al leer el archivo")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) -> Result<(), Error> {
    let mut file = File::create(&path).context(format!(
        "No se ha podido crear el archivo {}",
        path.display()
    ))?;
    file.write_all(content)
        .context(format!("No se ha podido escribir en {}", path.display()))?;
    Ok(())
}

/// Nivel de registro según el número de apariciones de -v
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Interpreta una configuración en formato JSON o en líneas de metadatos
fn parse_config(text: &str) -> Result<EmissionsConfig, GridFactorsError> {
    if text.trim_start().starts_with('{') {
        EmissionsConfig::from_json(text)
    } else {
        text.parse::<EmissionsConfig>()
    }
}

/// Carga la configuración desde archivo, si se indica
fn get_file_config(archivo: Option<&str>) -> Option<EmissionsConfig> {
    let archivo = archivo?;
    let path = Path::new(archivo);
    let configstring = readfile(path).unwrap_or_else(|err| {
        eprintln!(
            "ERROR: No se ha podido leer el archivo de configuración \"{}\" -> {}",
            path.display(),
            err.as_fail()
        );
        exit(exitcode::IOERR);
    });
    println!("Configuración (archivo): \"{}\"", path.display());
    match parse_config(&configstring) {
        Ok(config) => Some(config),
        Err(err) => {
            eprintln!(
                "ERROR: Formato incorrecto del archivo de configuración \"{}\" ({})",
                path.display(),
                err
            );
            exit(exitcode::DATAERR);
        }
    }
}

/// Obtiene un valor priorizando CLI -> archivo de configuración -> valor por defecto.
fn get_value<T: std::fmt::Display>(
    cli: Option<Result<T, GridFactorsError>>,
    file: Option<T>,
    default: Option<T>,
    descr: &str,
) -> T {
    let (value, orig) = match (cli, file, default) {
        (Some(Ok(value)), _, _) => (value, "usuario"),
        (Some(Err(err)), _, _) => {
            eprintln!("ERROR: {} no válido ({})", descr, err);
            exit(exitcode::DATAERR);
        }
        (None, Some(value), _) => (value, "archivo de configuración"),
        (None, None, Some(value)) => (value, "predefinido"),
        (None, None, None) => {
            eprintln!("ERROR: Sin datos suficientes para determinar {}", descr);
            exit(exitcode::USAGE);
        }
    };
    info!("{} ({}): {}", descr, orig, value);
    value
}

/// Configuración de factores de red priorizando CLI -> archivo de configuración
fn get_co2eq_config(
    matches: &clap::ArgMatches<'_>,
    file_config: Option<EmissionsConfig>,
    co2eq_source: Co2EqSource,
) -> EmissionsConfig {
    let emissions_grid_source = get_value(
        matches
            .value_of("grid_source")
            .map(string_to_emissions_grid_source),
        file_config.map(|c| c.emissions_grid_source),
        None,
        "la fuente de factores de red",
    );
    let emissions_grid_range = get_value(
        matches
            .value_of("grid_range")
            .map(string_to_emissions_grid_range),
        file_config.map(|c| c.emissions_grid_range),
        None,
        "el rango de factores de red",
    );
    let grid_emissions_version = get_value(
        matches
            .value_of("grid_version")
            .map(|v| v.trim().parse::<u32>().map_err(GridFactorsError::from)),
        file_config.map(|c| c.grid_emissions_version),
        Some(DEFAULT_GRID_EMISSIONS_VERSION),
        "la versión de los datos de red",
    );
    EmissionsConfig {
        co2eq_source,
        emissions_grid_source,
        emissions_grid_range,
        grid_emissions_version,
    }
}

/// Resultados en formato JSON
#[derive(Serialize)]
struct JsonOutput<'a> {
    config: Option<&'a EmissionsConfig>,
    co2eq: Co2Equiv,
    table: &'a YearlyTable,
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("GridFactors")
        .bin_name("gridfactors")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2018-2022 Ministerio de Fomento,
                        Instituto de CC. de la Construcción Eduardo Torroja (IETcc-CSIC)

Autores: Rafael Villar Burke <pachi@ietcc.csic.es>,
         Daniel Jiménez González <danielj@ietcc.csic.es>
         Marta Sorribes Gil <msorribes@ietcc.csic.es>

Licencia: Publicado bajo licencia MIT.

")
        .about("GridFactors - Factores de emisión de la red eléctrica por región (2015-2060).")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("grid_source")
            .short("s")
            .long("grid_source")
            .value_name("GRID_SOURCE")
            .help("Fuente de los factores de red (p.e. \"Meta-Analysis\", \"IPCC Only\")")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("grid_range")
            .short("r")
            .long("grid_range")
            .value_name("GRID_RANGE")
            .help("Rango de los factores de red (p.e. \"Mean\", \"Median\", \"High\", \"Low\")")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("grid_version")
            .short("n")
            .long("grid_version")
            .value_name("GRID_VERSION")
            .help("Versión de los datos META (1 a 4). Se ignora para IPCC")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("co2eq")
            .short("e")
            .long("co2eq")
            .value_name("CO2EQ_SOURCE")
            .help("Estándar de equivalencia de CO2 (\"AR5 with feedback\", \"AR4\", \"SAR\")")
            .takes_value(true)
            .display_order(4))
        .arg(Arg::with_name("archivo_config")
            .short("c")
            .long("config")
            .value_name("ARCHIVO_CONFIG")
            .help("Archivo de configuración (JSON o líneas #META)")
            .takes_value(true)
            .display_order(5))
        .arg(Arg::with_name("direct")
            .short("d")
            .long("direct")
            .help("Muestra los factores de emisión directa (kg CO2/kWh) en lugar de CO2-eq.\nNo usa la fuente, rango ni versión de los factores de red"))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Archivo de salida de resultados detallados en formato JSON")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licencia")
            .help("Muestra la licencia del programa (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2018-2022 Ministerio de Fomento
                        Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>
           Daniel Jiménez González <danielj@ietcc.csic.es>
           Marta Sorribes Gil <msorribes@ietcc.csic.es>"
        );
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");
    init_logging(verbosity);
    debug!("Opciones indicadas: {:#?}", matches);

    println!("** Datos de entrada");

    // Configuración ------------------------------------------------------------------------------

    let file_config = get_file_config(matches.value_of("archivo_config"));

    let co2eq_source = get_value(
        matches.value_of("co2eq").map(string_to_conversion_source),
        file_config.map(|c| c.co2eq_source),
        Some(Co2EqSource::default()),
        "el estándar de equivalencia de CO2",
    );
    let co2eq = Co2Equiv::new(co2eq_source);

    // Los factores de emisión directa no dependen de la fuente, rango ni versión
    let direct = matches.is_present("direct");
    let config = if direct {
        None
    } else {
        Some(get_co2eq_config(&matches, file_config, co2eq_source))
    };

    if let Some(config) = &config {
        println!("{}", config.to_plain());
    }
    println!("{}", co2eq.to_plain());

    // Cálculo ------------------------------------------------------------------------------------

    let resolver = GridFactorResolver::new();
    let (table, units) = match &config {
        None => (resolver.conv_ref_grid_co2_per_kwh(), "kg CO2/kWh"),
        Some(config) => {
            let table = resolver
                .conv_ref_grid_co2eq_per_kwh(config)
                .unwrap_or_else(|err| {
                    eprintln!("ERROR: No se han podido obtener los factores de red ({})", err);
                    exit(exitcode::DATAERR);
                });
            (table, "kg CO2-eq/kWh")
        }
    };

    // Salida de resultados -----------------------------------------------------------------------

    if let Some(archivo_salida_json) = matches.value_of("archivo_salida_json") {
        let path = Path::new(archivo_salida_json);
        info!("Resultados en formato JSON: {:?}", path.display());
        let output = JsonOutput {
            config: config.as_ref(),
            co2eq,
            table: &table,
        };
        let json = serde_json::to_string_pretty(&output).unwrap_or_else(|err| {
            eprintln!("ERROR: conversión incorrecta de los resultados a JSON: {}", err);
            exit(exitcode::DATAERR);
        });
        if let Err(err) = writefile(path, json.as_bytes()) {
            eprintln!("ERROR: {}", err.as_fail());
            exit(exitcode::CANTCREAT);
        }
    }

    println!("** Factores de emisión de la red [{}]", units);
    println!("{}", table.to_plain());
}
