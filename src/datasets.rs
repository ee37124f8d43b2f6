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
Datos de referencia (reference datasets)
========================================

Proyecciones anuales de intensidad de carbono de la red eléctrica mundial
(kg CO2-eq/kWh), en sus bandas media, alta y baja, y factores regionales.

The values are literal copies of the "Emissions Factors" sheet of the spreadsheet
versions of the models and must be kept unchanged.
*/

use crate::error::GridFactorsError;
use crate::types::{GridRange, GridSource, Region, FIRST_YEAR, NUM_YEARS};

/// Fila de un conjunto de datos de referencia
///
/// Reference dataset row: yearly world grid intensity (medium, high and low estimates)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridRow {
    /// Year
    pub year: i32,
    /// Central estimate
    pub medium: f64,
    /// High estimate
    pub high: f64,
    /// Low estimate
    pub low: f64,
}

impl GridRow {
    /// Constructor
    pub const fn new(year: i32, medium: f64, high: f64, low: f64) -> Self {
        Self {
            year,
            medium,
            high,
            low,
        }
    }

    /// Value of the row for a grid range
    pub fn get(&self, range: GridRange) -> f64 {
        match range {
            GridRange::MEAN => self.medium,
            GridRange::HIGH => self.high,
            GridRange::LOW => self.low,
        }
    }
}

/// Conjunto de datos de referencia
///
/// Immutable reference dataset of yearly world grid emission factors, 2015-2060
#[derive(Debug, PartialEq)]
pub struct GridDataset {
    /// Dataset name
    pub name: &'static str,
    /// Spreadsheet range the values were taken from
    pub provenance: &'static str,
    /// Yearly rows, 2015 to 2060
    pub rows: [GridRow; NUM_YEARS],
}

impl GridDataset {
    /// Row for a given year, if available
    pub fn row(&self, year: i32) -> Option<&GridRow> {
        if year < FIRST_YEAR {
            return None;
        }
        self.rows.get((year - FIRST_YEAR) as usize)
    }

    /// Value for a given year and range, if the year is available
    pub fn value(&self, year: i32, range: GridRange) -> Option<f64> {
        self.row(year).map(|r| r.get(range))
    }

    /// All values of a range column, ordered by year
    pub fn column(&self, range: GridRange) -> Vec<f64> {
        self.rows.iter().map(|r| r.get(range)).collect()
    }
}

/// Versiones disponibles de los datos META
pub const META_VERSIONS: [u32; 4] = [1, 2, 3, 4];

/// Selecciona el conjunto de datos para una fuente y versión
///
/// Select the reference dataset for a grid source. IPCC has a single table and
/// ignores `version`; META requires one of `META_VERSIONS`.
pub fn dataset_for(
    source: GridSource,
    version: u32,
) -> Result<&'static GridDataset, GridFactorsError> {
    match source {
        GridSource::IPCC => Ok(&WORLD_IPCC),
        GridSource::META => match version {
            1 => Ok(&WORLD_META_1),
            2 => Ok(&WORLD_META_2),
            3 => Ok(&WORLD_META_3),
            4 => Ok(&WORLD_META_4),
            _ => Err(GridFactorsError::InvalidDatasetVersion(version)),
        },
    }
}

/// Factores regionales de emisión equivalente (directos e indirectos), kg CO2-eq/kWh
///
/// Generation mixes from the AMPERE/MESSAGE WG3 BAU scenario, direct and indirect
/// emission factors by fuel from the IPCC WG3 Annex III Table A.III.2.
/// There is no regional factor for `World`, which comes from a reference dataset.
pub fn co2eq_region_factor(region: Region) -> Option<f64> {
    match region {
        Region::World => None,
        Region::OECD90 => Some(0.454068989),
        Region::EasternEurope => Some(0.724747956),
        Region::AsiaSansJapan => Some(0.457658947),
        Region::MiddleEastAndAfrica => Some(0.282243907),
        Region::LatinAmerica => Some(0.564394712),
        Region::China => Some(0.535962403),
        Region::India => Some(0.787832379),
        Region::EU => Some(0.360629290),
        Region::USA => Some(0.665071666),
    }
}

/// Factores regionales de emisión directa, kg CO2/kWh ("Emissions Factors"!A66:K112)
///
/// Generation mixes from the AMPERE/MESSAGE WG3 BAU scenario, direct emission
/// factors by fuel from the IPCC WG3 Annex III Table A.III.2.
pub fn direct_co2_factor(region: Region) -> f64 {
    match region {
        Region::World => 0.484512031078339,
        Region::OECD90 => 0.392126590013504,
        Region::EasternEurope => 0.659977316856384,
        Region::AsiaSansJapan => 0.385555833578110,
        Region::MiddleEastAndAfrica => 0.185499981045723,
        Region::LatinAmerica => 0.491537630558014,
        Region::China => 0.474730312824249,
        Region::India => 0.725081980228424,
        Region::EU => 0.297016531229019,
        Region::USA => 0.594563066959381,
    }
}

/// META, versión 1
pub static WORLD_META_1: GridDataset = GridDataset {
    name: "META v1",
    provenance: "\"Emissions Factors\"!A290:D336",
    rows: [
        GridRow::new(2015, 0.580491641, 0.726805942, 0.444419682),
        GridRow::new(2016, 0.580381730, 0.726494196, 0.444511607),
        GridRow::new(2017, 0.580191808, 0.726117383, 0.444508574),
        GridRow::new(2018, 0.579932742, 0.725684840, 0.444422987),
        GridRow::new(2019, 0.579613986, 0.725204693, 0.444265621),
        GridRow::new(2020, 0.581083120, 0.726403172, 0.446005409),
        GridRow::new(2021, 0.578829123, 0.724128766, 0.443771822),
        GridRow::new(2022, 0.578376324, 0.723544325, 0.443450666),
        GridRow::new(2023, 0.577890875, 0.722935374, 0.443088717),
        GridRow::new(2024, 0.577377675, 0.722306095, 0.442691597),
        GridRow::new(2025, 0.576724036, 0.721565698, 0.442124716),
        GridRow::new(2026, 0.576284921, 0.721000946, 0.441811237),
        GridRow::new(2027, 0.575712661, 0.720331282, 0.441336382),
        GridRow::new(2028, 0.575127412, 0.719653850, 0.440843316),
        GridRow::new(2029, 0.574531990, 0.718971040, 0.440335281),
        GridRow::new(2030, 0.573264022, 0.717635960, 0.439134425),
        GridRow::new(2031, 0.573320545, 0.717597727, 0.439285704),
        GridRow::new(2032, 0.572708901, 0.716910953, 0.438749190),
        GridRow::new(2033, 0.572095895, 0.716226301, 0.438207831),
        GridRow::new(2034, 0.571483259, 0.715545242, 0.437663617),
        GridRow::new(2035, 0.570821497, 0.714820866, 0.437064470),
        GridRow::new(2036, 0.570265395, 0.714199285, 0.436573847),
        GridRow::new(2037, 0.569663069, 0.713536875, 0.436031604),
        GridRow::new(2038, 0.569066909, 0.712883028, 0.435493132),
        GridRow::new(2039, 0.568478136, 0.712238796, 0.434959817),
        GridRow::new(2040, 0.567083308, 0.710887186, 0.433521771),
        GridRow::new(2041, 0.567327331, 0.710983152, 0.433913852),
        GridRow::new(2042, 0.566767481, 0.710373641, 0.433403663),
        GridRow::new(2043, 0.566219394, 0.709777559, 0.432903570),
        GridRow::new(2044, 0.565684079, 0.709195799, 0.432414701),
        GridRow::new(2045, 0.565044176, 0.708501694, 0.431829000),
        GridRow::new(2046, 0.564655700, 0.708078732, 0.431475009),
        GridRow::new(2047, 0.564164556, 0.707545143, 0.431026311),
        GridRow::new(2048, 0.563690051, 0.707029331, 0.430593113),
        GridRow::new(2049, 0.563233144, 0.706532169, 0.430176460),
        GridRow::new(2050, 0.563942003, 0.707108074, 0.431018275),
        GridRow::new(2051, 0.562376012, 0.705597348, 0.429397017),
        GridRow::new(2052, 0.561977781, 0.705161518, 0.429036385),
        GridRow::new(2053, 0.561601149, 0.704748013, 0.428696627),
        GridRow::new(2054, 0.561247194, 0.704357833, 0.428378896),
        GridRow::new(2055, 0.560917031, 0.703992021, 0.428084382),
        GridRow::new(2056, 0.560611819, 0.703651663, 0.427814318),
        GridRow::new(2057, 0.560332776, 0.703337903, 0.427569991),
        GridRow::new(2058, 0.560081211, 0.703051332, 0.427353431),
        GridRow::new(2059, 0.559858464, 0.702793863, 0.427165406),
        GridRow::new(2060, 0.559324305, 0.702254712, 0.426636240),
    ],
};

/// IPCC
pub static WORLD_IPCC: GridDataset = GridDataset {
    name: "IPCC",
    provenance: "\"Emissions Factors\"!F290:I336",
    rows: [
        GridRow::new(2015, 0.484233479886851, 0.954301230978324, 0.415714611547194),
        GridRow::new(2016, 0.483874688367180, 0.953705808726241, 0.415699168023559),
        GridRow::new(2017, 0.483468578344429, 0.953091499730308, 0.415616211090683),
        GridRow::new(2018, 0.483022233781448, 0.952462141044895, 0.415474739683663),
        GridRow::new(2019, 0.482541827613129, 0.951821094094534, 0.415282575858891),
        GridRow::new(2020, 0.483415642278809, 0.952177536197487, 0.416520905499686),
        GridRow::new(2021, 0.481499412617218, 0.950514955984204, 0.414772457309720),
        GridRow::new(2022, 0.480945957200632, 0.949854330000227, 0.414465552432322),
        GridRow::new(2023, 0.480375890793439, 0.949191227373746, 0.414130387202149),
        GridRow::new(2024, 0.479792370097929, 0.948527306071946, 0.413771028606294),
        GridRow::new(2025, 0.479129875365096, 0.947838144272479, 0.413292094853295),
        GridRow::new(2026, 0.478595824341775, 0.947202675323842, 0.412993759718887),
        GridRow::new(2027, 0.477987474489965, 0.946544387335615, 0.412581910201081),
        GridRow::new(2028, 0.477375134675864, 0.945890189693049, 0.412158128728530),
        GridRow::new(2029, 0.476760604919920, 0.945241007845619, 0.411724756299051),
        GridRow::new(2030, 0.475609144710954, 0.944163265130839, 0.410760518917611),
        GridRow::new(2031, 0.475531330098496, 0.943960978462593, 0.410837481063205),
        GridRow::new(2032, 0.474919397316536, 0.943331597296287, 0.410387213255880),
        GridRow::new(2033, 0.474310925799146, 0.942710164328208, 0.409934674540315),
        GridRow::new(2034, 0.473707024060823, 0.942097253091754, 0.409481302620380),
        GridRow::new(2035, 0.473069619537973, 0.941464119365002, 0.408987650013088),
        GridRow::new(2036, 0.472516992530166, 0.940899134962305, 0.408577287386756),
        GridRow::new(2037, 0.471932749289687, 0.940314944696740, 0.408129046349254),
        GridRow::new(2038, 0.471356840757086, 0.939741296080086, 0.407684776056632),
        GridRow::new(2039, 0.470790067978465, 0.939178632698648, 0.407245483451931),
        GridRow::new(2040, 0.469678044528875, 0.938292812842989, 0.406144087639722),
        GridRow::new(2041, 0.469686967218630, 0.938087976021352, 0.406385614113651),
        GridRow::new(2042, 0.469152097173049, 0.937560823287853, 0.405966833587310),
        GridRow::new(2043, 0.468629288818192, 0.937046343521181, 0.405556634681864),
        GridRow::new(2044, 0.468119232533872, 0.936544954506346, 0.405155846275011),
        GridRow::new(2045, 0.467511263814817, 0.935948980928557, 0.404676293987320),
        GridRow::new(2046, 0.467140086966888, 0.935583127327976, 0.404385713672719),
        GridRow::new(2047, 0.466672338575004, 0.935123538476659, 0.404017937790258),
        GridRow::new(2048, 0.466220041675584, 0.934678754794794, 0.403662724592571),
        GridRow::new(2049, 0.465783884392082, 0.934249237215735, 0.403320851377671),
        GridRow::new(2050, 0.466202378014719, 0.934415166260444, 0.403919169849744),
        GridRow::new(2051, 0.464962806154690, 0.933437918543026, 0.402680273560695),
        GridRow::new(2052, 0.464579339264012, 0.933057121808404, 0.402383178115162),
        GridRow::new(2053, 0.464214935271267, 0.932693614309824, 0.402102653404484),
        GridRow::new(2054, 0.463870395799940, 0.932347969864178, 0.401839564471306),
        GridRow::new(2055, 0.463546558438388, 0.932020795519145, 0.401594806949223),
        GridRow::new(2056, 0.463244298699963, 0.931712733709783, 0.401369308350724),
        GridRow::new(2057, 0.462964541559962, 0.931424469977991, 0.401164041108521),
        GridRow::new(2058, 0.462707434123228, 0.931155096821641, 0.400980275898344),
        GridRow::new(2059, 0.462474856382921, 0.930907038457189, 0.400818857404330),
        GridRow::new(2060, 0.462020537057214, 0.930512636676233, 0.400404559244924),
    ],
};

/// META, versión 2 (edición 2020)
pub static WORLD_META_2: GridDataset = GridDataset {
    name: "META v2",
    provenance: "\"Emissions Factors\"!A290:D336, 2020 edition",
    rows: [
        GridRow::new(2015, 0.619753649484954, 0.834200994227942, 0.446911398737087),
        GridRow::new(2016, 0.613223327855322, 0.827419241197181, 0.441324423346894),
        GridRow::new(2017, 0.606715005275064, 0.817903147977287, 0.436594799095373),
        GridRow::new(2018, 0.602650482222055, 0.811957311805342, 0.433711588716669),
        GridRow::new(2019, 0.599546311600711, 0.808809196292089, 0.431043861809484),
        GridRow::new(2020, 0.595844101320605, 0.805066315637190, 0.427859783304937),
        GridRow::new(2021, 0.592313613174105, 0.801495614192573, 0.424823161474647),
        GridRow::new(2022, 0.588839905934230, 0.797975220897886, 0.421832598087871),
        GridRow::new(2023, 0.585449295836798, 0.794534135403531, 0.418911809360421),
        GridRow::new(2024, 0.582134106340607, 0.791164960038795, 0.416054306144423),
        GridRow::new(2025, 0.579212349557159, 0.788184425039760, 0.413534464382670),
        GridRow::new(2026, 0.575701698847632, 0.784615063765847, 0.410505236766206),
        GridRow::new(2027, 0.572571412159762, 0.781421736177582, 0.407802618493011),
        GridRow::new(2028, 0.569490331287843, 0.778275031115247, 0.405141116198009),
        GridRow::new(2029, 0.566452830841887, 0.775169515850856, 0.402515970114720),
        GridRow::new(2030, 0.563582610910188, 0.772224408553539, 0.400032800926231),
        GridRow::new(2031, 0.560487575191628, 0.769061765323778, 0.397356976482730),
        GridRow::new(2032, 0.557549996015452, 0.766050030587511, 0.394814811934275),
        GridRow::new(2033, 0.554636302401122, 0.763060441667938, 0.392292329996334),
        GridRow::new(2034, 0.551742154484868, 0.760088796218024, 0.389785854191242),
        GridRow::new(2035, 0.548784376564443, 0.757051944289887, 0.387224226526241),
        GridRow::new(2036, 0.545979252104998, 0.754165935635464, 0.384793649089973),
        GridRow::new(2037, 0.543106698312767, 0.751211316808699, 0.382304463418555),
        GridRow::new(2038, 0.540236787794954, 0.748258161570859, 0.379817005842378),
        GridRow::new(2039, 0.537352597396159, 0.745289123477943, 0.377317616531354),
        GridRow::new(2040, 0.534257808148527, 0.742113543256056, 0.374637411133684),
        GridRow::new(2041, 0.531581023073820, 0.739345510659962, 0.372313849192314),
        GridRow::new(2042, 0.528685258247064, 0.736362655581270, 0.369802465048003),
        GridRow::new(2043, 0.525775521926616, 0.733365101778856, 0.367278694303595),
        GridRow::new(2044, 0.522848765756972, 0.730349877395092, 0.364739945323485),
        GridRow::new(2045, 0.519796747547837, 0.727206616166885, 0.362092302098936),
        GridRow::new(2046, 0.516932341500910, 0.724254851488976, 0.359607432066743),
        GridRow::new(2047, 0.513936894157109, 0.721169405528371, 0.357008750494339),
        GridRow::new(2048, 0.510912853777991, 0.718054985950131, 0.354385243670808),
        GridRow::new(2049, 0.508316537396635, 0.715381773638989, 0.352134907312678),
        GridRow::new(2050, 0.506594921787481, 0.713622488394168, 0.350653654650227),
        GridRow::new(2051, 0.504688929275709, 0.711690195955989, 0.349010631116045),
        GridRow::new(2052, 0.502854324722711, 0.709827677277282, 0.347428887775673),
        GridRow::new(2053, 0.500981466874364, 0.707928699401097, 0.345814547929372),
        GridRow::new(2054, 0.499068430228993, 0.705991414176679, 0.344165978406253),
        GridRow::new(2055, 0.497072403296562, 0.703969699319331, 0.342445358912229),
        GridRow::new(2056, 0.495114656946048, 0.701995050774066, 0.340760075761759),
        GridRow::new(2057, 0.493070596435275, 0.699932787017676, 0.338999924825479),
        GridRow::new(2058, 0.490979702541600, 0.697825838098367, 0.337199902765339),
        GridRow::new(2059, 0.488840556318235, 0.695672846558836, 0.335358807437345),
        GridRow::new(2060, 0.486810301162345, 0.693612676011530, 0.333607332510495),
    ],
};

/// META, versión 3 (variante de la edición 2020, p.e. Bike Infrastructure)
pub static WORLD_META_3: GridDataset = GridDataset {
    name: "META v3",
    provenance: "\"Emissions Factors\"!A290:D336, 2020 edition variant (Bike Infrastructure)",
    rows: [
        GridRow::new(2015, 0.617381627523255, 0.830817877069664, 0.446511800066534),
        GridRow::new(2016, 0.613053711917674, 0.824698901512021, 0.443404400078671),
        GridRow::new(2017, 0.605559021113794, 0.815532512015463, 0.437490678056033),
        GridRow::new(2018, 0.599823764037522, 0.807926586189615, 0.433230012701179),
        GridRow::new(2019, 0.596692109138654, 0.804739279793431, 0.430557603413934),
        GridRow::new(2020, 0.592956465174414, 0.800948724769081, 0.427367828954101),
        GridRow::new(2021, 0.589394210498330, 0.797332726214472, 0.424325795194590),
        GridRow::new(2022, 0.585889940804312, 0.793768752747037, 0.421330025011830),
        GridRow::new(2023, 0.582469966488571, 0.790285795690257, 0.418404233626765),
        GridRow::new(2024, 0.579126508336472, 0.786876310967440, 0.415541914399482),
        GridRow::new(2025, 0.576180723793771, 0.783861513867133, 0.413017979130062),
        GridRow::new(2026, 0.572640473126760, 0.780249944881284, 0.409983708694097),
        GridRow::new(2027, 0.569484653817574, 0.777020209351351, 0.407276740536253),
        GridRow::new(2028, 0.566378787697806, 0.773838162055771, 0.404611015683456),
        GridRow::new(2029, 0.563317175272247, 0.770698264597087, 0.401981761744236),
        GridRow::new(2030, 0.560425096459919, 0.767721987885512, 0.399494868550752),
        GridRow::new(2031, 0.557305440093151, 0.764524237131432, 0.396814849591601),
        GridRow::new(2032, 0.554345365121137, 0.761480424779140, 0.394268852529604),
        GridRow::new(2033, 0.551409591841439, 0.758459351619903, 0.391742608972507),
        GridRow::new(2034, 0.548493724307989, 0.755456735336789, 0.389232432888142),
        GridRow::new(2035, 0.545513743488868, 0.752388223445871, 0.386667022609245),
        GridRow::new(2036, 0.542688055628436, 0.749472892651180, 0.384232941873367),
        GridRow::new(2037, 0.539794403434954, 0.746488188806800, 0.381740161756609),
        GridRow::new(2038, 0.536903541206374, 0.743505157722919, 0.379249134726127),
        GridRow::new(2039, 0.533998346916998, 0.740506169378769, 0.376746167071146),
        GridRow::new(2040, 0.530880184208068, 0.737297260044097, 0.374061979635782),
        GridRow::new(2041, 0.528185054593160, 0.734503069266229, 0.371735292412725),
        GridRow::new(2042, 0.525268472346747, 0.731490529832329, 0.369220361692718),
        GridRow::new(2043, 0.522337858549740, 0.728463206037271, 0.366693034140975),
        GridRow::new(2044, 0.519390127508675, 0.725418072781803, 0.364150711760779),
        GridRow::new(2045, 0.516316182594658, 0.722243545426141, 0.361499332976304),
        GridRow::new(2046, 0.513431317163278, 0.719262606929121, 0.359010977365359),
        GridRow::new(2047, 0.510414388803142, 0.716146530365413, 0.356408636163102),
        GridRow::new(2048, 0.507368630222783, 0.713001141973038, 0.353781429301529),
        GridRow::new(2049, 0.504753471538005, 0.710301061700499, 0.351527882859898),
        GridRow::new(2050, 0.503017662563427, 0.708521537592850, 0.350044212133840),
        GridRow::new(2051, 0.501095097574196, 0.706565613824964, 0.348398365216802),
        GridRow::new(2052, 0.499244741360773, 0.704680634250964, 0.346813938332699),
        GridRow::new(2053, 0.497355610112209, 0.702758451510754, 0.345196826056066),
        GridRow::new(2054, 0.495425752440293, 0.700797180540976, 0.343545390805835),
        GridRow::new(2055, 0.493412239186826, 0.698750531269397, 0.341821792241291),
        GridRow::new(2056, 0.491436597471548, 0.696750365038799, 0.340133460333253),
        GridRow::new(2057, 0.489373931181422, 0.694661570589733, 0.338370139609077),
        GridRow::new(2058, 0.487263793557604, 0.692527181299305, 0.336566839076065),
        GridRow::new(2059, 0.485104746166210, 0.690345811922819, 0.334722353270288),
        GridRow::new(2060, 0.483057064536976, 0.688260792300398, 0.332967909468916),
    ],
};

/// META, versión 4 (edición 2020, Alternative Cement)
pub static WORLD_META_4: GridDataset = GridDataset {
    name: "META v4",
    provenance: "\"Emissions Factors\"!A290:D336, 2020 edition (Alternative Cement)",
    rows: [
        GridRow::new(2015, 0.619731238862595, 0.833329897638502, 0.447394567903417),
        GridRow::new(2016, 0.613191401904823, 0.826475738292122, 0.441840091403282),
        GridRow::new(2017, 0.606673460423821, 0.816888151363190, 0.437142332630907),
        GridRow::new(2018, 0.602621620826105, 0.810921431890408, 0.434283943572488),
        GridRow::new(2019, 0.599517169584422, 0.807763244481335, 0.431621781691129),
        GridRow::new(2020, 0.595814617939265, 0.804008111709454, 0.428444472850274),
        GridRow::new(2021, 0.592283805449719, 0.800425769093762, 0.425414283117659),
        GridRow::new(2022, 0.588809786160664, 0.796894175873816, 0.422429908026953),
        GridRow::new(2023, 0.585418876248296, 0.793442329560030, 0.419515064976376),
        GridRow::new(2024, 0.582103398123095, 0.790062794855959, 0.416663285607405),
        GridRow::new(2025, 0.579181396011097, 0.787073454637732, 0.414148308994488),
        GridRow::new(2026, 0.575670443079687, 0.783493246155346, 0.411125074787444),
        GridRow::new(2027, 0.572539895698304, 0.780290561875727, 0.408427626368065),
        GridRow::new(2028, 0.569458561763715, 0.777134774004723, 0.405771142598445),
        GridRow::new(2029, 0.566420815129301, 0.774020422657726, 0.403150878716958),
        GridRow::new(2030, 0.563550372013766, 0.771067304949067, 0.400672135522024),
        GridRow::new(2031, 0.560455084913133, 0.767895639229866, 0.398001296275715),
        GridRow::new(2032, 0.557517276050081, 0.764875660678135, 0.395463686683625),
        GridRow::new(2033, 0.554603356997654, 0.761877980438385, 0.392945675443809),
        GridRow::new(2034, 0.551708987319473, 0.758898375611644, 0.390443597434166),
        GridRow::new(2035, 0.548750982702714, 0.755853387203211, 0.387886465419616),
        GridRow::new(2036, 0.545945648286556, 0.752959842879268, 0.385460051667747),
        GridRow::new(2037, 0.543072879075145, 0.749997492326640, 0.382975138007765),
        GridRow::new(2038, 0.540202754635895, 0.747036659119172, 0.380491922741082),
        GridRow::new(2039, 0.537318349782893, 0.744059923934800, 0.377996786304940),
        GridRow::new(2040, 0.534223321887233, 0.740875778267926, 0.375321313573634),
        GridRow::new(2041, 0.531546349510856, 0.738101023126640, 0.373001466040980),
        GridRow::new(2042, 0.528650372133802, 0.735110539290677, 0.370494297014854),
        GridRow::new(2043, 0.525740422649863, 0.732105334722523, 0.367974753548975),
        GridRow::new(2044, 0.522813452322305, 0.729082423881671, 0.365440251567938),
        GridRow::new(2045, 0.519761210236833, 0.725931127387228, 0.362797048070022),
        GridRow::new(2046, 0.516896595295224, 0.722971865157726, 0.360316320660926),
        GridRow::new(2047, 0.513900928625662, 0.719878547258031, 0.357721988571989),
        GridRow::new(2048, 0.510876666499075, 0.716756168821856, 0.355102879257204),
        GridRow::new(2049, 0.508280157733779, 0.714076051555076, 0.352856358095056),
        GridRow::new(2050, 0.506558397207335, 0.712311565005700, 0.351377979310044),
        GridRow::new(2051, 0.504652235487031, 0.710373199412923, 0.349738311376714),
        GridRow::new(2052, 0.502817470106218, 0.708504908376451, 0.348159757437882),
        GridRow::new(2053, 0.500944446102982, 0.706599966945595, 0.346548712635171),
        GridRow::new(2054, 0.499031237711340, 0.704656517483214, 0.344903549039207),
        GridRow::new(2055, 0.497035032239839, 0.702628394583901, 0.343186470181391),
        GridRow::new(2056, 0.495077103173832, 0.700647188098395, 0.341504810490442),
        GridRow::new(2057, 0.493032852694081, 0.698578106063043, 0.339748426858670),
        GridRow::new(2058, 0.490941762317814, 0.696464105081149, 0.337952301275530),
        GridRow::new(2059, 0.488802412899276, 0.694303820554168, 0.336115235542782),
        GridRow::new(2060, 0.486771979815374, 0.692237263896700, 0.334367289134159),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn all() -> [&'static GridDataset; 5] {
        [
            &WORLD_IPCC,
            &WORLD_META_1,
            &WORLD_META_2,
            &WORLD_META_3,
            &WORLD_META_4,
        ]
    }

    #[test]
    fn datasets_span_2015_2060() {
        for dataset in all().iter() {
            let years: Vec<i32> = dataset.rows.iter().map(|r| r.year).collect();
            assert_eq!(years, (2015..=2060).collect::<Vec<_>>());
        }
    }

    #[test]
    fn high_over_medium_over_low() {
        for dataset in all().iter() {
            for row in dataset.rows.iter() {
                assert!(
                    row.high > row.medium && row.medium > row.low,
                    "{} {}",
                    dataset.name,
                    row.year
                );
            }
        }
    }

    #[test]
    fn literal_values() {
        assert_eq!(WORLD_IPCC.value(2015, GridRange::HIGH), Some(0.954301230978324));
        assert_eq!(WORLD_META_1.value(2060, GridRange::MEAN), Some(0.559324305));
        assert_eq!(WORLD_META_2.value(2030, GridRange::LOW), Some(0.400032800926231));
        assert_eq!(WORLD_META_3.value(2050, GridRange::LOW), Some(0.350044212133840));
        assert_eq!(WORLD_META_4.value(2015, GridRange::MEAN), Some(0.619731238862595));
        assert_eq!(WORLD_META_4.value(2061, GridRange::MEAN), None);
        assert_eq!(WORLD_META_4.value(2014, GridRange::MEAN), None);
    }

    #[test]
    fn selection() {
        assert_eq!(dataset_for(GridSource::IPCC, 1).unwrap().name, "IPCC");
        assert_eq!(dataset_for(GridSource::IPCC, 7).unwrap().name, "IPCC");
        for version in META_VERSIONS.iter() {
            let dataset = dataset_for(GridSource::META, *version).unwrap();
            assert_eq!(dataset.name, format!("META v{}", version));
        }
        assert_eq!(
            dataset_for(GridSource::META, 0),
            Err(GridFactorsError::InvalidDatasetVersion(0))
        );
        assert_eq!(
            dataset_for(GridSource::META, 5),
            Err(GridFactorsError::InvalidDatasetVersion(5))
        );
    }

    #[test]
    fn region_factors() {
        assert_eq!(co2eq_region_factor(Region::World), None);
        assert_eq!(co2eq_region_factor(Region::OECD90), Some(0.454068989));
        assert_eq!(co2eq_region_factor(Region::USA), Some(0.665071666));
        assert_eq!(direct_co2_factor(Region::World), 0.484512031078339);
        assert_eq!(direct_co2_factor(Region::India), 0.725081980228424);
    }
}
