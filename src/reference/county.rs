//! Iowa county reference data.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// County name used when a record carries none
pub const UNKNOWN_COUNTY: &str = "UNKNOWN";

/// County code used when none was supplied and the name did not resolve
pub const UNKNOWN_COUNTY_NUMBER: i32 = -1;

/// The 99 Iowa counties with their state code, alphabetical by name
const IOWA_COUNTIES: [(&str, i32); 99] = [
    ("ADAIR", 1),
    ("ADAMS", 2),
    ("ALLAMAKEE", 3),
    ("APPANOOSE", 4),
    ("AUDUBON", 5),
    ("BENTON", 6),
    ("BLACK_HAWK", 7),
    ("BOONE", 8),
    ("BREMER", 9),
    ("BUCHANAN", 10),
    ("BUENA_VISTA", 11),
    ("BUTLER", 12),
    ("CALHOUN", 13),
    ("CARROLL", 14),
    ("CASS", 15),
    ("CEDAR", 16),
    ("CERRO_GORDO", 17),
    ("CHEROKEE", 18),
    ("CHICKASAW", 19),
    ("CLARKE", 20),
    ("CLAY", 21),
    ("CLAYTON", 22),
    ("CLINTON", 23),
    ("CRAWFORD", 24),
    ("DALLAS", 25),
    ("DAVIS", 26),
    ("DECATUR", 27),
    ("DELAWARE", 28),
    ("DES_MOINES", 29),
    ("DICKINSON", 30),
    ("DUBUQUE", 31),
    ("EMMET", 32),
    ("FAYETTE", 33),
    ("FLOYD", 34),
    ("FRANKLIN", 35),
    ("FREMONT", 36),
    ("GREENE", 37),
    ("GRUNDY", 38),
    ("GUTHRIE", 39),
    ("HAMILTON", 40),
    ("HANCOCK", 41),
    ("HARDIN", 42),
    ("HARRISON", 43),
    ("HENRY", 44),
    ("HOWARD", 45),
    ("HUMBOLDT", 46),
    ("IDA", 47),
    ("IOWA", 48),
    ("JACKSON", 49),
    ("JASPER", 50),
    ("JEFFERSON", 51),
    ("JOHNSON", 52),
    ("JONES", 53),
    ("KEOKUK", 54),
    ("KOSSUTH", 55),
    ("LEE", 56),
    ("LINN", 57),
    ("LOUISA", 58),
    ("LUCAS", 59),
    ("LYON", 60),
    ("MADISON", 61),
    ("MAHASKA", 62),
    ("MARION", 63),
    ("MARSHALL", 64),
    ("MILLS", 65),
    ("MITCHELL", 66),
    ("MONONA", 67),
    ("MONROE", 68),
    ("MONTGOMERY", 69),
    ("MUSCATINE", 70),
    ("O'BRIEN", 71),
    ("OSCEOLA", 72),
    ("PAGE", 73),
    ("PALO_ALTO", 74),
    ("PLYMOUTH", 75),
    ("POCAHONTAS", 76),
    ("POLK", 77),
    ("POTTAWATTAMIE", 78),
    ("POWESHIEK", 79),
    ("RINGGOLD", 80),
    ("SAC", 81),
    ("SCOTT", 82),
    ("SHELBY", 83),
    ("SIOUX", 84),
    ("STORY", 85),
    ("TAMA", 86),
    ("TAYLOR", 87),
    ("UNION", 88),
    ("VAN_BUREN", 89),
    ("WAPELLO", 90),
    ("WARREN", 91),
    ("WASHINGTON", 92),
    ("WAYNE", 93),
    ("WEBSTER", 94),
    ("WINNEBAGO", 95),
    ("WINNESHIEK", 96),
    ("WOODBURY", 97),
    ("WORTH", 98),
    ("WRIGHT", 99),
];

static IOWA: LazyLock<CountyLookup> = LazyLock::new(CountyLookup::iowa);

/// Immutable county-name to county-code table.
///
/// Built once and shared read-only by every worker.
#[derive(Debug, Clone)]
pub struct CountyLookup {
    codes: FxHashMap<&'static str, i32>,
}

impl CountyLookup {
    /// Build the table of Iowa counties
    #[must_use]
    pub fn iowa() -> Self {
        Self {
            codes: IOWA_COUNTIES.iter().copied().collect(),
        }
    }

    /// The process-wide Iowa table
    #[must_use]
    pub fn global() -> &'static Self {
        &IOWA
    }

    /// Code for an already-normalized county name
    #[must_use]
    pub fn code(&self, normalized_name: &str) -> Option<i32> {
        self.codes.get(normalized_name).copied()
    }
}

/// Canonical lookup key for a county name: trimmed, uppercased, with
/// internal whitespace runs collapsed to an underscore.
///
/// `" polk "` becomes `"POLK"`; `"Black Hawk"` becomes `"BLACK_HAWK"`.
#[must_use]
pub fn normalize_county_name(raw: &str) -> String {
    crate::schema::normalize_column_name(raw).to_uppercase()
}
