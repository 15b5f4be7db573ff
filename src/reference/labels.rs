// Map label placement data
// Hand-tuned coordinates (longitude, latitude in degrees) and font sizes
// (points) for the world map. Keys are canonical names, see aliases.rs.

use super::KeyedTable;

/// Explicit placement for a country label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelOverride {
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    /// Text to draw instead of the canonical name
    pub label: &'static str,
}

/// A label that is always drawn, flagged or not
#[derive(Debug, Clone, PartialEq)]
pub struct MajorLabel {
    /// Canonical name
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}

const fn o(x: f64, y: f64, font_size: f64, label: &'static str) -> LabelOverride {
    LabelOverride { x, y, font_size, label }
}

const fn m(name: &'static str, x: f64, y: f64, font_size: f64) -> MajorLabel {
    MajorLabel { name, x, y, font_size }
}

/// Major countries and regions, labeled before any flagged country
pub const MAJOR_LABELS: &[MajorLabel] = &[
    m("CANADA", -110.0, 60.0, 14.0),
    m("UNITED STATES", -100.0, 40.0, 14.0),
    m("MEXICO", -102.0, 23.0, 11.0),
    m("BRAZIL", -51.0, -10.0, 14.0),
    m("ARGENTINA", -64.0, -35.0, 11.0),
    m("GREENLAND", -42.0, 72.0, 11.0),
    m("RUSSIA", 100.0, 60.0, 14.0),
    m("CHINA", 105.0, 35.0, 14.0),
    m("INDIA", 80.0, 22.0, 11.0),
    m("AUSTRALIA", 135.0, -25.0, 14.0),
    m("SOUTH AFRICA", 24.0, -29.0, 11.0),
    m("SAUDI ARABIA", 50.0, 22.0, 9.0),
    m("EGYPT", 36.0, 28.0, 9.0),
    m("ALGERIA", 0.0, 32.0, 9.0),
    m("UK", -2.0, 56.0, 8.0),
    m("FRANCE", 2.0, 48.0, 9.0),
    m("GERMANY", 15.0, 53.0, 8.0),
    m("SPAIN", -4.0, 42.0, 9.0),
    m("TURKEY", 37.0, 41.0, 9.0),
    m("IRAN", 56.0, 34.0, 9.0),
    m("JAPAN", 138.0, 39.0, 11.0),
    m("INDONESIA", 120.0, -2.0, 9.0),
    m("NEW ZEALAND", 174.0, -39.0, 11.0),
    m("NIGERIA", 8.0, 13.0, 9.0),
    m("ETHIOPIA", 39.0, 13.0, 9.0),
    m("DR CONGO", 27.0, -2.0, 8.0),
    m("CAR", 25.0, 11.0, 7.0),
];

/// Placement overrides for crowded regions
pub static CROWDED_OVERRIDES: KeyedTable<LabelOverride> = KeyedTable::new(OVERRIDE_ENTRIES);

const OVERRIDE_ENTRIES: &[(&str, LabelOverride)] = &[
    // =========================================================================
    // EUROPE
    // =========================================================================
    ("NETHERLANDS", o(2.0, 54.0, 5.0, "NETH.")),
    ("SWITZERLAND", o(11.0, 47.0, 5.0, "SWITZ.")),
    ("UK", o(-5.0, 57.0, 5.0, "UK")),
    ("GERMANY", o(16.0, 52.5, 5.0, "GER.")),
    ("FRANCE", o(-3.0, 47.0, 5.0, "FR.")),
    ("SPAIN", o(-8.0, 41.0, 5.0, "SPAIN")),
    ("ITALY", o(15.0, 44.5, 5.0, "ITALY")),
    ("POLAND", o(22.0, 52.0, 5.0, "POL.")),
    ("BELGIUM", o(4.5, 51.0, 5.0, "BELG.")),
    ("LUXEMBOURG", o(6.0, 49.7, 5.0, "LUX.")),
    ("DENMARK", o(10.0, 56.0, 5.0, "DEN.")),
    ("CZECHIA", o(15.0, 49.8, 5.0, "CZECH.")),
    ("SLOVAKIA", o(19.0, 48.7, 5.0, "SVK.")),
    ("HUNGARY", o(19.0, 47.0, 5.0, "HUN.")),
    ("AUSTRIA", o(14.0, 47.5, 5.0, "AUS.")),
    ("SLOVENIA", o(15.0, 46.2, 5.0, "SLOV.")),
    ("CROATIA", o(16.0, 45.5, 5.0, "CRO.")),
    ("BOSNIA", o(18.0, 44.5, 5.0, "BIH.")),
    ("SERBIA", o(21.0, 44.0, 5.0, "SRB.")),
    ("MONTENEGRO", o(19.0, 42.7, 5.0, "MNE.")),
    ("ALBANIA", o(20.0, 41.0, 5.0, "ALB.")),
    ("NORTH MACEDONIA", o(21.5, 41.6, 5.0, "MKD.")),
    ("GREECE", o(22.0, 39.0, 5.0, "GRC.")),
    ("PORTUGAL", o(-8.0, 39.5, 5.0, "PORT.")),
    ("IRELAND", o(-8.0, 53.0, 5.0, "IRE.")),
    // =========================================================================
    // EAST & SOUTHEAST ASIA
    // =========================================================================
    ("SOUTH KOREA", o(130.0, 36.0, 5.0, "S. KOREA")),
    ("NORTH KOREA", o(127.0, 40.0, 5.0, "N. KOREA")),
    ("JAPAN", o(140.0, 38.0, 6.0, "JAPAN")),
    ("MALAYSIA", o(104.0, 2.0, 5.0, "MALAY.")),
    ("VIETNAM", o(108.0, 15.0, 5.0, "VIET.")),
    ("SINGAPORE", o(104.0, 1.3, 5.0, "SGP.")),
    ("PHILIPPINES", o(122.0, 12.0, 5.0, "PHIL.")),
    ("THAILAND", o(101.0, 15.0, 5.0, "THAI.")),
    ("INDONESIA", o(120.0, -2.0, 5.0, "INDO.")),
    // =========================================================================
    // MIDDLE EAST
    // =========================================================================
    ("CYPRUS", o(33.0, 34.0, 5.0, "CYPRUS")),
    ("ISRAEL", o(35.0, 31.0, 5.0, "ISR.")),
    ("LEBANON", o(36.0, 34.0, 5.0, "LEB.")),
    ("JORDAN", o(36.0, 31.0, 5.0, "JOR.")),
    // =========================================================================
    // AFRICA
    // =========================================================================
    ("DJIBOUTI", o(43.0, 12.0, 5.0, "DJI.")),
    ("RWANDA", o(30.0, -2.0, 5.0, "RWA.")),
    ("BURUNDI", o(30.0, -3.0, 5.0, "BDI.")),
    // =========================================================================
    // CARIBBEAN & CENTRAL AMERICA
    // =========================================================================
    ("CUBA", o(-79.0, 21.5, 5.0, "CUBA")),
    ("JAMAICA", o(-77.0, 18.0, 5.0, "JAM.")),
    ("HAITI", o(-72.5, 19.0, 5.0, "HAITI")),
    ("DOMINICAN REPUBLIC", o(-70.0, 19.0, 5.0, "DOM.")),
    ("TRINIDAD & TOBAGO", o(-61.0, 10.5, 5.0, "T&T")),
    // =========================================================================
    // OCEANIA
    // =========================================================================
    ("FIJI", o(178.0, -17.0, 5.0, "FIJI")),
    ("SAMOA", o(-172.0, -13.5, 5.0, "SAMOA")),
    ("TONGA", o(-175.0, -21.0, 5.0, "TONGA")),
    ("VANUATU", o(167.0, -16.0, 5.0, "VAN.")),
];

/// Short forms for default-placed labels
pub static ABBREVIATIONS: KeyedTable<&'static str> = KeyedTable::new(&[
    ("NETHERLANDS", "NETH."),
    ("SWITZERLAND", "SWITZ."),
    ("UNITED KINGDOM", "UK"),
    ("SOUTH KOREA", "S. KOREA"),
    ("NORTH KOREA", "N. KOREA"),
    ("CZECH REPUBLIC", "CZECHIA"),
    ("CZECHIA", "CZECH."),
    ("NEW ZEALAND", "N.ZEALAND"),
    ("AUSTRALIA", "AUS."),
    ("ARGENTINA", "ARG."),
    ("INDONESIA", "INDO."),
    ("MALAYSIA", "MALAY."),
    ("VIET NAM", "VIET."),
    ("VIETNAM", "VIET."),
    ("DEMOCRATIC REPUBLIC OF THE CONGO", "D.R.C."),
    ("CENTRAL AFRICAN REPUBLIC", "C.A.R."),
    ("SOUTH AFRICA", "S. AFRICA"),
    ("SAUDI ARABIA", "S. ARABIA"),
    ("ETHIOPIA", "ETH."),
    ("NIGERIA", "NIG."),
    ("FRANCE", "FR."),
    ("GERMANY", "GER."),
    ("SPAIN", "SPAIN"),
    ("CYPRUS", "CYPRUS"),
    ("JAPAN", "JAPAN"),
    ("TURKEY", "TURKEY"),
    ("EGYPT", "EGYPT"),
    ("RUSSIA", "RUSSIA"),
    ("CANADA", "CANADA"),
    ("CHINA", "CHINA"),
    ("INDIA", "INDIA"),
    ("BRAZIL", "BRAZIL"),
    ("MEXICO", "MEXICO"),
]);
