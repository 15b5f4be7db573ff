// Country name aliases
// Maps an upper-cased boundary-dataset spelling to the canonical display
// spelling used by the label tables. Names not listed map to themselves.
//
// The first block covers ISO-style long names; the second covers the
// abbreviated spellings used by Natural Earth's NAME field.

use super::KeyedTable;

pub static NAME_ALIASES: KeyedTable<&'static str> = KeyedTable::new(&[
    // =========================================================================
    // ISO-style names
    // =========================================================================
    ("UNITED STATES OF AMERICA", "UNITED STATES"),
    ("KOREA, REPUBLIC OF", "SOUTH KOREA"),
    ("KOREA, DEMOCRATIC PEOPLE'S REPUBLIC OF", "NORTH KOREA"),
    ("CONGO, DEMOCRATIC REPUBLIC OF THE", "DR CONGO"),
    ("CENTRAL AFRICAN REPUBLIC", "CAR"),
    ("UNITED KINGDOM", "UK"),
    ("RUSSIAN FEDERATION", "RUSSIA"),
    ("CZECH REPUBLIC", "CZECHIA"),
    ("SYRIAN ARAB REPUBLIC", "SYRIA"),
    ("IRAN (ISLAMIC REPUBLIC OF)", "IRAN"),
    ("VIET NAM", "VIETNAM"),
    ("LAO PEOPLE'S DEMOCRATIC REPUBLIC", "LAOS"),
    ("BOLIVARIAN REPUBLIC OF VENEZUELA", "VENEZUELA"),
    ("BOSNIA AND HERZEGOVINA", "BOSNIA"),
    ("MYANMAR", "MYANMAR"),
    ("CÔTE D'IVOIRE", "IVORY COAST"),
    ("SWAZILAND", "ESWATINI"),
    ("TANZANIA, UNITED REPUBLIC OF", "TANZANIA"),
    ("BOLIVIA (PLURINATIONAL STATE OF)", "BOLIVIA"),
    ("MOLDOVA, REPUBLIC OF", "MOLDOVA"),
    ("MACEDONIA, THE FORMER YUGOSLAV REPUBLIC OF", "NORTH MACEDONIA"),
    ("PALESTINE, STATE OF", "PALESTINE"),
    ("BRUNEI DARUSSALAM", "BRUNEI"),
    ("SAINT KITTS AND NEVIS", "ST KITTS & NEVIS"),
    ("SAINT LUCIA", "ST LUCIA"),
    ("SAINT VINCENT AND THE GRENADINES", "ST VINCENT & GRENADINES"),
    ("TRINIDAD AND TOBAGO", "TRINIDAD & TOBAGO"),
    ("ANTIGUA AND BARBUDA", "ANTIGUA & BARBUDA"),
    ("BAHAMAS", "BAHAMAS"),
    ("GAMBIA", "GAMBIA"),
    ("EAST TIMOR", "TIMOR-LESTE"),
    ("SÃO TOMÉ AND PRÍNCIPE", "SAO TOME & PRINCIPE"),
    ("MICRONESIA, FEDERATED STATES OF", "MICRONESIA"),
    ("MARSHALL ISLANDS", "MARSHALL ISLANDS"),
    ("SOLOMON ISLANDS", "SOLOMON ISLANDS"),
    ("VATICAN CITY", "VATICAN CITY"),
    ("HOLY SEE", "VATICAN CITY"),
    ("SAINT PIERRE AND MIQUELON", "ST PIERRE & MIQUELON"),
    ("SAINT HELENA, ASCENSION AND TRISTAN DA CUNHA", "ST HELENA"),
    ("SAINT BARTHELEMY", "ST BARTHELEMY"),
    ("SAINT MARTIN (FRENCH PART)", "ST MARTIN"),
    ("SINT MAARTEN (DUTCH PART)", "SINT MAARTEN"),
    ("NETHERLANDS", "NETHERLANDS"),
    ("SWITZERLAND", "SWITZERLAND"),
    ("CYPRUS", "CYPRUS"),
    ("MALAYSIA", "MALAYSIA"),
    ("JAPAN", "JAPAN"),
    ("FRANCE", "FRANCE"),
    ("GERMANY", "GERMANY"),
    ("SPAIN", "SPAIN"),
    ("TURKEY", "TURKEY"),
    ("INDIA", "INDIA"),
    ("CHINA", "CHINA"),
    ("ARGENTINA", "ARGENTINA"),
    ("BRAZIL", "BRAZIL"),
    ("CANADA", "CANADA"),
    ("AUSTRALIA", "AUSTRALIA"),
    ("NEW ZEALAND", "NEW ZEALAND"),
    ("MEXICO", "MEXICO"),
    ("NIGERIA", "NIGERIA"),
    ("ETHIOPIA", "ETHIOPIA"),
    ("SAUDI ARABIA", "SAUDI ARABIA"),
    ("EGYPT", "EGYPT"),
    ("ALGERIA", "ALGERIA"),
    ("SOUTH AFRICA", "SOUTH AFRICA"),
    // =========================================================================
    // Natural Earth short forms
    // =========================================================================
    ("DEM. REP. CONGO", "DR CONGO"),
    ("CENTRAL AFRICAN REP.", "CAR"),
    ("BOSNIA AND HERZ.", "BOSNIA"),
    ("DOMINICAN REP.", "DOMINICAN REPUBLIC"),
    ("ESWATINI", "ESWATINI"),
    ("TÜRKIYE", "TURKEY"),
    ("MACEDONIA", "NORTH MACEDONIA"),
    ("S. SUDAN", "SOUTH SUDAN"),
    ("EQ. GUINEA", "EQUATORIAL GUINEA"),
    ("SOLOMON IS.", "SOLOMON ISLANDS"),
    ("FALKLAND IS.", "FALKLAND ISLANDS"),
    ("FR. S. ANTARCTIC LANDS", "FRENCH SOUTHERN LANDS"),
    ("W. SAHARA", "WESTERN SAHARA"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_upper_case() {
        for (key, _) in NAME_ALIASES.entries() {
            assert_eq!(*key, key.to_uppercase(), "alias key not upper-cased: {}", key);
        }
    }

    #[test]
    fn test_holy_see_and_vatican_share_label() {
        assert_eq!(NAME_ALIASES.get("HOLY SEE"), NAME_ALIASES.get("VATICAN CITY"));
    }
}
