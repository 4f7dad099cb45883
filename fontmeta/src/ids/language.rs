use core::fmt;

use super::PlatformId;

/// Language identifier of a `name` record or character map.
///
/// Macintosh language codes are small integers. Microsoft language codes are
/// Windows LCIDs, a primary language in the low ten bits and a region in the
/// upper six. Values of `0x8000` and above on the Microsoft platform refer to
/// language tags stored in a version 1 `name` table.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageId(pub(crate) u16);

registry!(LanguageId, mac_name, {
    MAC_ENGLISH = 0,
    MAC_FRENCH = 1,
    MAC_GERMAN = 2,
    MAC_ITALIAN = 3,
    MAC_DUTCH = 4,
    MAC_SWEDISH = 5,
    MAC_SPANISH = 6,
    MAC_DANISH = 7,
    MAC_PORTUGUESE = 8,
    MAC_NORWEGIAN = 9,
    MAC_HEBREW = 10,
    MAC_JAPANESE = 11,
    MAC_ARABIC = 12,
    MAC_FINNISH = 13,
    MAC_GREEK = 14,
    MAC_ICELANDIC = 15,
    MAC_MALTESE = 16,
    MAC_TURKISH = 17,
    MAC_CROATIAN = 18,
    MAC_CHINESE_TRADITIONAL = 19,
    MAC_URDU = 20,
    MAC_HINDI = 21,
    MAC_THAI = 22,
    MAC_KOREAN = 23,
    MAC_LITHUANIAN = 24,
    MAC_POLISH = 25,
    MAC_HUNGARIAN = 26,
    MAC_ESTONIAN = 27,
    MAC_LETTISH = 28,
    MAC_SAAMISK = 29,
    MAC_FAEROESE = 30,
    MAC_FARSI = 31,
    MAC_RUSSIAN = 32,
    MAC_CHINESE_SIMPLIFIED = 33,
    MAC_FLEMISH = 34,
    MAC_IRISH = 35,
    MAC_ALBANIAN = 36,
    MAC_ROMANIAN = 37,
    MAC_CZECH = 38,
    MAC_SLOVAK = 39,
    MAC_SLOVENIAN = 40,
    MAC_YIDDISH = 41,
    MAC_SERBIAN = 42,
    MAC_MACEDONIAN = 43,
    MAC_BULGARIAN = 44,
    MAC_UKRAINIAN = 45,
    MAC_BYELORUSSIAN = 46,
    MAC_UZBEK = 47,
    MAC_KAZAKH = 48,
    MAC_AZERBAIJANI = 49,
    MAC_AZERBAIJANI_CYRILLIC_SCRIPT = 50,
    MAC_AZERBAIJANI_ARABIC_SCRIPT = 51,
    MAC_ARMENIAN = 52,
    MAC_GEORGIAN = 53,
    MAC_MOLDAVIAN = 54,
    MAC_KIRGHIZ = 55,
    MAC_TAJIKI = 56,
    MAC_TURKMEN = 57,
    MAC_MONGOLIAN = 58,
    MAC_MONGOLIAN_MONGOLIAN_SCRIPT = 59,
    MAC_MONGOLIAN_CYRILLIC_SCRIPT = 60,
    MAC_PASHTO = 61,
    MAC_KURDISH = 62,
    MAC_KASHMIRI = 63,
    MAC_SINDHI = 64,
    MAC_TIBETAN = 65,
    MAC_NEPALI = 66,
    MAC_SANSKRIT = 67,
    MAC_MARATHI = 68,
    MAC_BENGALI = 69,
    MAC_ASSAMESE = 70,
    MAC_GUJARATI = 71,
    MAC_PUNJABI = 72,
    MAC_ORIYA = 73,
    MAC_MALAYALAM = 74,
    MAC_KANNADA = 75,
    MAC_TAMIL = 76,
    MAC_TELUGU = 77,
    MAC_SINHALESE = 78,
    MAC_BURMESE = 79,
    MAC_KHMER = 80,
    MAC_LAO = 81,
    MAC_VIETNAMESE = 82,
    MAC_INDONESIAN = 83,
    MAC_TAGALOG = 84,
    MAC_MALAY_ROMAN_SCRIPT = 85,
    MAC_MALAY_ARABIC_SCRIPT = 86,
    MAC_AMHARIC = 87,
    MAC_TIGRINYA = 88,
    MAC_GALLA = 89,
    MAC_SOMALI = 90,
    MAC_SWAHILI = 91,
    MAC_RUANDA = 92,
    MAC_RUNDI = 93,
    MAC_CHEWA = 94,
    MAC_MALAGASY = 95,
    MAC_ESPERANTO = 96,
    MAC_WELSH = 128,
    MAC_BASQUE = 129,
    MAC_CATALAN = 130,
    MAC_LATIN = 131,
    MAC_QUECHUA = 132,
    MAC_GUARANI = 133,
    MAC_AYMARA = 134,
    MAC_TATAR = 135,
    MAC_UIGHUR = 136,
    MAC_DZONGKHA = 137,
    MAC_JAVANESE = 138,
    MAC_SUNDANESE = 139,
    MAC_GALICIAN = 140,
    MAC_AFRIKAANS = 141,
    MAC_BRETON = 142,
    MAC_INUKTITUT = 143,
    MAC_SCOTTISH_GAELIC = 144,
    MAC_MANX_GAELIC = 145,
    MAC_IRISH_GAELIC = 146,
    MAC_TONGAN = 147,
    MAC_GREEK_POLYTONIC = 148,
    MAC_GREENLANDIC = 149,
    MAC_AZERBAIJANI_ROMAN_SCRIPT = 150,
});

registry!(LanguageId, ms_name, {
    MS_ARABIC_SAUDI_ARABIA = 0x0401,
    MS_ARABIC_IRAQ = 0x0801,
    MS_ARABIC_EGYPT = 0x0C01,
    MS_ARABIC_LIBYA = 0x1001,
    MS_ARABIC_ALGERIA = 0x1401,
    MS_ARABIC_MOROCCO = 0x1801,
    MS_ARABIC_TUNISIA = 0x1C01,
    MS_ARABIC_OMAN = 0x2001,
    MS_ARABIC_YEMEN = 0x2401,
    MS_ARABIC_SYRIA = 0x2801,
    MS_ARABIC_JORDAN = 0x2C01,
    MS_ARABIC_LEBANON = 0x3001,
    MS_ARABIC_KUWAIT = 0x3401,
    MS_ARABIC_UAE = 0x3801,
    MS_ARABIC_BAHRAIN = 0x3C01,
    MS_ARABIC_QATAR = 0x4001,
    MS_BULGARIAN_BULGARIA = 0x0402,
    MS_CATALAN_CATALAN = 0x0403,
    MS_CHINESE_TAIWAN = 0x0404,
    MS_CHINESE_PRC = 0x0804,
    MS_CHINESE_HONG_KONG = 0x0C04,
    MS_CHINESE_SINGAPORE = 0x1004,
    MS_CHINESE_MACAO = 0x1404,
    MS_CZECH_CZECH_REPUBLIC = 0x0405,
    MS_DANISH_DENMARK = 0x0406,
    MS_GERMAN_GERMANY = 0x0407,
    MS_GERMAN_SWITZERLAND = 0x0807,
    MS_GERMAN_AUSTRIA = 0x0C07,
    MS_GERMAN_LUXEMBOURG = 0x1007,
    MS_GERMAN_LIECHTENSTEIN = 0x1407,
    MS_GREEK_GREECE = 0x0408,
    MS_ENGLISH_UNITED_STATES = 0x0409,
    MS_ENGLISH_UNITED_KINGDOM = 0x0809,
    MS_ENGLISH_AUSTRALIA = 0x0C09,
    MS_ENGLISH_CANADA = 0x1009,
    MS_ENGLISH_NEW_ZEALAND = 0x1409,
    MS_ENGLISH_IRELAND = 0x1809,
    MS_ENGLISH_SOUTH_AFRICA = 0x1C09,
    MS_ENGLISH_JAMAICA = 0x2009,
    MS_ENGLISH_CARIBBEAN = 0x2409,
    MS_ENGLISH_BELIZE = 0x2809,
    MS_ENGLISH_TRINIDAD = 0x2C09,
    MS_ENGLISH_ZIMBABWE = 0x3009,
    MS_ENGLISH_PHILIPPINES = 0x3409,
    MS_ENGLISH_INDIA = 0x4009,
    MS_ENGLISH_MALAYSIA = 0x4409,
    MS_ENGLISH_SINGAPORE = 0x4809,
    MS_SPANISH_SPAIN_TRADITIONAL_SORT = 0x040A,
    MS_SPANISH_MEXICO = 0x080A,
    MS_SPANISH_SPAIN_MODERN_SORT = 0x0C0A,
    MS_SPANISH_GUATEMALA = 0x100A,
    MS_SPANISH_COSTA_RICA = 0x140A,
    MS_SPANISH_PANAMA = 0x180A,
    MS_SPANISH_DOMINICAN_REPUBLIC = 0x1C0A,
    MS_SPANISH_VENEZUELA = 0x200A,
    MS_SPANISH_COLOMBIA = 0x240A,
    MS_SPANISH_PERU = 0x280A,
    MS_SPANISH_ARGENTINA = 0x2C0A,
    MS_SPANISH_ECUADOR = 0x300A,
    MS_SPANISH_CHILE = 0x340A,
    MS_SPANISH_URUGUAY = 0x380A,
    MS_SPANISH_PARAGUAY = 0x3C0A,
    MS_SPANISH_BOLIVIA = 0x400A,
    MS_SPANISH_EL_SALVADOR = 0x440A,
    MS_SPANISH_HONDURAS = 0x480A,
    MS_SPANISH_NICARAGUA = 0x4C0A,
    MS_SPANISH_PUERTO_RICO = 0x500A,
    MS_SPANISH_UNITED_STATES = 0x540A,
    MS_FINNISH_FINLAND = 0x040B,
    MS_FRENCH_FRANCE = 0x040C,
    MS_FRENCH_BELGIUM = 0x080C,
    MS_FRENCH_CANADA = 0x0C0C,
    MS_FRENCH_SWITZERLAND = 0x100C,
    MS_FRENCH_LUXEMBOURG = 0x140C,
    MS_FRENCH_MONACO = 0x180C,
    MS_HEBREW_ISRAEL = 0x040D,
    MS_HUNGARIAN_HUNGARY = 0x040E,
    MS_ICELANDIC_ICELAND = 0x040F,
    MS_ITALIAN_ITALY = 0x0410,
    MS_ITALIAN_SWITZERLAND = 0x0810,
    MS_JAPANESE_JAPAN = 0x0411,
    MS_KOREAN_KOREA = 0x0412,
    MS_DUTCH_NETHERLANDS = 0x0413,
    MS_DUTCH_BELGIUM = 0x0813,
    MS_NORWEGIAN_NORWAY_BOKMAL = 0x0414,
    MS_NORWEGIAN_NORWAY_NYNORSK = 0x0814,
    MS_POLISH_POLAND = 0x0415,
    MS_PORTUGUESE_BRAZIL = 0x0416,
    MS_PORTUGUESE_PORTUGAL = 0x0816,
    MS_ROMANSH_SWITZERLAND = 0x0417,
    MS_ROMANIAN_ROMANIA = 0x0418,
    MS_RUSSIAN_RUSSIA = 0x0419,
    MS_CROATIAN_CROATIA = 0x041A,
    MS_SERBIAN_SERBIA_LATIN = 0x081A,
    MS_SERBIAN_SERBIA_CYRILLIC = 0x0C1A,
    MS_CROATIAN_BOSNIA_HERZEGOVINA = 0x101A,
    MS_BOSNIAN_BOSNIA_HERZEGOVINA = 0x141A,
    MS_SERBIAN_BOSNIA_HERZ_LATIN = 0x181A,
    MS_SERBIAN_BOSNIA_HERZ_CYRILLIC = 0x1C1A,
    MS_BOSNIAN_BOSNIA_HERZ_CYRILLIC = 0x201A,
    MS_SLOVAK_SLOVAKIA = 0x041B,
    MS_ALBANIAN_ALBANIA = 0x041C,
    MS_SWEDISH_SWEDEN = 0x041D,
    MS_SWEDISH_FINLAND = 0x081D,
    MS_THAI_THAILAND = 0x041E,
    MS_TURKISH_TURKEY = 0x041F,
    MS_URDU_PAKISTAN = 0x0420,
    MS_INDONESIAN_INDONESIA = 0x0421,
    MS_UKRAINIAN_UKRAINE = 0x0422,
    MS_BELARUSIAN_BELARUS = 0x0423,
    MS_SLOVENIAN_SLOVENIA = 0x0424,
    MS_ESTONIAN_ESTONIA = 0x0425,
    MS_LATVIAN_LATVIA = 0x0426,
    MS_LITHUANIAN_LITHUANIA = 0x0427,
    MS_TAJIK_TAJIKISTAN = 0x0428,
    MS_VIETNAMESE_VIET_NAM = 0x042A,
    MS_ARMENIAN_ARMENIA = 0x042B,
    MS_AZERI_AZERBAIJAN_LATIN = 0x042C,
    MS_AZERI_AZERBAIJAN_CYRILLIC = 0x082C,
    MS_BASQUE_BASQUE = 0x042D,
    MS_UPPER_SORBIAN_GERMANY = 0x042E,
    MS_LOWER_SORBIAN_GERMANY = 0x082E,
    MS_MACEDONIAN_MACEDONIA = 0x042F,
    MS_SETSWANA_SOUTH_AFRICA = 0x0432,
    MS_ISIXHOSA_SOUTH_AFRICA = 0x0434,
    MS_ISIZULU_SOUTH_AFRICA = 0x0435,
    MS_AFRIKAANS_SOUTH_AFRICA = 0x0436,
    MS_GEORGIAN_GEORGIA = 0x0437,
    MS_FAEROESE_FAEROE_ISLANDS = 0x0438,
    MS_HINDI_INDIA = 0x0439,
    MS_MALTESE_MALTA = 0x043A,
    MS_SAMI_NORTHERN_NORWAY = 0x043B,
    MS_SAMI_NORTHERN_SWEDEN = 0x083B,
    MS_SAMI_NORTHERN_FINLAND = 0x0C3B,
    MS_SAMI_LULE_NORWAY = 0x103B,
    MS_SAMI_LULE_SWEDEN = 0x143B,
    MS_SAMI_SOUTHERN_NORWAY = 0x183B,
    MS_SAMI_SOUTHERN_SWEDEN = 0x1C3B,
    MS_SAMI_SKOLT_FINLAND = 0x203B,
    MS_SAMI_INARI_FINLAND = 0x243B,
    MS_IRISH_IRELAND = 0x083C,
    MS_MALAY_MALAYSIA = 0x043E,
    MS_MALAY_BRUNEI_DARUSSALAM = 0x083E,
    MS_KAZAKH_KAZAKHSTAN = 0x043F,
    MS_KYRGYZ_KYRGYZSTAN = 0x0440,
    MS_KISWAHILI_KENYA = 0x0441,
    MS_TURKMEN_TURKMENISTAN = 0x0442,
    MS_UZBEK_UZBEKISTAN_LATIN = 0x0443,
    MS_UZBEK_UZBEKISTAN_CYRILLIC = 0x0843,
    MS_TATAR_RUSSIA = 0x0444,
    MS_BENGALI_INDIA = 0x0445,
    MS_BENGALI_BANGLADESH = 0x0845,
    MS_PUNJABI_INDIA = 0x0446,
    MS_GUJARATI_INDIA = 0x0447,
    MS_ODIA_INDIA = 0x0448,
    MS_TAMIL_INDIA = 0x0449,
    MS_TELUGU_INDIA = 0x044A,
    MS_KANNADA_INDIA = 0x044B,
    MS_MALAYALAM_INDIA = 0x044C,
    MS_ASSAMESE_INDIA = 0x044D,
    MS_MARATHI_INDIA = 0x044E,
    MS_SANSKRIT_INDIA = 0x044F,
    MS_MONGOLIAN_MONGOLIA = 0x0450,
    MS_MONGOLIAN_PRC = 0x0850,
    MS_TIBETAN_PRC = 0x0451,
    MS_WELSH_UNITED_KINGDOM = 0x0452,
    MS_KHMER_CAMBODIA = 0x0453,
    MS_LAO_LAOS = 0x0454,
    MS_GALICIAN_GALICIAN = 0x0456,
    MS_KONKANI_INDIA = 0x0457,
    MS_SYRIAC_SYRIA = 0x045A,
    MS_SINHALA_SRI_LANKA = 0x045B,
    MS_INUKTITUT_CANADA = 0x045D,
    MS_INUKTITUT_CANADA_LATIN = 0x085D,
    MS_AMHARIC_ETHIOPIA = 0x045E,
    MS_TAMAZIGHT_ALGERIA = 0x085F,
    MS_NEPALI_NEPAL = 0x0461,
    MS_FRISIAN_NETHERLANDS = 0x0462,
    MS_PASHTO_AFGHANISTAN = 0x0463,
    MS_FILIPINO_PHILIPPINES = 0x0464,
    MS_DHIVEHI_MALDIVES = 0x0465,
    MS_HAUSA_NIGERIA = 0x0468,
    MS_YORUBA_NIGERIA = 0x046A,
    MS_QUECHUA_BOLIVIA = 0x046B,
    MS_QUECHUA_ECUADOR = 0x086B,
    MS_QUECHUA_PERU = 0x0C6B,
    MS_SESOTHO_SA_LEBOA_SOUTH_AFRICA = 0x046C,
    MS_BASHKIR_RUSSIA = 0x046D,
    MS_LUXEMBOURGISH_LUXEMBOURG = 0x046E,
    MS_GREENLANDIC_GREENLAND = 0x046F,
    MS_IGBO_NIGERIA = 0x0470,
    MS_YI_PRC = 0x0478,
    MS_MAPUDUNGUN_CHILE = 0x047A,
    MS_MOHAWK_MOHAWK = 0x047C,
    MS_BRETON_FRANCE = 0x047E,
    MS_UIGHUR_PRC = 0x0480,
    MS_MAORI_NEW_ZEALAND = 0x0481,
    MS_OCCITAN_FRANCE = 0x0482,
    MS_CORSICAN_FRANCE = 0x0483,
    MS_ALSATIAN_FRANCE = 0x0484,
    MS_YAKUT_RUSSIA = 0x0485,
    MS_KICHE_GUATEMALA = 0x0486,
    MS_KINYARWANDA_RWANDA = 0x0487,
    MS_WOLOF_SENEGAL = 0x0488,
    MS_DARI_AFGHANISTAN = 0x048C,
});

scalar_id!(LanguageId, u16);

impl LanguageId {
    /// Returns the name of the language on the given platform, if known.
    pub fn name_for(self, platform: PlatformId) -> Option<&'static str> {
        match platform {
            PlatformId::MACINTOSH => self.mac_name(),
            PlatformId::MICROSOFT => self.ms_name(),
            _ => None,
        }
    }

    /// Returns true if this identifier refers to a language tag record of a
    /// version 1 `name` table.
    pub const fn is_lang_tag(self) -> bool {
        self.0 >= 0x8000
    }
}

impl fmt::Debug for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LanguageId({:#06x})", self.0)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
