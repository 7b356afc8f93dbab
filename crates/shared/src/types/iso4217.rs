//! ISO 4217 currency catalog.
//!
//! A statically initialized, read-only table. Entries are sorted by
//! alphabetic code so lookups by code can binary search.

use super::currency::Currency;

/// UAE Dirham (AED).
pub const AED: Currency = Currency::new("UAE Dirham", "AED", 784, 2);
/// Afghani (AFN).
pub const AFN: Currency = Currency::new("Afghani", "AFN", 971, 2);
/// Lek (ALL).
pub const ALL: Currency = Currency::new("Lek", "ALL", 8, 2);
/// Armenian Dram (AMD).
pub const AMD: Currency = Currency::new("Armenian Dram", "AMD", 51, 2);
/// Netherlands Antillean Guilder (ANG).
pub const ANG: Currency = Currency::new("Netherlands Antillean Guilder", "ANG", 532, 2);
/// Kwanza (AOA).
pub const AOA: Currency = Currency::new("Kwanza", "AOA", 973, 2);
/// Argentine Peso (ARS).
pub const ARS: Currency = Currency::new("Argentine Peso", "ARS", 32, 2);
/// Australian Dollar (AUD).
pub const AUD: Currency = Currency::new("Australian Dollar", "AUD", 36, 2);
/// Aruban Florin (AWG).
pub const AWG: Currency = Currency::new("Aruban Florin", "AWG", 533, 2);
/// Azerbaijan Manat (AZN).
pub const AZN: Currency = Currency::new("Azerbaijan Manat", "AZN", 944, 2);
/// Convertible Mark (BAM).
pub const BAM: Currency = Currency::new("Convertible Mark", "BAM", 977, 2);
/// Barbados Dollar (BBD).
pub const BBD: Currency = Currency::new("Barbados Dollar", "BBD", 52, 2);
/// Taka (BDT).
pub const BDT: Currency = Currency::new("Taka", "BDT", 50, 2);
/// Bulgarian Lev (BGN).
pub const BGN: Currency = Currency::new("Bulgarian Lev", "BGN", 975, 2);
/// Bahraini Dinar (BHD).
pub const BHD: Currency = Currency::new("Bahraini Dinar", "BHD", 48, 3);
/// Burundi Franc (BIF).
pub const BIF: Currency = Currency::new("Burundi Franc", "BIF", 108, 0);
/// Bermudian Dollar (BMD).
pub const BMD: Currency = Currency::new("Bermudian Dollar", "BMD", 60, 2);
/// Brunei Dollar (BND).
pub const BND: Currency = Currency::new("Brunei Dollar", "BND", 96, 2);
/// Boliviano (BOB).
pub const BOB: Currency = Currency::new("Boliviano", "BOB", 68, 2);
/// Brazilian Real (BRL).
pub const BRL: Currency = Currency::new("Brazilian Real", "BRL", 986, 2);
/// Bahamian Dollar (BSD).
pub const BSD: Currency = Currency::new("Bahamian Dollar", "BSD", 44, 2);
/// Ngultrum (BTN).
pub const BTN: Currency = Currency::new("Ngultrum", "BTN", 64, 2);
/// Pula (BWP).
pub const BWP: Currency = Currency::new("Pula", "BWP", 72, 2);
/// Belarusian Ruble (BYN).
pub const BYN: Currency = Currency::new("Belarusian Ruble", "BYN", 933, 2);
/// Belize Dollar (BZD).
pub const BZD: Currency = Currency::new("Belize Dollar", "BZD", 84, 2);
/// Canadian Dollar (CAD).
pub const CAD: Currency = Currency::new("Canadian Dollar", "CAD", 124, 2);
/// Congolese Franc (CDF).
pub const CDF: Currency = Currency::new("Congolese Franc", "CDF", 976, 2);
/// Swiss Franc (CHF).
pub const CHF: Currency = Currency::new("Swiss Franc", "CHF", 756, 2);
/// Chilean Peso (CLP).
pub const CLP: Currency = Currency::new("Chilean Peso", "CLP", 152, 0);
/// Yuan Renminbi (CNY).
pub const CNY: Currency = Currency::new("Yuan Renminbi", "CNY", 156, 2);
/// Colombian Peso (COP).
pub const COP: Currency = Currency::new("Colombian Peso", "COP", 170, 2);
/// Costa Rican Colon (CRC).
pub const CRC: Currency = Currency::new("Costa Rican Colon", "CRC", 188, 2);
/// Peso Convertible (CUC).
pub const CUC: Currency = Currency::new("Peso Convertible", "CUC", 931, 2);
/// Cuban Peso (CUP).
pub const CUP: Currency = Currency::new("Cuban Peso", "CUP", 192, 2);
/// Cabo Verde Escudo (CVE).
pub const CVE: Currency = Currency::new("Cabo Verde Escudo", "CVE", 132, 2);
/// Czech Koruna (CZK).
pub const CZK: Currency = Currency::new("Czech Koruna", "CZK", 203, 2);
/// Djibouti Franc (DJF).
pub const DJF: Currency = Currency::new("Djibouti Franc", "DJF", 262, 0);
/// Danish Krone (DKK).
pub const DKK: Currency = Currency::new("Danish Krone", "DKK", 208, 2);
/// Dominican Peso (DOP).
pub const DOP: Currency = Currency::new("Dominican Peso", "DOP", 214, 2);
/// Algerian Dinar (DZD).
pub const DZD: Currency = Currency::new("Algerian Dinar", "DZD", 12, 2);
/// Egyptian Pound (EGP).
pub const EGP: Currency = Currency::new("Egyptian Pound", "EGP", 818, 2);
/// Nakfa (ERN).
pub const ERN: Currency = Currency::new("Nakfa", "ERN", 232, 2);
/// Ethiopian Birr (ETB).
pub const ETB: Currency = Currency::new("Ethiopian Birr", "ETB", 230, 2);
/// Euro (EUR).
pub const EUR: Currency = Currency::new("Euro", "EUR", 978, 2);
/// Fiji Dollar (FJD).
pub const FJD: Currency = Currency::new("Fiji Dollar", "FJD", 242, 2);
/// Falkland Islands Pound (FKP).
pub const FKP: Currency = Currency::new("Falkland Islands Pound", "FKP", 238, 2);
/// Pound Sterling (GBP).
pub const GBP: Currency = Currency::new("Pound Sterling", "GBP", 826, 2);
/// Lari (GEL).
pub const GEL: Currency = Currency::new("Lari", "GEL", 981, 2);
/// Ghana Cedi (GHS).
pub const GHS: Currency = Currency::new("Ghana Cedi", "GHS", 936, 2);
/// Gibraltar Pound (GIP).
pub const GIP: Currency = Currency::new("Gibraltar Pound", "GIP", 292, 2);
/// Dalasi (GMD).
pub const GMD: Currency = Currency::new("Dalasi", "GMD", 270, 2);
/// Guinean Franc (GNF).
pub const GNF: Currency = Currency::new("Guinean Franc", "GNF", 324, 0);
/// Quetzal (GTQ).
pub const GTQ: Currency = Currency::new("Quetzal", "GTQ", 320, 2);
/// Guyana Dollar (GYD).
pub const GYD: Currency = Currency::new("Guyana Dollar", "GYD", 328, 2);
/// Hong Kong Dollar (HKD).
pub const HKD: Currency = Currency::new("Hong Kong Dollar", "HKD", 344, 2);
/// Lempira (HNL).
pub const HNL: Currency = Currency::new("Lempira", "HNL", 340, 2);
/// Kuna (HRK).
pub const HRK: Currency = Currency::new("Kuna", "HRK", 191, 2);
/// Gourde (HTG).
pub const HTG: Currency = Currency::new("Gourde", "HTG", 332, 2);
/// Forint (HUF).
pub const HUF: Currency = Currency::new("Forint", "HUF", 348, 2);
/// Rupiah (IDR).
pub const IDR: Currency = Currency::new("Rupiah", "IDR", 360, 2);
/// New Israeli Sheqel (ILS).
pub const ILS: Currency = Currency::new("New Israeli Sheqel", "ILS", 376, 2);
/// Indian Rupee (INR).
pub const INR: Currency = Currency::new("Indian Rupee", "INR", 356, 2);
/// Iraqi Dinar (IQD).
pub const IQD: Currency = Currency::new("Iraqi Dinar", "IQD", 368, 3);
/// Iranian Rial (IRR).
pub const IRR: Currency = Currency::new("Iranian Rial", "IRR", 364, 2);
/// Iceland Krona (ISK).
pub const ISK: Currency = Currency::new("Iceland Krona", "ISK", 352, 0);
/// Jamaican Dollar (JMD).
pub const JMD: Currency = Currency::new("Jamaican Dollar", "JMD", 388, 2);
/// Jordanian Dinar (JOD).
pub const JOD: Currency = Currency::new("Jordanian Dinar", "JOD", 400, 3);
/// Yen (JPY).
pub const JPY: Currency = Currency::new("Yen", "JPY", 392, 0);
/// Kenyan Shilling (KES).
pub const KES: Currency = Currency::new("Kenyan Shilling", "KES", 404, 2);
/// Som (KGS).
pub const KGS: Currency = Currency::new("Som", "KGS", 417, 2);
/// Riel (KHR).
pub const KHR: Currency = Currency::new("Riel", "KHR", 116, 2);
/// Comorian Franc (KMF).
pub const KMF: Currency = Currency::new("Comorian Franc", "KMF", 174, 0);
/// North Korean Won (KPW).
pub const KPW: Currency = Currency::new("North Korean Won", "KPW", 408, 2);
/// Won (KRW).
pub const KRW: Currency = Currency::new("Won", "KRW", 410, 0);
/// Kuwaiti Dinar (KWD).
pub const KWD: Currency = Currency::new("Kuwaiti Dinar", "KWD", 414, 3);
/// Cayman Islands Dollar (KYD).
pub const KYD: Currency = Currency::new("Cayman Islands Dollar", "KYD", 136, 2);
/// Tenge (KZT).
pub const KZT: Currency = Currency::new("Tenge", "KZT", 398, 2);
/// Lao Kip (LAK).
pub const LAK: Currency = Currency::new("Lao Kip", "LAK", 418, 2);
/// Lebanese Pound (LBP).
pub const LBP: Currency = Currency::new("Lebanese Pound", "LBP", 422, 2);
/// Sri Lanka Rupee (LKR).
pub const LKR: Currency = Currency::new("Sri Lanka Rupee", "LKR", 144, 2);
/// Liberian Dollar (LRD).
pub const LRD: Currency = Currency::new("Liberian Dollar", "LRD", 430, 2);
/// Loti (LSL).
pub const LSL: Currency = Currency::new("Loti", "LSL", 426, 2);
/// Libyan Dinar (LYD).
pub const LYD: Currency = Currency::new("Libyan Dinar", "LYD", 434, 3);
/// Moroccan Dirham (MAD).
pub const MAD: Currency = Currency::new("Moroccan Dirham", "MAD", 504, 2);
/// Moldovan Leu (MDL).
pub const MDL: Currency = Currency::new("Moldovan Leu", "MDL", 498, 2);
/// Malagasy Ariary (MGA).
pub const MGA: Currency = Currency::new("Malagasy Ariary", "MGA", 969, 2);
/// Denar (MKD).
pub const MKD: Currency = Currency::new("Denar", "MKD", 807, 2);
/// Kyat (MMK).
pub const MMK: Currency = Currency::new("Kyat", "MMK", 104, 2);
/// Tugrik (MNT).
pub const MNT: Currency = Currency::new("Tugrik", "MNT", 496, 2);
/// Pataca (MOP).
pub const MOP: Currency = Currency::new("Pataca", "MOP", 446, 2);
/// Ouguiya (MRU).
pub const MRU: Currency = Currency::new("Ouguiya", "MRU", 929, 2);
/// Mauritius Rupee (MUR).
pub const MUR: Currency = Currency::new("Mauritius Rupee", "MUR", 480, 2);
/// Rufiyaa (MVR).
pub const MVR: Currency = Currency::new("Rufiyaa", "MVR", 462, 2);
/// Malawi Kwacha (MWK).
pub const MWK: Currency = Currency::new("Malawi Kwacha", "MWK", 454, 2);
/// Mexican Peso (MXN).
pub const MXN: Currency = Currency::new("Mexican Peso", "MXN", 484, 2);
/// Malaysian Ringgit (MYR).
pub const MYR: Currency = Currency::new("Malaysian Ringgit", "MYR", 458, 2);
/// Mozambique Metical (MZN).
pub const MZN: Currency = Currency::new("Mozambique Metical", "MZN", 943, 2);
/// Namibia Dollar (NAD).
pub const NAD: Currency = Currency::new("Namibia Dollar", "NAD", 516, 2);
/// Naira (NGN).
pub const NGN: Currency = Currency::new("Naira", "NGN", 566, 2);
/// Cordoba Oro (NIO).
pub const NIO: Currency = Currency::new("Cordoba Oro", "NIO", 558, 2);
/// Norwegian Krone (NOK).
pub const NOK: Currency = Currency::new("Norwegian Krone", "NOK", 578, 2);
/// Nepalese Rupee (NPR).
pub const NPR: Currency = Currency::new("Nepalese Rupee", "NPR", 524, 2);
/// New Zealand Dollar (NZD).
pub const NZD: Currency = Currency::new("New Zealand Dollar", "NZD", 554, 2);
/// Rial Omani (OMR).
pub const OMR: Currency = Currency::new("Rial Omani", "OMR", 512, 3);
/// Balboa (PAB).
pub const PAB: Currency = Currency::new("Balboa", "PAB", 590, 2);
/// Sol (PEN).
pub const PEN: Currency = Currency::new("Sol", "PEN", 604, 2);
/// Kina (PGK).
pub const PGK: Currency = Currency::new("Kina", "PGK", 598, 2);
/// Philippine Peso (PHP).
pub const PHP: Currency = Currency::new("Philippine Peso", "PHP", 608, 2);
/// Pakistan Rupee (PKR).
pub const PKR: Currency = Currency::new("Pakistan Rupee", "PKR", 586, 2);
/// Zloty (PLN).
pub const PLN: Currency = Currency::new("Zloty", "PLN", 985, 2);
/// Guarani (PYG).
pub const PYG: Currency = Currency::new("Guarani", "PYG", 600, 0);
/// Qatari Rial (QAR).
pub const QAR: Currency = Currency::new("Qatari Rial", "QAR", 634, 2);
/// Romanian Leu (RON).
pub const RON: Currency = Currency::new("Romanian Leu", "RON", 946, 2);
/// Serbian Dinar (RSD).
pub const RSD: Currency = Currency::new("Serbian Dinar", "RSD", 941, 2);
/// Russian Ruble (RUB).
pub const RUB: Currency = Currency::new("Russian Ruble", "RUB", 643, 2);
/// Rwanda Franc (RWF).
pub const RWF: Currency = Currency::new("Rwanda Franc", "RWF", 646, 0);
/// Saudi Riyal (SAR).
pub const SAR: Currency = Currency::new("Saudi Riyal", "SAR", 682, 2);
/// Solomon Islands Dollar (SBD).
pub const SBD: Currency = Currency::new("Solomon Islands Dollar", "SBD", 90, 2);
/// Seychelles Rupee (SCR).
pub const SCR: Currency = Currency::new("Seychelles Rupee", "SCR", 690, 2);
/// Sudanese Pound (SDG).
pub const SDG: Currency = Currency::new("Sudanese Pound", "SDG", 938, 2);
/// Swedish Krona (SEK).
pub const SEK: Currency = Currency::new("Swedish Krona", "SEK", 752, 2);
/// Singapore Dollar (SGD).
pub const SGD: Currency = Currency::new("Singapore Dollar", "SGD", 702, 2);
/// Saint Helena Pound (SHP).
pub const SHP: Currency = Currency::new("Saint Helena Pound", "SHP", 654, 2);
/// Leone (SLL).
pub const SLL: Currency = Currency::new("Leone", "SLL", 694, 2);
/// Somali Shilling (SOS).
pub const SOS: Currency = Currency::new("Somali Shilling", "SOS", 706, 2);
/// Surinam Dollar (SRD).
pub const SRD: Currency = Currency::new("Surinam Dollar", "SRD", 968, 2);
/// South Sudanese Pound (SSP).
pub const SSP: Currency = Currency::new("South Sudanese Pound", "SSP", 728, 2);
/// Dobra (STN).
pub const STN: Currency = Currency::new("Dobra", "STN", 930, 2);
/// El Salvador Colon (SVC).
pub const SVC: Currency = Currency::new("El Salvador Colon", "SVC", 222, 2);
/// Syrian Pound (SYP).
pub const SYP: Currency = Currency::new("Syrian Pound", "SYP", 760, 2);
/// Lilangeni (SZL).
pub const SZL: Currency = Currency::new("Lilangeni", "SZL", 748, 2);
/// Baht (THB).
pub const THB: Currency = Currency::new("Baht", "THB", 764, 2);
/// Somoni (TJS).
pub const TJS: Currency = Currency::new("Somoni", "TJS", 972, 2);
/// Turkmenistan New Manat (TMT).
pub const TMT: Currency = Currency::new("Turkmenistan New Manat", "TMT", 934, 2);
/// Tunisian Dinar (TND).
pub const TND: Currency = Currency::new("Tunisian Dinar", "TND", 788, 3);
/// Pa’anga (TOP).
pub const TOP: Currency = Currency::new("Pa’anga", "TOP", 776, 2);
/// Turkish Lira (TRY).
pub const TRY: Currency = Currency::new("Turkish Lira", "TRY", 949, 2);
/// Trinidad and Tobago Dollar (TTD).
pub const TTD: Currency = Currency::new("Trinidad and Tobago Dollar", "TTD", 780, 2);
/// New Taiwan Dollar (TWD).
pub const TWD: Currency = Currency::new("New Taiwan Dollar", "TWD", 901, 2);
/// Tanzanian Shilling (TZS).
pub const TZS: Currency = Currency::new("Tanzanian Shilling", "TZS", 834, 2);
/// Hryvnia (UAH).
pub const UAH: Currency = Currency::new("Hryvnia", "UAH", 980, 2);
/// Uganda Shilling (UGX).
pub const UGX: Currency = Currency::new("Uganda Shilling", "UGX", 800, 0);
/// US Dollar (USD).
pub const USD: Currency = Currency::new("US Dollar", "USD", 840, 2);
/// Peso Uruguayo (UYU).
pub const UYU: Currency = Currency::new("Peso Uruguayo", "UYU", 858, 2);
/// Unidad Previsional (UYW).
pub const UYW: Currency = Currency::new("Unidad Previsional", "UYW", 927, 4);
/// Uzbekistan Sum (UZS).
pub const UZS: Currency = Currency::new("Uzbekistan Sum", "UZS", 860, 2);
/// Bolívar Soberano (VES).
pub const VES: Currency = Currency::new("Bolívar Soberano", "VES", 928, 2);
/// Dong (VND).
pub const VND: Currency = Currency::new("Dong", "VND", 704, 0);
/// Vatu (VUV).
pub const VUV: Currency = Currency::new("Vatu", "VUV", 548, 0);
/// Tala (WST).
pub const WST: Currency = Currency::new("Tala", "WST", 882, 2);
/// CFA Franc BEAC (XAF).
pub const XAF: Currency = Currency::new("CFA Franc BEAC", "XAF", 950, 0);
/// East Caribbean Dollar (XCD).
pub const XCD: Currency = Currency::new("East Caribbean Dollar", "XCD", 951, 2);
/// CFA Franc BCEAO (XOF).
pub const XOF: Currency = Currency::new("CFA Franc BCEAO", "XOF", 952, 0);
/// CFP Franc (XPF).
pub const XPF: Currency = Currency::new("CFP Franc", "XPF", 953, 0);
/// Yemeni Rial (YER).
pub const YER: Currency = Currency::new("Yemeni Rial", "YER", 886, 2);
/// Rand (ZAR).
pub const ZAR: Currency = Currency::new("Rand", "ZAR", 710, 2);
/// Zambian Kwacha (ZMW).
pub const ZMW: Currency = Currency::new("Zambian Kwacha", "ZMW", 967, 2);
/// Zimbabwe Dollar (ZWL).
pub const ZWL: Currency = Currency::new("Zimbabwe Dollar", "ZWL", 932, 2);

/// Every ISO 4217 currency, sorted by alphabetic code.
pub static ISO_4217: [Currency; 158] = [
    AED,
    AFN,
    ALL,
    AMD,
    ANG,
    AOA,
    ARS,
    AUD,
    AWG,
    AZN,
    BAM,
    BBD,
    BDT,
    BGN,
    BHD,
    BIF,
    BMD,
    BND,
    BOB,
    BRL,
    BSD,
    BTN,
    BWP,
    BYN,
    BZD,
    CAD,
    CDF,
    CHF,
    CLP,
    CNY,
    COP,
    CRC,
    CUC,
    CUP,
    CVE,
    CZK,
    DJF,
    DKK,
    DOP,
    DZD,
    EGP,
    ERN,
    ETB,
    EUR,
    FJD,
    FKP,
    GBP,
    GEL,
    GHS,
    GIP,
    GMD,
    GNF,
    GTQ,
    GYD,
    HKD,
    HNL,
    HRK,
    HTG,
    HUF,
    IDR,
    ILS,
    INR,
    IQD,
    IRR,
    ISK,
    JMD,
    JOD,
    JPY,
    KES,
    KGS,
    KHR,
    KMF,
    KPW,
    KRW,
    KWD,
    KYD,
    KZT,
    LAK,
    LBP,
    LKR,
    LRD,
    LSL,
    LYD,
    MAD,
    MDL,
    MGA,
    MKD,
    MMK,
    MNT,
    MOP,
    MRU,
    MUR,
    MVR,
    MWK,
    MXN,
    MYR,
    MZN,
    NAD,
    NGN,
    NIO,
    NOK,
    NPR,
    NZD,
    OMR,
    PAB,
    PEN,
    PGK,
    PHP,
    PKR,
    PLN,
    PYG,
    QAR,
    RON,
    RSD,
    RUB,
    RWF,
    SAR,
    SBD,
    SCR,
    SDG,
    SEK,
    SGD,
    SHP,
    SLL,
    SOS,
    SRD,
    SSP,
    STN,
    SVC,
    SYP,
    SZL,
    THB,
    TJS,
    TMT,
    TND,
    TOP,
    TRY,
    TTD,
    TWD,
    TZS,
    UAH,
    UGX,
    USD,
    UYU,
    UYW,
    UZS,
    VES,
    VND,
    VUV,
    WST,
    XAF,
    XCD,
    XOF,
    XPF,
    YER,
    ZAR,
    ZMW,
    ZWL,
];

/// Finds an ISO 4217 currency by its alphabetic code, ignoring ASCII case.
#[must_use]
pub fn find_by_alphabetic_code(code: &str) -> Option<Currency> {
    let code = code.to_ascii_uppercase();
    ISO_4217
        .binary_search_by(|currency| currency.alphabetic_code().cmp(code.as_str()))
        .ok()
        .and_then(|index| ISO_4217.get(index).copied())
}

/// Finds an ISO 4217 currency by its numeric code.
#[must_use]
pub fn find_by_numeric_code(code: u16) -> Option<Currency> {
    ISO_4217
        .iter()
        .find(|currency| currency.numeric_code() == code)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_catalog_is_sorted_and_unique() {
        for pair in ISO_4217.windows(2) {
            assert!(
                pair[0].alphabetic_code() < pair[1].alphabetic_code(),
                "{} must sort before {}",
                pair[0].alphabetic_code(),
                pair[1].alphabetic_code()
            );
        }
    }

    #[test]
    fn test_numeric_codes_are_unique() {
        for (i, currency) in ISO_4217.iter().enumerate() {
            assert!(
                ISO_4217[i + 1..]
                    .iter()
                    .all(|other| other.numeric_code() != currency.numeric_code()),
                "duplicate numeric code {}",
                currency.numeric_code()
            );
        }
    }

    #[rstest]
    #[case("USD", 840, 2)]
    #[case("usd", 840, 2)]
    #[case("JPY", 392, 0)]
    #[case("kwd", 414, 3)]
    #[case("BHD", 48, 3)]
    #[case("UYW", 927, 4)]
    fn test_find_by_alphabetic_code(
        #[case] code: &str,
        #[case] numeric: u16,
        #[case] minor_units: u8,
    ) {
        let currency = find_by_alphabetic_code(code).unwrap();
        assert_eq!(currency.numeric_code(), numeric);
        assert_eq!(currency.minor_units(), minor_units);
    }

    #[test]
    fn test_find_by_alphabetic_code_unknown() {
        assert!(find_by_alphabetic_code("KLT").is_none());
        assert!(find_by_alphabetic_code("").is_none());
    }

    #[test]
    fn test_find_by_numeric_code() {
        assert_eq!(find_by_numeric_code(978), Some(EUR));
        assert_eq!(find_by_numeric_code(512).unwrap().alphabetic_code(), "OMR");
        assert_eq!(find_by_numeric_code(484).unwrap().minor_units(), 2);
        assert!(find_by_numeric_code(666).is_none());
    }
}
