//! ISO 3166-1 country table with the ISO 4217 currency in circulation.
//!
//! Display names follow common usage; formal ISO names that differ are
//! registered as aliases in the parent module.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IsoCountry {
    pub name: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: &'static str,
    /// `None` for territories without a currency of their own (Antarctica).
    pub currency: Option<&'static str>,
}

const fn c(
    name: &'static str,
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: &'static str,
    currency: &'static str,
) -> IsoCountry {
    IsoCountry {
        name,
        alpha2,
        alpha3,
        numeric,
        currency: Some(currency),
    }
}

pub(crate) const COUNTRIES: &[IsoCountry] = &[
    c("Afghanistan", "AF", "AFG", "004", "AFN"),
    c("Åland Islands", "AX", "ALA", "248", "EUR"),
    c("Albania", "AL", "ALB", "008", "ALL"),
    c("Algeria", "DZ", "DZA", "012", "DZD"),
    c("American Samoa", "AS", "ASM", "016", "USD"),
    c("Andorra", "AD", "AND", "020", "EUR"),
    c("Angola", "AO", "AGO", "024", "AOA"),
    c("Anguilla", "AI", "AIA", "660", "XCD"),
    IsoCountry {
        name: "Antarctica",
        alpha2: "AQ",
        alpha3: "ATA",
        numeric: "010",
        currency: None,
    },
    c("Antigua and Barbuda", "AG", "ATG", "028", "XCD"),
    c("Argentina", "AR", "ARG", "032", "ARS"),
    c("Armenia", "AM", "ARM", "051", "AMD"),
    c("Aruba", "AW", "ABW", "533", "AWG"),
    c("Australia", "AU", "AUS", "036", "AUD"),
    c("Austria", "AT", "AUT", "040", "EUR"),
    c("Azerbaijan", "AZ", "AZE", "031", "AZN"),
    c("Bahamas", "BS", "BHS", "044", "BSD"),
    c("Bahrain", "BH", "BHR", "048", "BHD"),
    c("Bangladesh", "BD", "BGD", "050", "BDT"),
    c("Barbados", "BB", "BRB", "052", "BBD"),
    c("Belarus", "BY", "BLR", "112", "BYN"),
    c("Belgium", "BE", "BEL", "056", "EUR"),
    c("Belize", "BZ", "BLZ", "084", "BZD"),
    c("Benin", "BJ", "BEN", "204", "XOF"),
    c("Bermuda", "BM", "BMU", "060", "BMD"),
    c("Bhutan", "BT", "BTN", "064", "BTN"),
    c("Bolivia", "BO", "BOL", "068", "BOB"),
    c("Bonaire, Sint Eustatius and Saba", "BQ", "BES", "535", "USD"),
    c("Bosnia and Herzegovina", "BA", "BIH", "070", "BAM"),
    c("Botswana", "BW", "BWA", "072", "BWP"),
    c("Bouvet Island", "BV", "BVT", "074", "NOK"),
    c("Brazil", "BR", "BRA", "076", "BRL"),
    c("British Indian Ocean Territory", "IO", "IOT", "086", "USD"),
    c("Brunei", "BN", "BRN", "096", "BND"),
    c("Bulgaria", "BG", "BGR", "100", "BGN"),
    c("Burkina Faso", "BF", "BFA", "854", "XOF"),
    c("Burundi", "BI", "BDI", "108", "BIF"),
    c("Cabo Verde", "CV", "CPV", "132", "CVE"),
    c("Cambodia", "KH", "KHM", "116", "KHR"),
    c("Cameroon", "CM", "CMR", "120", "XAF"),
    c("Canada", "CA", "CAN", "124", "CAD"),
    c("Cayman Islands", "KY", "CYM", "136", "KYD"),
    c("Central African Republic", "CF", "CAF", "140", "XAF"),
    c("Chad", "TD", "TCD", "148", "XAF"),
    c("Chile", "CL", "CHL", "152", "CLP"),
    c("China", "CN", "CHN", "156", "CNY"),
    c("Christmas Island", "CX", "CXR", "162", "AUD"),
    c("Cocos (Keeling) Islands", "CC", "CCK", "166", "AUD"),
    c("Colombia", "CO", "COL", "170", "COP"),
    c("Comoros", "KM", "COM", "174", "KMF"),
    c("Republic of the Congo", "CG", "COG", "178", "XAF"),
    c("Democratic Republic of the Congo", "CD", "COD", "180", "CDF"),
    c("Cook Islands", "CK", "COK", "184", "NZD"),
    c("Costa Rica", "CR", "CRI", "188", "CRC"),
    c("Côte d'Ivoire", "CI", "CIV", "384", "XOF"),
    c("Croatia", "HR", "HRV", "191", "EUR"),
    c("Cuba", "CU", "CUB", "192", "CUP"),
    c("Curaçao", "CW", "CUW", "531", "XCG"),
    c("Cyprus", "CY", "CYP", "196", "EUR"),
    c("Czechia", "CZ", "CZE", "203", "CZK"),
    c("Denmark", "DK", "DNK", "208", "DKK"),
    c("Djibouti", "DJ", "DJI", "262", "DJF"),
    c("Dominica", "DM", "DMA", "212", "XCD"),
    c("Dominican Republic", "DO", "DOM", "214", "DOP"),
    c("Ecuador", "EC", "ECU", "218", "USD"),
    c("Egypt", "EG", "EGY", "818", "EGP"),
    c("El Salvador", "SV", "SLV", "222", "USD"),
    c("Equatorial Guinea", "GQ", "GNQ", "226", "XAF"),
    c("Eritrea", "ER", "ERI", "232", "ERN"),
    c("Estonia", "EE", "EST", "233", "EUR"),
    c("Eswatini", "SZ", "SWZ", "748", "SZL"),
    c("Ethiopia", "ET", "ETH", "231", "ETB"),
    c("Falkland Islands", "FK", "FLK", "238", "FKP"),
    c("Faroe Islands", "FO", "FRO", "234", "DKK"),
    c("Fiji", "FJ", "FJI", "242", "FJD"),
    c("Finland", "FI", "FIN", "246", "EUR"),
    c("France", "FR", "FRA", "250", "EUR"),
    c("French Guiana", "GF", "GUF", "254", "EUR"),
    c("French Polynesia", "PF", "PYF", "258", "XPF"),
    c("French Southern Territories", "TF", "ATF", "260", "EUR"),
    c("Gabon", "GA", "GAB", "266", "XAF"),
    c("Gambia", "GM", "GMB", "270", "GMD"),
    c("Georgia", "GE", "GEO", "268", "GEL"),
    c("Germany", "DE", "DEU", "276", "EUR"),
    c("Ghana", "GH", "GHA", "288", "GHS"),
    c("Gibraltar", "GI", "GIB", "292", "GIP"),
    c("Greece", "GR", "GRC", "300", "EUR"),
    c("Greenland", "GL", "GRL", "304", "DKK"),
    c("Grenada", "GD", "GRD", "308", "XCD"),
    c("Guadeloupe", "GP", "GLP", "312", "EUR"),
    c("Guam", "GU", "GUM", "316", "USD"),
    c("Guatemala", "GT", "GTM", "320", "GTQ"),
    c("Guernsey", "GG", "GGY", "831", "GBP"),
    c("Guinea", "GN", "GIN", "324", "GNF"),
    c("Guinea-Bissau", "GW", "GNB", "624", "XOF"),
    c("Guyana", "GY", "GUY", "328", "GYD"),
    c("Haiti", "HT", "HTI", "332", "HTG"),
    c("Heard Island and McDonald Islands", "HM", "HMD", "334", "AUD"),
    c("Holy See", "VA", "VAT", "336", "EUR"),
    c("Honduras", "HN", "HND", "340", "HNL"),
    c("Hong Kong", "HK", "HKG", "344", "HKD"),
    c("Hungary", "HU", "HUN", "348", "HUF"),
    c("Iceland", "IS", "ISL", "352", "ISK"),
    c("India", "IN", "IND", "356", "INR"),
    c("Indonesia", "ID", "IDN", "360", "IDR"),
    c("Iran", "IR", "IRN", "364", "IRR"),
    c("Iraq", "IQ", "IRQ", "368", "IQD"),
    c("Ireland", "IE", "IRL", "372", "EUR"),
    c("Isle of Man", "IM", "IMN", "833", "GBP"),
    c("Israel", "IL", "ISR", "376", "ILS"),
    c("Italy", "IT", "ITA", "380", "EUR"),
    c("Jamaica", "JM", "JAM", "388", "JMD"),
    c("Japan", "JP", "JPN", "392", "JPY"),
    c("Jersey", "JE", "JEY", "832", "GBP"),
    c("Jordan", "JO", "JOR", "400", "JOD"),
    c("Kazakhstan", "KZ", "KAZ", "398", "KZT"),
    c("Kenya", "KE", "KEN", "404", "KES"),
    c("Kiribati", "KI", "KIR", "296", "AUD"),
    c("North Korea", "KP", "PRK", "408", "KPW"),
    c("South Korea", "KR", "KOR", "410", "KRW"),
    c("Kuwait", "KW", "KWT", "414", "KWD"),
    c("Kyrgyzstan", "KG", "KGZ", "417", "KGS"),
    c("Laos", "LA", "LAO", "418", "LAK"),
    c("Latvia", "LV", "LVA", "428", "EUR"),
    c("Lebanon", "LB", "LBN", "422", "LBP"),
    c("Lesotho", "LS", "LSO", "426", "LSL"),
    c("Liberia", "LR", "LBR", "430", "LRD"),
    c("Libya", "LY", "LBY", "434", "LYD"),
    c("Liechtenstein", "LI", "LIE", "438", "CHF"),
    c("Lithuania", "LT", "LTU", "440", "EUR"),
    c("Luxembourg", "LU", "LUX", "442", "EUR"),
    c("Macao", "MO", "MAC", "446", "MOP"),
    c("Madagascar", "MG", "MDG", "450", "MGA"),
    c("Malawi", "MW", "MWI", "454", "MWK"),
    c("Malaysia", "MY", "MYS", "458", "MYR"),
    c("Maldives", "MV", "MDV", "462", "MVR"),
    c("Mali", "ML", "MLI", "466", "XOF"),
    c("Malta", "MT", "MLT", "470", "EUR"),
    c("Marshall Islands", "MH", "MHL", "584", "USD"),
    c("Martinique", "MQ", "MTQ", "474", "EUR"),
    c("Mauritania", "MR", "MRT", "478", "MRU"),
    c("Mauritius", "MU", "MUS", "480", "MUR"),
    c("Mayotte", "YT", "MYT", "175", "EUR"),
    c("Mexico", "MX", "MEX", "484", "MXN"),
    c("Micronesia", "FM", "FSM", "583", "USD"),
    c("Moldova", "MD", "MDA", "498", "MDL"),
    c("Monaco", "MC", "MCO", "492", "EUR"),
    c("Mongolia", "MN", "MNG", "496", "MNT"),
    c("Montenegro", "ME", "MNE", "499", "EUR"),
    c("Montserrat", "MS", "MSR", "500", "XCD"),
    c("Morocco", "MA", "MAR", "504", "MAD"),
    c("Mozambique", "MZ", "MOZ", "508", "MZN"),
    c("Myanmar", "MM", "MMR", "104", "MMK"),
    c("Namibia", "NA", "NAM", "516", "NAD"),
    c("Nauru", "NR", "NRU", "520", "AUD"),
    c("Nepal", "NP", "NPL", "524", "NPR"),
    c("Netherlands", "NL", "NLD", "528", "EUR"),
    c("New Caledonia", "NC", "NCL", "540", "XPF"),
    c("New Zealand", "NZ", "NZL", "554", "NZD"),
    c("Nicaragua", "NI", "NIC", "558", "NIO"),
    c("Niger", "NE", "NER", "562", "XOF"),
    c("Nigeria", "NG", "NGA", "566", "NGN"),
    c("Niue", "NU", "NIU", "570", "NZD"),
    c("Norfolk Island", "NF", "NFK", "574", "AUD"),
    c("North Macedonia", "MK", "MKD", "807", "MKD"),
    c("Northern Mariana Islands", "MP", "MNP", "580", "USD"),
    c("Norway", "NO", "NOR", "578", "NOK"),
    c("Oman", "OM", "OMN", "512", "OMR"),
    c("Pakistan", "PK", "PAK", "586", "PKR"),
    c("Palau", "PW", "PLW", "585", "USD"),
    c("Palestine", "PS", "PSE", "275", "ILS"),
    c("Panama", "PA", "PAN", "591", "PAB"),
    c("Papua New Guinea", "PG", "PNG", "598", "PGK"),
    c("Paraguay", "PY", "PRY", "600", "PYG"),
    c("Peru", "PE", "PER", "604", "PEN"),
    c("Philippines", "PH", "PHL", "608", "PHP"),
    c("Pitcairn", "PN", "PCN", "612", "NZD"),
    c("Poland", "PL", "POL", "616", "PLN"),
    c("Portugal", "PT", "PRT", "620", "EUR"),
    c("Puerto Rico", "PR", "PRI", "630", "USD"),
    c("Qatar", "QA", "QAT", "634", "QAR"),
    c("Réunion", "RE", "REU", "638", "EUR"),
    c("Romania", "RO", "ROU", "642", "RON"),
    c("Russia", "RU", "RUS", "643", "RUB"),
    c("Rwanda", "RW", "RWA", "646", "RWF"),
    c("Saint Barthélemy", "BL", "BLM", "652", "EUR"),
    c("Saint Helena, Ascension and Tristan da Cunha", "SH", "SHN", "654", "SHP"),
    c("Saint Kitts and Nevis", "KN", "KNA", "659", "XCD"),
    c("Saint Lucia", "LC", "LCA", "662", "XCD"),
    c("Saint Martin (French part)", "MF", "MAF", "663", "EUR"),
    c("Saint Pierre and Miquelon", "PM", "SPM", "666", "EUR"),
    c("Saint Vincent and the Grenadines", "VC", "VCT", "670", "XCD"),
    c("Samoa", "WS", "WSM", "882", "WST"),
    c("San Marino", "SM", "SMR", "674", "EUR"),
    c("Sao Tome and Principe", "ST", "STP", "678", "STN"),
    c("Saudi Arabia", "SA", "SAU", "682", "SAR"),
    c("Senegal", "SN", "SEN", "686", "XOF"),
    c("Serbia", "RS", "SRB", "688", "RSD"),
    c("Seychelles", "SC", "SYC", "690", "SCR"),
    c("Sierra Leone", "SL", "SLE", "694", "SLE"),
    c("Singapore", "SG", "SGP", "702", "SGD"),
    c("Sint Maarten (Dutch part)", "SX", "SXM", "534", "XCG"),
    c("Slovakia", "SK", "SVK", "703", "EUR"),
    c("Slovenia", "SI", "SVN", "705", "EUR"),
    c("Solomon Islands", "SB", "SLB", "090", "SBD"),
    c("Somalia", "SO", "SOM", "706", "SOS"),
    c("South Africa", "ZA", "ZAF", "710", "ZAR"),
    c("South Georgia and the South Sandwich Islands", "GS", "SGS", "239", "GBP"),
    c("South Sudan", "SS", "SSD", "728", "SSP"),
    c("Spain", "ES", "ESP", "724", "EUR"),
    c("Sri Lanka", "LK", "LKA", "144", "LKR"),
    c("Sudan", "SD", "SDN", "729", "SDG"),
    c("Suriname", "SR", "SUR", "740", "SRD"),
    c("Svalbard and Jan Mayen", "SJ", "SJM", "744", "NOK"),
    c("Sweden", "SE", "SWE", "752", "SEK"),
    c("Switzerland", "CH", "CHE", "756", "CHF"),
    c("Syria", "SY", "SYR", "760", "SYP"),
    c("Taiwan", "TW", "TWN", "158", "TWD"),
    c("Tajikistan", "TJ", "TJK", "762", "TJS"),
    c("Tanzania", "TZ", "TZA", "834", "TZS"),
    c("Thailand", "TH", "THA", "764", "THB"),
    c("Timor-Leste", "TL", "TLS", "626", "USD"),
    c("Togo", "TG", "TGO", "768", "XOF"),
    c("Tokelau", "TK", "TKL", "772", "NZD"),
    c("Tonga", "TO", "TON", "776", "TOP"),
    c("Trinidad and Tobago", "TT", "TTO", "780", "TTD"),
    c("Tunisia", "TN", "TUN", "788", "TND"),
    c("Turkey", "TR", "TUR", "792", "TRY"),
    c("Turkmenistan", "TM", "TKM", "795", "TMT"),
    c("Turks and Caicos Islands", "TC", "TCA", "796", "USD"),
    c("Tuvalu", "TV", "TUV", "798", "AUD"),
    c("Uganda", "UG", "UGA", "800", "UGX"),
    c("Ukraine", "UA", "UKR", "804", "UAH"),
    c("United Arab Emirates", "AE", "ARE", "784", "AED"),
    c("United Kingdom", "GB", "GBR", "826", "GBP"),
    c("United States", "US", "USA", "840", "USD"),
    c("United States Minor Outlying Islands", "UM", "UMI", "581", "USD"),
    c("Uruguay", "UY", "URY", "858", "UYU"),
    c("Uzbekistan", "UZ", "UZB", "860", "UZS"),
    c("Vanuatu", "VU", "VUT", "548", "VUV"),
    c("Venezuela", "VE", "VEN", "862", "VES"),
    c("Vietnam", "VN", "VNM", "704", "VND"),
    c("British Virgin Islands", "VG", "VGB", "092", "USD"),
    c("United States Virgin Islands", "VI", "VIR", "850", "USD"),
    c("Wallis and Futuna", "WF", "WLF", "876", "XPF"),
    c("Western Sahara", "EH", "ESH", "732", "MAD"),
    c("Yemen", "YE", "YEM", "887", "YER"),
    c("Zambia", "ZM", "ZMB", "894", "ZMW"),
    c("Zimbabwe", "ZW", "ZWE", "716", "ZWG"),
];

/// Table row for an upper-case alpha-2 code.
pub(crate) fn by_alpha2(alpha2: &str) -> Option<&'static IsoCountry> {
    COUNTRIES.iter().find(|row| row.alpha2 == alpha2)
}
