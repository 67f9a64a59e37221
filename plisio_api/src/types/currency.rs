//! Cryptocurrency and fiat currency codes accepted by Plisio.

code_enum! {
    /// Cryptocurrencies Plisio can invoice in and pay out (`psys_cid`).
    Currency {
        Eth => ("ETH", "Ethereum"),
        Btc => ("BTC", "Bitcoin"),
        Ltc => ("LTC", "Litecoin"),
        Dash => ("DASH", "Dash"),
        Tzec => ("TZEC", "Zcash"),
        Doge => ("DOGE", "Dogecoin"),
        Bch => ("BCH", "Bitcoin Cash"),
        Xmr => ("XMR", "Monero"),
        Usdt => ("USDT", "Tether ERC-20"),
        Usdc => ("USDC", "USD Coin"),
        Shib => ("SHIB", "Shiba Inu"),
        Btt => ("BTT", "BitTorrent TRC-20"),
        UsdtTrx => ("USDT_TRX", "Tether TRC-20"),
        Trx => ("TRX", "Tron"),
        Bnb => ("BNB", "BNB Chain"),
        Busd => ("BUSD", "Binance USD BEP-20"),
        UsdtBsc => ("USDT_BSC", "Tether BEP-20"),
    }
}

code_enum! {
    /// Fiat currencies an invoice amount can be quoted in (`source_currency`).
    FiatCurrency {
        Aed => ("AED", "United Arab Emirates Dirham"),
        Afn => ("AFN", "Afghan Afghani"),
        All => ("ALL", "Albanian Lek"),
        Amd => ("AMD", "Armenian Dram"),
        Ang => ("ANG", "Netherlands Antillean Guilder"),
        Aoa => ("AOA", "Angolan Kwanza"),
        Ars => ("ARS", "Argentine Peso"),
        Aud => ("AUD", "Australian Dollar"),
        Awg => ("AWG", "Aruban Florin"),
        Azn => ("AZN", "Azerbaijani Manat"),
        Bam => ("BAM", "Bosnia-Herzegovina Convertible Mark"),
        Bbd => ("BBD", "Barbadian Dollar"),
        Bdt => ("BDT", "Bangladeshi Taka"),
        Bgn => ("BGN", "Bulgarian Lev"),
        Bhd => ("BHD", "Bahraini Dinar"),
        Bif => ("BIF", "Burundian Franc"),
        Bmd => ("BMD", "Bermuda Dollar"),
        Bnd => ("BND", "Brunei Dollar"),
        Bob => ("BOB", "Bolivian Boliviano"),
        Brl => ("BRL", "Brazilian Real"),
        Bsd => ("BSD", "Bahamian Dollar"),
        Btn => ("BTN", "Bhutanese Ngultrum"),
        Bwp => ("BWP", "Botswana Pula"),
        Byn => ("BYN", "New Belarusian Ruble"),
        Byr => ("BYR", "Belarusian Ruble"),
        Bzd => ("BZD", "Belize Dollar"),
        Cad => ("CAD", "Canadian Dollar"),
        Cdf => ("CDF", "Congolese Franc"),
        Chf => ("CHF", "Swiss Franc"),
        Clf => ("CLF", "Chilean Unit of Account (UF)"),
        Clp => ("CLP", "Chilean Peso"),
        Cny => ("CNY", "Chinese Yuan"),
        Cop => ("COP", "Colombian Peso"),
        Crc => ("CRC", "Costa Rican Colón"),
        Cuc => ("CUC", "Cuban Convertible Peso"),
        Cup => ("CUP", "Cuban Peso"),
        Cve => ("CVE", "Cape Verdean Escudo"),
        Czk => ("CZK", "Czech Republic Koruna"),
        Djf => ("DJF", "Djiboutian Franc"),
        Dkk => ("DKK", "Danish Krone"),
        Dop => ("DOP", "Dominican Peso"),
        Dzd => ("DZD", "Algerian Dinar"),
        Egp => ("EGP", "Egyptian Pound"),
        Ern => ("ERN", "Eritrean Nakfa"),
        Etb => ("ETB", "Ethiopian Birr"),
        Eur => ("EUR", "Euro"),
        Fjd => ("FJD", "Fijian Dollar"),
        Fkp => ("FKP", "Falkland Islands Pound"),
        Gbp => ("GBP", "British Pound Sterling"),
        Gel => ("GEL", "Georgian Lari"),
        Ggp => ("GGP", "Guernsey Pound"),
        Ghs => ("GHS", "Ghanaian Cedi"),
        Gip => ("GIP", "Gibraltar Pound"),
        Gmd => ("GMD", "Gambian Dalasi"),
        Gnf => ("GNF", "Guinean Franc"),
        Gtq => ("GTQ", "Guatemalan Quetzal"),
        Gyd => ("GYD", "Guyanese Dollar"),
        Hkd => ("HKD", "Hong Kong Dollar"),
        Hnl => ("HNL", "Honduran Lempira"),
        Hrk => ("HRK", "Croatian Kuna"),
        Htg => ("HTG", "Haitian Gourde"),
        Huf => ("HUF", "Hungarian Forint"),
        Idr => ("IDR", "Indonesian Rupiah"),
        Ils => ("ILS", "Israeli New Sheqel"),
        Imp => ("IMP", "Manx pound"),
        Inr => ("INR", "Indian Rupee"),
        Iqd => ("IQD", "Iraqi Dinar"),
        Irr => ("IRR", "Iranian Rial"),
        Isk => ("ISK", "Icelandic Króna"),
        Jep => ("JEP", "Jersey Pound"),
        Jmd => ("JMD", "Jamaican Dollar"),
        Jod => ("JOD", "Jordanian Dinar"),
        Jpy => ("JPY", "Japanese Yen"),
        Kes => ("KES", "Kenyan Shilling"),
        Kgs => ("KGS", "Kyrgyzstan Som"),
        Khr => ("KHR", "Cambodian Riel"),
        Kmf => ("KMF", "Comorian Franc"),
        Kpw => ("KPW", "North Korean Won"),
        Krw => ("KRW", "South Korean Won"),
        Kwd => ("KWD", "Kuwaiti Dinar"),
        Kyd => ("KYD", "Cayman Islands Dollar"),
        Kzt => ("KZT", "Kazakhstani Tenge"),
        Lak => ("LAK", "Laotian Kip"),
        Lbp => ("LBP", "Lebanese Pound"),
        Lkr => ("LKR", "Sri Lankan Rupee"),
        Lrd => ("LRD", "Liberian Dollar"),
        Lsl => ("LSL", "Lesotho Loti"),
        Ltl => ("LTL", "Lithuanian Litas"),
        Lvl => ("LVL", "Latvian Lats"),
        Lyd => ("LYD", "Libyan Dinar"),
        Mad => ("MAD", "Moroccan Dirham"),
        Mdl => ("MDL", "Moldovan Leu"),
        Mga => ("MGA", "Malagasy Ariary"),
        Mkd => ("MKD", "Macedonian Denar"),
        Mmk => ("MMK", "Myanmar Kyat"),
        Mnt => ("MNT", "Mongolian Tugrik"),
        Mop => ("MOP", "Macanese Pataca"),
        Mro => ("MRO", "Mauritania Ouguiya"),
        Mur => ("MUR", "Mauritian Rupee"),
        Mvr => ("MVR", "Maldivian Rufiyaa"),
        Mwk => ("MWK", "Malawi Kwacha"),
        Mxn => ("MXN", "Mexican Peso"),
        Myr => ("MYR", "Malaysian Ringgit"),
        Mzn => ("MZN", "Mozambican Metical"),
        Nad => ("NAD", "Namibian Dollar"),
        Ngn => ("NGN", "Nigerian Naira"),
        Nio => ("NIO", "Nicaraguan Córdoba"),
        Nok => ("NOK", "Norwegian Krone"),
        Npr => ("NPR", "Nepalese Rupee"),
        Nzd => ("NZD", "New Zealand Dollar"),
        Omr => ("OMR", "Omani Rial"),
        Pab => ("PAB", "Panamanian Balboa"),
        Pen => ("PEN", "Peruvian Nuevo Sol"),
        Pgk => ("PGK", "Papua New Guinean Kina"),
        Php => ("PHP", "Philippine Peso"),
        Pkr => ("PKR", "Pakistani Rupee"),
        Pln => ("PLN", "Polish Zloty"),
        Pyg => ("PYG", "Paraguayan Guarani"),
        Qar => ("QAR", "Qatari Rial"),
        Ron => ("RON", "Romanian Leu"),
        Rsd => ("RSD", "Serbian Dinar"),
        Rub => ("RUB", "Russian Ruble"),
        Rwf => ("RWF", "Rwandan Franc"),
        Sar => ("SAR", "Saudi Riyal"),
        Sbd => ("SBD", "Solomon Islands Dollar"),
        Scr => ("SCR", "Seychellois Rupee"),
        Sdg => ("SDG", "Sudanese Pound"),
        Sek => ("SEK", "Swedish Krona"),
        Sgd => ("SGD", "Singapore Dollar"),
        Shp => ("SHP", "Saint Helena Pound"),
        Sll => ("SLL", "Sierra Leonean Leone"),
        Sos => ("SOS", "Somali Shilling"),
        Srd => ("SRD", "Surinamese Dollar"),
        Std => ("STD", "São Tomé and Príncipe Dobra"),
        Svc => ("SVC", "Salvadoran Colón"),
        Syp => ("SYP", "Syrian Pound"),
        Szl => ("SZL", "Swazi Lilangeni"),
        Thb => ("THB", "Thai Baht"),
        Tjs => ("TJS", "Tajikistan Somoni"),
        Tmt => ("TMT", "Turkmenistan Manat"),
        Tnd => ("TND", "Tunisian Dinar"),
        Top => ("TOP", "Tongan Paʻanga"),
        Try => ("TRY", "Turkish Lira"),
        Ttd => ("TTD", "Trinidad and Tobago Dollar"),
        Twd => ("TWD", "New Taiwan Dollar"),
        Tzs => ("TZS", "Tanzanian Shilling"),
        Uah => ("UAH", "Ukrainian Hryvnia"),
        Ugx => ("UGX", "Ugandan Shilling"),
        Usd => ("USD", "United States Dollar"),
        Uyu => ("UYU", "Uruguayan Peso"),
        Uzs => ("UZS", "Uzbekistan Som"),
        Vef => ("VEF", "Venezuelan Bolívar Fuerte"),
        Vnd => ("VND", "Vietnamese Dong"),
        Vuv => ("VUV", "Vanuatu Vatu"),
        Wst => ("WST", "Samoan Tala"),
        Xaf => ("XAF", "CFA Franc BEAC"),
        Xag => ("XAG", "Silver (troy ounce)"),
        Xau => ("XAU", "Gold (troy ounce)"),
        Xcd => ("XCD", "East Caribbean Dollar"),
        Xdr => ("XDR", "Special Drawing Rights"),
        Xof => ("XOF", "CFA Franc BCEAO"),
        Xpf => ("XPF", "CFP Franc"),
        Yer => ("YER", "Yemeni Rial"),
        Zar => ("ZAR", "South African Rand"),
        Zmk => ("ZMK", "Zambian Kwacha (pre-2013)"),
        Zmw => ("ZMW", "Zambian Kwacha"),
        Zwl => ("ZWL", "Zimbabwean Dollar"),
    }
}
