//! Per-country IBAN structure strings from the SWIFT IBAN registry.
//!
//! Each entry is a 2-letter country code followed by segments of the form
//! `<length>['!']<type>`, where the type letter is `n` (digit), `a`
//! (uppercase letter), or `c` (alphanumeric) and `!` marks a fixed length
//! (otherwise the length is a maximum).

/// SWIFT registry IBAN structure, one entry per supported country.
pub const IBAN_STRUCTURES: &[&str] = &[
    "AD2!n4!n4!n12!c",
    "AE2!n3!n16!n",
    "AL2!n8!n16!c",
    "AT2!n5!n11!n",
    "AZ2!n4!a20!c",
    "BA2!n3!n3!n8!n2!n",
    "BE2!n3!n7!n2!n",
    "BG2!n4!a4!n2!n8!c",
    "BH2!n4!a14!c",
    "BR2!n8!n5!n10!n1!a1!c",
    "CH2!n5!n12!c",
    "CR2!n4!n14!n",
    "CY2!n3!n5!n16!c",
    "CZ2!n4!n6!n10!n",
    "DE2!n8!n10!n",
    "DK2!n4!n9!n1!n",
    "DO2!n4!c20!n",
    "EE2!n2!n2!n11!n1!n",
    "ES2!n4!n4!n1!n1!n10!n",
    "FI2!n6!n7!n1!n",
    "FO2!n4!n9!n1!n",
    "FR2!n5!n5!n11!c2!n",
    "GB2!n4!a6!n8!n",
    "GE2!n2!a16!n",
    "GI2!n4!a15!c",
    "GL2!n4!n9!n1!n",
    "GR2!n3!n4!n16!c",
    "GT2!n4!c20!c",
    "HR2!n7!n10!n",
    "HU2!n3!n4!n1!n15!n1!n",
    "IE2!n4!a6!n8!n",
    "IL2!n3!n3!n13!n",
    "IS2!n4!n2!n6!n8!n",
    "IT2!n1!a5!n5!n12!c",
    "JO2!n4!a4!n18!c",
    "KW2!n4!a22!c",
    "KZ2!n3!n13!c",
    "LB2!n4!n20!c",
    "LI2!n5!n12!c",
    "LT2!n5!n11!n",
    "LU2!n3!n13!c",
    "LV2!n4!a13!c",
    "MC2!n5!n5!n11!c2!n",
    "MD2!n2!c18!c",
    "ME2!n3!n13!n2!n",
    "MK2!n3!n10!c2!n",
    "MR2!n5!n5!n11!n2!n",
    "MT2!n4!a5!n18!c",
    "MU2!n4!a2!n2!n12!n3!n3!a",
    "NL2!n4!a10!n",
    "NO2!n4!n6!n1!n",
    "PK2!n4!a16!c",
    "PL2!n8!n16!n",
    "PS2!n4!a21!c",
    "PT2!n4!n4!n11!n2!n",
    "QA2!n4!a21!c",
    "RO2!n4!a16!c",
    "RS2!n3!n13!n2!n",
    "SA2!n2!n18!c",
    "SE2!n3!n16!n1!n",
    "SI2!n5!n8!n2!n",
    "SK2!n4!n6!n10!n",
    "SM2!n1!a5!n5!n12!c",
    "TN2!n2!n3!n13!n2!n",
    "TR2!n5!n1!n16!c",
    "VG2!n4!a16!n",
];
