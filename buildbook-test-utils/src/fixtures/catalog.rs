//! Item catalog fixture.
//!
//! A small Data Dragon style document with real item ids. It contains groups of items that
//! share a word (`Doran's ...`, `... Staff`, boots) so ambiguity can be exercised.

/// Item id of Mercury's Treads.
pub static MERCURYS_TREADS_ID: &str = "3111";

/// Item id of Void Staff.
pub static VOID_STAFF_ID: &str = "3135";

/// Item id of Rabadon's Deathcap.
pub static RABADONS_DEATHCAP_ID: &str = "3089";

/// Mock catalog in Data Dragon `item.json` shape.
pub static MOCK_CATALOG_JSON: &str = r#"{
    "type": "item",
    "version": "14.1.1",
    "data": {
        "1001": {"name": "Boots", "colloq": ";", "maps": {"11": true}},
        "1038": {"name": "B. F. Sword", "colloq": ";bf", "maps": {"11": true}},
        "1054": {"name": "Doran's Shield", "colloq": ";", "maps": {"11": true}},
        "1055": {"name": "Doran's Blade", "colloq": ";", "maps": {"11": true}},
        "1056": {"name": "Doran's Ring", "colloq": ";", "maps": {"11": true}},
        "3003": {"name": "Archangel's Staff", "colloq": ";aa staff", "maps": {"11": true}},
        "3006": {"name": "Berserker's Greaves", "colloq": ";zerks", "maps": {"11": true}},
        "3020": {"name": "Sorcerer's Shoes", "colloq": ";sorcs", "maps": {"11": true}},
        "3031": {"name": "Infinity Edge", "colloq": ";ie", "maps": {"11": true}},
        "3089": {"name": "Rabadon's Deathcap", "colloq": ";cap;dcap", "maps": {"11": true}},
        "3111": {"name": "Mercury's Treads", "colloq": ";mercs", "maps": {"11": true}},
        "3135": {"name": "Void Staff", "colloq": ";vs", "maps": {"11": true}},
        "3400": {"name": "Your Cut", "inStore": false, "maps": {"11": true}},
        "6616": {"name": "Staff of Flowing Water", "colloq": ";", "maps": {"11": true}}
    }
}"#;
