//! Demo records loaded at startup.

use crate::models::Asset;

/// Returns the demo inventory shown on a fresh install.
pub fn demo_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: 10247,
            name: "Dell Laptop".to_string(),
            category: "Electronics".to_string(),
            serial_number: "DL-2023-001".to_string(),
            purchase_date: "2023-01-15".to_string(),
            value: 950.0,
            status: "Active".to_string(),
            location: "Office A".to_string(),
        },
        Asset {
            id: 20583,
            name: "Office Chair".to_string(),
            category: "Furniture".to_string(),
            serial_number: "OC-2023-045".to_string(),
            purchase_date: "2023-03-20".to_string(),
            value: 280.0,
            status: "Active".to_string(),
            location: "Office B".to_string(),
        },
        Asset {
            id: 30891,
            name: "HP Printer".to_string(),
            category: "Electronics".to_string(),
            serial_number: "HP-2022-789".to_string(),
            purchase_date: "2022-11-10".to_string(),
            value: 360.0,
            status: "Under Maintenance".to_string(),
            location: "Storage".to_string(),
        },
    ]
}
