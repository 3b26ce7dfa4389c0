//! Startup fleet
//!
//! The simulation always starts from the same three boxes, all stable with
//! no history.

use coldchain_core::ShipmentBox;

/// (id, name, batch, location, °C, %RH)
const INITIAL_BOXES: [(&str, &str, &str, &str, f32, f32); 3] = [
    ("BOX-101", "Vaccine Batch Alpha", "V-2023-001", "Warehouse Zone A", 4.5, 45.0),
    ("BOX-102", "Insulin Glargine", "INS-992-X", "Transport Truck 4", 5.2, 50.0),
    ("BOX-103", "Oncology Meds", "ONC-551-B", "Cold Room 2", 3.0, 30.0),
];

/// The seeded fleet, in display order
pub fn initial_boxes() -> Vec<ShipmentBox> {
    INITIAL_BOXES
        .iter()
        .map(|&(id, name, batch, location, temperature, humidity)| {
            ShipmentBox::new(id, name, batch, location, temperature, humidity)
        })
        .collect()
}
