#![no_main]

use libfuzzer_sys::fuzz_target;
use sonority_core::{Cell, FourVoicePipeline, FourVoiceRow, ThreeVoicePipeline, ThreeVoiceRow, Variant};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Every field must parse or fail cleanly
    let fields: Vec<&str> = text.split(',').collect();
    for field in &fields {
        let _ = Cell::parse(field);
    }

    for variant in Variant::ALL {
        if let Ok(row) = ThreeVoiceRow::from_fields(&fields) {
            let _ = ThreeVoicePipeline::new(variant).classify_row(&row);
        }
        if let Ok(row) = FourVoiceRow::from_fields(&fields) {
            let out = FourVoicePipeline::new(variant).classify_row(&row);
            assert!(out.selection.cells().len() <= 3);
        }
    }
});
