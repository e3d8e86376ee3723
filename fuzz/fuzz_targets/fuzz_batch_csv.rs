#![no_main]

use crop_advisor::analysis::recommend;
use crop_advisor::io::read_farm_inputs_csv_from_bytes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(records) = read_farm_inputs_csv_from_bytes(data) {
        for record in records {
            let _ = recommend(&record.input);
        }
    }
});
