#![no_main]

use crop_advisor::analysis::recommend;
use crop_advisor::io::read_farm_input_json_from_bytes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = read_farm_input_json_from_bytes(data) {
        let recs = recommend(&input);
        assert_eq!(recs.len(), 3);
        assert!(recs.iter().all(|r| r.sustainability <= 100));
    }
});
