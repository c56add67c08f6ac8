#![no_main]

use libfuzzer_sys::fuzz_target;

use snmp_varbind::varbind::decode_response;

fuzz_target!(|data: &[u8]| {
    // Whatever decodes must encode back to the same bytes
    if let Ok(vb) = decode_response(data) {
        let ber = vb.to_ber().expect("decoded varbind must re-encode");
        let again = decode_response(&ber).expect("re-decode");
        assert_eq!(again, vb);
    }
});
