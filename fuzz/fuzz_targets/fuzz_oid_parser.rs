#![no_main]

use libfuzzer_sys::fuzz_target;

use snmp_varbind::oid::Oid;

fuzz_target!(|data: &[u8]| {
    // Fuzz OID from BER encoding; anything that decodes must re-encode identically
    if let Ok(oid) = Oid::from_ber(data) {
        let ber = oid.to_ber().expect("decoded OID must re-encode");
        assert_eq!(Oid::from_ber(&ber).ok(), Some(oid));
    }

    // Fuzz OID from dotted string notation (if data is valid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(oid) = Oid::parse(s) {
            assert_eq!(Oid::parse(&oid.to_string()).ok(), Some(oid));
        }
    }
});
