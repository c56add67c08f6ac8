//! Common test fixtures and constants.

use snmp_varbind::{Oid, oid};

// =============================================================================
// Standard system MIB OIDs (1.3.6.1.2.1.1.*)
// =============================================================================

pub fn sys_descr() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)
}
pub fn sys_object_id() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 2, 0)
}
pub fn sys_uptime() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 3, 0)
}
pub fn sys_contact() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 4, 0)
}
pub fn sys_name() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)
}

/// ifHCInOctets.1 (Counter64)
pub fn if_hc_in_octets() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 6, 1)
}

/// ipAdEntAddr.192.0.2.1
pub fn ip_ad_ent_addr() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 4, 20, 1, 1, 192, 0, 2, 1)
}

/// Nonexistent OID for testing NoSuchObject/NoSuchInstance
pub fn nonexistent_oid() -> Oid {
    oid!(1, 3, 6, 1, 99, 99, 99, 0)
}

// =============================================================================
// Captured varbinds
// =============================================================================

/// sysName.0 = "router1"
pub const SYS_NAME_VARBIND: &[u8] = &[
    0x30, 0x13, 0x06, 0x08, 0x2B, 0x06, 0x01, 0x02, 0x01, 0x01, 0x05, 0x00, 0x04, 0x07, b'r',
    b'o', b'u', b't', b'e', b'r', b'1',
];

/// sysUpTime.0 = TimeTicks 123456
pub const SYS_UPTIME_VARBIND: &[u8] = &[
    0x30, 0x0F, 0x06, 0x08, 0x2B, 0x06, 0x01, 0x02, 0x01, 0x01, 0x03, 0x00, 0x43, 0x03, 0x01,
    0xE2, 0x40,
];

/// 1.3.6.1.99.99.99.0 = noSuchInstance
pub const NO_SUCH_INSTANCE_VARBIND: &[u8] = &[
    0x30, 0x0B, 0x06, 0x07, 0x2B, 0x06, 0x01, 0x63, 0x63, 0x63, 0x00, 0x81, 0x00,
];

/// ifHCInOctets.1 = Counter64 with high=1, low=0
pub const COUNTER64_VARBIND: &[u8] = &[
    0x30, 0x14, 0x06, 0x0B, 0x2B, 0x06, 0x01, 0x02, 0x01, 0x1F, 0x01, 0x01, 0x01, 0x06, 0x01,
    0x46, 0x05, 0x01, 0x00, 0x00, 0x00, 0x00,
];
