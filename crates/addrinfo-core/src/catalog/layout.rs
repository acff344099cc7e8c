//! Firmware image layout constants
//!
//! This module centralizes the byte signatures and structural constants used
//! to locate regions in the image. Constants are organized by region.

/// Vendor backup block (`ASUSBKP$`) and its embedded license records
pub mod backup {
    pub const HEADER: &[u8] = b"ASUSBKP$";
    pub const S2LP_HEADER: &[u8] = b"S2LPR\x01\x00\x00";
    pub const KEYS_HEADER: &[u8] = b"KEYS\x1C\x00\x00\x00";

    /// Minimum run of padding that bounds the embedded records
    pub const FREE_SPACE_LENGTH: usize = 64;
    pub const FREE_SPACE_ALIGNMENT: usize = 4;
}

/// Management engine firmware region
pub mod me {
    pub const HEADER: &[u8] = &[
        0x20, 0x20, 0x80, 0x0F, 0x40, 0x00, 0x00, 0x10, //
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];
}

/// Gigabit ethernet firmware region
pub mod gbe {
    pub const HEADER: &[u8] = &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
        0xC3, 0x10,
    ];

    /// The MAC address field sits 12 bytes before the signature
    pub const MAC_OFFSET: isize = -12;
}

/// MSOA licensing module and its SLIC records
pub mod slic {
    pub const MSOA_HEADER: &[u8] = &[
        0xB9, 0x2A, 0x90, 0xA1, 0x94, 0x53, 0xF2, 0x45, //
        0x85, 0x7A, 0x12, 0x82, 0x42, 0x13, 0xEE, 0xFB,
    ];

    pub const S2LP_HEADER: &[u8] = &[
        0xFB, 0xEB, 0xFF, 0xCD, 0xDC, 0x17, 0xBC, 0x46, //
        0x9B, 0x75, 0x59, 0xB8, 0x61, 0x92, 0x09, 0x13, //
        0x78, 0x02, 0x02, 0x40, 0x6E, 0x01, 0x00, 0xF8, //
        0x56, 0x01, 0x00, 0x19,
    ];

    pub const KEYS_HEADER: &[u8] = &[
        0x58, 0x44, 0x63, 0x15, 0xA4, 0xE8, 0x6D, 0x43, //
        0xAC, 0x2F, 0x57, 0xE3, 0x3E, 0x53, 0x4C, 0xCF, //
        0x75, 0x4E, 0x02, 0x40, 0x38, 0x00, 0x00, 0xF8, //
        0x20, 0x00, 0x00, 0x19,
    ];

    pub const FREE_SPACE_LENGTH: usize = 3096;
    pub const FREE_SPACE_ALIGNMENT: usize = 8;
}

/// FD44 module chain
pub mod module {
    pub const HEADER: &[u8] = &[
        0x0B, 0x82, 0x44, 0xFD, 0xAB, 0xF1, 0xC0, 0x41, //
        0xAE, 0x4E, 0x0C, 0x55, 0x55, 0x6E, 0xB9, 0xBD,
    ];

    /// Tag that marks a BSA module, found at `TAG_OFFSET` inside the header
    pub const BSA_TAG: &[u8] = b"BSA_";
    pub const TAG_OFFSET: usize = 28;

    /// Module payload starts right after the header
    pub const HEADER_LENGTH: usize = 36;

    /// Maximum number of BSA modules reported
    pub const MAX_MODULES: usize = 10;
}
