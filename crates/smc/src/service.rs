//! Definitions of Secure Monitor Call Service Identifiers.

pub const ARM_ARCHITECTURE: u8 = 0;
pub const CPU_SERVICE: u8 = 1;
pub const SIP_SERVICE: u8 = 2;
pub const OEM_SERVICE: u8 = 3;
pub const STANDARD_SERVICE: u8 = 4;
// 5 - 47 are reserved for future use.
pub const TRUSTED_APP_1: u8 = 48;
pub const TRUSTED_APP_2: u8 = 49;
pub const TRUSTED_OS_1: u8 = 50;
pub const TRUSTED_OS_2: u8 = 51;
pub const TRUSTED_OS_3: u8 = 52;
pub const TRUSTED_OS_4: u8 = 53;
pub const TRUSTED_OS_5: u8 = 54;
pub const TRUSTED_OS_6: u8 = 55;
pub const TRUSTED_OS_7: u8 = 56;
pub const TRUSTED_OS_8: u8 = 57;
pub const TRUSTED_OS_9: u8 = 58;
pub const TRUSTED_OS_10: u8 = 59;
pub const TRUSTED_OS_11: u8 = 60;
pub const TRUSTED_OS_12: u8 = 61;
pub const TRUSTED_OS_13: u8 = 62;
pub const TRUSTED_OS_14: u8 = 63;
