// Error codes implementation
// Standardized codes attached to every validation and configuration failure

pub mod validation {
    pub const INVALID_IDENTIFIER: &str = "VALIDATION_1001";
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
    pub const INVALID_FORMAT: &str = "VALIDATION_1003";
    pub const INVALID_AMOUNT: &str = "VALIDATION_1004";
    pub const DATE_ORDERING: &str = "VALIDATION_1005";
    pub const INCONSISTENT_STATE: &str = "VALIDATION_1006";
    pub const DUPLICATE_CODE: &str = "VALIDATION_1007";
}

pub mod configuration {
    pub const DEGENERATE_PARAMETER: &str = "CONFIG_2001";
    pub const EMPTY_CATALOG: &str = "CONFIG_2002";
    pub const SOURCE_UNREADABLE: &str = "CONFIG_2003";
}

pub mod export {
    pub const WRITE_FAILED: &str = "EXPORT_3001";
}
