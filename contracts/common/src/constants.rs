//! Protocol Constants
//!
//! Configuration values for the Strategy vault.
//!
//! # Network Configuration
//!
//! Use feature flags to compile for different networks:
//! - `mainnet` - Production values (higher minimum deposit)
//! - Default (no feature) - Testnet values (lower minimums for testing)
//!
//! ```toml
//! # For mainnet deployment:
//! strategy-common = { path = "...", features = ["mainnet"] }
//! ```

/// Unit-of-account metadata (USDC-equivalent)
pub mod units {
    /// Display name of the unit of account
    pub const NAME: &str = "USDC";
    /// Decimal places of one unit
    pub const DECIMALS: u8 = 6;
    /// One whole unit with decimals (1 USDC = 1_000_000 base units)
    pub const ONE: u64 = 1_000_000;
}

/// Native asset metadata
pub mod native {
    /// Decimal places of the native asset (wei-style)
    pub const DECIMALS: u8 = 18;
    /// One whole native token in base units
    pub const ONE: u64 = 1_000_000_000_000_000_000;
}

/// Fee Configuration (in basis points, 100 = 1%)
pub mod fees {
    /// Basis points denominator
    pub const BPS_DENOMINATOR: u64 = 10_000;

    /// Highest fee a vault can be configured with (100%)
    pub const MAX_FEE_BPS: u64 = BPS_DENOMINATOR;

    /// Fee used when no explicit configuration is given (0.01%)
    pub const DEFAULT_FEE_BPS: u64 = 1;
}

/// Deposit limits
pub mod limits {
    /// Default minimum deposit in native base units
    #[cfg(feature = "mainnet")]
    pub const DEFAULT_MIN_DEPOSIT: u64 = 1_000_000_000_000; // 0.000001 native

    /// Default minimum deposit in native base units (testnet)
    #[cfg(not(feature = "mainnet"))]
    pub const DEFAULT_MIN_DEPOSIT: u64 = 100;
}

/// Oracle defaults
pub mod oracle {
    /// Scale applied to oracle prices: price is units per `PRICE_SCALE` native
    pub const PRICE_SCALE: u64 = super::native::ONE;
}
