/// acmop system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gravitational acceleration used for rotor weight (N/kg).
pub const DEFAULT_GRAVITY: f64 = 9.8;

/// Placeholder phase resistance for the drive winding (Ohm).
/// The field solver rejects a zero resistance.
pub const DEFAULT_DRIVE_RESISTANCE_OHM: f64 = 1.0;

/// Default phase count when the spec input does not state one.
pub const DEFAULT_PHASE_COUNT: u32 = 3;

/// Scale factor from millimetres to metres.
pub const MM_TO_M: f64 = 1e-3;

/// Name given to the reference design built without a candidate vector.
pub const INITIAL_DESIGN_NAME: &str = "SPMSM_InitialDesign";

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "acmop.toml";
