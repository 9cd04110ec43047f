// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_CRITICAL_PENALTY: u8 = 25;
pub const DEFAULT_WARNING_PENALTY: u8 = 10;
pub const DEFAULT_WARNING_FLOOR: u8 = 50;

// --- Curriculum (Lehrplan 21 number ranges) ---
pub const DEFAULT_GRADE_NUMBER_MAX: [u64; 6] = [20, 100, 1_000, 10_000, 100_000, 1_000_000];
pub const DEFAULT_MULTIPLICATION_FROM_GRADE: u8 = 2;
pub const DEFAULT_DIVISION_FROM_GRADE: u8 = 2;
/// Largest single factor per grade; `None` = unrestricted.
pub const DEFAULT_GRADE_MAX_FACTOR: [Option<u64>; 6] =
    [None, Some(5), Some(10), Some(12), None, None];
/// Largest divisor per grade; `None` = unrestricted.
pub const DEFAULT_GRADE_MAX_DIVISOR: [Option<u64>; 6] =
    [None, Some(5), Some(10), Some(12), None, None];
