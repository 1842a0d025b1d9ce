// Constants

// Empirical fit of mean disorientation (degrees) against cubochoric semi-edge steps N:
// resolution ≈ CUBOCHORIC_RESOLUTION_NUMERATOR / N + CUBOCHORIC_RESOLUTION_OFFSET
pub const CUBOCHORIC_RESOLUTION_NUMERATOR: f64 = 131.97049;
pub const CUBOCHORIC_RESOLUTION_OFFSET: f64 = 0.03732;

// Full turn in degrees, divided by the resolution for the angular grids
pub const FULL_TURN_DEGREES: f64 = 360.0;

// Cubochoric (Lambert) projection constants
pub const CUBE_EDGE: f64 = 2.145_029_397_111_025_6; // ap = π^(2/3), cube volume equals ball volume π²
pub const CUBE_SEMI_EDGE: f64 = 0.5 * CUBE_EDGE;
pub const LAMBERT_SCALE: f64 = 0.897_772_786_961_286_2; // sc = a / ap
pub const LAMBERT_PREF: f64 = 1.381_976_597_885_342; // √(6/π)
pub const LAMBERT_PREK: f64 = 1.643_456_402_972_503; // R1 · 2^(1/4) / β
pub const LAMBERT_PI12: f64 = 0.261_799_387_799_490_3; // π/12
pub const LAMBERT_R24: f64 = 4.898_979_485_566_356; // √24
pub const LAMBERT_SQRT_PI: f64 = 1.772_453_850_905_516; // √π
pub const HOMOCHORIC_RADIUS: f64 = 1.330_670_039_491_468_8; // (3π/4)^(1/3)

// Polynomial fit (in |h|²) of cos(ω/2) for the inverse homochoric relation |h| = (3/4 (ω − sin ω))^(1/3)
pub const HOMOCHORIC_FIT: [f64; 16] = [
    1.000_000_000_001_885_2,
    -0.500_000_000_219_484_7,
    -0.024_999_992_127_593_126,
    -0.003_928_701_544_781_374,
    -0.000_815_270_153_545_043_8,
    -0.000_200_950_042_611_971_2,
    -0.000_023_979_867_760_717_56,
    -0.000_082_028_689_266_058_41,
    0.000_124_487_150_420_900_92,
    -0.000_174_911_421_482_257_7,
    0.000_170_348_193_414_005_4,
    -0.000_120_620_650_041_168_28,
    0.000_059_719_705_868_660_826,
    -0.000_019_807_567_239_656_47,
    0.000_003_953_714_684_212_874,
    -0.000_000_365_550_014_397_195_44,
];

// Tolerances
pub const CANONICAL_SIGN_TOLERANCE: f64 = 1e-9; // |w| below this is treated as a rotation by π
pub const UNIT_NORM_TOLERANCE: f64 = 1e-6; // For validating externally supplied quaternions
pub const FUNDAMENTAL_ZONE_TOLERANCE: f64 = 1e-10; // Zone plane tests, inclusive
pub const DEDUPLICATION_TOLERANCE: f64 = 1e-6; // Euclidean distance between canonical quaternions
pub const GROUP_CLOSURE_TOLERANCE: f64 = 1e-8; // For operator set validation and generation
pub const OPERATOR_MATCH_TOLERANCE: f64 = 1e-5; // Matching caller-supplied operators and their products
