/// Gravitational constant in m^3 kg^-1 s^-2 (CODATA 2018)
pub const G_SI: f64 = 6.67430e-11;
/// Speed of light in m s^-1
pub const C_SI: f64 = 299_792_458.0;
/// Solar mass in kg (IAU 2015 nominal GM_sun over CODATA 2018 G)
pub const M_SUN_KG: f64 = 1.988_409_870_698_051e30;
/// Astronomical unit in meters (IAU 2012)
pub const AU_M: f64 = 1.495_978_707e11;
/// Parsec in meters
pub const PC_M: f64 = 3.085_677_581_491_367e16;
/// Solar radius in meters
pub const R_SUN_M: f64 = 6.957e8;

pub const DAY_S: f64 = 86_400.0;
/// seconds per Julian year
pub const YR_S: f64 = 3.15576e7;
pub const GYR_S: f64 = YR_S * 1e9;
