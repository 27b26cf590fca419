//! Runtime unit tags and the injectable unit system.
//!
//! A [`Unit`] is an SI scale factor attached to a set of mass/length/time
//! exponents. Exponents are real-valued so that the fractional powers which
//! show up in Kepler's law and the chirp mass (`^(1/3)`, `^(3/5)`) stay
//! representable; two units convert into one another when their exponents
//! agree to within [`DIMENSION_TOLERANCE`].

use std::fmt;
use std::ops::{Div, Mul};

use crate::constants::{AU_M, C_SI, DAY_S, GYR_S, G_SI, M_SUN_KG, PC_M, R_SUN_M, YR_S};
use crate::error::{GwError, GwResult};

/// Largest exponent difference still treated as the same dimension.
pub const DIMENSION_TOLERANCE: f64 = 1e-9;

/// Exponents of the base dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub mass: f64,
    pub length: f64,
    pub time: f64,
}

impl Dimensions {
    pub const DIMENSIONLESS: Self = Self::new(0.0, 0.0, 0.0);
    pub const MASS: Self = Self::new(1.0, 0.0, 0.0);
    pub const LENGTH: Self = Self::new(0.0, 1.0, 0.0);
    pub const TIME: Self = Self::new(0.0, 0.0, 1.0);
    pub const FREQUENCY: Self = Self::new(0.0, 0.0, -1.0);

    #[must_use]
    pub const fn new(mass: f64, length: f64, time: f64) -> Self {
        Self { mass, length, time }
    }

    /// Whether `other` describes the same physical dimension.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        (self.mass - other.mass).abs() < DIMENSION_TOLERANCE
            && (self.length - other.length).abs() < DIMENSION_TOLERANCE
            && (self.time - other.time).abs() < DIMENSION_TOLERANCE
    }

    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.matches(&Self::DIMENSIONLESS)
    }

    #[must_use]
    pub fn powf(self, p: f64) -> Self {
        Self::new(self.mass * p, self.length * p, self.time * p)
    }

    fn combine(self, other: Self, sign: f64) -> Self {
        Self::new(
            self.mass + sign * other.mass,
            self.length + sign * other.length,
            self.time + sign * other.time,
        )
    }
}

/// A physical unit: SI scale factor plus dimension exponents.
///
/// Named units carry a display symbol; units derived through arithmetic
/// display in SI base form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    scale: f64,
    dims: Dimensions,
    symbol: Option<&'static str>,
}

impl Unit {
    #[must_use]
    pub const fn named(symbol: &'static str, scale: f64, dims: Dimensions) -> Self {
        Self {
            scale,
            dims,
            symbol: Some(symbol),
        }
    }

    /// Unnamed unit `scale * kg^a m^b s^c`.
    #[must_use]
    pub const fn derived(scale: f64, dims: Dimensions) -> Self {
        Self {
            scale,
            dims,
            symbol: None,
        }
    }

    /// Size of one of this unit in SI base units.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[must_use]
    pub fn symbol(&self) -> Option<&'static str> {
        self.symbol
    }

    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.dims.is_dimensionless()
    }

    /// Whether values in this unit can be expressed in `other`.
    #[must_use]
    pub fn is_equivalent(&self, other: &Unit) -> bool {
        self.dims.matches(&other.dims)
    }

    /// Multiplier taking a value in `self` to a value in `to`.
    pub fn conversion_factor(&self, to: &Unit) -> GwResult<f64> {
        if !self.is_equivalent(to) {
            tracing::debug!(from = %self, to = %to, "dimensional mismatch");
            return Err(GwError::IncompatibleUnits {
                from: self.to_string(),
                to: to.to_string(),
            });
        }
        Ok(self.scale / to.scale)
    }

    #[must_use]
    pub fn powf(self, p: f64) -> Unit {
        Unit::derived(self.scale.powf(p), self.dims.powf(p))
    }

    #[must_use]
    pub fn recip(self) -> Unit {
        self.powf(-1.0)
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        Unit::derived(self.scale * rhs.scale, self.dims.combine(rhs.dims, 1.0))
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        Unit::derived(self.scale / rhs.scale, self.dims.combine(rhs.dims, -1.0))
    }
}

fn write_factor(f: &mut fmt::Formatter<'_>, first: &mut bool, base: &str, exp: f64) -> fmt::Result {
    if exp.abs() < DIMENSION_TOLERANCE {
        return Ok(());
    }
    if !*first {
        f.write_str(" ")?;
    }
    *first = false;
    if (exp - 1.0).abs() < DIMENSION_TOLERANCE {
        write!(f, "{base}")
    } else if (exp - exp.round()).abs() < DIMENSION_TOLERANCE {
        write!(f, "{base}^{}", exp.round() as i64)
    } else {
        write!(f, "{base}^{exp:.4}")
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(symbol) = self.symbol {
            return f.write_str(symbol);
        }
        if self.is_dimensionless() && self.scale == 1.0 {
            return f.write_str("dimensionless");
        }

        let mut first = true;
        if self.scale != 1.0 {
            write!(f, "{:e}", self.scale)?;
            first = false;
        }
        write_factor(f, &mut first, "kg", self.dims.mass)?;
        write_factor(f, &mut first, "m", self.dims.length)?;
        write_factor(f, &mut first, "s", self.dims.time)
    }
}

pub const DIMENSIONLESS: Unit = Unit::named("dimensionless", 1.0, Dimensions::DIMENSIONLESS);

pub const KG: Unit = Unit::named("kg", 1.0, Dimensions::MASS);
pub const GRAM: Unit = Unit::named("g", 1e-3, Dimensions::MASS);
pub const MSUN: Unit = Unit::named("Msun", M_SUN_KG, Dimensions::MASS);

pub const M: Unit = Unit::named("m", 1.0, Dimensions::LENGTH);
pub const CM: Unit = Unit::named("cm", 1e-2, Dimensions::LENGTH);
pub const KM: Unit = Unit::named("km", 1e3, Dimensions::LENGTH);
pub const RSUN: Unit = Unit::named("Rsun", R_SUN_M, Dimensions::LENGTH);
pub const AU: Unit = Unit::named("AU", AU_M, Dimensions::LENGTH);
pub const PC: Unit = Unit::named("pc", PC_M, Dimensions::LENGTH);

pub const S: Unit = Unit::named("s", 1.0, Dimensions::TIME);
pub const DAY: Unit = Unit::named("d", DAY_S, Dimensions::TIME);
pub const YR: Unit = Unit::named("yr", YR_S, Dimensions::TIME);
pub const GYR: Unit = Unit::named("Gyr", GYR_S, Dimensions::TIME);

pub const HZ: Unit = Unit::named("Hz", 1.0, Dimensions::FREQUENCY);
pub const MHZ: Unit = Unit::named("mHz", 1e-3, Dimensions::FREQUENCY);

/// SI unit of the gravitational constant, m^3 kg^-1 s^-2.
pub const G_UNIT: Unit = Unit::derived(1.0, Dimensions::new(-1.0, 3.0, -2.0));
/// SI unit of velocity, m s^-1.
pub const VELOCITY_UNIT: Unit = Unit::derived(1.0, Dimensions::new(0.0, 1.0, -1.0));

/// Physical constants and canonical output units shared by every formula.
///
/// Plain (undimensioned) inputs are read in the SI base units of the system,
/// so `G` and `c` enter the arithmetic as bare SI numbers in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSystem {
    gravitational_constant: f64,
    speed_of_light: f64,
    solar_mass: Unit,
    astronomical_unit: Unit,
    hertz: Unit,
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self {
            gravitational_constant: G_SI,
            speed_of_light: C_SI,
            solar_mass: MSUN,
            astronomical_unit: AU,
            hertz: HZ,
        }
    }
}

impl UnitSystem {
    #[must_use]
    pub fn with_gravitational_constant(mut self, g_si: f64) -> Self {
        self.gravitational_constant = g_si;
        self
    }

    #[must_use]
    pub fn with_speed_of_light(mut self, c_si: f64) -> Self {
        self.speed_of_light = c_si;
        self
    }

    /// Redefines the solar mass, in kg, used for canonical mass output.
    #[must_use]
    pub fn with_solar_mass(mut self, kg: f64) -> Self {
        self.solar_mass = Unit::named("Msun", kg, Dimensions::MASS);
        self
    }

    /// G in m^3 kg^-1 s^-2.
    #[must_use]
    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    /// c in m s^-1.
    #[must_use]
    pub fn speed_of_light(&self) -> f64 {
        self.speed_of_light
    }

    #[must_use]
    pub fn solar_mass(&self) -> Unit {
        self.solar_mass
    }

    #[must_use]
    pub fn astronomical_unit(&self) -> Unit {
        self.astronomical_unit
    }

    #[must_use]
    pub fn hertz(&self) -> Unit {
        self.hertz
    }
}
