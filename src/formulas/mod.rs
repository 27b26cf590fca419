//! Closed-form gravitational-wave source formulas.
//!
//! Each formula exists twice: as a method on [`UnitSystem`] for callers that
//! inject their own constants, and as a free function using the default
//! system. Inputs may be plain or dimensioned; if any input carries a unit,
//! `G` and `c` enter as dimensioned constants and the result is converted to
//! the formula's canonical unit. All-plain inputs are read as SI.

pub mod evolution;
pub mod mass;
pub mod orbit;
pub mod peters;

use crate::error::GwResult;
use crate::operand::Operand;
use crate::units::{Unit, UnitSystem, G_UNIT, VELOCITY_UNIT};
use crate::value::Value;

pub use evolution::{beta, c_0, get_a_from_ecc};
pub use mass::chirp_mass;
pub use orbit::{get_a_from_f_orb, get_f_orb_from_a};
pub use peters::{fn_dot, peters_f, peters_g};

pub(crate) fn any_dimensioned(operands: &[&Operand]) -> bool {
    operands.iter().any(|op| op.is_dimensioned())
}

/// Converts a dimensioned result to `canonical`; plain results pass through.
pub(crate) fn finish(result: Operand, canonical: Unit) -> GwResult<Value> {
    if result.is_dimensioned() {
        Ok(result.convert_to(canonical)?.into_value())
    } else {
        Ok(result.into_value())
    }
}

impl UnitSystem {
    pub(crate) fn g_operand(&self, dimensioned: bool) -> Operand {
        if dimensioned {
            Operand::quantity(self.gravitational_constant(), G_UNIT)
        } else {
            Operand::plain(self.gravitational_constant())
        }
    }

    pub(crate) fn c_operand(&self, dimensioned: bool) -> Operand {
        if dimensioned {
            Operand::quantity(self.speed_of_light(), VELOCITY_UNIT)
        } else {
            Operand::plain(self.speed_of_light())
        }
    }
}
