//! Name-addressed numeric parameters.
//!
//! Each tunable type declares a static table of getter/setter pairs once;
//! the parameter editor walks that table instead of reflecting on fields.

use osc_core::Real;

/// Multiplicative step applied by one nudge.
pub const NUDGE_FACTOR: Real = 1.1;

/// One tunable property of `T`.
pub struct ParamSpec<T: 'static> {
    pub name: &'static str,
    pub get: fn(&T) -> Real,
    pub set: fn(&mut T, Real),
}

/// Direction of a single multiplicative nudge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nudge {
    Up,
    Down,
}

impl Nudge {
    pub fn factor(self) -> Real {
        match self {
            Nudge::Up => NUDGE_FACTOR,
            Nudge::Down => 1.0 / NUDGE_FACTOR,
        }
    }
}

pub trait Tunable: Sized + 'static {
    /// Parameter table in display order.
    fn params() -> &'static [ParamSpec<Self>];

    fn param_names() -> Vec<&'static str> {
        Self::params().iter().map(|p| p.name).collect()
    }

    fn param(&self, name: &str) -> Option<Real> {
        Self::params()
            .iter()
            .find(|p| p.name == name)
            .map(|p| (p.get)(self))
    }

    /// Returns `false` if `name` is not a parameter of this type.
    fn set_param(&mut self, name: &str, value: Real) -> bool {
        match Self::params().iter().find(|p| p.name == name) {
            Some(spec) => {
                (spec.set)(self, value);
                true
            }
            None => false,
        }
    }

    /// Scale a parameter by the nudge factor and return the new value.
    ///
    /// There are no bounds: repeated nudges may drive a value towards zero
    /// or to magnitudes that destabilise the model.
    fn nudge_param(&mut self, name: &str, nudge: Nudge) -> Option<Real> {
        let value = self.param(name)? * nudge.factor();
        self.set_param(name, value);
        Some(value)
    }
}
