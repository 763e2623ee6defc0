use std::fmt;

/// A named property of a mass-spring-damper system.
///
/// Used to label the offending value in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Mass,
    SpringConstant,
    DampingCoefficient,
    UnsprungLength,
    InitialDisplacement,
    InitialVelocity,
}

impl Property {
    /// Returns a short human-readable description of the property.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Property::Mass => "mass",
            Property::SpringConstant => "spring constant",
            Property::DampingCoefficient => "damping coefficient",
            Property::UnsprungLength => "unstressed spring length",
            Property::InitialDisplacement => "initial displacement",
            Property::InitialVelocity => "initial velocity",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
