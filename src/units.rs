//! Physical constants in SI units.
//!
//! The engine works entirely in SI: meters, seconds, kilograms, joules.
//! Helper constants cover the femtometer length scale of nuclear scattering
//! and the MeV energies typical for alpha projectiles.

/// Elementary charge in coulombs.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;
/// Coulomb's constant k = 1/(4πε₀) in N⋅m²/C².
pub const COULOMB_CONSTANT: f64 = 8.987_551_792_3e9;
/// Femtometer in meters.
pub const FEMTOMETER: f64 = 1.0e-15;
/// Mega-electronvolt in joules.
pub const MEV: f64 = 1.0e6 * ELEMENTARY_CHARGE;
/// Alpha particle mass in kilograms.
pub const ALPHA_PARTICLE_MASS: f64 = 6.644e-27;
