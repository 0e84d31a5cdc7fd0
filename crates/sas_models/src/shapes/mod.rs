//! Particle shape form factors.

pub mod cylinder;

pub use cylinder::Cylinder;
