//! Per-frame vertex animation.
//!
//! All motion is closed-form: an integer angular index (degrees) is advanced
//! once per frame and vertex x/z coordinates are recomputed from it with
//! sine/cosine. Nothing is interpolated between frames.

mod index;
mod orbit;
mod oscillator;

pub use index::AngularIndex;
pub use orbit::{Orbit, OrbitPoint, orbit_xz};
pub use oscillator::OscillatorPair;
