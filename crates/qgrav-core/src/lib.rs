// ─────────────────────────────────────────────────────────────────────
// QGrav — Formula Library
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Formula library: quantum mechanics, Schwarzschild geometry, black hole
//! thermodynamics and the 3D generalized uncertainty principle.
//!
//! Every function is pure. Constants are passed in explicitly as a
//! [`qgrav_types::PhysicalConstants`].

pub mod black_hole;
pub mod gup;
pub mod quantum;
pub mod relativity;
