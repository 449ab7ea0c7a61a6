#![deny(missing_docs)]

//! The five packed-code processors of the finite-group engine: unit
//! upper-triangular matrices mod 2 and mod 2^B, discrete Heisenberg groups
//! mod 2 and mod 2^B, and nibble-packed symmetric-group permutations —
//! plus their basis machinery and the exhaustive product self-check.

mod basis;
mod check;
mod heisenberg_z2;
mod heisenberg_zn;
mod layout;
mod permutation;
mod triangular_z2;
mod triangular_zn;

pub use basis::{HeisenbergBasisKind, HeisenbergZ2BasisKind, TriangularBasisKind};
pub use check::{check_product, ProductCheck};
pub use heisenberg_z2::HeisenbergZ2;
pub use heisenberg_zn::HeisenbergZn;
pub use permutation::Permutation;
pub use triangular_z2::TriangularZ2;
pub use triangular_zn::TriangularZn;
