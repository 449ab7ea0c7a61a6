//! Closed per-processor basis kind enumerations.

use serde::{Deserialize, Serialize};

/// Generating-set variants of the unit upper-triangular processors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TriangularBasisKind {
    /// One generator per free cell.
    #[default]
    Standard,
    /// Only the superdiagonal ("ribbon") cells.
    Ribbon,
    /// Standard generators plus their inverses.
    StandardWithInverses,
    /// Ribbon generators plus their inverses.
    RibbonWithInverses,
}

impl TriangularBasisKind {
    /// All valid kinds, in declaration order.
    pub const ALL: [TriangularBasisKind; 4] = [
        TriangularBasisKind::Standard,
        TriangularBasisKind::Ribbon,
        TriangularBasisKind::StandardWithInverses,
        TriangularBasisKind::RibbonWithInverses,
    ];
}

/// Generating-set variants of the mod-2 Heisenberg processor.
///
/// Every mod-2 generator is self inverse, so no inverse-augmented kinds
/// exist here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HeisenbergZ2BasisKind {
    /// x and y generators only.
    Standard,
    /// x, y and the central z generator.
    #[default]
    StandardWithZ,
}

impl HeisenbergZ2BasisKind {
    /// All valid kinds, in declaration order.
    pub const ALL: [HeisenbergZ2BasisKind; 2] = [
        HeisenbergZ2BasisKind::Standard,
        HeisenbergZ2BasisKind::StandardWithZ,
    ];
}

/// Generating-set variants of the mod-2^B Heisenberg processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HeisenbergBasisKind {
    /// x and y generators only.
    #[default]
    Standard,
    /// x, y and the central z generator.
    StandardWithZ,
    /// x and y generators plus their inverses.
    StandardWithInverses,
    /// x, y and z generators plus their inverses.
    StandardWithZAndInverses,
}

impl HeisenbergBasisKind {
    /// All valid kinds, in declaration order.
    pub const ALL: [HeisenbergBasisKind; 4] = [
        HeisenbergBasisKind::Standard,
        HeisenbergBasisKind::StandardWithZ,
        HeisenbergBasisKind::StandardWithInverses,
        HeisenbergBasisKind::StandardWithZAndInverses,
    ];

    /// True when the kind includes the central z generator.
    pub fn has_z(self) -> bool {
        matches!(
            self,
            HeisenbergBasisKind::StandardWithZ | HeisenbergBasisKind::StandardWithZAndInverses
        )
    }

    /// True when the kind appends inverses.
    pub fn has_inverses(self) -> bool {
        matches!(
            self,
            HeisenbergBasisKind::StandardWithInverses
                | HeisenbergBasisKind::StandardWithZAndInverses
        )
    }
}
