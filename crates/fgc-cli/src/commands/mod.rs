pub mod diameters;
pub mod growth;
pub mod selftest;
pub mod walk;

use clap::{Args, ValueEnum};
use fgc_core::errors::{ErrorInfo, FgcError};
use fgc_core::GroupProcessor;
use fgc_group::{
    HeisenbergBasisKind, HeisenbergZ2, HeisenbergZ2BasisKind, HeisenbergZn, Permutation,
    TriangularBasisKind, TriangularZ2, TriangularZn,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProcessorKind {
    /// Unit upper-triangular matrices over Z_2.
    TriangularZ2,
    /// Unit upper-triangular matrices over Z_{2^bits}.
    TriangularZn,
    /// Heisenberg group over Z_2.
    HeisenbergZ2,
    /// Heisenberg group over Z_{2^bits}.
    HeisenbergZn,
    /// Symmetric-group permutations.
    Permutation,
}

#[derive(Args, Debug, Clone)]
pub struct ProcessorArgs {
    /// Which packed-code processor to run.
    #[arg(long, value_enum)]
    pub processor: ProcessorKind,
    /// Structure order: matrix dimension minus one, or permutation degree.
    #[arg(long, default_value_t = 3)]
    pub order: usize,
    /// Bits per element for the mod-2^B processors.
    #[arg(long, default_value_t = 1)]
    pub bits: u32,
    /// Basis kind name; defaults to the family's standard kind.
    #[arg(long)]
    pub basis: Option<String>,
}

fn unknown_basis(name: &str, family: &str, valid: &str) -> FgcError {
    FgcError::Config(
        ErrorInfo::new("unknown-basis", format!("unknown {family} basis kind"))
            .with_context("basis", name)
            .with_hint(format!("valid kinds: {valid}")),
    )
}

fn triangular_basis(name: Option<&str>) -> Result<TriangularBasisKind, FgcError> {
    match name.unwrap_or("standard") {
        "standard" => Ok(TriangularBasisKind::Standard),
        "ribbon" => Ok(TriangularBasisKind::Ribbon),
        "standard-with-inverses" => Ok(TriangularBasisKind::StandardWithInverses),
        "ribbon-with-inverses" => Ok(TriangularBasisKind::RibbonWithInverses),
        other => Err(unknown_basis(
            other,
            "triangular",
            "standard, ribbon, standard-with-inverses, ribbon-with-inverses",
        )),
    }
}

fn heisenberg_z2_basis(name: Option<&str>) -> Result<HeisenbergZ2BasisKind, FgcError> {
    match name.unwrap_or("standard-with-z") {
        "standard" => Ok(HeisenbergZ2BasisKind::Standard),
        "standard-with-z" => Ok(HeisenbergZ2BasisKind::StandardWithZ),
        other => Err(unknown_basis(
            other,
            "Heisenberg mod 2",
            "standard, standard-with-z",
        )),
    }
}

fn heisenberg_basis(name: Option<&str>) -> Result<HeisenbergBasisKind, FgcError> {
    match name.unwrap_or("standard") {
        "standard" => Ok(HeisenbergBasisKind::Standard),
        "standard-with-z" => Ok(HeisenbergBasisKind::StandardWithZ),
        "standard-with-inverses" => Ok(HeisenbergBasisKind::StandardWithInverses),
        "standard-with-z-and-inverses" => Ok(HeisenbergBasisKind::StandardWithZAndInverses),
        other => Err(unknown_basis(
            other,
            "Heisenberg mod 2^B",
            "standard, standard-with-z, standard-with-inverses, standard-with-z-and-inverses",
        )),
    }
}

impl ProcessorArgs {
    /// Builds the configured processor at its configured order.
    pub fn build(&self) -> Result<Box<dyn GroupProcessor>, FgcError> {
        self.build_at_order(self.order)
    }

    /// Builds the configured processor at an explicit order, as the growth
    /// sweep does for every order in its range.
    pub fn build_at_order(&self, order: usize) -> Result<Box<dyn GroupProcessor>, FgcError> {
        let basis = self.basis.as_deref();
        Ok(match self.processor {
            ProcessorKind::TriangularZ2 => {
                Box::new(TriangularZ2::new(order, triangular_basis(basis)?)?)
            }
            ProcessorKind::TriangularZn => {
                Box::new(TriangularZn::new(order, self.bits, triangular_basis(basis)?)?)
            }
            ProcessorKind::HeisenbergZ2 => {
                Box::new(HeisenbergZ2::new(order, heisenberg_z2_basis(basis)?)?)
            }
            ProcessorKind::HeisenbergZn => {
                Box::new(HeisenbergZn::new(order, self.bits, heisenberg_basis(basis)?)?)
            }
            ProcessorKind::Permutation => Box::new(Permutation::new(order)?),
        })
    }

    /// Every valid basis kind name of the configured family.
    pub fn family_basis_names(&self) -> Vec<&'static str> {
        match self.processor {
            ProcessorKind::TriangularZ2 | ProcessorKind::TriangularZn => vec![
                "standard",
                "ribbon",
                "standard-with-inverses",
                "ribbon-with-inverses",
            ],
            ProcessorKind::HeisenbergZ2 => vec!["standard", "standard-with-z"],
            ProcessorKind::HeisenbergZn => vec![
                "standard",
                "standard-with-z",
                "standard-with-inverses",
                "standard-with-z-and-inverses",
            ],
            ProcessorKind::Permutation => vec!["standard"],
        }
    }
}

/// Prints labelled rows of numbers in space-padded columns.
pub fn print_aligned(rows: &[(&str, Vec<i64>)]) {
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
    let max_len = rows.iter().map(|(_, values)| values.len()).max().unwrap_or(0);
    let mut column_widths = vec![0usize; max_len];
    for (_, values) in rows {
        for (i, value) in values.iter().enumerate() {
            column_widths[i] = column_widths[i].max(value.to_string().len() + 1);
        }
    }
    for (label, values) in rows {
        print!("{label:>label_width$}");
        for (i, value) in values.iter().enumerate() {
            print!("{value:>width$}", width = column_widths[i]);
        }
        println!();
    }
}
