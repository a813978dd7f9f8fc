use std::fmt;

use clap::ValueEnum;

/// The activation functions known to the FANN file format.
///
/// The discriminants are the identifiers written to the `neurons` section of a saved network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[repr(u8)]
pub enum ActFn {
    Linear = 0,
    Threshold = 1,
    ThresholdSymmetric = 2,
    Sigmoid = 3,
    SigmoidStepwise = 4,
    SigmoidSymmetric = 5,
    SigmoidSymmetricStepwise = 6,
    Gaussian = 7,
    GaussianSymmetric = 8,
    GaussianStepwise = 9,
    Elliot = 10,
    ElliotSymmetric = 11,
    LinearPiece = 12,
    LinearPieceSymmetric = 13,
    SinSymmetric = 14,
    CosSymmetric = 15,
    Sin = 16,
    Cos = 17,
}

impl ActFn {
    /// Candidate functions used by cascade training, written in every file header.
    pub const CASCADE_CANDIDATES: [ActFn; 10] = [
        ActFn::Sigmoid,
        ActFn::SigmoidSymmetric,
        ActFn::Gaussian,
        ActFn::GaussianSymmetric,
        ActFn::Elliot,
        ActFn::ElliotSymmetric,
        ActFn::SinSymmetric,
        ActFn::CosSymmetric,
        ActFn::Sin,
        ActFn::Cos,
    ];

    /// Returns the identifier of this function in the file format.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ActFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => write!(f, "{}", value.get_name()),
            None => write!(f, "{}", self.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_file_format() {
        assert_eq!(ActFn::Linear.code(), 0);
        assert_eq!(ActFn::SigmoidStepwise.code(), 4);
        assert_eq!(ActFn::Cos.code(), 17);

        let cascade: Vec<u8> = ActFn::CASCADE_CANDIDATES.iter().map(|f| f.code()).collect();
        assert_eq!(cascade, vec![3, 5, 7, 8, 10, 11, 14, 15, 16, 17]);
    }

    #[test]
    fn display_uses_cli_name() {
        assert_eq!(ActFn::SigmoidSymmetricStepwise.to_string(), "sigmoid-symmetric-stepwise");
    }
}
