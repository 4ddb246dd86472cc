use std::fmt::{Debug, Display};

use crate::{ActivationType, ScalarType};

/// A weight shape that doesn't align with the prepacked block shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnsupportedShape {
    /// The input features aren't a multiple of the block rows.
    InFeatures { in_features: i64, divisor: i64 },
    /// The output features aren't a multiple of the block columns.
    OutFeatures { out_features: i64, divisor: i64 },
}

impl Display for UnsupportedShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsupportedShape::InFeatures { divisor, .. } => {
                write!(f, "Input features size must be divisible by {divisor}")
            }
            UnsupportedShape::OutFeatures { divisor, .. } => {
                write!(f, "Output features size must be divisible by {divisor}")
            }
        }
    }
}

impl std::error::Error for UnsupportedShape {}

/// Errors that prevent a Machete kernel from being selected for a problem.
pub enum MacheteSetupError {
    /// The kernel was disabled through the configuration.
    Disabled,

    /// The weight type isn't supported with the requested zero-point mode.
    QuantTypeUnsupported {
        quant_type: ScalarType,
        zero_points: bool,
    },

    /// The activation type isn't supported.
    ActTypeUnsupported { act_type: ActivationType },

    /// The group size isn't supported for the activation type.
    GroupSizeUnsupported {
        group_size: i32,
        act_type: ActivationType,
        supported: Vec<i32>,
    },

    /// The weight shape doesn't fit the prepacked layout.
    Shape(UnsupportedShape),
}

impl From<UnsupportedShape> for MacheteSetupError {
    fn from(value: UnsupportedShape) -> Self {
        Self::Shape(value)
    }
}

impl Display for MacheteSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Debug for MacheteSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MacheteSetupError::Disabled => {
                write!(f, "Machete is disabled by the configuration.")
            }
            MacheteSetupError::QuantTypeUnsupported {
                quant_type,
                zero_points,
            } => {
                let supported = crate::supported_quant_types(*zero_points)
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "Quant type {quant_type} not supported with zero_points={zero_points}, supported types are: [{supported}]."
                )
            }
            MacheteSetupError::ActTypeUnsupported { act_type } => {
                write!(f, "Activation type {act_type} not supported.")
            }
            MacheteSetupError::GroupSizeUnsupported {
                group_size,
                act_type,
                supported,
            } => write!(
                f,
                "Group size {group_size} not supported for activation type {act_type}, supported group sizes are: {supported:?}."
            ),
            MacheteSetupError::Shape(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for MacheteSetupError {}
