use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::{
    ActivationType, MacheteConfig, MacheteSetupError, ScalarType, SelectionLogLevel,
    supported_act_types, supported_group_sizes, supported_quant_types, validate_shape,
};

#[derive(new, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Description of a quantized linear layer to run with Machete, regardless of actual data
pub struct MacheteProblem {
    pub in_features: i64,
    pub out_features: i64,
    pub quant_type: ScalarType,
    pub act_type: ActivationType,
    pub group_size: i32,
    pub zero_points: bool,
}

/// Checks whether Machete can run the problem, using the global [MacheteConfig].
pub fn can_implement(problem: &MacheteProblem) -> Result<(), MacheteSetupError> {
    can_implement_with(problem, &MacheteConfig::get())
}

/// Checks whether Machete can run the problem with the given configuration.
///
/// The first failing check is returned, in order: configuration, quant type, activation type,
/// group size and shape.
pub fn can_implement_with(
    problem: &MacheteProblem,
    config: &MacheteConfig,
) -> Result<(), MacheteSetupError> {
    let result = check(problem, config);

    match (&result, config.logger.level) {
        (_, SelectionLogLevel::Disabled) => {}
        (Err(err), _) => log::debug!("Machete rejected {problem:?}: {err}"),
        (Ok(()), SelectionLogLevel::Full) => log::trace!("Machete accepted {problem:?}"),
        (Ok(()), SelectionLogLevel::Minimal) => {}
    }

    result
}

fn check(problem: &MacheteProblem, config: &MacheteConfig) -> Result<(), MacheteSetupError> {
    if config.disabled {
        return Err(MacheteSetupError::Disabled);
    }

    if !supported_quant_types(problem.zero_points).contains(&problem.quant_type) {
        return Err(MacheteSetupError::QuantTypeUnsupported {
            quant_type: problem.quant_type,
            zero_points: problem.zero_points,
        });
    }

    if !supported_act_types(problem.zero_points).contains(&problem.act_type) {
        return Err(MacheteSetupError::ActTypeUnsupported {
            act_type: problem.act_type,
        });
    }

    let group_sizes = supported_group_sizes(problem.act_type);
    if !group_sizes.contains(&problem.group_size) {
        return Err(MacheteSetupError::GroupSizeUnsupported {
            group_size: problem.group_size,
            act_type: problem.act_type,
            supported: group_sizes,
        });
    }

    validate_shape(problem.in_features, problem.out_features)?;

    Ok(())
}
