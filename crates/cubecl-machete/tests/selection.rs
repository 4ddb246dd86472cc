use cubecl_machete::{
    ActivationType, MacheteConfig, MacheteProblem, MacheteSetupError, ScalarType,
    UnsupportedShape, can_implement_with,
};

fn problem() -> MacheteProblem {
    MacheteProblem::new(
        4096,
        4096,
        ScalarType::UINT4B8,
        ActivationType::F16,
        128,
        false,
    )
}

fn config() -> MacheteConfig {
    MacheteConfig::default()
}

#[test_log::test]
fn accepts_supported_problem() {
    assert!(can_implement_with(&problem(), &config()).is_ok());
}

#[test_log::test]
fn accepts_zero_points_with_plain_types() {
    let problem = MacheteProblem {
        quant_type: ScalarType::UINT8,
        act_type: ActivationType::BF16,
        group_size: -1,
        zero_points: true,
        ..problem()
    };

    assert!(can_implement_with(&problem, &config()).is_ok());
}

#[test_log::test]
fn disabled_config_rejects_everything() {
    let config = MacheteConfig {
        disabled: true,
        ..config()
    };

    assert!(matches!(
        can_implement_with(&problem(), &config),
        Err(MacheteSetupError::Disabled)
    ));
}

#[test_log::test]
fn biased_type_rejected_with_zero_points() {
    let problem = MacheteProblem {
        zero_points: true,
        ..problem()
    };

    assert!(matches!(
        can_implement_with(&problem, &config()),
        Err(MacheteSetupError::QuantTypeUnsupported {
            quant_type: ScalarType::UINT4B8,
            zero_points: true,
        })
    ));
}

#[test_log::test]
fn signed_type_rejected() {
    let problem = MacheteProblem {
        quant_type: ScalarType::INT4,
        ..problem()
    };

    let err = can_implement_with(&problem, &config()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Quant type int4 not supported with zero_points=false, supported types are: [uint4b8, uint8b128]."
    );
}

#[test_log::test]
fn f32_activations_rejected() {
    let problem = MacheteProblem {
        act_type: ActivationType::F32,
        ..problem()
    };

    assert!(matches!(
        can_implement_with(&problem, &config()),
        Err(MacheteSetupError::ActTypeUnsupported {
            act_type: ActivationType::F32
        })
    ));
}

#[test_log::test]
fn unsupported_group_size_rejected() {
    let problem = MacheteProblem {
        group_size: 32,
        ..problem()
    };

    match can_implement_with(&problem, &config()) {
        Err(MacheteSetupError::GroupSizeUnsupported {
            group_size,
            act_type,
            supported,
        }) => {
            assert_eq!(group_size, 32);
            assert_eq!(act_type, ActivationType::F16);
            assert_eq!(supported, vec![-1, 64, 128]);
        }
        other => panic!("Expected a group size error, got {other:?}"),
    }
}

#[test_log::test]
fn misaligned_shape_rejected_last() {
    let problem = MacheteProblem {
        out_features: 4000,
        ..problem()
    };

    let err = can_implement_with(&problem, &config()).unwrap_err();
    assert!(matches!(
        err,
        MacheteSetupError::Shape(UnsupportedShape::OutFeatures {
            out_features: 4000,
            divisor: 128,
        })
    ));
    assert_eq!(
        err.to_string(),
        "Output features size must be divisible by 128"
    );
}

#[test_log::test]
fn checks_run_in_order() {
    let problem = MacheteProblem {
        in_features: 1,
        group_size: 7,
        act_type: ActivationType::F32,
        ..problem()
    };

    assert!(matches!(
        can_implement_with(&problem, &config()),
        Err(MacheteSetupError::ActTypeUnsupported { .. })
    ));
}
