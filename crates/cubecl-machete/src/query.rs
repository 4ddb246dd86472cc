use crate::{ActivationType, ScalarType, error::UnsupportedShape};

/// Granularity `[rows, columns]` of the weight blocks produced by the Machete prepacking step.
pub const MACHETE_PREPACKED_BLOCK_SHAPE: [i64; 2] = [64, 128];

/// Group size meaning a single scale per output channel.
pub const PER_CHANNEL_GROUP_SIZE: i32 = -1;

/// Quantized weight types supported by Machete.
///
/// With zero points the plain unsigned types are used, otherwise the symmetric
/// biased ones.
pub fn supported_quant_types(zero_points: bool) -> Vec<ScalarType> {
    match zero_points {
        true => vec![ScalarType::UINT4, ScalarType::UINT8],
        false => vec![ScalarType::UINT4B8, ScalarType::UINT8B128],
    }
}

/// Activation types supported by Machete.
///
/// Support doesn't currently depend on `zero_points`; the flag is accepted so both
/// queries share the same signature.
pub fn supported_act_types(_zero_points: bool) -> Vec<ActivationType> {
    vec![ActivationType::F16, ActivationType::BF16]
}

/// Group sizes supported by Machete for the given activation type.
///
/// Every positive group size must be divisible by [tile_shape_k], and
/// [PER_CHANNEL_GROUP_SIZE] indicates per-channel quantization.
pub fn supported_group_sizes(act_type: ActivationType) -> Vec<i32> {
    match act_type {
        ActivationType::F16 | ActivationType::BF16 => vec![PER_CHANNEL_GROUP_SIZE, 64, 128],
        _ => vec![PER_CHANNEL_GROUP_SIZE, 128],
    }
}

/// Width of the kernel tile along the reduction dimension.
pub fn tile_shape_k(act_type: ActivationType) -> u32 {
    128 * 8 / act_type.size_bits()
}

/// Validates that a weight of shape `(in_features, out_features)` fits the prepacked layout.
///
/// Only divisibility is checked, so zero sized dimensions are accepted.
pub fn validate_shape(in_features: i64, out_features: i64) -> Result<(), UnsupportedShape> {
    let [block_in, block_out] = MACHETE_PREPACKED_BLOCK_SHAPE;

    if in_features % block_in != 0 {
        return Err(UnsupportedShape::InFeatures {
            in_features,
            divisor: block_in,
        });
    }

    if out_features % block_out != 0 {
        return Err(UnsupportedShape::OutFeatures {
            out_features,
            divisor: block_out,
        });
    }

    Ok(())
}

/// Same as [validate_shape], with the failure reported as a human-readable reason.
pub fn check_supports_shape(in_features: i64, out_features: i64) -> (bool, Option<String>) {
    match validate_shape(in_features, out_features) {
        Ok(()) => (true, None),
        Err(err) => (false, Some(err.to_string())),
    }
}
