use core::fmt::Display;
use serde::{Deserialize, Serialize};

/// Integer scalar type used to encode quantized weights.
///
/// The stored value `q` represents `q - bias`, so a biased unsigned type such as
/// [ScalarType::UINT4B8] behaves like a symmetric signed type without needing zero points.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScalarType {
    /// Number of bits used by a single value.
    pub size_bits: u8,
    /// Whether the raw encoding is two's complement.
    pub signed: bool,
    /// Offset subtracted from the raw encoding.
    pub bias: i32,
}

impl ScalarType {
    /// 4-bit unsigned integer.
    pub const UINT4: Self = Self::uint(4, 0);
    /// 8-bit unsigned integer.
    pub const UINT8: Self = Self::uint(8, 0);
    /// 4-bit unsigned integer with a bias of 8.
    pub const UINT4B8: Self = Self::uint(4, 8);
    /// 8-bit unsigned integer with a bias of 128.
    pub const UINT8B128: Self = Self::uint(8, 128);
    /// 4-bit signed integer.
    pub const INT4: Self = Self::int(4, 0);
    /// 8-bit signed integer.
    pub const INT8: Self = Self::int(8, 0);

    /// Unsigned integer type of `size_bits` with the given bias.
    pub const fn uint(size_bits: u8, bias: i32) -> Self {
        Self {
            size_bits,
            signed: false,
            bias,
        }
    }

    /// Signed integer type of `size_bits` with the given bias.
    pub const fn int(size_bits: u8, bias: i32) -> Self {
        Self {
            size_bits,
            signed: true,
            bias,
        }
    }

    pub fn has_bias(&self) -> bool {
        self.bias != 0
    }
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let prefix = match self.signed {
            true => "int",
            false => "uint",
        };
        write!(f, "{prefix}{}", self.size_bits)?;

        if self.has_bias() {
            write!(f, "b{}", self.bias)?;
        }

        Ok(())
    }
}

/// Floating-point format of the activations fed to, and produced by, the kernel.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivationType {
    #[serde(rename = "f16")]
    F16,
    #[serde(rename = "bf16")]
    BF16,
    #[serde(rename = "f32")]
    F32,
}

impl ActivationType {
    /// Returns the size of the activation type in bits.
    pub const fn size_bits(&self) -> u32 {
        let size = match self {
            ActivationType::F16 => core::mem::size_of::<half::f16>(),
            ActivationType::BF16 => core::mem::size_of::<half::bf16>(),
            ActivationType::F32 => core::mem::size_of::<f32>(),
        };

        size as u32 * 8
    }
}

impl Display for ActivationType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ActivationType::F16 => f.write_str("f16"),
            ActivationType::BF16 => f.write_str("bf16"),
            ActivationType::F32 => f.write_str("f32"),
        }
    }
}
