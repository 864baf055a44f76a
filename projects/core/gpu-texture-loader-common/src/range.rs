//! Texture subresource ranges and their consistency rules.

use thiserror::Error;

/// Shape classification of a resolved texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureType {
    TwoD,
    TwoDArray,
    ThreeD,
    Cube,
}

/// A resolved texture subresource range.
///
/// All fields are at least 1 once a container loader has collapsed the
/// "not used" zero encodings from its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRangeDesc {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub num_mip_levels: u32,
    pub num_layers: u32,
    pub num_faces: u32,
}

/// Violations of the cross-field consistency rules of a [`TextureRangeDesc`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("dimensions and counts must all be non-zero")]
    ZeroDimension,

    #[error("face count must be 1 or 6, got {num_faces}")]
    FaceCountNotSupported { num_faces: u32 },

    #[error("cube textures require width == height, got {width}x{height}")]
    CubeMustBeSquare { width: u32, height: u32 },

    #[error("cube textures must not declare a pixel depth (got {depth})")]
    CubeMustBeFlat { depth: u32 },

    #[error("array textures cannot be volumetric: {num_layers} layers with depth {depth}")]
    LayeredVolumeConflict { num_layers: u32, depth: u32 },

    #[error("{num_mip_levels} mip levels exceed the {max_mip_levels} supported by the largest dimension")]
    TooManyMipLevels {
        num_mip_levels: u32,
        max_mip_levels: u32,
    },

    #[error("byte length {byte_length} exceeds the addressable size of this platform")]
    UnaddressableByteLength { byte_length: u64 },
}

impl TextureRangeDesc {
    /// A single-level 2D range, the common case for tests and sinks.
    pub const fn new_2d(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            depth: 1,
            num_mip_levels: 1,
            num_layers: 1,
            num_faces: 1,
        }
    }

    /// The range covering mip level `mip_level`: dimensions are halved per
    /// level with a floor of 1; layer and face counts are unchanged.
    pub fn at_mip_level(&self, mip_level: u32) -> Self {
        Self {
            width: self.width.checked_shr(mip_level).unwrap_or(0).max(1),
            height: self.height.checked_shr(mip_level).unwrap_or(0).max(1),
            depth: self.depth.checked_shr(mip_level).unwrap_or(0).max(1),
            num_mip_levels: 1,
            num_layers: self.num_layers,
            num_faces: self.num_faces,
        }
    }

    /// Classifies the range into the texture shape it describes.
    pub fn texture_type(&self) -> TextureType {
        if self.num_faces == 6 {
            TextureType::Cube
        } else if self.depth > 1 {
            TextureType::ThreeD
        } else if self.num_layers > 1 {
            TextureType::TwoDArray
        } else {
            TextureType::TwoD
        }
    }

    /// Checks the cross-field consistency rules.
    ///
    /// Container loaders call this after collapsing their header's zero
    /// encodings and before any layout arithmetic; the mip-count bound also
    /// keeps later per-level shifts in range.
    pub fn validate(&self) -> Result<(), RangeError> {
        if self.width == 0
            || self.height == 0
            || self.depth == 0
            || self.num_mip_levels == 0
            || self.num_layers == 0
            || self.num_faces == 0
        {
            return Err(RangeError::ZeroDimension);
        }

        if self.num_faces != 1 && self.num_faces != 6 {
            return Err(RangeError::FaceCountNotSupported {
                num_faces: self.num_faces,
            });
        }

        if self.num_faces == 6 {
            if self.width != self.height {
                return Err(RangeError::CubeMustBeSquare {
                    width: self.width,
                    height: self.height,
                });
            }
            if self.depth != 1 {
                return Err(RangeError::CubeMustBeFlat { depth: self.depth });
            }
        }

        if self.num_layers > 1 && self.depth > 1 {
            return Err(RangeError::LayeredVolumeConflict {
                num_layers: self.num_layers,
                depth: self.depth,
            });
        }

        let largest = self.width.max(self.height).max(self.depth);
        let max_mip_levels = 32 - largest.leading_zeros();
        if self.num_mip_levels > max_mip_levels {
            return Err(RangeError::TooManyMipLevels {
                num_mip_levels: self.num_mip_levels,
                max_mip_levels,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn at_mip_level_halves_with_floor_of_one() {
        let range = TextureRangeDesc {
            width: 16,
            height: 8,
            depth: 4,
            num_mip_levels: 5,
            num_layers: 1,
            num_faces: 1,
        };

        let level2 = range.at_mip_level(2);
        assert_eq!((level2.width, level2.height, level2.depth), (4, 2, 1));

        let level4 = range.at_mip_level(4);
        assert_eq!((level4.width, level4.height, level4.depth), (1, 1, 1));
    }

    #[test]
    fn at_mip_level_preserves_layers_and_faces() {
        let mut range = TextureRangeDesc::new_2d(32, 32);
        range.num_layers = 4;
        let level = range.at_mip_level(3);
        assert_eq!(level.num_layers, 4);
        assert_eq!(level.num_faces, 1);
    }

    #[rstest]
    #[case(TextureRangeDesc::new_2d(8, 8), TextureType::TwoD)]
    #[case(TextureRangeDesc { width: 8, height: 8, depth: 1, num_mip_levels: 1, num_layers: 4, num_faces: 1 }, TextureType::TwoDArray)]
    #[case(TextureRangeDesc { width: 8, height: 8, depth: 8, num_mip_levels: 1, num_layers: 1, num_faces: 1 }, TextureType::ThreeD)]
    #[case(TextureRangeDesc { width: 8, height: 8, depth: 1, num_mip_levels: 1, num_layers: 1, num_faces: 6 }, TextureType::Cube)]
    fn texture_type_classification(#[case] range: TextureRangeDesc, #[case] expected: TextureType) {
        assert_eq!(range.texture_type(), expected);
    }

    #[test]
    fn validate_accepts_full_mip_chain() {
        let mut range = TextureRangeDesc::new_2d(256, 256);
        range.num_mip_levels = 9; // log2(256) + 1
        assert_eq!(range.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_mip_chain_longer_than_dimensions_allow() {
        let mut range = TextureRangeDesc::new_2d(256, 256);
        range.num_mip_levels = 10;
        assert_eq!(
            range.validate(),
            Err(RangeError::TooManyMipLevels {
                num_mip_levels: 10,
                max_mip_levels: 9
            })
        );
    }

    #[test]
    fn validate_rejects_zero_fields() {
        let mut range = TextureRangeDesc::new_2d(4, 4);
        range.height = 0;
        assert_eq!(range.validate(), Err(RangeError::ZeroDimension));
    }

    #[rstest]
    #[case(2)]
    #[case(5)]
    #[case(7)]
    fn validate_rejects_unsupported_face_counts(#[case] num_faces: u32) {
        let mut range = TextureRangeDesc::new_2d(4, 4);
        range.num_faces = num_faces;
        assert_eq!(
            range.validate(),
            Err(RangeError::FaceCountNotSupported { num_faces })
        );
    }

    #[test]
    fn validate_rejects_non_square_cube() {
        let mut range = TextureRangeDesc::new_2d(8, 4);
        range.num_faces = 6;
        assert_eq!(
            range.validate(),
            Err(RangeError::CubeMustBeSquare {
                width: 8,
                height: 4
            })
        );
    }

    #[test]
    fn validate_rejects_volumetric_cube() {
        let mut range = TextureRangeDesc::new_2d(8, 8);
        range.num_faces = 6;
        range.depth = 2;
        assert_eq!(range.validate(), Err(RangeError::CubeMustBeFlat { depth: 2 }));
    }

    #[test]
    fn validate_rejects_layered_volume() {
        let mut range = TextureRangeDesc::new_2d(8, 8);
        range.num_layers = 2;
        range.depth = 2;
        assert_eq!(
            range.validate(),
            Err(RangeError::LayeredVolumeConflict {
                num_layers: 2,
                depth: 2
            })
        );
    }
}
