//! Component, element and attribute metadata tables
//!
//! Pure lookups from the raw enumerations stored in a glTF document to byte
//! widths and component counts. Unknown codes are rejected when converted,
//! so everything past the conversion matches exhaustively.

use std::fmt;
use std::str::FromStr;

use crate::error::AccessError;

// =============================================================================
// Component Types
// =============================================================================

/// Numeric type of a single component, keyed by its GL enum code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ComponentType {
    Byte = 5120,
    UnsignedByte = 5121,
    Short = 5122,
    UnsignedShort = 5123,
    Int = 5124,
    UnsignedInt = 5125,
    Float = 5126,
}

impl ComponentType {
    pub const ALL: [ComponentType; 7] = [
        ComponentType::Byte,
        ComponentType::UnsignedByte,
        ComponentType::Short,
        ComponentType::UnsignedShort,
        ComponentType::Int,
        ComponentType::UnsignedInt,
        ComponentType::Float,
    ];

    /// Size of one component in bytes
    #[inline]
    pub const fn byte_width(self) -> usize {
        match self {
            ComponentType::Byte | ComponentType::UnsignedByte => 1,
            ComponentType::Short | ComponentType::UnsignedShort => 2,
            ComponentType::Int | ComponentType::UnsignedInt | ComponentType::Float => 4,
        }
    }

    /// GL enum code as stored in `accessor.componentType`
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for ComponentType {
    type Error = AccessError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            5120 => Ok(ComponentType::Byte),
            5121 => Ok(ComponentType::UnsignedByte),
            5122 => Ok(ComponentType::Short),
            5123 => Ok(ComponentType::UnsignedShort),
            5124 => Ok(ComponentType::Int),
            5125 => Ok(ComponentType::UnsignedInt),
            5126 => Ok(ComponentType::Float),
            other => Err(AccessError::UnsupportedComponentType(other)),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentType::Byte => "i8",
            ComponentType::UnsignedByte => "u8",
            ComponentType::Short => "i16",
            ComponentType::UnsignedShort => "u16",
            ComponentType::Int => "i32",
            ComponentType::UnsignedInt => "u32",
            ComponentType::Float => "f32",
        };
        f.write_str(name)
    }
}

/// Byte width for a raw component type code.
pub fn component_byte_width(code: u32) -> Result<usize, AccessError> {
    ComponentType::try_from(code).map(ComponentType::byte_width)
}

// =============================================================================
// Element Types
// =============================================================================

/// Shape of one accessor element (`accessor.type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl ElementType {
    /// Number of components per element
    #[inline]
    pub const fn component_count(self) -> usize {
        match self {
            ElementType::Scalar => 1,
            ElementType::Vec2 => 2,
            ElementType::Vec3 => 3,
            ElementType::Vec4 | ElementType::Mat2 => 4,
            ElementType::Mat3 => 9,
            ElementType::Mat4 => 16,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ElementType::Scalar => "SCALAR",
            ElementType::Vec2 => "VEC2",
            ElementType::Vec3 => "VEC3",
            ElementType::Vec4 => "VEC4",
            ElementType::Mat2 => "MAT2",
            ElementType::Mat3 => "MAT3",
            ElementType::Mat4 => "MAT4",
        }
    }
}

impl FromStr for ElementType {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCALAR" => Ok(ElementType::Scalar),
            "VEC2" => Ok(ElementType::Vec2),
            "VEC3" => Ok(ElementType::Vec3),
            "VEC4" => Ok(ElementType::Vec4),
            "MAT2" => Ok(ElementType::Mat2),
            "MAT3" => Ok(ElementType::Mat3),
            "MAT4" => Ok(ElementType::Mat4),
            other => Err(AccessError::UnsupportedElementType(other.to_string())),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component count for a raw element type name.
pub fn element_component_count(name: &str) -> Result<usize, AccessError> {
    name.parse::<ElementType>().map(ElementType::component_count)
}

// =============================================================================
// Vertex Attribute Semantics
// =============================================================================

/// Vertex attribute semantics with a fixed accessor shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeSemantic {
    Position,
    Normal,
    Tangent,
    TexCoord0,
    TexCoord1,
    Color0,
    Color1,
    Joints0,
    Weights0,
}

impl AttributeSemantic {
    /// Element type an accessor must have to feed this attribute
    pub const fn required_element_type(self) -> ElementType {
        match self {
            AttributeSemantic::Position | AttributeSemantic::Normal => ElementType::Vec3,
            AttributeSemantic::TexCoord0 | AttributeSemantic::TexCoord1 => ElementType::Vec2,
            AttributeSemantic::Tangent
            | AttributeSemantic::Color0
            | AttributeSemantic::Color1
            | AttributeSemantic::Joints0
            | AttributeSemantic::Weights0 => ElementType::Vec4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            AttributeSemantic::Position => "POSITION",
            AttributeSemantic::Normal => "NORMAL",
            AttributeSemantic::Tangent => "TANGENT",
            AttributeSemantic::TexCoord0 => "TEXCOORD_0",
            AttributeSemantic::TexCoord1 => "TEXCOORD_1",
            AttributeSemantic::Color0 => "COLOR_0",
            AttributeSemantic::Color1 => "COLOR_1",
            AttributeSemantic::Joints0 => "JOINTS_0",
            AttributeSemantic::Weights0 => "WEIGHTS_0",
        }
    }
}

impl FromStr for AttributeSemantic {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POSITION" => Ok(AttributeSemantic::Position),
            "NORMAL" => Ok(AttributeSemantic::Normal),
            "TANGENT" => Ok(AttributeSemantic::Tangent),
            "TEXCOORD_0" => Ok(AttributeSemantic::TexCoord0),
            "TEXCOORD_1" => Ok(AttributeSemantic::TexCoord1),
            "COLOR_0" => Ok(AttributeSemantic::Color0),
            "COLOR_1" => Ok(AttributeSemantic::Color1),
            "JOINTS_0" => Ok(AttributeSemantic::Joints0),
            "WEIGHTS_0" => Ok(AttributeSemantic::Weights0),
            other => Err(AccessError::UnknownAttribute(other.to_string())),
        }
    }
}

impl fmt::Display for AttributeSemantic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_widths() {
        assert_eq!(component_byte_width(5120).unwrap(), 1);
        assert_eq!(component_byte_width(5121).unwrap(), 1);
        assert_eq!(component_byte_width(5122).unwrap(), 2);
        assert_eq!(component_byte_width(5123).unwrap(), 2);
        assert_eq!(component_byte_width(5124).unwrap(), 4);
        assert_eq!(component_byte_width(5125).unwrap(), 4);
        assert_eq!(component_byte_width(5126).unwrap(), 4);
    }

    #[test]
    fn test_component_code_roundtrip() {
        for ty in ComponentType::ALL {
            assert_eq!(ComponentType::try_from(ty.code()).unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_component_type() {
        assert!(matches!(
            component_byte_width(5130),
            Err(AccessError::UnsupportedComponentType(5130))
        ));
        assert!(matches!(
            ComponentType::try_from(0),
            Err(AccessError::UnsupportedComponentType(0))
        ));
    }

    #[test]
    fn test_element_counts() {
        assert_eq!(element_component_count("SCALAR").unwrap(), 1);
        assert_eq!(element_component_count("VEC2").unwrap(), 2);
        assert_eq!(element_component_count("VEC3").unwrap(), 3);
        assert_eq!(element_component_count("VEC4").unwrap(), 4);
        assert_eq!(element_component_count("MAT2").unwrap(), 4);
        assert_eq!(element_component_count("MAT3").unwrap(), 9);
        assert_eq!(element_component_count("MAT4").unwrap(), 16);
    }

    #[test]
    fn test_unknown_element_type() {
        // Names are case-sensitive in the format
        let err = element_component_count("vec3").unwrap_err();
        assert!(matches!(err, AccessError::UnsupportedElementType(ref s) if s == "vec3"));
    }

    #[test]
    fn test_attribute_element_types() {
        use AttributeSemantic::*;
        assert_eq!(Position.required_element_type(), ElementType::Vec3);
        assert_eq!(Normal.required_element_type(), ElementType::Vec3);
        assert_eq!(TexCoord0.required_element_type(), ElementType::Vec2);
        assert_eq!(TexCoord1.required_element_type(), ElementType::Vec2);
        for semantic in [Tangent, Color0, Color1, Joints0, Weights0] {
            assert_eq!(semantic.required_element_type(), ElementType::Vec4);
        }
    }

    #[test]
    fn test_attribute_parse() {
        assert_eq!(
            "TEXCOORD_1".parse::<AttributeSemantic>().unwrap(),
            AttributeSemantic::TexCoord1
        );
        assert!(matches!(
            "TEXCOORD_2".parse::<AttributeSemantic>(),
            Err(AccessError::UnknownAttribute(_))
        ));
    }
}
