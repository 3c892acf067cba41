//! DOMMatrixInit validation and fixup
//!
//! Implements "validate and fixup" from the Geometry Interfaces specification:
//! alias fields (`a`..`f`) are reconciled with their canonical names, missing
//! fields get their identity defaults and the record is classified as 2D or 3D.

use serde::{Deserialize, Serialize};

use super::error::MatrixInitError;

/// Canonical matrix fields, in `matrix3d()` argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    M11,
    M12,
    M13,
    M14,
    M21,
    M22,
    M23,
    M24,
    M31,
    M32,
    M33,
    M34,
    M41,
    M42,
    M43,
    M44,
}

impl Field {
    pub const ALL: [Field; 16] = [
        Field::M11,
        Field::M12,
        Field::M13,
        Field::M14,
        Field::M21,
        Field::M22,
        Field::M23,
        Field::M24,
        Field::M31,
        Field::M32,
        Field::M33,
        Field::M34,
        Field::M41,
        Field::M42,
        Field::M43,
        Field::M44,
    ];

    /// The six fields of a 2D matrix, in `matrix()` argument order.
    pub const MATRIX_2D: [Field; 6] =
        [Field::M11, Field::M12, Field::M21, Field::M22, Field::M41, Field::M42];

    pub fn name(self) -> &'static str {
        match self {
            Field::M11 => "m11",
            Field::M12 => "m12",
            Field::M13 => "m13",
            Field::M14 => "m14",
            Field::M21 => "m21",
            Field::M22 => "m22",
            Field::M23 => "m23",
            Field::M24 => "m24",
            Field::M31 => "m31",
            Field::M32 => "m32",
            Field::M33 => "m33",
            Field::M34 => "m34",
            Field::M41 => "m41",
            Field::M42 => "m42",
            Field::M43 => "m43",
            Field::M44 => "m44",
        }
    }

    /// Value of this field in the identity matrix.
    pub fn identity(self) -> f64 {
        match self {
            Field::M11 | Field::M22 | Field::M33 | Field::M44 => 1.0,
            _ => 0.0,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Alias name, canonical field and default for each 2D shorthand.
const ALIASED_FIELDS: [(&str, Field, f64); 6] = [
    ("a", Field::M11, 1.0),
    ("b", Field::M12, 0.0),
    ("c", Field::M21, 0.0),
    ("d", Field::M22, 1.0),
    ("e", Field::M41, 0.0),
    ("f", Field::M42, 0.0),
];

/// Fields that must be zero in a 2D matrix.
const MATRIX_2D_ZERO_FIELDS: [Field; 8] = [
    Field::M13,
    Field::M14,
    Field::M23,
    Field::M24,
    Field::M31,
    Field::M32,
    Field::M34,
    Field::M43,
];

/// Fields that must be one in a 2D matrix.
const MATRIX_2D_ONE_FIELDS: [Field; 2] = [Field::M33, Field::M44];

/// Every key [`DomMatrixInit`] reads from a JSON object.
pub const KNOWN_KEYS: [&str; 23] = [
    "a", "b", "c", "d", "e", "f", "m11", "m12", "m13", "m14", "m21", "m22", "m23", "m24", "m31",
    "m32", "m33", "m34", "m41", "m42", "m43", "m44", "is2D",
];

/// A loosely specified matrix, as accepted by `DOMMatrix.fromMatrix()`.
///
/// Every field is optional. Unrecognized keys are ignored when deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomMatrixInit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m11: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m12: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m13: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m14: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m21: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m22: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m23: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m24: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m31: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m32: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m33: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m34: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m41: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m42: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m43: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m44: Option<f64>,
    #[serde(rename = "is2D", skip_serializing_if = "Option::is_none")]
    pub is_2d: Option<bool>,
}

impl DomMatrixInit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an init record from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build an init record from an already parsed JSON value.
    ///
    /// Unknown keys are ignored, as with [`Self::from_json`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Keys of a JSON object that are not init fields and will be ignored.
    pub fn unknown_keys(value: &serde_json::Value) -> Vec<String> {
        value
            .as_object()
            .map(|object| {
                object.keys().filter(|key| !KNOWN_KEYS.contains(&key.as_str())).cloned().collect()
            })
            .unwrap_or_default()
    }

    /// Build an init record from a flat array.
    ///
    /// Six values fill `m11, m12, m21, m22, m41, m42` and leave the dimension to
    /// be detected. Sixteen values fill every field in `matrix3d()` order and
    /// mark the record as 3D.
    pub fn from_array(values: &[f64]) -> Result<Self, MatrixInitError> {
        let fields: &[Field] = match values.len() {
            6 => &Field::MATRIX_2D,
            16 => &Field::ALL,
            n => return Err(MatrixInitError::InvalidArrayLength(n)),
        };

        let mut init = Self::new();
        for (field, value) in fields.iter().zip(values) {
            init.set(*field, *value);
        }
        if values.len() == 16 {
            init.is_2d = Some(false);
        }
        Ok(init)
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        *self.slot(field)
    }

    pub fn set(&mut self, field: Field, value: f64) {
        *self.slot_mut(field) = Some(value);
    }

    /// Alias values in `a..f` order.
    fn aliases(&self) -> [Option<f64>; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    fn slot(&self, field: Field) -> &Option<f64> {
        match field {
            Field::M11 => &self.m11,
            Field::M12 => &self.m12,
            Field::M13 => &self.m13,
            Field::M14 => &self.m14,
            Field::M21 => &self.m21,
            Field::M22 => &self.m22,
            Field::M23 => &self.m23,
            Field::M24 => &self.m24,
            Field::M31 => &self.m31,
            Field::M32 => &self.m32,
            Field::M33 => &self.m33,
            Field::M34 => &self.m34,
            Field::M41 => &self.m41,
            Field::M42 => &self.m42,
            Field::M43 => &self.m43,
            Field::M44 => &self.m44,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<f64> {
        match field {
            Field::M11 => &mut self.m11,
            Field::M12 => &mut self.m12,
            Field::M13 => &mut self.m13,
            Field::M14 => &mut self.m14,
            Field::M21 => &mut self.m21,
            Field::M22 => &mut self.m22,
            Field::M23 => &mut self.m23,
            Field::M24 => &mut self.m24,
            Field::M31 => &mut self.m31,
            Field::M32 => &mut self.m32,
            Field::M33 => &mut self.m33,
            Field::M34 => &mut self.m34,
            Field::M41 => &mut self.m41,
            Field::M42 => &mut self.m42,
            Field::M43 => &mut self.m43,
            Field::M44 => &mut self.m44,
        }
    }
}

/// A validated matrix with every field resolved.
///
/// Serializes as an object with all sixteen `mXY` fields and `is2D`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "DomMatrixInit")]
pub struct NormalizedMatrix {
    values: [f64; 16],
    is_2d: bool,
}

impl NormalizedMatrix {
    pub fn identity() -> Self {
        Self { values: Field::ALL.map(Field::identity), is_2d: true }
    }

    pub fn get(&self, field: Field) -> f64 {
        self.values[field.index()]
    }

    pub fn is_2d(&self) -> bool {
        self.is_2d
    }

    pub fn is_identity(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field) == field.identity())
    }

    /// Flat values: `[m11, m12, m21, m22, m41, m42]` when 2D, all sixteen
    /// fields in `matrix3d()` order otherwise.
    pub fn to_array(&self) -> Vec<f64> {
        let fields: &[Field] = if self.is_2d { &Field::MATRIX_2D } else { &Field::ALL };
        fields.iter().map(|field| self.get(*field)).collect()
    }

    /// Name of the CSS function that takes [`Self::to_array`] as arguments.
    pub fn css_function_name(&self) -> &'static str {
        if self.is_2d {
            "matrix"
        } else {
            "matrix3d"
        }
    }

    /// CSS function for this matrix, `matrix(...)` or `matrix3d(...)`.
    ///
    /// The result parses back with
    /// [`parse_transform_list`](crate::transforms::parse_transform_list) only
    /// when every component is finite; `NaN` and infinities are written as
    /// `NaN`/`inf`, which CSS reads as identifiers.
    pub fn to_css(&self) -> String {
        let args: Vec<String> = self.to_array().iter().map(|v| v.to_string()).collect();
        format!("{}({})", self.css_function_name(), args.join(", "))
    }
}

impl From<NormalizedMatrix> for DomMatrixInit {
    fn from(matrix: NormalizedMatrix) -> Self {
        let mut init = DomMatrixInit::new();
        for field in Field::ALL {
            init.set(field, matrix.get(field));
        }
        init.is_2d = Some(matrix.is_2d);
        init
    }
}

/// Validate a matrix init and fill in its defaults.
///
/// Fails with [`MatrixInitError::ConflictingAlias`] when an alias and its
/// canonical field disagree, and with [`MatrixInitError::Invalid2DState`] when
/// `is2D` is true but a 3D component is set.
///
/// # Example
///
/// ```
/// use domgeom::matrix::{validate_and_fixup, DomMatrixInit};
///
/// let init = DomMatrixInit { a: Some(2.0), m41: Some(10.0), ..Default::default() };
/// let matrix = validate_and_fixup(&init).unwrap();
/// assert!(matrix.is_2d());
/// assert_eq!(matrix.to_array(), vec![2.0, 0.0, 0.0, 1.0, 10.0, 0.0]);
/// ```
pub fn validate_and_fixup(init: &DomMatrixInit) -> Result<NormalizedMatrix, MatrixInitError> {
    validate_aliased_fields(init)?;
    let fixed = fixup(init);
    let is_2d = resolve_dimension(&fixed)?;

    let values = Field::ALL.map(|field| fixed.get(field).unwrap_or_else(|| field.identity()));
    Ok(NormalizedMatrix { values, is_2d })
}

/// Equality where NaN matches NaN and `0.0` matches `-0.0`.
fn same_value_zero(x: f64, y: f64) -> bool {
    (x.is_nan() && y.is_nan()) || x == y
}

fn validate_aliased_fields(init: &DomMatrixInit) -> Result<(), MatrixInitError> {
    for (&(alias, field, _), alias_value) in ALIASED_FIELDS.iter().zip(init.aliases()) {
        if let (Some(alias_value), Some(field_value)) = (alias_value, init.get(field)) {
            if !same_value_zero(alias_value, field_value) {
                return Err(MatrixInitError::ConflictingAlias {
                    alias,
                    field: field.name(),
                    alias_value,
                    field_value,
                });
            }
        }
    }
    Ok(())
}

fn fixup(init: &DomMatrixInit) -> DomMatrixInit {
    let mut fixed = *init;
    for (&(_, field, default), alias_value) in ALIASED_FIELDS.iter().zip(init.aliases()) {
        if init.get(field).is_none() {
            fixed.set(field, alias_value.unwrap_or(default));
        }
    }
    fixed
}

/// First 3D-only field holding a value other than its 2D identity value.
fn first_3d_component(init: &DomMatrixInit) -> Option<(Field, f64)> {
    let zero = MATRIX_2D_ZERO_FIELDS.iter().map(|field| (*field, 0.0));
    let one = MATRIX_2D_ONE_FIELDS.iter().map(|field| (*field, 1.0));

    zero.chain(one).find_map(|(field, expected)| match init.get(field) {
        Some(value) if value != expected => Some((field, value)),
        _ => None,
    })
}

fn resolve_dimension(init: &DomMatrixInit) -> Result<bool, MatrixInitError> {
    if init.is_2d == Some(false) {
        return Ok(false);
    }

    match first_3d_component(init) {
        None => Ok(true),
        Some((field, value)) if init.is_2d == Some(true) => {
            Err(MatrixInitError::Invalid2DState { field: field.name(), value })
        }
        Some(_) => Ok(false),
    }
}
