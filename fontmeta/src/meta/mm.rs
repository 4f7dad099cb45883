//! Adobe multiple masters and OpenType/TrueType GX font variations.

use crate::{
    engine::{raw, Engine},
    error::{Error, Result},
    flags::VarAxisFlags,
    meta::lossy_string,
    Face, Fixed, Tag,
};

/// Maximum number of axes of an Adobe multiple master font.
pub const MAX_MM_AXIS: u32 = 4;

/// Maximum number of master designs of an Adobe multiple master font.
pub const MAX_MM_DESIGNS: usize = 16;

/// An axis of an Adobe multiple master font.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct MmAxis {
    pub name: String,
    pub minimum: i64,
    pub maximum: i64,
}

/// Descriptor of an Adobe multiple master font.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct MultiMaster {
    pub num_axis: u32,
    pub num_designs: u32,
    pub axis: Vec<MmAxis>,
}

/// A variation axis.
///
/// For Adobe multiple master fonts the limits are design coordinates as
/// integers in fixed point; for GX and OpenType variation fonts they are
/// user coordinates.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct VarAxis {
    pub name: String,
    pub minimum: Fixed,
    pub default: Fixed,
    pub maximum: Fixed,
    pub tag: Tag,
    /// Name table entry for the axis name, zero when there is none.
    pub strid: u32,
    pub flags: VarAxisFlags,
}

/// A named instance of a variation font.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct NamedStyle {
    /// Design coordinates, one per axis.
    pub coords: Vec<Fixed>,
    pub strid: u32,
    /// Name table entry for the PostScript name, if any.
    pub psid: Option<u16>,
}

/// Descriptor of a multiple master or variation font.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct MmVar {
    pub num_axis: u32,
    /// Number of master designs, zero for GX and OpenType variations.
    pub num_designs: u32,
    pub num_named_styles: u32,
    pub axis: Vec<VarAxis>,
    pub named_styles: Vec<NamedStyle>,
}

fn defined(value: u32) -> u32 {
    if value == raw::UNDEFINED_U32 {
        0
    } else {
        value
    }
}

impl MmVar {
    fn from_raw(rec: raw::MmVarRec, axis_flags: Vec<VarAxisFlags>) -> Self {
        let num_axis = (rec.num_axis as usize).min(rec.axis.len());
        let axis: Vec<_> = rec
            .axis
            .into_iter()
            .take(num_axis)
            .zip(axis_flags)
            .map(|(axis, flags)| VarAxis {
                name: lossy_string(&axis.name),
                minimum: axis.minimum,
                default: axis.def,
                maximum: axis.maximum,
                tag: Tag::from_u32(axis.tag),
                strid: defined(axis.strid),
                flags,
            })
            .collect();
        let named_styles: Vec<_> = rec
            .namedstyle
            .into_iter()
            .take(rec.num_namedstyles as usize)
            .map(|style| {
                let mut coords = style.coords;
                coords.truncate(axis.len());
                // Missing coordinates take the axis default.
                let defaults = axis[coords.len()..].iter().map(|axis| axis.default);
                coords.extend(defaults);
                NamedStyle {
                    coords,
                    strid: style.strid,
                    psid: (style.psid != raw::NO_NAME_ID as u32).then_some(style.psid as u16),
                }
            })
            .collect();
        Self {
            num_axis: axis.len() as u32,
            num_designs: defined(rec.num_designs),
            num_named_styles: named_styles.len() as u32,
            axis,
            named_styles,
        }
    }
}

/// Releases an engine variation descriptor on every exit path.
struct MmVarGuard<'a, E: Engine> {
    engine: &'a E,
    face: E::Face,
    mm_var: Option<E::MmVar>,
}

impl<'a, E: Engine> MmVarGuard<'a, E> {
    fn new(engine: &'a E, face: E::Face) -> Result<Self> {
        let mm_var = engine.get_mm_var(face)?;
        Ok(Self {
            engine,
            face,
            mm_var: Some(mm_var),
        })
    }

    fn get(&self) -> Result<&E::MmVar> {
        self.mm_var.as_ref().ok_or(Error::InvalidHandle)
    }
}

impl<E: Engine> Drop for MmVarGuard<'_, E> {
    fn drop(&mut self) {
        if let Some(mm_var) = self.mm_var.take() {
            if let Err(e) = self.engine.done_mm_var(self.face, mm_var) {
                log::warn!("failed to release variation descriptor: {e}");
            }
        }
    }
}

impl<E: Engine> Face<E> {
    /// Returns the descriptor of an Adobe multiple master font.
    pub fn multi_master(&self) -> Result<MultiMaster> {
        let face = self.handle()?;
        self.engine().multi_master(face)
    }

    /// Returns the variation descriptor of a multiple master, TrueType GX or
    /// OpenType variation font.
    pub fn mm_var(&self) -> Result<MmVar> {
        let face = self.handle()?;
        let guard = MmVarGuard::new(self.engine(), face)?;
        let mm_var = guard.get()?;
        let rec = self.engine().mm_var_record(mm_var);
        let axis_flags = (0..rec.num_axis.min(rec.axis.len() as u32))
            .map(|i| {
                self.engine()
                    .var_axis_flags(mm_var, i)
                    .map(VarAxisFlags::from_bits_truncate)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(MmVar::from_raw(rec, axis_flags))
    }

    /// Returns the flags of the variation axis at `axis_index`.
    pub fn var_axis_flags(&self, axis_index: u32) -> Result<VarAxisFlags> {
        let face = self.handle()?;
        let guard = MmVarGuard::new(self.engine(), face)?;
        let mm_var = guard.get()?;
        if axis_index >= self.engine().mm_var_record(mm_var).num_axis {
            return Err(Error::InvalidArgument);
        }
        self.engine()
            .var_axis_flags(mm_var, axis_index)
            .map(VarAxisFlags::from_bits_truncate)
    }

    fn num_axis(&self, face: E::Face) -> Result<usize> {
        let guard = MmVarGuard::new(self.engine(), face)?;
        Ok(self.engine().mm_var_record(guard.get()?).num_axis as usize)
    }

    /// Sets the design coordinates of an Adobe multiple master font.
    ///
    /// This and the other coordinate setters share the same rules: an empty
    /// slice resets the face to its default instance and clears
    /// [`FaceFlags::VARIATION`](crate::FaceFlags::VARIATION); otherwise
    /// missing trailing coordinates take their defaults, extra ones are
    /// ignored and the flag is set.
    pub fn set_mm_design_coords(&self, coords: &[i64]) -> Result<()> {
        let face = self.handle()?;
        self.engine().set_mm_design_coordinates(face, coords)
    }

    /// Sets the design coordinates of a variation font, in user units.
    pub fn set_var_design_coords(&self, coords: &[Fixed]) -> Result<()> {
        let face = self.handle()?;
        self.engine().set_var_design_coordinates(face, coords)
    }

    /// Sets normalized blend coordinates, each in the range [-1, 1].
    pub fn set_mm_blend_coords(&self, coords: &[Fixed]) -> Result<()> {
        let face = self.handle()?;
        self.engine().set_mm_blend_coordinates(face, coords)
    }

    /// Sets the weight vector of an Adobe multiple master font.
    ///
    /// Only the first [`MAX_MM_DESIGNS`] weights are used.
    pub fn set_mm_weight_vector(&self, weights: &[Fixed]) -> Result<()> {
        let face = self.handle()?;
        let weights = &weights[..weights.len().min(MAX_MM_DESIGNS)];
        self.engine().set_mm_weight_vector(face, weights)
    }

    /// Returns the current design coordinates, one per axis.
    pub fn var_design_coords(&self) -> Result<Vec<Fixed>> {
        let face = self.handle()?;
        let mut coords = vec![Fixed::ZERO; self.num_axis(face)?];
        self.engine().get_var_design_coordinates(face, &mut coords)?;
        Ok(coords)
    }

    /// Returns the current normalized blend coordinates, one per axis.
    pub fn mm_blend_coords(&self) -> Result<Vec<Fixed>> {
        let face = self.handle()?;
        let mut coords = vec![Fixed::ZERO; self.num_axis(face)?];
        self.engine().get_mm_blend_coordinates(face, &mut coords)?;
        Ok(coords)
    }

    /// Returns the current weight vector, one weight per master design.
    pub fn mm_weight_vector(&self) -> Result<Vec<Fixed>> {
        let face = self.handle()?;
        let mut weights = vec![Fixed::ZERO; MAX_MM_DESIGNS];
        let len = self.engine().get_mm_weight_vector(face, &mut weights)?;
        weights.truncate(len);
        Ok(weights)
    }

    /// Selects a named instance, 1-based.
    ///
    /// Zero selects the default instance. Either way the variation state is
    /// reset and [`FaceFlags::VARIATION`](crate::FaceFlags::VARIATION) is
    /// cleared.
    pub fn set_named_instance(&self, instance_index: u32) -> Result<()> {
        let face = self.handle()?;
        self.engine().set_named_instance(face, instance_index)
    }

    /// Returns the 1-based index of the named instance matching the default
    /// coordinates, zero if there is none.
    pub fn default_named_instance(&self) -> Result<u32> {
        let face = self.handle()?;
        self.engine().default_named_instance(face)
    }
}
