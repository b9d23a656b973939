pub mod concave;
pub mod planar;

pub use concave::{
    Aperture, CharacteristicRays, ConcaveMirror, ImageConstruction, RayExtension,
    SizedConcaveMirror,
};
pub use planar::{MirrorSize, PlanarMirror, SizedPlanarMirror};
