//! Copying a [`Mesh`] into caller buffers.

use crate::buffers::{OutputBuffers, OutputSizes, SharedOwnerBuffers, SharedOwnerSizes};
use crate::error::MarshalError;
use meshpart_core::{MeshConfig, RawMeshRequest};
use meshpart_mesh::{Mesh, PointColor};
use tracing::debug;

/// Tag written to the point color buffer for a point owned by more than
/// one piece.
pub const MULTICOLOR: i64 = -1;

/// Copy `mesh` into `out` and return the sizes written.
///
/// # Errors
///
/// [`MarshalError::BufferTooSmall`] for the first buffer that cannot hold
/// its data. Capacities are checked before any write, so on error every
/// buffer is left as it was.
pub fn marshal(mesh: &Mesh, out: &mut OutputBuffers<'_>) -> Result<OutputSizes, MarshalError> {
    let sizes = OutputSizes {
        points: mesh.point_count(),
        zones: mesh.zone_count(),
        zone_points: mesh.zone_point_list().len(),
    };
    out.check(sizes)?;

    out.point_x[..sizes.points].copy_from_slice(mesh.point_x());
    out.point_y[..sizes.points].copy_from_slice(mesh.point_y());
    for (dst, color) in out.point_colors.iter_mut().zip(mesh.point_colors()) {
        *dst = match color {
            PointColor::Owned(id) => id.0 as i64,
            PointColor::Shared => MULTICOLOR,
        };
    }
    copy_indices(&mut out.zone_start[..sizes.zones], mesh.zone_start());
    copy_indices(&mut out.zone_size[..sizes.zones], mesh.zone_size());
    copy_indices(&mut out.zone_points[..sizes.zone_points], mesh.zone_point_list());
    for (dst, color) in out.zone_colors.iter_mut().zip(mesh.zone_colors()) {
        *dst = color.0 as i64;
    }
    Ok(sizes)
}

/// Copy the shared-point owner map of `mesh` into `out`, in increasing
/// point order.
///
/// # Errors
///
/// [`MarshalError::BufferTooSmall`], with the same check-then-copy
/// guarantee as [`marshal`].
pub fn marshal_shared_owners(
    mesh: &Mesh,
    out: &mut SharedOwnerBuffers<'_>,
) -> Result<SharedOwnerSizes, MarshalError> {
    let sizes = SharedOwnerSizes {
        points: mesh.shared_count(),
        owners: mesh.shared_points().map(|(_, owners)| owners.len()).sum(),
    };
    out.check(sizes)?;

    let mut offset = 0;
    for (s, (p, owners)) in mesh.shared_points().enumerate() {
        out.points[s] = p as i64;
        out.sizes[s] = owners.len() as i64;
        for (dst, owner) in out.owners[offset..].iter_mut().zip(owners) {
            *dst = owner.0 as i64;
        }
        offset += owners.len();
    }
    Ok(sizes)
}

/// Validate a raw request, generate the mesh and marshal it into `out`.
///
/// # Errors
///
/// [`MarshalError::Config`] if the request is invalid (nothing is written),
/// or [`MarshalError::BufferTooSmall`] as for [`marshal`].
///
/// # Examples
///
/// ```
/// use meshpart_core::{MeshConfig, RawMeshRequest};
/// use meshpart_marshal::{generate_into, OwnedBuffers, MULTICOLOR};
///
/// let request = RawMeshRequest {
///     pieces: 2,
///     zones_x: 2,
///     zones_y: 1,
///     len_x: 1.0,
///     len_y: 1.0,
///     topology: 1,
/// };
/// let config = MeshConfig::try_from(&request).unwrap();
/// let mut owned = OwnedBuffers::for_config(&config);
/// let sizes = generate_into(&request, &mut owned.as_buffers()).unwrap();
/// owned.truncate(sizes);
///
/// assert_eq!(owned.point_colors, vec![0, MULTICOLOR, 1, 0, MULTICOLOR, 1]);
/// assert_eq!(owned.zone_colors, vec![0, 1]);
/// ```
pub fn generate_into(
    request: &RawMeshRequest,
    out: &mut OutputBuffers<'_>,
) -> Result<OutputSizes, MarshalError> {
    let config = MeshConfig::try_from(request)?;
    let mesh = meshpart_mesh::generate(&config)?;
    let sizes = marshal(&mesh, out)?;
    debug!(
        "Marshaled {} points, {} zones, {} zone points",
        sizes.points, sizes.zones, sizes.zone_points
    );
    Ok(sizes)
}

fn copy_indices(dst: &mut [i64], src: &[usize]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s as i64;
    }
}
