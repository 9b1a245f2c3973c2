//! Integration test: generation is a pure function of the configuration.
//!
//! Identical configurations must give identical meshes, digests and
//! marshaled buffers, whether the mesh is built through the typed API or
//! from a raw request.

use meshpart::prelude::*;
use meshpart_test_utils::{raw_request, sweep};

#[test]
fn repeated_generation_is_identical() {
    for config in sweep() {
        let a = generate(&config).unwrap();
        let b = generate(&config).unwrap();
        assert_eq!(a, b, "{config:?}");
        assert_eq!(mesh_digest(&a), mesh_digest(&b));
    }
}

#[test]
fn raw_request_and_typed_config_agree() {
    for config in sweep() {
        let mesh = generate(&config).unwrap();
        let mut direct = OwnedBuffers::for_config(&config);
        let sizes = marshal(&mesh, &mut direct.as_buffers()).unwrap();
        direct.truncate(sizes);

        let mut raw = OwnedBuffers::for_config(&config);
        let raw_sizes = generate_into(&raw_request(&config), &mut raw.as_buffers()).unwrap();
        raw.truncate(raw_sizes);

        assert_eq!(sizes, raw_sizes);
        assert_eq!(direct, raw, "{config:?}");
    }
}

