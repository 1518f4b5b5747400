// Host-side validation of the bundled WGSL. Catches syntax and type errors
// that would otherwise only surface when a browser compiles the pipeline.

use naga::valid::{Capabilities, ValidationFlags, Validator};

fn validate(name: &str, source: &str) -> naga::Module {
    let module = match naga::front::wgsl::parse_str(source) {
        Ok(m) => m,
        Err(e) => panic!("{name}: {}", e.emit_to_string(source)),
    };
    if let Err(e) = Validator::new(ValidationFlags::all(), Capabilities::empty()).validate(&module)
    {
        panic!("{name}: {e:?}");
    }
    module
}

fn entry_points(module: &naga::Module) -> Vec<(&str, naga::ShaderStage)> {
    module
        .entry_points
        .iter()
        .map(|ep| (ep.name.as_str(), ep.stage))
        .collect()
}

#[test]
fn shaders_parse_and_validate() {
    for (name, source) in [
        ("blob", hero_core::BLOB_WGSL),
        ("points", hero_core::POINTS_WGSL),
        ("lines", hero_core::LINES_WGSL),
    ] {
        let module = validate(name, source);
        let eps = entry_points(&module);
        assert!(eps.contains(&("vs_main", naga::ShaderStage::Vertex)), "{name}");
        assert!(eps.contains(&("fs_main", naga::ShaderStage::Fragment)), "{name}");
    }
}

#[test]
fn blob_uniform_block_matches_host_layout() {
    let module = validate("blob", hero_core::BLOB_WGSL);
    let (_, var) = module
        .global_variables
        .iter()
        .find(|(_, v)| v.name.as_deref() == Some("u"))
        .unwrap();
    let size = module.types[var.ty].inner.size(module.to_ctx());
    assert_eq!(size as usize, std::mem::size_of::<hero_core::BlobUniforms>());
}
