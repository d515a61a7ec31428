use std::fs;

use tempfile::tempdir;
use voxobj_io::{ConvertConfig, Status, convert, convert_bytes};
use voxobj_mesh::OcclusionStrategy;

const SCENE: &str = r#"[
    {"layer": "stone", "opaque": true,  "positions": [[0, 0, 0], [1, 0, 0]]},
    {"layer": "glass", "opaque": false, "positions": [[0, 1, 0]]}
]"#;

#[test]
fn converts_file_to_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("scene.json");
    let output = dir.path().join("scene.obj");
    fs::write(&input, SCENE).unwrap();

    let result = convert(&input, &output, &ConvertConfig::default());
    assert_eq!(result.status, Status::Success, "{}", result.message);
    assert_eq!(result.message, "Output file was successfully created!");
    assert_eq!(result.blocks.len(), 3);
    assert!(result.warnings.is_empty());

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("#Minecraft Scene\n\nmtllib Resources/minecraftMats.mtl\n\n"));
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 24);
    // input [0,0,0] and [1,0,0] become cells (0,0,0) and (0,0,1): one shared face each
    let stats = result.stats.unwrap();
    assert_eq!(stats.faces, 5 + 5 + 6);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 2 * stats.faces);
    assert_eq!(stats.material_switches, 2);
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.obj");
    let result = convert(&dir.path().join("nope.json"), &output, &ConvertConfig::default());
    assert_eq!(result.status, Status::Failure);
    assert!(result.message.starts_with("Couldn't find input file!"));
    assert!(result.blocks.is_empty());
    assert!(!output.exists());
}

#[test]
fn malformed_top_level_fails_without_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.obj");
    for text in [r#"{"layer": "stone"}"#, "not json at all"] {
        let result = convert_bytes(text.as_bytes(), &output, &ConvertConfig::default());
        assert!(!result.is_success());
        assert!(result.message.starts_with("Failed to parse input file!"));
        assert!(!output.exists());
    }
}

#[test]
fn unwritable_output_is_reported() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("missing_dir").join("out.obj");
    for atomic_write in [true, false] {
        let cfg = ConvertConfig {
            atomic_write,
            ..ConvertConfig::default()
        };
        let result = convert_bytes(SCENE.as_bytes(), &output, &cfg);
        assert_eq!(result.status, Status::Failure);
        assert!(result.message.starts_with("Failed to create output file!"));
    }
}

#[test]
fn recoverable_problems_keep_success() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.obj");
    let text = r#"[
        {"layer": "dirt", "opaque": true},
        {"layer": "stone", "opaque": true, "positions": [[0, 0, 0], [1, "a", 2], [0, 0, 1]]}
    ]"#;
    let result = convert_bytes(text.as_bytes(), &output, &ConvertConfig::default());
    assert!(result.is_success());
    assert_eq!(result.warnings.len(), 2);
    assert_eq!(result.blocks.len(), 2);
    let obj = fs::read_to_string(&output).unwrap();
    assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 16);
    assert!(!obj.contains("usemtl Dirt"));
}

#[test]
fn repeated_conversion_is_byte_identical() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.obj");
    let b = dir.path().join("b.obj");
    assert!(convert_bytes(SCENE.as_bytes(), &a, &ConvertConfig::default()).is_success());
    assert!(convert_bytes(SCENE.as_bytes(), &b, &ConvertConfig::default()).is_success());
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn strategies_and_write_modes_produce_same_bytes() {
    let dir = tempdir().unwrap();
    let mut outputs = Vec::new();
    for (i, (occlusion, atomic_write)) in [
        (OcclusionStrategy::Indexed, true),
        (OcclusionStrategy::Exhaustive, true),
        (OcclusionStrategy::Indexed, false),
    ]
    .into_iter()
    .enumerate()
    {
        let path = dir.path().join(format!("out{i}.obj"));
        let cfg = ConvertConfig {
            occlusion,
            atomic_write,
            ..ConvertConfig::default()
        };
        assert!(convert_bytes(SCENE.as_bytes(), &path, &cfg).is_success());
        outputs.push(fs::read(&path).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[0], outputs[2]);
}

#[test]
fn staged_write_replaces_existing_file_and_leaves_no_temp() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.obj");
    fs::write(&output, "stale").unwrap();
    assert!(convert_bytes(SCENE.as_bytes(), &output, &ConvertConfig::default()).is_success());
    assert!(fs::read_to_string(&output).unwrap().starts_with("#Minecraft Scene"));
    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn config_header_is_used() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.obj");
    let cfg = ConvertConfig::from_toml_str(
        r#"
        header_comment = "Village"
        mtllib = "village.mtl"
    "#,
    )
    .unwrap();
    assert!(convert_bytes(b"[]", &output, &cfg).is_success());
    let obj = fs::read_to_string(&output).unwrap();
    assert!(obj.starts_with("#Village\n\nmtllib village.mtl\n\n"));
}

#[cfg(unix)]
#[test]
fn staged_and_direct_writes_get_the_same_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let mode = |atomic_write: bool| {
        let path = dir.path().join(format!("fresh-{atomic_write}.obj"));
        let cfg = ConvertConfig {
            atomic_write,
            ..ConvertConfig::default()
        };
        assert!(convert_bytes(SCENE.as_bytes(), &path, &cfg).is_success());
        fs::metadata(&path).unwrap().permissions().mode() & 0o777
    };
    assert_eq!(mode(true), mode(false));
}

#[cfg(unix)]
#[test]
fn staged_write_keeps_mode_of_replaced_file() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let output = dir.path().join("out.obj");
    fs::write(&output, "stale").unwrap();
    fs::set_permissions(&output, fs::Permissions::from_mode(0o640)).unwrap();
    assert!(convert_bytes(SCENE.as_bytes(), &output, &ConvertConfig::default()).is_success());
    let mode = fs::metadata(&output).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
}
