//! Shared fixtures for the integration tests: a minimal library project and
//! a scripted stand-in for the bundler CLI that emits the expected bundle
//! triple per invocation.

#![allow(dead_code)]

use component_packager::config::{Config, LibraryConfig};
use std::fs;
use std::path::Path;

pub const LIB_NAME: &str = "vuetify-lib-test-lib";

/// Write a minimal library project: manifest, two components, one unit test
pub fn setup_project(root: &Path) {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(
        root.join("package.json"),
        format!(r#"{{"name": "{LIB_NAME}", "version": "1.0.0"}}"#),
    )
    .unwrap();
    fs::write(
        root.join("src").join("HomeIcon.vue"),
        "<template><i class=\"icon\"/></template>\n",
    )
    .unwrap();
    fs::write(
        root.join("src").join("ExampleCard.vue"),
        "<template><div class=\"card\"/></template>\n",
    )
    .unwrap();
    fs::write(
        root.join("src").join("ExampleCard.unit.js"),
        "describe(\"ExampleCard\", () => {});\n",
    )
    .unwrap();
}

/// Configuration for driving the pipeline through the library API
pub fn test_config(root: &Path) -> Config {
    Config {
        root_dir: root.to_path_buf(),
        library: LibraryConfig {
            name: LIB_NAME.to_string(),
            ..LibraryConfig::default()
        },
        ..Config::default()
    }
}

/// Install a fake bundler emitting the full format triple
#[cfg(unix)]
pub fn install_fake_bundler(root: &Path) {
    install_fake_bundler_emitting(root, &["common", "umd", "umd.min"]);
}

/// Install a fake bundler emitting only the given format kinds.
///
/// The script mirrors the real CLI surface the packager drives:
/// `build <entry> --target lib --name index --dest <dest>`, run from the
/// project root.
#[cfg(unix)]
pub fn install_fake_bundler_emitting(root: &Path, kinds: &[&str]) {
    let script = format!(
        "#!/bin/sh\n\
         set -e\n\
         entry=\"$2\"\n\
         name=\"$6\"\n\
         dest=\"$8\"\n\
         mkdir -p \"$dest\"\n\
         for kind in {kinds}; do\n\
         \tprintf 'module.exports = \"%s\";\\n//# sourceMappingURL=%s.%s.js.map\\n' \"$entry\" \"$name\" \"$kind\" > \"$dest/$name.$kind.js\"\n\
         \tprintf '{{\"version\":3,\"file\":\"%s.%s.js\"}}\\n' \"$name\" \"$kind\" > \"$dest/$name.$kind.js.map\"\n\
         done\n",
        kinds = kinds.join(" ")
    );
    install_bundler_script(root, &script);
}

/// Install a fake bundler that always fails
#[cfg(unix)]
pub fn install_failing_bundler(root: &Path) {
    install_bundler_script(root, "#!/bin/sh\nexit 1\n");
}

#[cfg(unix)]
fn install_bundler_script(root: &Path, contents: &str) {
    use std::os::unix::fs::PermissionsExt;

    let bin_dir = root.join("node_modules").join(".bin");
    fs::create_dir_all(&bin_dir).unwrap();
    let script_path = bin_dir.join("vue-cli-service");
    fs::write(&script_path, contents).unwrap();
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();
}
