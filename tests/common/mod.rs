//! Shared fixtures for release tests: a minimal Electron project layout and
//! shell scripts standing in for `asar` and `appdmg`.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const HELPERS: [&str; 3] = [" Helper", " Helper EH", " Helper NP"];

/// Writes a project under `root` with manifest, build output, runtime bundle
/// and osx resources.
pub fn write_project(root: &Path, product_name: &str, version: &str) {
    write(
        &root.join("app/package.json"),
        &format!(
            r#"{{
  "name": "myapp",
  "productName": "{product_name}",
  "identifier": "com.x.myapp",
  "version": "{version}",
  "main": "background.js"
}}"#
        ),
    );

    write(&root.join("build/background.js"), "console.log('hi');");
    write(&root.join("build/package.json"), "{}");

    let runtime = root.join("node_modules/electron-prebuilt/dist/Electron.app/Contents");
    write(&runtime.join("MacOS/Electron"), "#!/bin/sh\n");
    write(&runtime.join("Info.plist"), "<plist>runtime</plist>");
    write(&runtime.join("Resources/default_app/index.html"), "<html/>");
    write(&runtime.join("Resources/atom.icns"), "atom");
    write(&runtime.join("Resources/en.lproj/locale.pak"), "pak");
    for suffix in HELPERS {
        let helper = runtime.join(format!("Frameworks/Electron{suffix}.app/Contents"));
        write(&helper.join(format!("MacOS/Electron{suffix}")), "#!/bin/sh\n");
        write(&helper.join("Info.plist"), "<plist>helper</plist>");
    }

    let osx = root.join("resources/osx");
    write(
        &osx.join("Info.plist"),
        "<dict>\n<key>CFBundleName</key><string>{{productName}}</string>\n\
         <key>CFBundleExecutable</key><string>{{productName}}</string>\n\
         <key>CFBundleIdentifier</key><string>{{identifier}}</string>\n\
         <key>CFBundleVersion</key><string>{{version}}</string>\n</dict>\n",
    );
    for suffix in ["", " EH", " NP"] {
        write(
            &osx.join(format!("helper_apps/Info{suffix}.plist")),
            &format!(
                "<dict>\n<key>CFBundleExecutable</key><string>{{{{productName}}}} Helper{suffix}</string>\n\
                 <key>CFBundleIdentifier</key><string>{{{{identifier}}}}.helper{suffix}</string>\n</dict>\n"
            ),
        );
    }
    write(&osx.join("icon.icns"), "ICON");
    write(&osx.join("dmg-icon.icns"), "DMGICON");
    write(&osx.join("dmg-background.png"), "PNG");
    write(
        &osx.join("appdmg.json"),
        r#"{
  "title": "{{productName}}",
  "icon": "{{dmgIcon}}",
  "background": "{{dmgBackground}}",
  "contents": [
    { "x": 410, "y": 220, "type": "link", "path": "/Applications" },
    { "x": 130, "y": 220, "type": "file", "path": "{{appPath}}" }
  ]
}"#,
    );
}

pub fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Directory for fake tool scripts, inside cargo's target tmpdir so it is not
/// subject to a `noexec` /tmp.
pub fn tools_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("tools")
        .tempdir_in(env!("CARGO_TARGET_TMPDIR"))
        .unwrap()
}

/// Writes an executable shell script and returns its path.
#[cfg(unix)]
pub fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    write(&path, &format!("#!/bin/sh\n{body}\n"));
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// `asar pack <src> <dest>` stand-in: records the source directory in the archive.
#[cfg(unix)]
pub fn fake_asar(dir: &Path) -> PathBuf {
    script(dir, "asar", r#"[ "$1" = "pack" ] || exit 2
ls "$2" > "$3""#)
}

/// `appdmg <config> <dmg>` stand-in: copies the config into the dmg path.
#[cfg(unix)]
pub fn fake_appdmg(dir: &Path) -> PathBuf {
    script(dir, "appdmg", r#"cp "$1" "$2""#)
}

/// `appdmg` that always fails.
#[cfg(unix)]
pub fn failing_appdmg(dir: &Path) -> PathBuf {
    script(dir, "appdmg", r#"echo "hdiutil: create failed - Resource busy" >&2
exit 1"#)
}

/// Lists the names of entries directly inside `dir`, sorted.
pub fn names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
