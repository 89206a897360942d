// Windows resources for the dock executable (icon + VERSIONINFO).
//
// - Runs only for Windows targets and only with PREMIUM_DOCK_RESOURCES=1.
// - assets/generated/app.ico is reused when present, otherwise generated once
//   from assets/icon.png (square PNG) at the usual shell sizes.
// - Nothing is printed as a cargo warning: progress and failures go to
//   PREMIUM_DOCK_BUILD_REPORT (default assets/build-report.txt), which is
//   also the rerun trigger.
// - A missing resource compiler is logged and the build carries on without
//   resources.

use std::{
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

const ICON_SIZES: &[u32] = &[16, 24, 32, 48, 64, 128, 256];

struct Report {
    path: PathBuf,
}

impl Report {
    fn line(&self, line: impl AsRef<str>) {
        let _ = fs::create_dir_all(self.path.parent().unwrap_or_else(|| Path::new(".")));
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let _ = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| writeln!(f, "[{}] {}", ts, line.as_ref()));
    }
}

/// Cargo semver -> "a.b.c.d" for VERSIONINFO.
fn four_part_version(v: &str) -> String {
    let mut parts = [0u16; 4];
    for (slot, seg) in parts.iter_mut().zip(v.split('.')) {
        *slot = seg
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .unwrap_or(0);
    }
    format!("{}.{}.{}.{}", parts[0], parts[1], parts[2], parts[3])
}

fn build_ico(src_png: &Path, out_ico: &Path) -> io::Result<()> {
    use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
    use image::imageops::FilterType;

    let invalid = |msg: String| io::Error::new(io::ErrorKind::InvalidData, msg);

    let img = image::open(src_png)
        .map_err(|e| invalid(format!("decode {}: {e}", src_png.display())))?
        .to_rgba8();
    if img.width() != img.height() {
        return Err(invalid(format!("{} must be square, got {}x{}", src_png.display(), img.width(), img.height())));
    }

    let mut dir = IconDir::new(ResourceType::Icon);
    for &s in ICON_SIZES {
        let resized = image::imageops::resize(&img, s, s, FilterType::Lanczos3);
        let entry = IconDirEntry::encode(&IconImage::from_rgba_data(s, s, resized.into_raw())).map_err(|e| io::Error::other(format!("encode {s}px: {e}")))?;
        dir.add_entry(entry);
    }

    if let Some(parent) = out_ico.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut f = fs::File::create(out_ico)?;
    dir.write(&mut f)
}

fn main() {
    let repo = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()));
    let report = Report {
        path: env::var_os("PREMIUM_DOCK_BUILD_REPORT")
            .map(PathBuf::from)
            .map(|p| if p.is_absolute() { p } else { repo.join(p) })
            .unwrap_or_else(|| repo.join("assets/build-report.txt")),
    };

    println!("cargo:rerun-if-changed={}", report.path.display());
    println!("cargo:rerun-if-env-changed=PREMIUM_DOCK_RESOURCES");

    let windows_target = env::var("CARGO_CFG_TARGET_OS").ok().as_deref() == Some("windows");
    if !windows_target || env::var_os("PREMIUM_DOCK_RESOURCES").is_none() {
        return;
    }

    report.line("=== build.rs start (dock resources) ===");

    let src_png = repo.join("assets/icon.png");
    let out_ico = repo.join("assets/generated/app.ico");
    if out_ico.exists() {
        report.line(format!("Reusing ICO: {}", out_ico.display()));
    } else if src_png.exists() {
        match build_ico(&src_png, &out_ico) {
            Ok(()) => report.line(format!("Generated ICO: {}", out_ico.display())),
            Err(e) => report.line(format!("ICO generation failed: {e}")),
        }
    } else {
        report.line("No assets/icon.png; building without an icon");
    }

    let name = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "premium-dock".into());
    let desc = env::var("CARGO_PKG_DESCRIPTION").unwrap_or_else(|_| name.clone());
    let ver = four_part_version(&env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".into()));

    let mut res = winresource::WindowsResource::new();
    if let Some(p) = out_ico.exists().then(|| out_ico.to_str()).flatten() {
        res.set_icon(p);
    }
    res.set("FileDescription", &desc);
    res.set("ProductName", "Premium Dock");
    res.set("InternalName", &name);
    res.set("OriginalFilename", &format!("{}.exe", name));
    res.set("FileVersion", &ver);
    res.set("ProductVersion", &ver);
    res.set_language(0x0409); // en-US

    match res.compile() {
        Ok(()) => report.line(format!("Resources embedded (version {ver})")),
        Err(e) => report.line(format!("Resource embedding error: kind={:?} msg={}", e.kind(), e)),
    }
    report.line("=== build.rs done ===");
}
