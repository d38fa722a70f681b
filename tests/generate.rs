//! End to end generation of the icon and logo.

use image::DynamicImage;
use list_plus_icon::{
    bounds::{bounding_box, recentre},
    compose::compose_icon,
    generate,
    svg::{icon_svg, rasterise},
    Colour, IconConfig,
};

#[test]
fn default_icons() {
    let out_dir = tempfile::tempdir().expect("failed to create temporary directory");
    let generated =
        generate(&IconConfig::default(), out_dir.path()).expect("failed to generate icons");

    assert_eq!(generated.icon_path, out_dir.path().join("icon.png"));
    assert_eq!(generated.logo_path, out_dir.path().join("logo.png"));

    let icon = image::open(&generated.icon_path).expect("failed to read icon.png");
    let DynamicImage::ImageRgb8(icon) = icon else {
        panic!("icon.png should be RGB without alpha, got {:?}", icon.color());
    };
    assert_eq!(icon.dimensions(), (1024, 1024));
    assert_eq!(icon.get_pixel(0, 0).0, [0, 0, 0], "top left corner");
    assert_eq!(icon.get_pixel(1023, 1023).0, [0, 0, 0], "bottom right corner");
    // On the middle stroke once recentred.
    assert_eq!(icon.get_pixel(491, 481).0, [255, 255, 255]);

    let logo = image::open(&generated.logo_path).expect("failed to read logo.png");
    let DynamicImage::ImageRgba8(logo) = logo else {
        panic!("logo.png should be RGBA, got {:?}", logo.color());
    };
    assert_eq!(logo.dimensions(), (664, 664));
    for (x, y) in [(0, 0), (663, 0), (0, 663), (663, 663)] {
        assert_eq!(logo.get_pixel(x, y).0[3], 0, "corner ({x}, {y}) is transparent");
    }
    assert_eq!(logo.get_pixel(311, 301).0, [255, 255, 255, 255]);

    assert!(
        logo.pixels().any(|pixel| pixel.0[3] > 0 && pixel.0[3] < 255),
        "strokes are antialiased"
    );
}

#[test]
fn logo_is_centred() {
    let out_dir = tempfile::tempdir().expect("failed to create temporary directory");
    let generated =
        generate(&IconConfig::default(), out_dir.path()).expect("failed to generate icons");

    let logo = image::open(&generated.logo_path)
        .expect("failed to read logo.png")
        .into_rgba8();
    let bbox = bounding_box(&logo).expect("logo has visible content");

    let (width, height) = logo.dimensions();
    let left = bbox.left;
    let right = width - bbox.right;
    let top = bbox.top;
    let bottom = height - bbox.bottom;
    assert!(left.abs_diff(right) <= 1, "horizontal margins {left} and {right}");
    assert!(top.abs_diff(bottom) <= 1, "vertical margins {top} and {bottom}");
}

#[test]
fn repeated_runs_are_identical() {
    let out_dir = tempfile::tempdir().expect("failed to create temporary directory");
    let config = IconConfig::default();

    generate(&config, out_dir.path()).expect("failed to generate icons");
    let first_icon = std::fs::read(out_dir.path().join("icon.png")).expect("failed to read icon");
    let first_logo = std::fs::read(out_dir.path().join("logo.png")).expect("failed to read logo");

    generate(&config, out_dir.path()).expect("failed to regenerate icons");
    let second_icon = std::fs::read(out_dir.path().join("icon.png")).expect("failed to read icon");
    let second_logo = std::fs::read(out_dir.path().join("logo.png")).expect("failed to read logo");

    assert!(first_icon == second_icon, "icon.png changed between runs");
    assert!(first_logo == second_logo, "logo.png changed between runs");
}

#[test]
fn custom_config_into_new_directory() {
    let root = tempfile::tempdir().expect("failed to create temporary directory");
    let out_dir = root.path().join("assets").join("branding");
    let config = IconConfig {
        canvas_size: 256,
        padding: 28,
        background: Colour([0x20, 0x40, 0x60]),
        icon_colour: Colour([0xFF, 0xCC, 0x00]),
    };

    let generated = generate(&config, &out_dir).expect("failed to generate icons");
    assert!(out_dir.join("icon.png").is_file(), "icon.png written");
    assert!(out_dir.join("logo.png").is_file(), "logo.png written");

    assert_eq!(generated.icon.dimensions(), (256, 256));
    assert_eq!(generated.logo.dimensions(), (200, 200));
    assert_eq!(generated.icon.get_pixel(0, 0).0, [0x20, 0x40, 0x60]);
    assert!(
        generated
            .logo
            .pixels()
            .filter(|pixel| pixel.0[3] == 255)
            .all(|pixel| pixel.0 == [0xFF, 0xCC, 0x00, 0xFF]),
        "opaque logo pixels carry the icon colour"
    );
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("icon.json");
    std::fs::write(&path, r##"{ "canvas_size": 512, "icon_colour": "#0F0" }"##)
        .expect("failed to write config");

    let config = IconConfig::from_file(&path).expect("failed to load config");
    assert_eq!(config.canvas_size, 512);
    assert_eq!(config.padding, 180);
    assert_eq!(config.inner_size(), 152);
    assert_eq!(config.icon_colour, [0, 255, 0]);

    let missing = IconConfig::from_file(&dir.path().join("missing.json"));
    assert!(
        matches!(missing, Err(list_plus_icon::GenerateError::ReadConfig { .. })),
        "missing file"
    );
}

#[test]
fn fully_transparent_render_composites_to_background() {
    let config = IconConfig::default();
    let blank = rasterise(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"/>"#,
        config.inner_size(),
    )
    .expect("failed to render blank SVG");

    assert!(bounding_box(&blank).is_none(), "nothing was drawn");
    let centred = recentre(&blank);
    assert_eq!(centred, blank);

    let icon = compose_icon(&centred, &config);
    assert_eq!(icon.dimensions(), (1024, 1024));
    assert!(icon.pixels().all(|pixel| pixel.0 == [0, 0, 0]));
}

#[test]
fn white_icon_svg() {
    insta::assert_snapshot!(icon_svg(Colour([0xFF, 0xFF, 0xFF])), @r###"
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256">
  <line x1="40" y1="64" x2="216" y2="64" fill="none" stroke="#FFFFFF" stroke-linecap="round" stroke-linejoin="round" stroke-width="16"/>
  <line x1="40" y1="128" x2="216" y2="128" fill="none" stroke="#FFFFFF" stroke-linecap="round" stroke-linejoin="round" stroke-width="16"/>
  <line x1="40" y1="192" x2="144" y2="192" fill="none" stroke="#FFFFFF" stroke-linecap="round" stroke-linejoin="round" stroke-width="16"/>
  <line x1="184" y1="192" x2="232" y2="192" fill="none" stroke="#FFFFFF" stroke-linecap="round" stroke-linejoin="round" stroke-width="16"/>
  <line x1="208" y1="168" x2="208" y2="216" fill="none" stroke="#FFFFFF" stroke-linecap="round" stroke-linejoin="round" stroke-width="16"/>
</svg>
"###);
}
