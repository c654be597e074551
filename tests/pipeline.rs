use box_blur::{average_at, read_image, render, render_with, write_image, EdgePolicy, Raster};
use std::path::PathBuf;

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("box_blur_pipeline_{}_{}", std::process::id(), name))
}

/// Binary PPM with a horizontal red ramp, vertical green ramp and constant blue
fn write_gradient_ppm(path: &PathBuf, width: usize, height: usize) {
    let mut bytes = format!("P6\n{} {}\n255\n", width, height).into_bytes();
    for y in 0..height {
        for x in 0..width {
            bytes.push((x * 255 / (width - 1)) as u8);
            bytes.push((y * 255 / (height - 1)) as u8);
            bytes.push(128);
        }
    }
    std::fs::write(path, bytes).unwrap();
}

#[test]
fn test_blur_file_to_file() {
    let input = scratch("in.ppm");
    let output = scratch("out.ppm");
    write_gradient_ppm(&input, 32, 20);

    let source = read_image(&input).unwrap();
    let blurred = render(&source, 2, EdgePolicy::Symmetric).unwrap();
    write_image(&blurred, &output).unwrap();
    let written = read_image(&output).unwrap();

    std::fs::remove_file(&input).unwrap();
    std::fs::remove_file(&output).unwrap();

    assert_eq!(written.dimensions(), (32, 20));
    assert_eq!(written, blurred);

    // Constant channel survives any blur
    for y in 0..20 {
        for x in 0..32 {
            assert_eq!(written.get(x, y, 2), 128);
        }
    }

    // Interior red ramp stays monotonic along a row
    for x in 1..32 {
        assert!(written.get(x, 10, 0) >= written.get(x - 1, 10, 0));
    }
}

#[test]
fn test_every_pixel_matches_averager() {
    let input = scratch("check.ppm");
    write_gradient_ppm(&input, 15, 11);
    let source = read_image(&input).unwrap();
    std::fs::remove_file(&input).unwrap();

    for policy in [EdgePolicy::Symmetric, EdgePolicy::Legacy] {
        let blurred = render_with(&source, 3, policy, 4).unwrap();
        for y in 0..11 {
            for x in 0..15 {
                let expected = average_at(&source, 3, x, y, policy).to_rgb();
                assert_eq!(blurred.pixel(x, y).to_vec(), expected.to_vec());
            }
        }
    }
}

#[test]
fn test_legacy_and_symmetric_differ_in_interior() {
    let mut source = Raster::new(5, 5);
    // A single bright pixel just right of and below the centre
    source.set(3, 3, 0, 250);

    let symmetric = render(&source, 1, EdgePolicy::Symmetric).unwrap();
    let legacy = render(&source, 1, EdgePolicy::Legacy).unwrap();

    // Symmetric window at (2,2) is [1,4)², which includes (3,3): 250 / 9
    assert_eq!(symmetric.get(2, 2, 0), 27);
    // Legacy window at (2,2) is [1,3)², which does not
    assert_eq!(legacy.get(2, 2, 0), 0);
}
