//! Scale regression test
//!
//! Whole-call behavior of `scale` / `try_scale`: uniform inputs, the
//! two-pixel stretch, copies, boundary exactness and up/down round trips.

use pixmap_core::{Bgra32, Pixmap, Rect};
use pixmap_scale::{ScalePath, scale, try_scale};
use pixmap_test::{RegParams, checker, coordinates, gradient_x, gradient_y, uniform};

fn scaled(src: &Pixmap, width: u32, height: u32) -> (Pixmap, ScalePath) {
    let mut dst = Pixmap::new(width, height).unwrap();
    let (dr, sr) = (dst.full_rect(), src.full_rect());
    let path = try_scale(&mut dst, &dr, src, &sr).expect("scale");
    (dst, path)
}

/// Largest channel difference between `a` at `pa` and `b` at `pb`.
fn pixel_diff(a: &Pixmap, pa: (u32, u32), b: &Pixmap, pb: (u32, u32)) -> f64 {
    let pa = a.get_pixel(pa.0, pa.1).unwrap();
    let pb = b.get_pixel(pb.0, pb.1).unwrap();
    f64::from(pa.max_channel_diff(pb))
}

#[test]
fn scale_uniform_reg() {
    let mut rp = RegParams::new("scale_uniform");
    let px = Bgra32::new(10, 20, 30, 255);

    // 4x4 -> 2x2 shrinks both axes and must keep the color exactly
    let src = uniform(4, 4, px).unwrap();
    let (dst, path) = scaled(&src, 2, 2);
    rp.compare_values(1.0, f64::from(u8::from(path == ScalePath::DownXDownY)), 0.0);
    rp.compare_pixmaps(&uniform(2, 2, px).unwrap(), &dst);

    // every other path keeps a uniform color too
    let src = uniform(6, 5, px).unwrap();
    for (w, h) in [(13, 11), (2, 1), (3, 9), (17, 4), (9, 5), (4, 5), (6, 12), (6, 2)] {
        let (dst, path) = scaled(&src, w, h);
        eprintln!("  6x5 -> {w}x{h}: {path:?}");
        rp.compare_pixmaps(&uniform(w, h, px).unwrap(), &dst);
    }

    assert!(rp.cleanup(), "scale_uniform regression test failed");
}

#[test]
fn scale_checker_halving_reg() {
    let mut rp = RegParams::new("scale_checker");
    let (a, b) = (Bgra32::from_rgba(200, 40, 0, 255), Bgra32::new(0, 0, 0, 0));

    // every 2x2 box of the source is one color, so halving is exact
    let src = checker(8, 8, 2, a, b).unwrap();
    let (dst, path) = scaled(&src, 4, 4);
    rp.compare_values(1.0, f64::from(u8::from(path == ScalePath::DownXDownY)), 0.0);
    rp.compare_pixmaps(&checker(4, 4, 1, a, b).unwrap(), &dst);

    assert!(rp.cleanup(), "scale_checker regression test failed");
}

#[test]
fn scale_two_pixel_stretch_reg() {
    let mut rp = RegParams::new("scale_stretch");

    let src = Pixmap::from_pixels(
        2,
        1,
        vec![Bgra32::new(0, 0, 0, 0), Bgra32::new(255, 255, 255, 255)],
    )
    .unwrap();
    let (dst, path) = scaled(&src, 4, 1);
    rp.compare_values(1.0, f64::from(u8::from(path == ScalePath::UpX)), 0.0);

    let blue: Vec<u8> = dst.data().iter().map(|p| p.b).collect();
    eprintln!("  blue: {blue:?}");
    rp.compare_values(0.0, f64::from(blue[0]), 0.0);
    rp.compare_values(255.0, f64::from(blue[3]), 0.0);
    rp.compare_values(1.0, f64::from(u8::from(blue.windows(2).all(|w| w[0] < w[1]))), 0.0);
    rp.compare_bytes(&[84, 84, 84, 84, 169, 169, 169, 169], &dst.to_bytes()[4..12]);

    assert!(rp.cleanup(), "scale_stretch regression test failed");
}

#[test]
fn scale_direct_copy_reg() {
    let mut rp = RegParams::new("scale_direct");

    let src = coordinates(8, 8).unwrap();
    let mut dst = Pixmap::new(12, 12).unwrap();
    let dr = Rect::from_size(3, 2, 8, 8);
    let path = try_scale(&mut dst, &dr, &src, &src.full_rect()).unwrap();
    rp.compare_values(1.0, f64::from(u8::from(path == ScalePath::Direct)), 0.0);

    for y in 0..12u32 {
        for x in 0..12u32 {
            let expected = if dr.contains_point(x as i32, y as i32) {
                src.get_pixel(x - 3, y - 2).unwrap()
            } else {
                Bgra32::TRANSPARENT
            };
            if dst.get_pixel(x, y) != Some(expected) {
                rp.compare_values(0.0, 1.0, 0.0);
            }
        }
    }

    // raw bytes of one copied row line up with the source row
    let row_bytes = |pm: &Pixmap, y: u32, x0: usize| -> Vec<u8> {
        pm.row(y)[x0..x0 + 8].iter().flat_map(|p| p.to_bytes()).collect()
    };
    rp.compare_bytes(&row_bytes(&src, 5, 0), &row_bytes(&dst, 7, 3));

    assert!(rp.cleanup(), "scale_direct regression test failed");
}

#[test]
fn scale_direct_partial_reg() {
    let mut rp = RegParams::new("scale_direct_partial");

    let src = coordinates(10, 10).unwrap();
    let mut dst = Pixmap::new(10, 10).unwrap();
    let dr = Rect::new(-3, 0, 2, 5);
    let sr = Rect::new(0, 0, 5, 5);
    rp.compare_values(1.0, f64::from(u8::from(scale(&mut dst, &dr, &src, &sr))), 0.0);

    // the three visible columns come from source columns 3..=5
    for y in 0..6u32 {
        for x in 0..3u32 {
            let got = dst.get_pixel(x, y).unwrap();
            let want = src.get_pixel(x + 3, y).unwrap();
            if got != want {
                rp.compare_values(f64::from(want.b), f64::from(got.b), 0.0);
            }
        }
        rp.compare_values(0.0, f64::from(dst.get_pixel(3, y).unwrap().a), 0.0);
    }

    assert!(rp.cleanup(), "scale_direct_partial regression test failed");
}

#[test]
fn scale_boundary_exact_reg() {
    let mut rp = RegParams::new("scale_boundary");

    let src = coordinates(5, 4).unwrap();
    let (dst, path) = scaled(&src, 13, 11);
    rp.compare_values(1.0, f64::from(u8::from(path == ScalePath::UpXUpY)), 0.0);

    let corners = [
        ((0, 0), (0, 0)),
        ((12, 0), (4, 0)),
        ((0, 10), (0, 3)),
        ((12, 10), (4, 3)),
    ];
    for (d, s) in corners {
        rp.compare_values(0.0, pixel_diff(&dst, d, &src, s), 0.0);
    }

    // stretching one axis keeps both ends of every line exact
    let (wide, _) = scaled(&src, 11, 4);
    let (tall, _) = scaled(&src, 5, 9);
    for y in 0..4 {
        rp.compare_values(0.0, pixel_diff(&wide, (0, y), &src, (0, y)), 0.0);
        rp.compare_values(0.0, pixel_diff(&wide, (10, y), &src, (4, y)), 0.0);
    }
    for x in 0..5 {
        rp.compare_values(0.0, pixel_diff(&tall, (x, 0), &src, (x, 0)), 0.0);
        rp.compare_values(0.0, pixel_diff(&tall, (x, 8), &src, (x, 3)), 0.0);
    }

    assert!(rp.cleanup(), "scale_boundary regression test failed");
}

#[test]
fn scale_round_trip_reg() {
    let mut rp = RegParams::new("scale_round_trip");

    // integer-factor stretch then shrink of smooth content stays within 1
    let cases = [
        (gradient_x(16, 4, 100, 1).unwrap(), 2u32),
        (gradient_y(4, 8, 0, 3).unwrap(), 2),
        (gradient_y(4, 8, 0, 3).unwrap(), 3),
        (gradient_y(4, 8, 100, 1).unwrap(), 3),
    ];
    for (src, factor) in cases {
        let (w, h) = (src.width(), src.height());
        let (up, up_path) = scaled(&src, w * factor, h * factor);
        let (back, down_path) = scaled(&up, w, h);
        eprintln!("  {w}x{h} x{factor}: {up_path:?} then {down_path:?}");
        rp.compare_values(1.0, f64::from(u8::from(up_path == ScalePath::UpXUpY)), 0.0);
        rp.compare_values(1.0, f64::from(u8::from(down_path == ScalePath::DownXDownY)), 0.0);
        rp.compare_pixmaps_within(&src, &back, 1);
    }

    assert!(rp.cleanup(), "scale_round_trip regression test failed");
}
