use approx::assert_relative_eq;
use morphkit_image::{Image, ImageSize};
use morphkit_keyframe::{KeyframeError, KeyframeStore};
use morphkit_warp::{morph, InterpolationMode, MorphError};

const SIZE: ImageSize = ImageSize {
    width: 16,
    height: 16,
};

fn horizontal_ramp() -> Image<u8, 1> {
    let data = (0..SIZE.height)
        .flat_map(|_| (0..SIZE.width).map(|x| (x * 16) as u8))
        .collect();
    Image::new(SIZE, data).expect("valid image data")
}

/// Pins the four image corners and the center, identically on both sides.
fn identity_store() -> Result<KeyframeStore, KeyframeError> {
    let mut store = KeyframeStore::new();
    let (w, h) = ((SIZE.width - 1) as f64, (SIZE.height - 1) as f64);
    for p in [
        [0.0, 0.0],
        [w, 0.0],
        [0.0, h],
        [w, h],
        [w / 2.0, h / 2.0],
    ] {
        store.add_point(p, p, 0)?;
    }
    Ok(store)
}

#[test]
fn store_to_morph_blends_identity_warp() -> Result<(), MorphError> {
    let store = identity_store().expect("store setup");
    let triple = store.query_blend(0.5, 0).expect("blend query");

    let left = horizontal_ramp();
    let right = Image::<u8, 1>::from_size_val(SIZE, 100).expect("valid image");

    let mut dst = Image::<u8, 1>::from_size_val(SIZE, 0)?;
    morph(
        &left,
        &right,
        &mut dst,
        &triple.left,
        &triple.right,
        &triple.blended,
        0.5,
        InterpolationMode::Nearest,
    )?;

    // identical landmarks on both sides make both warps the identity, so
    // every output pixel is the plain midpoint of the two sources
    for (out, (l, r)) in dst
        .as_slice()
        .iter()
        .zip(left.as_slice().iter().zip(right.as_slice().iter()))
    {
        let expected = (*l as f32 * 0.5 + *r as f32 * 0.5).round() as u8;
        assert_eq!(*out, expected);
    }

    Ok(())
}

#[test]
fn keyframed_morph_interpolates_landmarks() -> Result<(), MorphError> {
    let mut store = identity_store().expect("store setup");

    // a sixth landmark opens a second keyframe, then the center landmark
    // drifts in the left image at time 10
    store
        .add_point([1.0, 1.0], [1.0, 1.0], 10)
        .expect("second keyframe");
    store
        .update_point(Some([11.5, 7.5]), None, 10, 4)
        .expect("update center");

    let triple = store.query_blend(0.25, 5).expect("blend query");

    // halfway in time the center sits between its two keyframed positions
    assert_relative_eq!(triple.left[4][0], 9.5, epsilon = 1e-12);
    assert_relative_eq!(triple.left[4][1], 7.5, epsilon = 1e-12);
    assert_relative_eq!(triple.blended[4][0], 9.0, epsilon = 1e-12);

    let left = horizontal_ramp();
    let right = Image::<u8, 1>::from_size_val(SIZE, 200).expect("valid image");

    let mut dst_a = Image::<u8, 1>::from_size_val(SIZE, 0)?;
    let mut dst_b = Image::<u8, 1>::from_size_val(SIZE, 0)?;
    for dst in [&mut dst_a, &mut dst_b] {
        morph(
            &left,
            &right,
            dst,
            &triple.left,
            &triple.right,
            &triple.blended,
            0.25,
            InterpolationMode::Bilinear,
        )?;
    }

    assert_eq!(dst_a.as_slice(), dst_b.as_slice());

    Ok(())
}

#[test]
fn blend_zero_ignores_right_image_content() -> Result<(), MorphError> {
    let mut store = identity_store().expect("store setup");
    // a displaced center makes the warp genuinely non-rigid
    store
        .update_point(Some([10.0, 10.0]), Some([5.0, 5.0]), 0, 4)
        .expect("update center");

    let triple = store.query_blend(0.0, 0).expect("blend query");
    let left = horizontal_ramp();

    let mut dst_white = Image::<u8, 1>::from_size_val(SIZE, 0)?;
    let mut dst_ramp = Image::<u8, 1>::from_size_val(SIZE, 0)?;
    for (right, dst) in [
        (Image::<u8, 1>::from_size_val(SIZE, 255)?, &mut dst_white),
        (horizontal_ramp(), &mut dst_ramp),
    ] {
        morph(
            &left,
            &right,
            dst,
            &triple.left,
            &triple.right,
            &triple.blended,
            0.0,
            InterpolationMode::Bilinear,
        )?;
    }

    assert_eq!(dst_white.as_slice(), dst_ramp.as_slice());

    Ok(())
}

#[test]
fn tampered_point_sets_are_rejected() -> Result<(), MorphError> {
    let store = identity_store().expect("store setup");
    let triple = store.query_blend(0.5, 0).expect("blend query");

    let left = horizontal_ramp();
    let right = horizontal_ramp();

    let mut dst = Image::<u8, 1>::from_size_val(SIZE, 0)?;
    let result = morph(
        &left,
        &right,
        &mut dst,
        &triple.left[..4],
        &triple.right,
        &triple.blended,
        0.5,
        InterpolationMode::Nearest,
    );
    assert!(matches!(result, Err(MorphError::SplineError(_))));

    Ok(())
}
